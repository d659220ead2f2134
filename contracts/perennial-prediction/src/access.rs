use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::LedgerStore;

/// Role checks for owner, market creators and validators, plus the pause
/// switch. Callers are expected to have run `require_auth` on the address
/// passed in.
pub struct AccessControl;

impl AccessControl {
    pub fn owner(env: &Env) -> Result<Address, Error> {
        LedgerStore::owner(env).ok_or(Error::NotInitialized)
    }

    pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        if &Self::owner(env)? != caller {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        LedgerStore::set_owner(env, new_owner);
        EventEmitter::ownership_transferred(env, caller, new_owner);
        Ok(())
    }

    // ===== MARKET CREATORS =====

    /// Owner or an allow-listed creator.
    pub fn require_market_creator(env: &Env, caller: &Address) -> Result<(), Error> {
        if &Self::owner(env)? == caller || LedgerStore::is_market_creator(env, caller) {
            return Ok(());
        }
        Err(Error::Unauthorized)
    }

    /// Re-adding an existing creator is a no-op.
    pub fn add_market_creator(env: &Env, caller: &Address, creator: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        if LedgerStore::is_market_creator(env, creator) {
            return Ok(());
        }
        LedgerStore::set_market_creator(env, creator, true);
        EventEmitter::market_creator_changed(env, creator, true);
        Ok(())
    }

    pub fn remove_market_creator(env: &Env, caller: &Address, creator: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        if !LedgerStore::is_market_creator(env, creator) {
            return Ok(());
        }
        LedgerStore::set_market_creator(env, creator, false);
        EventEmitter::market_creator_changed(env, creator, false);
        Ok(())
    }

    // ===== VALIDATORS =====

    pub fn require_validator(env: &Env, caller: &Address) -> Result<(), Error> {
        if !LedgerStore::is_validator(env, caller) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    pub fn add_validator(env: &Env, caller: &Address, validator: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        if LedgerStore::is_validator(env, validator) {
            return Ok(());
        }
        LedgerStore::set_validator(env, validator, true);
        EventEmitter::validator_changed(env, validator, true);
        Ok(())
    }

    pub fn remove_validator(env: &Env, caller: &Address, validator: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        if !LedgerStore::is_validator(env, validator) {
            return Ok(());
        }
        LedgerStore::set_validator(env, validator, false);
        EventEmitter::validator_changed(env, validator, false);
        Ok(())
    }

    // ===== PAUSE =====

    pub fn require_not_paused(env: &Env) -> Result<(), Error> {
        if LedgerStore::is_paused(env) {
            return Err(Error::PausedOperation);
        }
        Ok(())
    }

    pub fn pause(env: &Env, caller: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        Self::require_not_paused(env)?;
        LedgerStore::set_paused(env, true);
        log!(env, "contract paused");
        EventEmitter::paused(env, caller);
        Ok(())
    }

    pub fn unpause(env: &Env, caller: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        if !LedgerStore::is_paused(env) {
            return Err(Error::NotPaused);
        }
        LedgerStore::set_paused(env, false);
        log!(env, "contract unpaused");
        EventEmitter::unpaused(env, caller);
        Ok(())
    }
}

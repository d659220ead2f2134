use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

use crate::errors::Error;

// Reentrancy status constants
const REENTRANCY_NOT_ENTERED: u32 = 1;
const REENTRANCY_ENTERED: u32 = 2;

// Storage key for reentrancy state
const REENTRANCY_STATUS_KEY: Symbol = symbol_short!("REENT_ST");

/// Exclusive lock held while an operation that moves value is running.
///
/// The lock lives in instance storage so a nested invocation of any guarded
/// entry point observes it and fails with `ReentrancyDetected`.
pub struct ReentrancyGuard {
    env: Env,
    is_active: bool,
}

impl ReentrancyGuard {
    /// Create a guard for `function_name`, failing if the lock is held
    pub fn new(env: &Env, function_name: &Symbol, caller: &Address) -> Result<Self, Error> {
        if Self::status(env) == REENTRANCY_ENTERED {
            log!(env, "reentrant call rejected", function_name.clone(), caller.clone());
            return Err(Error::ReentrancyDetected);
        }

        Ok(Self {
            env: env.clone(),
            is_active: false,
        })
    }

    /// Take the lock
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.is_active || Self::status(&self.env) == REENTRANCY_ENTERED {
            return Err(Error::ReentrancyDetected);
        }
        Self::set_status(&self.env, REENTRANCY_ENTERED);
        self.is_active = true;
        Ok(())
    }

    /// Release the lock
    pub fn exit(&mut self) -> Result<(), Error> {
        if !self.is_active || Self::status(&self.env) != REENTRANCY_ENTERED {
            return Err(Error::InvalidReentrancyState);
        }
        Self::set_status(&self.env, REENTRANCY_NOT_ENTERED);
        self.is_active = false;
        Ok(())
    }

    fn status(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&REENTRANCY_STATUS_KEY)
            .unwrap_or(REENTRANCY_NOT_ENTERED)
    }

    fn set_status(env: &Env, status: u32) {
        env.storage()
            .instance()
            .set(&REENTRANCY_STATUS_KEY, &status);
    }
}

/// Run `operation` with the lock held. The lock is released whether the
/// operation succeeds or fails.
pub fn protect_external_call<T, F>(
    env: &Env,
    function_name: Symbol,
    caller: Address,
    operation: F,
) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error>,
{
    let mut guard = ReentrancyGuard::new(env, &function_name, &caller)?;
    guard.enter()?;

    let result = operation();

    guard.exit()?;
    result
}

/// Fail if a guarded operation is in progress. Used by entry points that
/// call out to other contracts without taking the lock themselves.
pub fn validate_no_reentrancy(env: &Env) -> Result<(), Error> {
    if ReentrancyGuard::status(env) == REENTRANCY_ENTERED {
        return Err(Error::ReentrancyDetected);
    }
    Ok(())
}

use soroban_sdk::{log, Address, Env};

use crate::config::{ContractConfig, PERCENTAGE_DENOMINATOR};
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::LedgerStore;
use crate::transfers::TokenTransfer;
use crate::utils::{NumericUtils, TimeUtils};

/// Protocol fee handling
///
/// Early-unstake penalties are the only fee source. They are withheld from
/// the seller's proceeds and accrue in a contract-wide sink the owner can
/// sweep with `collect_fees`.
pub struct FeeManager;

impl FeeManager {
    /// Penalty owed for selling `amount` shares, zero once the holding period
    /// since `last_interaction_time` has elapsed.
    pub fn early_unstake_penalty(
        config: &ContractConfig,
        amount: i128,
        last_interaction_time: u64,
        current_time: u64,
    ) -> Result<i128, Error> {
        if TimeUtils::has_elapsed(current_time, last_interaction_time, config.min_stake_period) {
            return Ok(0);
        }
        NumericUtils::calculate_percentage(
            amount,
            config.early_unstake_penalty_pct as i128,
            PERCENTAGE_DENOMINATOR,
        )
    }

    pub fn accrued(env: &Env) -> i128 {
        LedgerStore::accrued_fees(env)
    }

    pub fn accrue(env: &Env, amount: i128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let total = NumericUtils::add(LedgerStore::accrued_fees(env), amount)?;
        LedgerStore::set_accrued_fees(env, total);
        Ok(())
    }

    /// Transfer every accrued fee to `to`. The sink is zeroed before the
    /// transfer.
    pub fn collect(env: &Env, config: &ContractConfig, to: &Address) -> Result<i128, Error> {
        let amount = LedgerStore::accrued_fees(env);
        if amount == 0 {
            return Ok(0);
        }
        LedgerStore::set_accrued_fees(env, 0);
        TokenTransfer::push(env, &config.staking_token, to, amount)?;
        log!(env, "fees collected", amount);
        EventEmitter::fees_collected(env, to, amount);
        Ok(amount)
    }
}

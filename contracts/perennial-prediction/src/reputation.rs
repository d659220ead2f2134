use soroban_sdk::{Address, Env};

use crate::config::ContractConfig;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::LedgerStore;
use crate::types::Reputation;
use crate::utils::NumericUtils;

/// Reputation ledger: per-user score and activity counters.
pub struct ReputationLedger;

impl ReputationLedger {
    /// Current record, zeroed for users never seen before
    pub fn get(env: &Env, user: &Address) -> Reputation {
        LedgerStore::reputation(env, user).unwrap_or_default()
    }

    pub fn require_score(env: &Env, user: &Address, required: u64) -> Result<Reputation, Error> {
        let reputation = Self::get(env, user);
        if reputation.score < required {
            return Err(Error::InsufficientReputation);
        }
        Ok(reputation)
    }

    pub fn record_market_created(env: &Env, creator: &Address) -> Result<(), Error> {
        let mut reputation = Self::get(env, creator);
        reputation.markets_created = reputation
            .markets_created
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
        LedgerStore::set_reputation(env, creator, &reputation);
        Ok(())
    }

    pub fn record_stake(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
        let mut reputation = Self::get(env, user);
        reputation.total_staked = NumericUtils::add(reputation.total_staked, amount)?;
        LedgerStore::set_reputation(env, user, &reputation);
        Ok(())
    }

    /// Apply the result of a settled prediction.
    pub fn record_prediction(
        env: &Env,
        config: &ContractConfig,
        user: &Address,
        won: bool,
    ) -> Result<Reputation, Error> {
        let mut reputation = Self::get(env, user);
        if won {
            reputation.successful_predictions = reputation
                .successful_predictions
                .checked_add(1)
                .ok_or(Error::ArithmeticOverflow)?;
            reputation.score = reputation.score.saturating_add(config.reputation_reward);
        } else {
            reputation.score = reputation.score.saturating_sub(config.reputation_penalty);
        }
        LedgerStore::set_reputation(env, user, &reputation);
        EventEmitter::reputation_updated(env, user, reputation.score);
        Ok(reputation)
    }
}

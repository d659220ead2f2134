use soroban_sdk::{log, Address, Env};

use crate::config::ConfigManager;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::markets::MarketRegistry;
use crate::reputation::ReputationLedger;
use crate::storage::LedgerStore;
use crate::transfers::TokenTransfer;
use crate::types::{MarketData, Position};
use crate::utils::NumericUtils;

/// Reward settlement
///
/// Winner-take-all: the losing side's pool is shared among winning-side
/// holders pro rata to their winning shares, on top of their own winning
/// principal. Losing-side stake is forfeited.
pub struct RewardSettlement;

impl RewardSettlement {
    /// Settle `user`'s position once. Returns the amount paid out, which is
    /// zero for a losing position.
    pub fn claim_rewards(env: &Env, user: &Address, market_id: u64) -> Result<i128, Error> {
        let config = ConfigManager::get_config(env)?;
        let (data, mut position) = Self::load_claimable(env, user, market_id)?;
        let (payout, won) = Self::calculate_payout(&data, &position)?;

        position.has_claimed_rewards = true;
        LedgerStore::set_position(env, market_id, user, &position);
        ReputationLedger::record_prediction(env, &config, user, won)?;

        EventEmitter::rewards_claimed(env, market_id, user, payout);
        log!(env, "rewards claimed", market_id, payout);

        TokenTransfer::push(env, &config.staking_token, user, payout)?;
        Ok(payout)
    }

    /// What `claim_rewards` would pay right now, without side effects.
    pub fn preview(env: &Env, user: &Address, market_id: u64) -> Result<i128, Error> {
        let (data, position) = Self::load_claimable(env, user, market_id)?;
        Ok(Self::calculate_payout(&data, &position)?.0)
    }

    /// `(payout, won)` for a position in a resolved market.
    pub fn calculate_payout(data: &MarketData, position: &Position) -> Result<(i128, bool), Error> {
        let winning_shares = position.shares(data.outcome);
        if winning_shares == 0 {
            return Ok((0, false));
        }

        let winning_total = data.shares(data.outcome);
        let losing_pool = data.shares(!data.outcome);
        let bonus = NumericUtils::mul_div(winning_shares, losing_pool, winning_total)?;

        Ok((NumericUtils::add(winning_shares, bonus)?, true))
    }

    fn load_claimable(env: &Env, user: &Address, market_id: u64) -> Result<(MarketData, Position), Error> {
        let core = MarketRegistry::get_core(env, market_id)?;
        if !core.is_resolved {
            return Err(Error::MarketNotResolved);
        }

        let position = LedgerStore::position(env, market_id, user).ok_or(Error::NoPosition)?;
        if position.has_claimed_rewards {
            return Err(Error::AlreadyClaimed);
        }
        if position.is_empty() {
            return Err(Error::NoPosition);
        }

        let data = MarketRegistry::get_data(env, market_id)?;
        Ok((data, position))
    }
}

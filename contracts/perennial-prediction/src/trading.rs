use soroban_sdk::{log, Address, Env};

use crate::config::{ConfigManager, PRICE_SCALE};
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::fees::FeeManager;
use crate::markets::MarketRegistry;
use crate::reputation::ReputationLedger;
use crate::storage::LedgerStore;
use crate::transfers::TokenTransfer;
use crate::types::{MarketData, Position};
use crate::utils::NumericUtils;

/// Trading engine
///
/// Buys and sells move shares one-for-one with staked tokens. Trading stays
/// open until the market is resolved, including after its end time.
pub struct TradingEngine;

impl TradingEngine {
    /// Execute a trade for `user`. Returns the token amount moved: the stake
    /// pulled in on a buy, or the proceeds paid out on a sell.
    pub fn trade_shares(
        env: &Env,
        user: &Address,
        market_id: u64,
        is_yes: bool,
        amount: i128,
        is_buy: bool,
    ) -> Result<i128, Error> {
        let config = ConfigManager::get_config(env)?;
        let core = MarketRegistry::get_core(env, market_id)?;
        if core.is_resolved {
            return Err(Error::MarketClosed);
        }
        let mut data = MarketRegistry::get_data(env, market_id)?;

        ReputationLedger::require_score(env, user, data.reputation_required)?;

        let now = env.ledger().timestamp();
        let price = Self::price(&data, is_yes)?;
        let mut position = LedgerStore::position(env, market_id, user).unwrap_or_default();

        let moved = if is_buy {
            if amount < data.min_stake || amount > data.max_stake {
                return Err(Error::StakeOutOfBounds);
            }

            Self::apply(&mut data, &mut position, is_yes, amount, now)?;
            LedgerStore::set_market_data(env, market_id, &data);
            LedgerStore::set_position(env, market_id, user, &position);
            ReputationLedger::record_stake(env, user, amount)?;

            TokenTransfer::pull(env, &config.staking_token, user, amount)?;
            amount
        } else {
            if amount <= 0 {
                return Err(Error::InvalidParameters);
            }
            if position.shares(is_yes) < amount {
                return Err(Error::InsufficientShares);
            }

            let penalty = FeeManager::early_unstake_penalty(
                &config,
                amount,
                position.last_interaction_time,
                now,
            )?;
            let proceeds = NumericUtils::sub(amount, penalty)?;

            Self::apply(&mut data, &mut position, is_yes, -amount, now)?;
            LedgerStore::set_market_data(env, market_id, &data);
            LedgerStore::set_position(env, market_id, user, &position);
            FeeManager::accrue(env, penalty)?;

            if penalty > 0 {
                log!(env, "early unstake penalty", market_id, penalty);
            }

            TokenTransfer::push(env, &config.staking_token, user, proceeds)?;
            proceeds
        };

        EventEmitter::shares_traded(env, market_id, user, is_yes, amount, price, is_buy);
        Ok(moved)
    }

    /// Add `delta` (negative on sells) to one side of the market and the
    /// position, keeping `total_stake` equal to the sum of staked amounts.
    fn apply(
        data: &mut MarketData,
        position: &mut Position,
        is_yes: bool,
        delta: i128,
        now: u64,
    ) -> Result<(), Error> {
        data.set_shares(is_yes, NumericUtils::add(data.shares(is_yes), delta)?);
        data.total_stake = NumericUtils::add(data.total_stake, delta)?;
        data.last_update_time = now;

        position.set_shares(is_yes, NumericUtils::add(position.shares(is_yes), delta)?);
        position.staked_amount = NumericUtils::add(position.staked_amount, delta)?;
        position.last_interaction_time = now;

        if data.total_stake < 0 || position.staked_amount < 0 {
            return Err(Error::InsufficientShares);
        }
        Ok(())
    }

    // ===== PRICING =====

    /// Price of one share on the chosen side, scaled by `PRICE_SCALE`: the
    /// opposite side's share of all outstanding shares. An empty market
    /// prices both sides at one half.
    pub fn price(data: &MarketData, is_yes: bool) -> Result<i128, Error> {
        let (yes_price, no_price) = Self::prices(data)?;
        Ok(if is_yes { yes_price } else { no_price })
    }

    /// `(yes_price, no_price)`; always sums to `PRICE_SCALE`.
    pub fn prices(data: &MarketData) -> Result<(i128, i128), Error> {
        let total = NumericUtils::add(data.yes_shares, data.no_shares)?;
        let yes_price = if total == 0 {
            PRICE_SCALE / 2
        } else {
            NumericUtils::mul_div(data.no_shares, PRICE_SCALE, total)?
        };
        Ok((yes_price, PRICE_SCALE - yes_price))
    }
}

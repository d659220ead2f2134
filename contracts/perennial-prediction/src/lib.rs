#![no_std]

mod access;
mod attestation;
mod config;
mod errors;
mod events;
mod fees;
mod markets;
mod reentrancy;
mod reputation;
mod resolution;
mod settlement;
mod storage;
mod trading;
mod transfers;
mod types;
mod utils;


pub use attestation::{AttestationClient, AttestationService};
pub use config::ContractConfig;
pub use errors::Error;
pub use types::*;

use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, BytesN, Env};

use access::AccessControl;
use config::ConfigManager;
use fees::FeeManager;
use markets::MarketRegistry;
use reentrancy::{protect_external_call, validate_no_reentrancy};
use reputation::ReputationLedger;
use resolution::ResolutionEngine;
use settlement::RewardSettlement;
use storage::LedgerStore;
use trading::TradingEngine;
use transfers::TokenTransfer;

#[contract]
pub struct PerennialPrediction;

#[contractimpl]
impl PerennialPrediction {
    /// Initializes the contract with its owner and external collaborators.
    ///
    /// Must be called once after deployment.
    ///
    /// # Parameters
    ///
    /// * `owner` - Address granted ownership (market creation, direct resolution, pause)
    /// * `staking_token` - Token contract used for stakes and payouts
    /// * `attestation_service` - Contract implementing [`AttestationService`]
    /// * `min_validators` - Quorum for consensus resolution (at least 1);
    ///   `None` uses the default of 3
    ///
    /// # Errors
    ///
    /// * `Error::AlreadyInitialized` - Called a second time
    /// * `Error::InvalidConfig` - `min_validators` is zero
    pub fn initialize(
        env: Env,
        owner: Address,
        staking_token: Address,
        attestation_service: Address,
        min_validators: Option<u32>,
    ) -> Result<(), Error> {
        owner.require_auth();
        if ConfigManager::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        let config = ConfigManager::default_config(&env, staking_token, attestation_service, min_validators);
        ConfigManager::validate(&config)?;
        ConfigManager::store_config(&env, &config);
        LedgerStore::set_owner(&env, &owner);
        log!(&env, "initialized", owner);
        Ok(())
    }

    // ===== CONFIGURATION & ADMINISTRATION =====

    pub fn get_config(env: Env) -> Result<ContractConfig, Error> {
        ConfigManager::get_config(&env)
    }

    /// Replace the contract configuration (owner only).
    pub fn update_config(env: Env, owner: Address, config: ContractConfig) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::require_not_paused(&env)?;
        AccessControl::require_owner(&env, &owner)?;
        ConfigManager::update_config(&env, config)?;
        events::EventEmitter::config_updated(&env, &owner);
        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        AccessControl::owner(&env)
    }

    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::require_not_paused(&env)?;
        AccessControl::transfer_ownership(&env, &owner, &new_owner)
    }

    /// Allow `creator` to open markets. Adding an existing creator is a no-op.
    pub fn add_market_creator(env: Env, owner: Address, creator: Address) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::require_not_paused(&env)?;
        AccessControl::add_market_creator(&env, &owner, &creator)
    }

    pub fn remove_market_creator(env: Env, owner: Address, creator: Address) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::require_not_paused(&env)?;
        AccessControl::remove_market_creator(&env, &owner, &creator)
    }

    pub fn is_market_creator(env: Env, account: Address) -> bool {
        LedgerStore::is_market_creator(&env, &account)
    }

    pub fn add_validator(env: Env, owner: Address, validator: Address) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::require_not_paused(&env)?;
        AccessControl::add_validator(&env, &owner, &validator)
    }

    pub fn remove_validator(env: Env, owner: Address, validator: Address) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::require_not_paused(&env)?;
        AccessControl::remove_validator(&env, &owner, &validator)
    }

    pub fn is_validator(env: Env, account: Address) -> bool {
        LedgerStore::is_validator(&env, &account)
    }

    /// Stop every mutating operation except `unpause` and `emergency_withdraw`.
    pub fn pause(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::pause(&env, &owner)
    }

    pub fn unpause(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::unpause(&env, &owner)
    }

    pub fn is_paused(env: Env) -> bool {
        LedgerStore::is_paused(&env)
    }

    // ===== MARKETS =====

    /// Creates a market and returns its id.
    ///
    /// # Errors
    ///
    /// * `Error::Unauthorized` - `creator` is neither the owner nor an allow-listed creator
    /// * `Error::InvalidParameters` - Empty title, end time not in the future,
    ///   bad stake bounds, or out-of-range coordinates on a hyper-local market
    /// * `Error::AttestationInvalid` - Creation attestation is enabled and the service failed
    pub fn create_market(env: Env, creator: Address, params: MarketParams) -> Result<u64, Error> {
        creator.require_auth();
        validate_no_reentrancy(&env)?;
        AccessControl::require_not_paused(&env)?;
        AccessControl::require_market_creator(&env, &creator)?;
        MarketRegistry::create_market(&env, &creator, params)
    }

    pub fn market_count(env: Env) -> u64 {
        MarketRegistry::market_count(&env)
    }

    pub fn get_market(env: Env, market_id: u64) -> Result<(MarketCore, MarketData, MarketLocation), Error> {
        MarketRegistry::get_market(&env, market_id)
    }

    pub fn get_market_status(env: Env, market_id: u64) -> Result<MarketStatus, Error> {
        ResolutionEngine::status(&env, market_id)
    }

    /// Current `(yes, no)` share prices scaled by 10^7.
    pub fn get_share_prices(env: Env, market_id: u64) -> Result<(i128, i128), Error> {
        let data = MarketRegistry::get_data(&env, market_id)?;
        TradingEngine::prices(&data)
    }

    // ===== TRADING =====

    /// Buys or sells `amount` shares on one side of a market.
    ///
    /// A buy stakes `amount` tokens and must fall within the market's stake
    /// bounds. A sell returns `amount` tokens, less the early-unstake penalty
    /// when the position was touched within the minimum holding period.
    /// Returns the token amount moved.
    ///
    /// # Errors
    ///
    /// * `Error::MarketNotFound`, `Error::MarketClosed`
    /// * `Error::StakeOutOfBounds` - Buy outside `[min_stake, max_stake]`
    /// * `Error::InsufficientReputation` - Score below the market requirement
    /// * `Error::InsufficientShares` - Sell exceeds the caller's holdings
    /// * `Error::TransferFailed` - Token transfer rejected
    pub fn trade_shares(
        env: Env,
        user: Address,
        market_id: u64,
        is_yes: bool,
        amount: i128,
        is_buy: bool,
    ) -> Result<i128, Error> {
        user.require_auth();
        AccessControl::require_not_paused(&env)?;

        protect_external_call(&env, symbol_short!("trade"), user.clone(), || {
            TradingEngine::trade_shares(&env, &user, market_id, is_yes, amount, is_buy)
        })
    }

    pub fn get_user_position(env: Env, market_id: u64, user: Address) -> Position {
        LedgerStore::position(&env, market_id, &user).unwrap_or_default()
    }

    pub fn user_reputation(env: Env, user: Address) -> Reputation {
        ReputationLedger::get(&env, &user)
    }

    // ===== RESOLUTION =====

    /// Resolves a market directly (owner only) once its end time has passed.
    pub fn resolve_market(env: Env, owner: Address, market_id: u64, outcome: bool) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::require_not_paused(&env)?;
        AccessControl::require_owner(&env, &owner)?;
        ResolutionEngine::resolve_market(&env, market_id, outcome)
    }

    /// Records a validator's attestation to `outcome`. Returns true when the
    /// vote completed quorum and resolved the market.
    ///
    /// # Errors
    ///
    /// * `Error::Unauthorized` - `validator` does not hold the validator role
    /// * `Error::MarketNotYetEnded`, `Error::MarketAlreadyResolved`
    /// * `Error::AlreadyVoted` - Same validator, same outcome
    /// * `Error::AttestationInvalid` - Quorum reached but the backing claim did not verify
    pub fn validate_resolution(
        env: Env,
        validator: Address,
        market_id: u64,
        outcome: bool,
    ) -> Result<bool, Error> {
        validator.require_auth();
        validate_no_reentrancy(&env)?;
        AccessControl::require_not_paused(&env)?;
        AccessControl::require_validator(&env, &validator)?;
        ResolutionEngine::validate_resolution(&env, &validator, market_id, outcome)
    }

    pub fn get_resolution_proposal(env: Env, market_id: u64, outcome: bool) -> Option<ResolutionProposal> {
        ResolutionEngine::get_proposal(&env, market_id, outcome)
    }

    pub fn has_validated(env: Env, market_id: u64, outcome: bool, validator: Address) -> bool {
        ResolutionEngine::has_validated(&env, market_id, outcome, &validator)
    }

    pub fn get_resolution_attestation(env: Env, market_id: u64) -> Option<BytesN<32>> {
        ResolutionEngine::resolution_attestation(&env, market_id)
    }

    // ===== SETTLEMENT =====

    /// Pays out the caller's share of a resolved market. Succeeds at most once
    /// per market and user; losing positions settle for zero.
    pub fn claim_rewards(env: Env, user: Address, market_id: u64) -> Result<i128, Error> {
        user.require_auth();
        AccessControl::require_not_paused(&env)?;

        protect_external_call(&env, symbol_short!("claim"), user.clone(), || {
            RewardSettlement::claim_rewards(&env, &user, market_id)
        })
    }

    pub fn preview_rewards(env: Env, market_id: u64, user: Address) -> Result<i128, Error> {
        RewardSettlement::preview(&env, &user, market_id)
    }

    // ===== FEES & EMERGENCY =====

    pub fn get_accrued_fees(env: Env) -> i128 {
        FeeManager::accrued(&env)
    }

    /// Sends accrued early-unstake penalties to `to` (owner only).
    pub fn collect_fees(env: Env, owner: Address, to: Address) -> Result<i128, Error> {
        owner.require_auth();
        AccessControl::require_not_paused(&env)?;
        AccessControl::require_owner(&env, &owner)?;
        let config = ConfigManager::get_config(&env)?;

        protect_external_call(&env, symbol_short!("fees"), owner.clone(), || {
            FeeManager::collect(&env, &config, &to)
        })
    }

    /// Moves `amount` of any token held by the contract to the owner.
    /// Available while paused. Fails with `TransferFailed` if `token` does
    /// not answer as a token contract.
    pub fn emergency_withdraw(env: Env, owner: Address, token: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        AccessControl::require_owner(&env, &owner)?;
        if amount <= 0 || amount > TokenTransfer::balance(&env, &token)? {
            return Err(Error::InvalidParameters);
        }

        protect_external_call(&env, symbol_short!("emerg_wd"), owner.clone(), || {
            TokenTransfer::push(&env, &token, &owner, amount)?;
            log!(&env, "emergency withdrawal", amount);
            events::EventEmitter::emergency_withdrawal(&env, &token, &owner, amount);
            Ok(())
        })
    }
}

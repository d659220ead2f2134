use soroban_sdk::{contracttype, Address, Env};

use crate::types::{MarketCore, MarketData, MarketLocation, Position, Reputation, ResolutionProposal};

const DAY_IN_LEDGERS: u32 = 17280;
const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Storage keys. Instance keys hold contract-wide settings, persistent keys
/// hold per-market and per-user records.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance
    Owner,
    Config,
    Paused,
    MarketCount,
    AccruedFees,
    // persistent
    MarketCreator(Address),
    Validator(Address),
    MarketCore(u64),
    MarketData(u64),
    MarketLocation(u64),
    Position(u64, Address),
    Reputation(Address),
    Proposal(u64, bool),
    ValidatorVote(u64, bool, Address),
}

/// Typed access to the ledger. All record reads and writes go through here.
pub struct LedgerStore;

impl LedgerStore {
    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    fn bump(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    fn read<V>(env: &Env, key: &DataKey) -> Option<V>
    where
        V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
    {
        let value = env.storage().persistent().get(key);
        if value.is_some() {
            Self::bump(env, key);
        }
        value
    }

    fn write<V>(env: &Env, key: &DataKey, value: &V)
    where
        V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        env.storage().persistent().set(key, value);
        Self::bump(env, key);
    }

    fn flag(env: &Env, key: &DataKey) -> bool {
        Self::read::<bool>(env, key).unwrap_or(false)
    }

    fn set_flag(env: &Env, key: &DataKey, value: bool) {
        if value {
            Self::write(env, key, &true);
        } else {
            env.storage().persistent().remove(key);
        }
    }

    // ===== CONTRACT-WIDE =====

    pub fn owner(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
        Self::bump_instance(env);
    }

    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
        Self::bump_instance(env);
    }

    pub fn market_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::MarketCount)
            .unwrap_or(0)
    }

    pub fn set_market_count(env: &Env, count: u64) {
        env.storage().instance().set(&DataKey::MarketCount, &count);
        Self::bump_instance(env);
    }

    pub fn accrued_fees(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::AccruedFees)
            .unwrap_or(0)
    }

    pub fn set_accrued_fees(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::AccruedFees, &amount);
        Self::bump_instance(env);
    }

    // ===== ROLES =====

    pub fn is_market_creator(env: &Env, account: &Address) -> bool {
        Self::flag(env, &DataKey::MarketCreator(account.clone()))
    }

    pub fn set_market_creator(env: &Env, account: &Address, enabled: bool) {
        Self::set_flag(env, &DataKey::MarketCreator(account.clone()), enabled);
    }

    pub fn is_validator(env: &Env, account: &Address) -> bool {
        Self::flag(env, &DataKey::Validator(account.clone()))
    }

    pub fn set_validator(env: &Env, account: &Address, enabled: bool) {
        Self::set_flag(env, &DataKey::Validator(account.clone()), enabled);
    }

    // ===== MARKETS =====

    pub fn market_core(env: &Env, market_id: u64) -> Option<MarketCore> {
        Self::read(env, &DataKey::MarketCore(market_id))
    }

    pub fn set_market_core(env: &Env, market_id: u64, core: &MarketCore) {
        Self::write(env, &DataKey::MarketCore(market_id), core);
    }

    pub fn market_data(env: &Env, market_id: u64) -> Option<MarketData> {
        Self::read(env, &DataKey::MarketData(market_id))
    }

    pub fn set_market_data(env: &Env, market_id: u64, data: &MarketData) {
        Self::write(env, &DataKey::MarketData(market_id), data);
    }

    pub fn market_location(env: &Env, market_id: u64) -> Option<MarketLocation> {
        Self::read(env, &DataKey::MarketLocation(market_id))
    }

    pub fn set_market_location(env: &Env, market_id: u64, location: &MarketLocation) {
        Self::write(env, &DataKey::MarketLocation(market_id), location);
    }

    // ===== POSITIONS & REPUTATION =====

    pub fn position(env: &Env, market_id: u64, user: &Address) -> Option<Position> {
        Self::read(env, &DataKey::Position(market_id, user.clone()))
    }

    pub fn set_position(env: &Env, market_id: u64, user: &Address, position: &Position) {
        Self::write(env, &DataKey::Position(market_id, user.clone()), position);
    }

    pub fn reputation(env: &Env, user: &Address) -> Option<Reputation> {
        Self::read(env, &DataKey::Reputation(user.clone()))
    }

    pub fn set_reputation(env: &Env, user: &Address, reputation: &Reputation) {
        Self::write(env, &DataKey::Reputation(user.clone()), reputation);
    }

    // ===== RESOLUTION =====

    pub fn proposal(env: &Env, market_id: u64, outcome: bool) -> Option<ResolutionProposal> {
        Self::read(env, &DataKey::Proposal(market_id, outcome))
    }

    pub fn set_proposal(env: &Env, market_id: u64, proposal: &ResolutionProposal) {
        Self::write(env, &DataKey::Proposal(market_id, proposal.outcome), proposal);
    }

    pub fn has_vote(env: &Env, market_id: u64, outcome: bool, validator: &Address) -> bool {
        Self::flag(env, &DataKey::ValidatorVote(market_id, outcome, validator.clone()))
    }

    pub fn record_vote(env: &Env, market_id: u64, outcome: bool, validator: &Address) {
        Self::set_flag(env, &DataKey::ValidatorVote(market_id, outcome, validator.clone()), true);
    }
}

use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env};

use crate::errors::Error;
use crate::storage::{DataKey, LedgerStore};
use crate::utils::TimeUtils;

// ===== DEFAULTS =====

/// Validator quorum used when `initialize` is not given one
pub const MINIMUM_VALIDATORS: u32 = 3;

/// Minimum holding period before a position can be unstaked without penalty (1 day)
pub const MIN_STAKE_PERIOD: u64 = TimeUtils::days_to_seconds(1);

/// Percentage withheld from sells made before `MIN_STAKE_PERIOD` elapses
pub const EARLY_UNSTAKE_PENALTY: u32 = 5;

/// Reputation added for a winning claim
pub const REPUTATION_REWARD: u64 = 10;

/// Reputation removed for a losing claim
pub const REPUTATION_PENALTY: u64 = 5;

pub const PERCENTAGE_DENOMINATOR: i128 = 100;

/// Fixed-point scale for share prices; a price of `PRICE_SCALE` is 1.0
pub const PRICE_SCALE: i128 = 10_000_000;

// ===== VALIDATION LIMITS =====

pub const MAX_TITLE_LENGTH: u32 = 256;
pub const MAX_DESCRIPTION_LENGTH: u32 = 2048;

/// Coordinates are stored as degrees * 10^6
pub const COORDINATE_SCALE: i64 = 1_000_000;
pub const MAX_LATITUDE: i64 = 90 * COORDINATE_SCALE;
pub const MAX_LONGITUDE: i64 = 180 * COORDINATE_SCALE;

const CREATION_SCHEMA_TAG: &[u8] = b"perennial.market_creation.v1";
const RESOLUTION_SCHEMA_TAG: &[u8] = b"perennial.market_resolution.v1";

/// Configuration for the Perennial Prediction contract
///
/// Defaults above are applied at `initialize`; everything except the
/// validation limits can later be changed through `update_config`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractConfig {
    /// Token staked by traders and paid out to winners
    pub staking_token: Address,
    /// Contract implementing the attestation service interface
    pub attestation_service: Address,
    /// Quorum for the validator consensus path
    pub min_validators: u32,
    /// Seconds a position must be held before a penalty-free sell
    pub min_stake_period: u64,
    /// Early-unstake penalty in whole percent
    pub early_unstake_penalty_pct: u32,
    pub reputation_reward: u64,
    pub reputation_penalty: u64,
    /// Submit a creation claim to the attestation service for each new market
    pub attest_creations: bool,
    pub creation_schema: BytesN<32>,
    pub resolution_schema: BytesN<32>,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Build the configuration used at initialization. A missing quorum
    /// falls back to `MINIMUM_VALIDATORS`.
    pub fn default_config(
        env: &Env,
        staking_token: Address,
        attestation_service: Address,
        min_validators: Option<u32>,
    ) -> ContractConfig {
        ContractConfig {
            staking_token,
            attestation_service,
            min_validators: min_validators.unwrap_or(MINIMUM_VALIDATORS),
            min_stake_period: MIN_STAKE_PERIOD,
            early_unstake_penalty_pct: EARLY_UNSTAKE_PENALTY,
            reputation_reward: REPUTATION_REWARD,
            reputation_penalty: REPUTATION_PENALTY,
            attest_creations: true,
            creation_schema: Self::schema_id(env, CREATION_SCHEMA_TAG),
            resolution_schema: Self::schema_id(env, RESOLUTION_SCHEMA_TAG),
        }
    }

    pub fn schema_id(env: &Env, tag: &[u8]) -> BytesN<32> {
        env.crypto().sha256(&Bytes::from_slice(env, tag)).into()
    }

    pub fn validate(config: &ContractConfig) -> Result<(), Error> {
        if config.min_validators == 0 {
            return Err(Error::InvalidConfig);
        }
        if config.early_unstake_penalty_pct as i128 > PERCENTAGE_DENOMINATOR {
            return Err(Error::InvalidConfig);
        }
        if config.creation_schema == config.resolution_schema {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn get_config(env: &Env) -> Result<ContractConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn store_config(env: &Env, config: &ContractConfig) {
        env.storage().instance().set(&DataKey::Config, config);
        LedgerStore::bump_instance(env);
    }

    /// Replace the configuration. The staking token is frozen once the
    /// first market exists.
    pub fn update_config(env: &Env, config: ContractConfig) -> Result<(), Error> {
        Self::validate(&config)?;
        let current = Self::get_config(env)?;
        if current.staking_token != config.staking_token && LedgerStore::market_count(env) > 0 {
            return Err(Error::InvalidConfig);
        }
        Self::store_config(env, &config);
        Ok(())
    }
}

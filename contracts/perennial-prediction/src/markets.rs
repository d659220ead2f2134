use soroban_sdk::{log, Address, Env};

use crate::attestation::AttestationGateway;
use crate::config::{
    ConfigManager, MAX_DESCRIPTION_LENGTH, MAX_LATITUDE, MAX_LONGITUDE, MAX_TITLE_LENGTH,
};
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::reputation::ReputationLedger;
use crate::storage::LedgerStore;
use crate::types::*;

/// Market registry
///
/// Owns market allocation and lookup. Ids are sequential starting at 1; id 0
/// never names a market.

// ===== MARKET CREATION =====

pub struct MarketRegistry;

impl MarketRegistry {
    /// Validate `params`, allocate the next id and store the three market
    /// records. The caller's creator rights are checked by the entry point.
    pub fn create_market(env: &Env, creator: &Address, params: MarketParams) -> Result<u64, Error> {
        let config = ConfigManager::get_config(env)?;
        let now = env.ledger().timestamp();

        MarketValidator::validate_market_params(&params, now)?;

        let market_id = LedgerStore::market_count(env)
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;

        let (latitude, longitude) = if params.is_hyper_local {
            (params.latitude, params.longitude)
        } else {
            (0, 0)
        };

        let core = MarketCore {
            title: params.title.clone(),
            description: params.description.clone(),
            end_time: params.end_time,
            is_resolved: false,
            is_hyper_local: params.is_hyper_local,
            market_type: params.market_type,
        };
        let data = MarketData::new(
            params.min_stake,
            params.max_stake,
            params.reputation_required,
            now,
        );

        let attestation_id = if config.attest_creations {
            let claim = MarketCreationClaim {
                market_id,
                title: params.title.clone(),
                description: params.description.clone(),
                end_time: params.end_time,
                is_hyper_local: params.is_hyper_local,
                latitude,
                longitude,
                creator: creator.clone(),
                timestamp: now,
            };
            Some(AttestationGateway::attest_market_creation(env, &config, claim)?)
        } else {
            None
        };

        let location = MarketLocation {
            latitude,
            longitude,
            creator: creator.clone(),
            created_at: now,
            attestation_id,
        };

        LedgerStore::set_market_core(env, market_id, &core);
        LedgerStore::set_market_data(env, market_id, &data);
        LedgerStore::set_market_location(env, market_id, &location);
        LedgerStore::set_market_count(env, market_id);
        ReputationLedger::record_market_created(env, creator)?;

        log!(env, "market created", market_id);
        EventEmitter::market_created(
            env,
            market_id,
            creator,
            &core.title,
            core.market_type,
            core.end_time,
            core.is_hyper_local,
            latitude,
            longitude,
        );

        Ok(market_id)
    }

    // ===== MARKET LOOKUP =====

    pub fn market_count(env: &Env) -> u64 {
        LedgerStore::market_count(env)
    }

    pub fn get_core(env: &Env, market_id: u64) -> Result<MarketCore, Error> {
        LedgerStore::market_core(env, market_id).ok_or(Error::MarketNotFound)
    }

    pub fn get_data(env: &Env, market_id: u64) -> Result<MarketData, Error> {
        LedgerStore::market_data(env, market_id).ok_or(Error::MarketNotFound)
    }

    pub fn get_market(
        env: &Env,
        market_id: u64,
    ) -> Result<(MarketCore, MarketData, MarketLocation), Error> {
        let core = Self::get_core(env, market_id)?;
        let data = Self::get_data(env, market_id)?;
        let location = LedgerStore::market_location(env, market_id).ok_or(Error::MarketNotFound)?;
        Ok((core, data, location))
    }
}

// ===== MARKET VALIDATION =====

pub struct MarketValidator;

impl MarketValidator {
    pub fn validate_market_params(params: &MarketParams, current_time: u64) -> Result<(), Error> {
        if params.title.is_empty() || params.title.len() > MAX_TITLE_LENGTH {
            return Err(Error::InvalidParameters);
        }

        if params.description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(Error::InvalidParameters);
        }

        if params.end_time <= current_time {
            return Err(Error::InvalidParameters);
        }

        if params.min_stake <= 0 || params.min_stake > params.max_stake {
            return Err(Error::InvalidParameters);
        }

        if params.market_type == MarketType::HyperLocal && !params.is_hyper_local {
            return Err(Error::InvalidParameters);
        }

        if params.is_hyper_local {
            Self::validate_coordinates(params.latitude, params.longitude)?;
        }

        Ok(())
    }

    pub fn validate_coordinates(latitude: i64, longitude: i64) -> Result<(), Error> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(Error::InvalidParameters);
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(Error::InvalidParameters);
        }
        Ok(())
    }
}

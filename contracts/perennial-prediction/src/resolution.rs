use soroban_sdk::{log, Address, BytesN, Env};

use crate::attestation::AttestationGateway;
use crate::config::ConfigManager;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::fees::FeeManager;
use crate::markets::MarketRegistry;
use crate::storage::LedgerStore;
use crate::types::{MarketCore, MarketResolutionClaim, MarketStatus, ResolutionProposal};
use crate::utils::TimeUtils;

/// Resolution engine
///
/// A market resolves either directly through the owner or once
/// `min_validators` distinct validators attest to the same outcome. Whichever
/// path finalizes first wins; the resolved flag never clears.
pub struct ResolutionEngine;

impl ResolutionEngine {
    /// Owner resolution. Authorization is checked by the entry point.
    pub fn resolve_market(env: &Env, market_id: u64, outcome: bool) -> Result<(), Error> {
        let mut core = MarketRegistry::get_core(env, market_id)?;
        Self::require_resolvable(env, &core)?;

        Self::finalize(env, market_id, &mut core, outcome)?;
        log!(env, "market resolved by owner", market_id, outcome);
        EventEmitter::market_resolved(env, market_id, outcome);
        Ok(())
    }

    /// Count `validator`'s attestation to `outcome`. Returns true when this
    /// vote reached quorum and resolved the market.
    pub fn validate_resolution(
        env: &Env,
        validator: &Address,
        market_id: u64,
        outcome: bool,
    ) -> Result<bool, Error> {
        let config = ConfigManager::get_config(env)?;
        let mut core = MarketRegistry::get_core(env, market_id)?;
        Self::require_resolvable(env, &core)?;

        if LedgerStore::has_vote(env, market_id, outcome, validator) {
            return Err(Error::AlreadyVoted);
        }

        let mut proposal = LedgerStore::proposal(env, market_id, outcome)
            .unwrap_or_else(|| ResolutionProposal::new(outcome));
        proposal.validation_count = proposal
            .validation_count
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;

        LedgerStore::record_vote(env, market_id, outcome, validator);
        EventEmitter::resolution_validated(env, market_id, validator, outcome, proposal.validation_count);

        if proposal.validation_count < config.min_validators {
            LedgerStore::set_proposal(env, market_id, &proposal);
            return Ok(false);
        }

        let data = MarketRegistry::get_data(env, market_id)?;
        let claim = MarketResolutionClaim {
            market_id,
            outcome,
            total_stake: data.total_stake,
            yes_shares: data.yes_shares,
            no_shares: data.no_shares,
            resolution_time: env.ledger().timestamp(),
        };
        let attestation_id = AttestationGateway::attest_resolution(env, &config, claim)?;

        proposal.is_finalized = true;
        proposal.attestation_id = Some(attestation_id.clone());
        LedgerStore::set_proposal(env, market_id, &proposal);
        Self::finalize(env, market_id, &mut core, outcome)?;

        log!(env, "market resolved by consensus", market_id, outcome);
        EventEmitter::resolution_finalized(env, market_id, outcome, &attestation_id);
        Ok(true)
    }

    pub fn get_proposal(env: &Env, market_id: u64, outcome: bool) -> Option<ResolutionProposal> {
        LedgerStore::proposal(env, market_id, outcome)
    }

    pub fn has_validated(env: &Env, market_id: u64, outcome: bool, validator: &Address) -> bool {
        LedgerStore::has_vote(env, market_id, outcome, validator)
    }

    /// Attestation backing a consensus resolution, if the market was
    /// resolved that way.
    pub fn resolution_attestation(env: &Env, market_id: u64) -> Option<BytesN<32>> {
        [true, false]
            .iter()
            .filter_map(|outcome| LedgerStore::proposal(env, market_id, *outcome))
            .find(|proposal| proposal.is_finalized)
            .and_then(|proposal| proposal.attestation_id)
    }

    pub fn status(env: &Env, market_id: u64) -> Result<MarketStatus, Error> {
        let core = MarketRegistry::get_core(env, market_id)?;
        if core.is_resolved {
            return Ok(MarketStatus::Resolved);
        }
        let now = env.ledger().timestamp();
        let has_votes = [true, false].iter().any(|outcome| {
            LedgerStore::proposal(env, market_id, *outcome)
                .map(|proposal| proposal.validation_count > 0)
                .unwrap_or(false)
        });
        if TimeUtils::is_deadline_passed(now, core.end_time) && has_votes {
            Ok(MarketStatus::PendingValidation)
        } else {
            Ok(MarketStatus::Open)
        }
    }

    fn require_resolvable(env: &Env, core: &MarketCore) -> Result<(), Error> {
        if core.is_resolved {
            return Err(Error::MarketAlreadyResolved);
        }
        if !TimeUtils::is_deadline_passed(env.ledger().timestamp(), core.end_time) {
            return Err(Error::MarketNotYetEnded);
        }
        Ok(())
    }

    /// Mark the market resolved. When nobody holds the winning side the
    /// losing pool has no claimant and moves to the fee sink.
    fn finalize(env: &Env, market_id: u64, core: &mut MarketCore, outcome: bool) -> Result<(), Error> {
        let mut data = MarketRegistry::get_data(env, market_id)?;
        if data.shares(outcome) == 0 {
            let unclaimable = data.shares(!outcome);
            FeeManager::accrue(env, unclaimable)?;
            if unclaimable > 0 {
                log!(env, "no winning holders, pool moved to fees", market_id, unclaimable);
            }
        }
        core.is_resolved = true;
        data.outcome = outcome;
        data.last_update_time = env.ledger().timestamp();
        LedgerStore::set_market_core(env, market_id, core);
        LedgerStore::set_market_data(env, market_id, &data);
        Ok(())
    }
}

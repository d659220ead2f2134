use soroban_sdk::{contractclient, log, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::config::ContractConfig;
use crate::errors::Error;
use crate::types::{Attestation, MarketCreationClaim, MarketResolutionClaim};

/// Interface of the external attestation registry.
#[contractclient(name = "AttestationClient")]
pub trait AttestationService {
    /// Record `data` under `schema`, returning the new attestation uid
    fn submit_attestation(env: Env, schema: BytesN<32>, data: Bytes) -> BytesN<32>;

    fn get_attestation(env: Env, uid: BytesN<32>) -> Option<Attestation>;

    fn verify(env: Env, uid: BytesN<32>) -> bool;
}

/// Submits claims to the configured attestation service and checks them.
///
/// Any failure of the remote contract, including a trap, is reported as
/// `AttestationInvalid`.
pub struct AttestationGateway;

impl AttestationGateway {
    pub fn attest_market_creation(
        env: &Env,
        config: &ContractConfig,
        claim: MarketCreationClaim,
    ) -> Result<BytesN<32>, Error> {
        let data = claim.to_xdr(env);
        Self::submit(env, &config.attestation_service, &config.creation_schema, &data)
    }

    /// Submit a resolution claim and accept it only if the service verifies
    /// it and reports it under the resolution schema.
    pub fn attest_resolution(
        env: &Env,
        config: &ContractConfig,
        claim: MarketResolutionClaim,
    ) -> Result<BytesN<32>, Error> {
        let market_id = claim.market_id;
        let data = claim.to_xdr(env);
        let uid = Self::submit(env, &config.attestation_service, &config.resolution_schema, &data)?;
        Self::verify(env, &config.attestation_service, &uid, &config.resolution_schema)?;
        log!(env, "resolution attested", market_id);
        Ok(uid)
    }

    pub fn verify(
        env: &Env,
        service: &Address,
        uid: &BytesN<32>,
        schema: &BytesN<32>,
    ) -> Result<(), Error> {
        let client = AttestationClient::new(env, service);

        if !matches!(client.try_verify(uid), Ok(Ok(true))) {
            return Err(Error::AttestationInvalid);
        }

        match client.try_get_attestation(uid) {
            Ok(Ok(Some(record))) if &record.schema == schema && !record.revoked => Ok(()),
            _ => Err(Error::AttestationInvalid),
        }
    }

    fn submit(
        env: &Env,
        service: &Address,
        schema: &BytesN<32>,
        data: &Bytes,
    ) -> Result<BytesN<32>, Error> {
        let client = AttestationClient::new(env, service);
        match client.try_submit_attestation(schema, data) {
            Ok(Ok(uid)) => Ok(uid),
            _ => {
                log!(env, "attestation submission failed");
                Err(Error::AttestationInvalid)
            }
        }
    }
}

use soroban_sdk::{contracttype, Address, Bytes, BytesN, String};

// ===== MARKET TYPES =====

/// Kind of market, recorded at creation for display and filtering.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MarketType {
    /// One-off yes/no question
    Binary = 0,
    /// Recurring question series
    Perennial = 1,
    /// Question bound to a geographic point
    HyperLocal = 2,
}

/// Lifecycle of a market.
///
/// ```text
/// Open → [PendingValidation] → Resolved
/// ```
///
/// `PendingValidation` is observed once the end time has passed and at
/// least one validator has attested to an outcome without reaching quorum.
/// `Resolved` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MarketStatus {
    Open = 0,
    PendingValidation = 1,
    Resolved = 2,
}

/// Parameters supplied by a creator to open a market.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketParams {
    pub title: String,
    pub description: String,
    /// Ledger timestamp after which the market may be resolved
    pub end_time: u64,
    pub is_hyper_local: bool,
    /// Degrees * 10^6, only checked when `is_hyper_local` is set
    pub latitude: i64,
    /// Degrees * 10^6, only checked when `is_hyper_local` is set
    pub longitude: i64,
    pub market_type: MarketType,
    /// Smallest accepted buy, in token base units
    pub min_stake: i128,
    /// Largest accepted buy, in token base units
    pub max_stake: i128,
    /// Minimum reputation score needed to trade
    pub reputation_required: u64,
}

/// Immutable metadata plus the resolution flag.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketCore {
    pub title: String,
    pub description: String,
    pub end_time: u64,
    pub is_resolved: bool,
    pub is_hyper_local: bool,
    pub market_type: MarketType,
}

/// Trading state of a market.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketData {
    pub yes_shares: i128,
    pub no_shares: i128,
    /// Sum of every position's `staked_amount`
    pub total_stake: i128,
    pub min_stake: i128,
    pub max_stake: i128,
    pub last_update_time: u64,
    pub reputation_required: u64,
    /// Meaningful only once the core record is resolved
    pub outcome: bool,
}

impl MarketData {
    pub fn new(min_stake: i128, max_stake: i128, reputation_required: u64, now: u64) -> Self {
        Self {
            yes_shares: 0,
            no_shares: 0,
            total_stake: 0,
            min_stake,
            max_stake,
            last_update_time: now,
            reputation_required,
            outcome: false,
        }
    }

    pub fn shares(&self, is_yes: bool) -> i128 {
        if is_yes {
            self.yes_shares
        } else {
            self.no_shares
        }
    }

    pub fn set_shares(&mut self, is_yes: bool, shares: i128) {
        if is_yes {
            self.yes_shares = shares;
        } else {
            self.no_shares = shares;
        }
    }
}

/// Geofence and provenance of a market.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketLocation {
    pub latitude: i64,
    pub longitude: i64,
    pub creator: Address,
    pub created_at: u64,
    /// Creation claim recorded with the attestation service, if any
    pub attestation_id: Option<BytesN<32>>,
}

// ===== POSITION TYPES =====

/// One user's holdings in one market.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub yes_shares: i128,
    pub no_shares: i128,
    pub staked_amount: i128,
    pub last_interaction_time: u64,
    pub has_claimed_rewards: bool,
}

impl Position {
    pub fn shares(&self, is_yes: bool) -> i128 {
        if is_yes {
            self.yes_shares
        } else {
            self.no_shares
        }
    }

    pub fn set_shares(&mut self, is_yes: bool, shares: i128) {
        if is_yes {
            self.yes_shares = shares;
        } else {
            self.no_shares = shares;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.yes_shares == 0 && self.no_shares == 0
    }
}

/// Per-user reputation counters.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reputation {
    pub score: u64,
    pub markets_created: u32,
    pub successful_predictions: u32,
    pub total_staked: i128,
}

// ===== RESOLUTION TYPES =====

/// Validator tally for one outcome of one market.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolutionProposal {
    pub outcome: bool,
    pub validation_count: u32,
    pub is_finalized: bool,
    pub attestation_id: Option<BytesN<32>>,
}

impl ResolutionProposal {
    pub fn new(outcome: bool) -> Self {
        Self {
            outcome,
            validation_count: 0,
            is_finalized: false,
            attestation_id: None,
        }
    }
}

// ===== ATTESTATION TYPES =====

/// Record returned by the attestation service.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attestation {
    pub uid: BytesN<32>,
    pub schema: BytesN<32>,
    pub attester: Address,
    pub time: u64,
    pub revoked: bool,
    pub data: Bytes,
}

/// Payload of a market creation claim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketCreationClaim {
    pub market_id: u64,
    pub title: String,
    pub description: String,
    pub end_time: u64,
    pub is_hyper_local: bool,
    pub latitude: i64,
    pub longitude: i64,
    pub creator: Address,
    pub timestamp: u64,
}

/// Payload of a market resolution claim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketResolutionClaim {
    pub market_id: u64,
    pub outcome: bool,
    pub total_stake: i128,
    pub yes_shares: i128,
    pub no_shares: i128,
    pub resolution_time: u64,
}

use soroban_sdk::contracterror;

/// Error enum for the Perennial Prediction contract

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Core errors
    Unauthorized = 1,
    MarketClosed = 2,
    MarketNotFound = 3,
    StakeOutOfBounds = 4,
    InsufficientShares = 5,
    AlreadyClaimed = 6,

    // Market lifecycle errors
    MarketAlreadyResolved = 7,
    MarketNotYetEnded = 8,
    MarketNotResolved = 9,
    NoPosition = 10,
    InsufficientReputation = 11,
    AlreadyVoted = 12,

    // Reentrancy errors
    ReentrancyDetected = 101,
    InvalidReentrancyState = 102,

    // Validation errors
    InvalidParameters = 201,
    InvalidConfig = 202,

    // Attestation errors
    AttestationInvalid = 301,

    // System errors
    PausedOperation = 401,
    NotPaused = 402,
    AlreadyInitialized = 403,
    NotInitialized = 404,
    TransferFailed = 405,
    ArithmeticOverflow = 500,
}

impl Error {
    /// Human readable description, used by off-chain tooling when surfacing
    /// a failed invocation.
    pub fn description(&self) -> &'static str {
        match self {
            Error::Unauthorized => "Caller lacks the role or ownership required for this operation",
            Error::MarketClosed => "Market is resolved and no longer accepts trades",
            Error::MarketNotFound => "No market exists with this id",
            Error::StakeOutOfBounds => "Trade amount is outside the market's stake bounds",
            Error::InsufficientShares => "Sell amount exceeds the caller's share balance",
            Error::AlreadyClaimed => "Rewards for this market were already claimed",
            Error::MarketAlreadyResolved => "Market has already been resolved",
            Error::MarketNotYetEnded => "Market end time has not been reached",
            Error::MarketNotResolved => "Market has not been resolved yet",
            Error::NoPosition => "Caller holds no position in this market",
            Error::InsufficientReputation => "Caller's reputation is below the market requirement",
            Error::AlreadyVoted => "Validator already attested to this outcome",
            Error::ReentrancyDetected => "Reentrant call rejected",
            Error::InvalidReentrancyState => "Reentrancy lock is in an unexpected state",
            Error::InvalidParameters => "Invalid input parameters",
            Error::InvalidConfig => "Invalid contract configuration",
            Error::AttestationInvalid => "Attestation could not be verified",
            Error::PausedOperation => "Contract is paused",
            Error::NotPaused => "Contract is not paused",
            Error::AlreadyInitialized => "Contract is already initialized",
            Error::NotInitialized => "Contract has not been initialized",
            Error::TransferFailed => "Token transfer failed",
            Error::ArithmeticOverflow => "Arithmetic overflow",
        }
    }
}

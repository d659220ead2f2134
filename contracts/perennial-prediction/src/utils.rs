use crate::errors::Error;

// ===== TIME UTILITIES =====

/// Time helpers over ledger timestamps (seconds)
pub struct TimeUtils;

impl TimeUtils {
    /// Convert days to seconds
    pub const fn days_to_seconds(days: u32) -> u64 {
        days as u64 * 24 * 60 * 60
    }

    /// Check if deadline has passed
    pub fn is_deadline_passed(current_time: u64, deadline: u64) -> bool {
        current_time >= deadline
    }

    /// Whether `period` seconds have elapsed since `since`
    pub fn has_elapsed(current_time: u64, since: u64, period: u64) -> bool {
        current_time.saturating_sub(since) >= period
    }
}

// ===== NUMERIC UTILITIES =====

/// Checked arithmetic on token amounts
pub struct NumericUtils;

impl NumericUtils {
    pub fn add(a: i128, b: i128) -> Result<i128, Error> {
        a.checked_add(b).ok_or(Error::ArithmeticOverflow)
    }

    pub fn sub(a: i128, b: i128) -> Result<i128, Error> {
        a.checked_sub(b).ok_or(Error::ArithmeticOverflow)
    }

    /// `a * b / denominator`, rounded down
    pub fn mul_div(a: i128, b: i128, denominator: i128) -> Result<i128, Error> {
        if denominator == 0 {
            return Err(Error::ArithmeticOverflow);
        }
        a.checked_mul(b)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(denominator)
            .ok_or(Error::ArithmeticOverflow)
    }

    /// `percentage`% of `amount`, rounded down
    pub fn calculate_percentage(amount: i128, percentage: i128, denominator: i128) -> Result<i128, Error> {
        Self::mul_div(amount, percentage, denominator)
    }
}

//! Program-wide constants.

/// Number of pool slots in the pool registry PDA. Pool ids run
/// `1..=MAX_POOLS`; id 0 is the "not staking" sentinel.
pub const MAX_POOLS: usize = 8;

/// Max participants stored on-chain in the staker registry PDA.
pub const MAX_STAKERS: usize = 64;

/// Max entries processed per `register_stakers` call.
pub const MAX_REGISTER_BATCH: usize = 20;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days used when projecting a daily reward rate to an annual yield.
pub const DAYS_PER_YEAR: u64 = 365;

//! Cliff-plus-linear vesting curves.
//! - before start + cliff: nothing is unlocked
//! - inside the release window: allowance scaled by elapsed/release,
//!   rounded half away from zero
//! - at or past start + cliff + release: the full allowance

use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::SECONDS_PER_DAY;
use crate::error::StakingError;

/// Closed set of withdrawal-gating strategies a pool can carry. Parameters
/// live inside the variant, so two pools built from the same day counts
/// compare equal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingCurve {
    /// No unlocking for `cliff_seconds` after the stake clock starts, then
    /// linear release over `release_seconds`.
    CliffLinear {
        cliff_seconds: i64,
        release_seconds: i64,
    },
}

impl VestingCurve {
    /// Serialized size: 1-byte variant tag + largest payload.
    pub const SIZE: usize = 1 + 8 + 8;

    /// Build a cliff+linear curve from day counts. A zero-day release
    /// window is rejected; the linear interpolation divides by it.
    pub fn from_days(cliff_days: u32, release_days: u32) -> Result<Self, StakingError> {
        if release_days == 0 {
            return Err(StakingError::InvalidConfig);
        }
        let cliff_seconds = (cliff_days as i64)
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(StakingError::MathOverflow)?;
        let release_seconds = (release_days as i64)
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(StakingError::MathOverflow)?;
        Ok(Self::CliffLinear {
            cliff_seconds,
            release_seconds,
        })
    }

    /// Portion of `allowance` unlocked at `now` for a clock that began at
    /// `start_time`. Pure: same inputs, same output.
    pub fn vested_amount(
        &self,
        start_time: i64,
        allowance: u64,
        now: i64,
    ) -> Result<u64, StakingError> {
        let Self::CliffLinear {
            cliff_seconds,
            release_seconds,
        } = *self;

        let cliff_end = start_time
            .checked_add(cliff_seconds)
            .ok_or(StakingError::MathOverflow)?;
        if now < cliff_end {
            return Ok(0);
        }
        let release_end = cliff_end
            .checked_add(release_seconds)
            .ok_or(StakingError::MathOverflow)?;
        if now >= release_end {
            return Ok(allowance);
        }

        // Mid-window: allowance * elapsed / release, rounded half away
        // from zero. All operands are non-negative here.
        let elapsed = (now - cliff_end) as u128;
        let numer = (allowance as u128)
            .checked_mul(elapsed)
            .ok_or(StakingError::MathOverflow)?;
        let denom = release_seconds as u128; // > 0, enforced by from_days
        let mut vested = numer / denom;
        if (numer % denom) * 2 >= denom {
            vested += 1;
        }
        // elapsed < release, so vested <= allowance and fits in u64.
        u64::try_from(vested).map_err(|_| StakingError::MathOverflow)
    }
}

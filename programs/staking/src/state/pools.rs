use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{DAYS_PER_YEAR, MAX_POOLS, SECONDS_PER_DAY};
use crate::error::StakingError;
use crate::vesting::VestingCurve;

/// One reward pool: a vesting curve gating withdrawals plus a shared
/// daily emission rate.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Pool {
    /// Withdrawal-gating curve; `None` until `configure_pool` assigns one.
    pub curve: Option<VestingCurve>,
    /// Reward emission shared by the pool's stakers, in token units per day.
    pub rewards_per_day: u64,
    /// Timestamp of the last accrual-affecting mutation (start or a stake).
    pub last_update_time: i64,
    /// Sum of `current_size` over stakers assigned to this pool.
    pub total_staked: u64,
}

impl Pool {
    pub const SIZE: usize =
        1 + VestingCurve::SIZE + // curve (Option tag + payload)
        8 +                      // rewards_per_day
        8 +                      // last_update_time
        8;                       // total_staked

    /// Reward accrued by `stake_size` over `elapsed` seconds:
    /// floor(stake_size * rewards_per_day * elapsed / (total_staked * day)).
    /// A pool with nothing staked has no reward rate per token; asking it
    /// for a reward is a division by zero and errors.
    pub fn reward_for(&self, stake_size: u64, elapsed: i64) -> Result<u64, StakingError> {
        if elapsed <= 0 {
            return Ok(0);
        }
        let numer = (stake_size as u128)
            .checked_mul(self.rewards_per_day as u128)
            .ok_or(StakingError::MathOverflow)?
            .checked_mul(elapsed as u128)
            .ok_or(StakingError::MathOverflow)?;
        let denom = (self.total_staked as u128)
            .checked_mul(SECONDS_PER_DAY as u128)
            .ok_or(StakingError::MathOverflow)?;
        let reward = numer.checked_div(denom).ok_or(StakingError::MathOverflow)?;
        u64::try_from(reward).map_err(|_| StakingError::MathOverflow)
    }

    /// Projected annual yield in whole percent:
    /// floor(rewards_per_day * 365 * 100 / (total_staked + additional_stake)).
    /// `additional_stake` models a hypothetical deposit; pass 0 for the
    /// pool as it stands.
    pub fn annual_yield(&self, additional_stake: u64) -> Result<u64, StakingError> {
        let numer = (self.rewards_per_day as u128)
            .checked_mul(DAYS_PER_YEAR as u128)
            .ok_or(StakingError::MathOverflow)?
            .checked_mul(100)
            .ok_or(StakingError::MathOverflow)?;
        let denom = (self.total_staked as u128)
            .checked_add(additional_stake as u128)
            .ok_or(StakingError::MathOverflow)?;
        let yield_pct = numer.checked_div(denom).ok_or(StakingError::MathOverflow)?;
        u64::try_from(yield_pct).map_err(|_| StakingError::MathOverflow)
    }
}

/// PDA holding every pool slot. Ids run `1..=MAX_POOLS`; id 0 is the
/// "not staking" sentinel and never resolves to a slot.
#[account]
pub struct PoolRegistry {
    pub pools: [Pool; MAX_POOLS],
}

impl PoolRegistry {
    pub const SIZE: usize = MAX_POOLS * Pool::SIZE;

    fn slot(pool_id: u8) -> Result<usize, StakingError> {
        let id = pool_id as usize;
        if id == 0 || id > MAX_POOLS {
            return Err(StakingError::InvalidPool);
        }
        Ok(id - 1)
    }

    /// Pool slot for a non-sentinel, in-range id. Configuration state is
    /// not checked.
    pub fn pool(&self, pool_id: u8) -> Result<&Pool, StakingError> {
        Ok(&self.pools[Self::slot(pool_id)?])
    }

    pub fn pool_mut(&mut self, pool_id: u8) -> Result<&mut Pool, StakingError> {
        Ok(&mut self.pools[Self::slot(pool_id)?])
    }

    /// Pool usable for staking operations: in range and carrying a curve.
    pub fn configured_pool(&self, pool_id: u8) -> Result<&Pool, StakingError> {
        let pool = self.pool(pool_id)?;
        if pool.curve.is_none() {
            return Err(StakingError::InvalidPool);
        }
        Ok(pool)
    }

    pub fn configured_pool_mut(&mut self, pool_id: u8) -> Result<&mut Pool, StakingError> {
        let pool = self.pool_mut(pool_id)?;
        if pool.curve.is_none() {
            return Err(StakingError::InvalidPool);
        }
        Ok(pool)
    }

    /// Stamp the accrual clock of every configured pool. Runs once, at the
    /// operational transition.
    pub fn mark_operational(&mut self, now: i64) {
        for pool in self.pools.iter_mut() {
            if pool.curve.is_some() {
                pool.last_update_time = now;
            }
        }
    }
}

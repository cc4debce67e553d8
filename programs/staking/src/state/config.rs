use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::StakingError;

/// Engine-wide state PDA: lifecycle phase, clock anchor and reward funds.
#[account]
pub struct StakingConfig {
    /// Owner authority; the only signer allowed to configure pools,
    /// register stakers, manage the whitelist, start and fund the engine.
    pub owner: Pubkey,
    /// Mint of the token staked and paid out.
    pub mint: Pubkey,
    /// False while configuring, flipped once by `start`, never reset.
    pub is_started: bool,
    /// Unix timestamp of the operational transition (0 until `start`).
    pub start_time: i64,
    /// Tokens earmarked for reward payouts. Tracked separately from staked
    /// principal even though both sit in the same vault.
    pub rewards_pool: u64,
}

impl StakingConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        1 +  // is_started
        8 +  // start_time
        8;   // rewards_pool

    /// Guard for configuration-phase operations.
    pub fn require_configuring(&self) -> Result<(), StakingError> {
        if self.is_started {
            return Err(StakingError::InvalidPhase);
        }
        Ok(())
    }

    /// Guard for operational-phase operations.
    pub fn require_started(&self) -> Result<(), StakingError> {
        if !self.is_started {
            return Err(StakingError::InvalidPhase);
        }
        Ok(())
    }

    /// One-shot transition into the operational phase.
    pub fn begin(&mut self, rewards_pool_size: u64, now: i64) -> Result<(), StakingError> {
        self.require_configuring()?;
        self.is_started = true;
        self.start_time = now;
        self.rewards_pool = rewards_pool_size;
        Ok(())
    }

    /// Debit the rewards pool for a payout.
    pub fn pay_reward(&mut self, reward: u64) -> Result<(), StakingError> {
        if reward > self.rewards_pool {
            return Err(StakingError::InsufficientRewardsPool);
        }
        self.rewards_pool -= reward;
        Ok(())
    }

    /// Credit the rewards pool with a top-up.
    pub fn fund_rewards(&mut self, amount: u64) -> Result<(), StakingError> {
        self.rewards_pool = self
            .rewards_pool
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> StakingConfig {
        StakingConfig {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            is_started: false,
            start_time: 0,
            rewards_pool: 0,
        }
    }

    #[test]
    fn begin_is_one_shot() {
        let mut config = fresh();
        config.begin(500, 1_000).unwrap();
        assert!(config.is_started);
        assert_eq!(config.start_time, 1_000);
        assert_eq!(config.rewards_pool, 500);

        assert!(matches!(
            config.begin(500, 2_000),
            Err(StakingError::InvalidPhase)
        ));
        // First transition is untouched by the failed retry.
        assert_eq!(config.start_time, 1_000);
    }

    #[test]
    fn phase_guards_flip_with_begin() {
        let mut config = fresh();
        assert!(config.require_configuring().is_ok());
        assert!(matches!(
            config.require_started(),
            Err(StakingError::InvalidPhase)
        ));

        config.begin(0, 1_000).unwrap();
        assert!(config.require_started().is_ok());
        assert!(matches!(
            config.require_configuring(),
            Err(StakingError::InvalidPhase)
        ));
    }

    #[test]
    fn pay_reward_requires_funds() {
        let mut config = fresh();
        config.begin(100, 1_000).unwrap();

        config.pay_reward(60).unwrap();
        assert_eq!(config.rewards_pool, 40);

        assert!(matches!(
            config.pay_reward(41),
            Err(StakingError::InsufficientRewardsPool)
        ));
        assert_eq!(config.rewards_pool, 40);

        config.pay_reward(40).unwrap();
        assert_eq!(config.rewards_pool, 0);
    }

    #[test]
    fn fund_rewards_accumulates() {
        let mut config = fresh();
        config.fund_rewards(70).unwrap();
        config.fund_rewards(30).unwrap();
        assert_eq!(config.rewards_pool, 100);

        assert!(matches!(
            config.fund_rewards(u64::MAX),
            Err(StakingError::MathOverflow)
        ));
    }
}

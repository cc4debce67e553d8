use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{MAX_REGISTER_BATCH, MAX_STAKERS};
use crate::error::StakingError;
use crate::state::pools::PoolRegistry;

/// A single participant slot in the staker registry PDA: whitelist
/// membership plus the wallet's one stake record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StakerEntry {
    pub wallet: Pubkey,
    /// May stake, unstake and claim. Independent of holding a stake.
    pub whitelisted: bool,
    /// Amount currently locked; 0 when nothing is staked.
    pub current_size: u64,
    /// When the stake's vesting clock began. 0 for stakes registered
    /// before `start`; stamped at the operational transition.
    pub start_time: i64,
    /// Assigned pool id; 0 means no pool assignment.
    pub pool_id: u8,
}

impl StakerEntry {
    pub const SIZE: usize =
        32 + // wallet
        1 +  // whitelisted
        8 +  // current_size
        8 +  // start_time
        1;   // pool_id
}

/// Instruction input for `register_stakers` (wallet + opening stake).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakerInit {
    pub wallet: Pubkey,
    pub stake_size: u64,
    pub pool_id: u8,
}

/// PDA holding every participant slot (<= MAX_STAKERS entries).
#[account]
pub struct StakerRegistry {
    pub entries: [StakerEntry; MAX_STAKERS],
    /// Occupied slots; entries beyond it are vacant defaults.
    pub count: u8,
}

impl StakerRegistry {
    pub const SIZE: usize =
        MAX_STAKERS * StakerEntry::SIZE + // entries
        1;                                // count

    pub fn find(&self, wallet: &Pubkey) -> Option<&StakerEntry> {
        self.entries
            .iter()
            .take(self.count as usize)
            .find(|e| e.wallet == *wallet)
    }

    fn index_of(&self, wallet: &Pubkey) -> Option<usize> {
        self.entries
            .iter()
            .take(self.count as usize)
            .position(|e| e.wallet == *wallet)
    }

    fn index_or_insert(&mut self, wallet: Pubkey) -> Result<usize, StakingError> {
        if let Some(idx) = self.index_of(&wallet) {
            return Ok(idx);
        }
        let idx = self.count as usize;
        if idx >= MAX_STAKERS {
            return Err(StakingError::RegistryFull);
        }
        self.entries[idx].wallet = wallet;
        self.count += 1;
        Ok(idx)
    }

    fn whitelisted_index(&self, wallet: &Pubkey) -> Result<usize, StakingError> {
        match self.index_of(wallet) {
            Some(idx) if self.entries[idx].whitelisted => Ok(idx),
            _ => Err(StakingError::NotWhitelisted),
        }
    }

    pub fn is_whitelisted(&self, wallet: &Pubkey) -> bool {
        self.whitelisted_index(wallet).is_ok()
    }

    /// Grant operation rights to a wallet, claiming a slot if needed.
    pub fn whitelist_add(&mut self, wallet: Pubkey) -> Result<(), StakingError> {
        if self.is_whitelisted(&wallet) {
            return Err(StakingError::AlreadyWhitelisted);
        }
        let idx = self.index_or_insert(wallet)?;
        self.entries[idx].whitelisted = true;
        Ok(())
    }

    /// Revoke operation rights. The wallet's stake record is untouched;
    /// it simply cannot be operated on until re-whitelisted.
    pub fn whitelist_remove(&mut self, wallet: &Pubkey) -> Result<(), StakingError> {
        let idx = self.whitelisted_index(wallet)?;
        self.entries[idx].whitelisted = false;
        Ok(())
    }

    /// Configuration-phase registration: whitelists the wallet and records
    /// an opening stake. Re-registering a wallet overwrites its record and
    /// moves its size between pool totals.
    pub fn register(
        &mut self,
        pools: &mut PoolRegistry,
        wallet: Pubkey,
        stake_size: u64,
        pool_id: u8,
    ) -> Result<(), StakingError> {
        // Target pool must exist; it may still be awaiting its curve,
        // which `start` checks for.
        pools.pool(pool_id)?;

        let idx = self.index_or_insert(wallet)?;
        self.release_from_pool(pools, idx)?;

        let pool = pools.pool_mut(pool_id)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(stake_size)
            .ok_or(StakingError::MathOverflow)?;

        let entry = &mut self.entries[idx];
        entry.whitelisted = true;
        entry.current_size = stake_size;
        entry.pool_id = pool_id;
        entry.start_time = 0;
        Ok(())
    }

    /// One `register_stakers` call: a bounded batch of registrations,
    /// applied in order (a wallet repeated within the batch ends up with
    /// its last entry). Returns the batch's summed opening stake, which
    /// the caller owes the vault.
    pub fn register_batch(
        &mut self,
        pools: &mut PoolRegistry,
        inputs: &[StakerInit],
    ) -> Result<u64, StakingError> {
        if inputs.len() > MAX_REGISTER_BATCH {
            return Err(StakingError::TooManyEntries);
        }
        let mut batch_stake: u64 = 0;
        for input in inputs {
            self.register(pools, input.wallet, input.stake_size, input.pool_id)?;
            batch_stake = batch_stake
                .checked_add(input.stake_size)
                .ok_or(StakingError::MathOverflow)?;
        }
        Ok(batch_stake)
    }

    /// Every pool referenced by a registered stake must carry a curve
    /// before the engine can go operational.
    pub fn require_pools_configured(&self, pools: &PoolRegistry) -> Result<(), StakingError> {
        for entry in self.entries.iter().take(self.count as usize) {
            if entry.pool_id != 0 && pools.pool(entry.pool_id)?.curve.is_none() {
                return Err(StakingError::IncompleteConfiguration);
            }
        }
        Ok(())
    }

    /// Start the vesting clock of every registered stake. Runs once, at
    /// the operational transition.
    pub fn stamp_start_times(&mut self, now: i64) {
        for entry in self.entries.iter_mut().take(self.count as usize) {
            if entry.pool_id != 0 {
                entry.start_time = now;
            }
        }
    }

    /// Operational-phase stake: replaces the caller's record with a fresh
    /// one and restarts its vesting clock. Any previous size leaves its
    /// pool's total; the new size joins the target pool's total.
    pub fn stake(
        &mut self,
        pools: &mut PoolRegistry,
        wallet: &Pubkey,
        pool_id: u8,
        amount: u64,
        now: i64,
    ) -> Result<(), StakingError> {
        let idx = self.whitelisted_index(wallet)?;
        pools.configured_pool(pool_id)?;

        self.release_from_pool(pools, idx)?;

        let pool = pools.configured_pool_mut(pool_id)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        pool.last_update_time = now;

        let entry = &mut self.entries[idx];
        entry.current_size = amount;
        entry.pool_id = pool_id;
        entry.start_time = now;
        Ok(())
    }

    /// Withdraw part of the caller's stake. The request is capped twice:
    /// by the caller's own size and by the pool-level vested ceiling,
    /// evaluated against the pool's current total.
    pub fn unstake(
        &mut self,
        pools: &mut PoolRegistry,
        wallet: &Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<(), StakingError> {
        let idx = self.whitelisted_index(wallet)?;
        let entry = self.entries[idx];
        if entry.pool_id == 0 {
            return Err(StakingError::NotStaking);
        }
        if amount > entry.current_size {
            return Err(StakingError::InsufficientStake);
        }

        let pool = pools.pool(entry.pool_id)?;
        let curve = pool.curve.ok_or(StakingError::InvalidPool)?;
        let ceiling = curve.vested_amount(entry.start_time, pool.total_staked, now)?;
        if amount > ceiling {
            return Err(StakingError::VestingNotReached);
        }

        let pool = pools.pool_mut(entry.pool_id)?;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.entries[idx].current_size = entry
            .current_size
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Reward accrued by the caller since the pool's accrual clock was
    /// last stamped. Read-only: claiming does not advance the clock, so
    /// the accrued amount keeps growing until a stake restamps it.
    pub fn pending_reward(
        &self,
        pools: &PoolRegistry,
        wallet: &Pubkey,
        now: i64,
    ) -> Result<u64, StakingError> {
        let idx = self.whitelisted_index(wallet)?;
        let entry = &self.entries[idx];
        if entry.pool_id == 0 {
            return Err(StakingError::NotStaking);
        }
        let pool = pools.pool(entry.pool_id)?;
        let elapsed = now.saturating_sub(pool.last_update_time);
        pool.reward_for(entry.current_size, elapsed)
    }

    /// Pool-level vested ceiling as seen by the given wallet: its curve
    /// evaluated at the wallet's start time against the pool's current
    /// total. This is the amount `unstake` would allow right now.
    pub fn claimable_vested(
        &self,
        pools: &PoolRegistry,
        wallet: &Pubkey,
        now: i64,
    ) -> Result<u64, StakingError> {
        let entry = self.find(wallet).ok_or(StakingError::NotStaking)?;
        if entry.pool_id == 0 {
            return Err(StakingError::NotStaking);
        }
        let pool = pools.pool(entry.pool_id)?;
        let curve = pool.curve.ok_or(StakingError::InvalidPool)?;
        curve.vested_amount(entry.start_time, pool.total_staked, now)
    }

    /// Annual yield of the wallet's own pool, in whole percent.
    pub fn annual_yield_for(
        &self,
        pools: &PoolRegistry,
        wallet: &Pubkey,
    ) -> Result<u64, StakingError> {
        let entry = self.find(wallet).ok_or(StakingError::NotStaking)?;
        if entry.pool_id == 0 {
            return Err(StakingError::NotStaking);
        }
        pools.pool(entry.pool_id)?.annual_yield(0)
    }

    /// Remove `entries[idx].current_size` from its pool's total, leaving
    /// the entry itself untouched.
    fn release_from_pool(
        &mut self,
        pools: &mut PoolRegistry,
        idx: usize,
    ) -> Result<(), StakingError> {
        let entry = self.entries[idx];
        if entry.pool_id == 0 {
            return Ok(());
        }
        let pool = pools.pool_mut(entry.pool_id)?;
        pool.total_staked = pool
            .total_staked
            .checked_sub(entry.current_size)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_POOLS, SECONDS_PER_DAY};
    use crate::state::pools::Pool;
    use crate::vesting::VestingCurve;

    const DAY: i64 = SECONDS_PER_DAY;
    const T0: i64 = 1_700_000_000;

    fn empty_registry() -> StakerRegistry {
        StakerRegistry {
            entries: [StakerEntry::default(); MAX_STAKERS],
            count: 0,
        }
    }

    fn empty_pools() -> PoolRegistry {
        PoolRegistry {
            pools: [Pool::default(); MAX_POOLS],
        }
    }

    fn configure(pools: &mut PoolRegistry, pool_id: u8, cliff_days: u32, release_days: u32, rate: u64) {
        let pool = pools.pool_mut(pool_id).unwrap();
        pool.curve = Some(VestingCurve::from_days(cliff_days, release_days).unwrap());
        pool.rewards_per_day = rate;
    }

    /// Registered pair on pool 1 (10-day cliff, 30-day release, 100/day),
    /// already past the operational transition at T0.
    fn operational_pair() -> (StakerRegistry, PoolRegistry, Pubkey, Pubkey) {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        configure(&mut pools, 1, 10, 30, 100);

        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        stakers.register(&mut pools, alice, 60, 1).unwrap();
        stakers.register(&mut pools, bob, 40, 1).unwrap();

        pools.mark_operational(T0);
        stakers.stamp_start_times(T0);
        (stakers, pools, alice, bob)
    }

    fn pool_sum(stakers: &StakerRegistry, pool_id: u8) -> u64 {
        stakers
            .entries
            .iter()
            .take(stakers.count as usize)
            .filter(|e| e.pool_id == pool_id)
            .map(|e| e.current_size)
            .sum()
    }

    fn assert_totals_match(stakers: &StakerRegistry, pools: &PoolRegistry) {
        for pool_id in 1..=MAX_POOLS as u8 {
            assert_eq!(
                pool_sum(stakers, pool_id),
                pools.pool(pool_id).unwrap().total_staked,
                "pool {pool_id} total out of sync"
            );
        }
    }

    #[test]
    fn register_whitelists_and_accumulates_totals() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        let wallet = Pubkey::new_unique();

        stakers.register(&mut pools, wallet, 100, 1).unwrap();

        let entry = stakers.find(&wallet).unwrap();
        assert!(entry.whitelisted);
        assert_eq!(entry.current_size, 100);
        assert_eq!(entry.pool_id, 1);
        assert_eq!(entry.start_time, 0);
        assert_eq!(pools.pool(1).unwrap().total_staked, 100);
        assert_eq!(stakers.count, 1);
        assert_totals_match(&stakers, &pools);
    }

    #[test]
    fn reregistration_overwrites_and_moves_totals() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        let wallet = Pubkey::new_unique();

        stakers.register(&mut pools, wallet, 100, 1).unwrap();
        stakers.register(&mut pools, wallet, 30, 2).unwrap();

        assert_eq!(stakers.count, 1);
        let entry = stakers.find(&wallet).unwrap();
        assert_eq!((entry.pool_id, entry.current_size), (2, 30));
        assert_eq!(pools.pool(1).unwrap().total_staked, 0);
        assert_eq!(pools.pool(2).unwrap().total_staked, 30);
        assert_totals_match(&stakers, &pools);
    }

    #[test]
    fn register_rejects_sentinel_and_unknown_pool_ids() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        let wallet = Pubkey::new_unique();

        assert!(matches!(
            stakers.register(&mut pools, wallet, 100, 0),
            Err(StakingError::InvalidPool)
        ));
        assert!(matches!(
            stakers.register(&mut pools, wallet, 100, MAX_POOLS as u8 + 1),
            Err(StakingError::InvalidPool)
        ));
        assert_eq!(stakers.count, 0);
    }

    #[test]
    fn batch_is_capped_at_the_per_call_ceiling() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();

        let full: Vec<StakerInit> = (0..MAX_REGISTER_BATCH)
            .map(|_| StakerInit {
                wallet: Pubkey::new_unique(),
                stake_size: 5,
                pool_id: 1,
            })
            .collect();
        let total = stakers.register_batch(&mut pools, &full).unwrap();
        assert_eq!(total, 5 * MAX_REGISTER_BATCH as u64);
        assert_eq!(stakers.count as usize, MAX_REGISTER_BATCH);

        let oversized: Vec<StakerInit> = (0..MAX_REGISTER_BATCH + 1)
            .map(|_| StakerInit {
                wallet: Pubkey::new_unique(),
                stake_size: 5,
                pool_id: 1,
            })
            .collect();
        assert!(matches!(
            stakers.register_batch(&mut pools, &oversized),
            Err(StakingError::TooManyEntries)
        ));
        // The oversized batch was refused before touching anything.
        assert_eq!(stakers.count as usize, MAX_REGISTER_BATCH);
    }

    #[test]
    fn wallet_repeated_within_a_batch_keeps_its_last_entry() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        let wallet = Pubkey::new_unique();

        let batch = [
            StakerInit {
                wallet,
                stake_size: 100,
                pool_id: 1,
            },
            StakerInit {
                wallet,
                stake_size: 40,
                pool_id: 2,
            },
        ];
        stakers.register_batch(&mut pools, &batch).unwrap();

        let entry = stakers.find(&wallet).unwrap();
        assert_eq!((entry.pool_id, entry.current_size), (2, 40));
        assert_eq!(pools.pool(1).unwrap().total_staked, 0);
        assert_eq!(pools.pool(2).unwrap().total_staked, 40);
        assert_totals_match(&stakers, &pools);
    }

    #[test]
    fn registry_capacity_is_bounded() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        for _ in 0..MAX_STAKERS {
            stakers
                .register(&mut pools, Pubkey::new_unique(), 1, 1)
                .unwrap();
        }
        assert!(matches!(
            stakers.register(&mut pools, Pubkey::new_unique(), 1, 1),
            Err(StakingError::RegistryFull)
        ));
    }

    #[test]
    fn whitelist_add_and_remove_toggle_rights() {
        let mut stakers = empty_registry();
        let wallet = Pubkey::new_unique();

        assert!(!stakers.is_whitelisted(&wallet));
        stakers.whitelist_add(wallet).unwrap();
        assert!(stakers.is_whitelisted(&wallet));
        assert!(matches!(
            stakers.whitelist_add(wallet),
            Err(StakingError::AlreadyWhitelisted)
        ));

        stakers.whitelist_remove(&wallet).unwrap();
        assert!(!stakers.is_whitelisted(&wallet));
        assert!(matches!(
            stakers.whitelist_remove(&wallet),
            Err(StakingError::NotWhitelisted)
        ));
    }

    #[test]
    fn whitelist_removal_keeps_the_stake_record() {
        let (mut stakers, mut pools, alice, _) = operational_pair();

        stakers.whitelist_remove(&alice).unwrap();
        let entry = stakers.find(&alice).unwrap();
        assert_eq!(entry.current_size, 60);
        assert_eq!(entry.pool_id, 1);
        assert_eq!(pools.pool(1).unwrap().total_staked, 100);

        // Rights gone: no operation goes through.
        assert!(matches!(
            stakers.unstake(&mut pools, &alice, 0, T0),
            Err(StakingError::NotWhitelisted)
        ));
        assert!(matches!(
            stakers.pending_reward(&pools, &alice, T0 + DAY),
            Err(StakingError::NotWhitelisted)
        ));

        // Re-adding restores them.
        stakers.whitelist_add(alice).unwrap();
        assert!(stakers.unstake(&mut pools, &alice, 0, T0).is_ok());
    }

    #[test]
    fn start_requires_referenced_pools_to_be_configured() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        configure(&mut pools, 1, 10, 30, 100);

        stakers
            .register(&mut pools, Pubkey::new_unique(), 100, 1)
            .unwrap();
        stakers.require_pools_configured(&pools).unwrap();

        // Pool 2 has no curve yet; referencing it blocks the transition.
        stakers
            .register(&mut pools, Pubkey::new_unique(), 50, 2)
            .unwrap();
        assert!(matches!(
            stakers.require_pools_configured(&pools),
            Err(StakingError::IncompleteConfiguration)
        ));

        configure(&mut pools, 2, 0, 5, 10);
        stakers.require_pools_configured(&pools).unwrap();
    }

    #[test]
    fn stamp_start_times_reaches_every_registered_stake() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        configure(&mut pools, 1, 10, 30, 100);

        let staked = Pubkey::new_unique();
        let listed_only = Pubkey::new_unique();
        stakers.register(&mut pools, staked, 100, 1).unwrap();
        stakers.whitelist_add(listed_only).unwrap();

        stakers.stamp_start_times(T0);
        assert_eq!(stakers.find(&staked).unwrap().start_time, T0);
        assert_eq!(stakers.find(&listed_only).unwrap().start_time, 0);
    }

    #[test]
    fn stake_replaces_the_record_and_restarts_its_clock() {
        let (mut stakers, mut pools, alice, _) = operational_pair();
        let later = T0 + 3 * DAY;

        stakers.stake(&mut pools, &alice, 1, 25, later).unwrap();

        let entry = stakers.find(&alice).unwrap();
        assert_eq!(entry.current_size, 25);
        assert_eq!(entry.start_time, later);
        // 100 - 60 + 25: replacement, not addition.
        assert_eq!(pools.pool(1).unwrap().total_staked, 65);
        assert_eq!(pools.pool(1).unwrap().last_update_time, later);
        assert_totals_match(&stakers, &pools);
    }

    #[test]
    fn stake_can_move_between_pools() {
        let (mut stakers, mut pools, alice, _) = operational_pair();
        configure(&mut pools, 2, 0, 5, 10);
        pools.mark_operational(T0);

        stakers.stake(&mut pools, &alice, 2, 45, T0 + DAY).unwrap();

        assert_eq!(pools.pool(1).unwrap().total_staked, 40);
        assert_eq!(pools.pool(2).unwrap().total_staked, 45);
        assert_eq!(stakers.find(&alice).unwrap().pool_id, 2);
        assert_totals_match(&stakers, &pools);
    }

    #[test]
    fn stake_requires_whitelist_and_a_configured_pool() {
        let (mut stakers, mut pools, alice, _) = operational_pair();

        assert!(matches!(
            stakers.stake(&mut pools, &Pubkey::new_unique(), 1, 10, T0),
            Err(StakingError::NotWhitelisted)
        ));
        // Pool 3 exists but carries no curve.
        assert!(matches!(
            stakers.stake(&mut pools, &alice, 3, 10, T0),
            Err(StakingError::InvalidPool)
        ));
        assert!(matches!(
            stakers.stake(&mut pools, &alice, 0, 10, T0),
            Err(StakingError::InvalidPool)
        ));
        // Nothing moved.
        assert_eq!(pools.pool(1).unwrap().total_staked, 100);
        assert_eq!(stakers.find(&alice).unwrap().current_size, 60);
    }

    #[test]
    fn nothing_unstakes_during_the_cliff() {
        let (mut stakers, mut pools, alice, _) = operational_pair();

        assert!(matches!(
            stakers.unstake(&mut pools, &alice, 1, T0 + 5 * DAY),
            Err(StakingError::VestingNotReached)
        ));
        // A zero-amount request is a no-op, not an error.
        stakers.unstake(&mut pools, &alice, 0, T0 + 5 * DAY).unwrap();
        assert_eq!(stakers.find(&alice).unwrap().current_size, 60);
        assert_eq!(pools.pool(1).unwrap().total_staked, 100);
    }

    #[test]
    fn own_size_caps_the_request_before_vesting_does() {
        let (mut stakers, mut pools, alice, _) = operational_pair();

        // 70 > alice's 60, reported as InsufficientStake even though the
        // vested ceiling (0, mid-cliff) would also refuse it.
        assert!(matches!(
            stakers.unstake(&mut pools, &alice, 70, T0 + 5 * DAY),
            Err(StakingError::InsufficientStake)
        ));
    }

    #[test]
    fn vested_ceiling_tracks_the_pool_total() {
        let (mut stakers, mut pools, alice, bob) = operational_pair();
        // 12 days into the 30-day window: round(100 * 12/30) = 40 unlocked.
        let now = T0 + 22 * DAY;

        assert_eq!(stakers.claimable_vested(&pools, &alice, now).unwrap(), 40);
        assert!(matches!(
            stakers.unstake(&mut pools, &alice, 41, now),
            Err(StakingError::VestingNotReached)
        ));
        stakers.unstake(&mut pools, &alice, 40, now).unwrap();
        assert_eq!(stakers.find(&alice).unwrap().current_size, 20);
        assert_eq!(pools.pool(1).unwrap().total_staked, 60);

        // The ceiling is recomputed from the shrunken total: round(60 * 12/30) = 24.
        assert_eq!(stakers.claimable_vested(&pools, &bob, now).unwrap(), 24);
        assert!(matches!(
            stakers.unstake(&mut pools, &bob, 25, now),
            Err(StakingError::VestingNotReached)
        ));
        stakers.unstake(&mut pools, &bob, 24, now).unwrap();
        assert_totals_match(&stakers, &pools);
    }

    #[test]
    fn everything_unstakes_after_the_release_window() {
        let (mut stakers, mut pools, alice, bob) = operational_pair();
        let now = T0 + 40 * DAY; // cliff + full release

        stakers.unstake(&mut pools, &alice, 60, now).unwrap();
        stakers.unstake(&mut pools, &bob, 40, now).unwrap();
        assert_eq!(pools.pool(1).unwrap().total_staked, 0);
        assert_totals_match(&stakers, &pools);
    }

    #[test]
    fn unstake_without_a_pool_assignment_is_not_staking() {
        let (mut stakers, mut pools, _, _) = operational_pair();
        let listed_only = Pubkey::new_unique();
        stakers.whitelist_add(listed_only).unwrap();

        assert!(matches!(
            stakers.unstake(&mut pools, &listed_only, 1, T0 + 40 * DAY),
            Err(StakingError::NotStaking)
        ));
    }

    #[test]
    fn reward_accrues_with_stake_share_and_elapsed_time() {
        let (stakers, pools, alice, bob) = operational_pair();
        let now = T0 + 3 * DAY;

        // alice holds 60 of 100 at 100/day for 3 days.
        assert_eq!(stakers.pending_reward(&pools, &alice, now).unwrap(), 180);
        assert_eq!(stakers.pending_reward(&pools, &bob, now).unwrap(), 120);
        // Zero elapsed time pays nothing.
        assert_eq!(stakers.pending_reward(&pools, &alice, T0).unwrap(), 0);
    }

    #[test]
    fn reading_a_reward_does_not_consume_it() {
        let (stakers, pools, alice, _) = operational_pair();
        let now = T0 + 3 * DAY;

        let first = stakers.pending_reward(&pools, &alice, now).unwrap();
        let second = stakers.pending_reward(&pools, &alice, now).unwrap();
        assert_eq!(first, second);
        // It keeps growing until something restamps the pool clock.
        assert!(stakers.pending_reward(&pools, &alice, now + DAY).unwrap() > first);
    }

    #[test]
    fn restaking_restamps_the_accrual_clock() {
        let (mut stakers, mut pools, alice, _) = operational_pair();
        let now = T0 + 3 * DAY;

        stakers.stake(&mut pools, &alice, 1, 60, now).unwrap();
        assert_eq!(stakers.pending_reward(&pools, &alice, now).unwrap(), 0);
        // One more day against the refreshed clock.
        assert_eq!(
            stakers.pending_reward(&pools, &alice, now + DAY).unwrap(),
            60
        );
    }

    #[test]
    fn reward_share_floors_to_whole_tokens() {
        let mut stakers = empty_registry();
        let mut pools = empty_pools();
        configure(&mut pools, 1, 0, 1, 100);
        let small = Pubkey::new_unique();
        let large = Pubkey::new_unique();
        stakers.register(&mut pools, small, 1, 1).unwrap();
        stakers.register(&mut pools, large, 2, 1).unwrap();
        pools.mark_operational(T0);
        stakers.stamp_start_times(T0);

        // 100 * 1/3 = 33.33.. => 33, and 100 * 2/3 => 66.
        assert_eq!(
            stakers.pending_reward(&pools, &small, T0 + DAY).unwrap(),
            33
        );
        assert_eq!(
            stakers.pending_reward(&pools, &large, T0 + DAY).unwrap(),
            66
        );
    }

    #[test]
    fn claim_after_a_full_unstake_is_zero_until_the_pool_empties() {
        let (mut stakers, mut pools, alice, bob) = operational_pair();
        let now = T0 + 40 * DAY; // past the release window

        // bob leaves entirely; alice's 60 keeps the pool's rate defined.
        stakers.unstake(&mut pools, &bob, 40, now).unwrap();
        assert_eq!(stakers.pending_reward(&pools, &bob, now).unwrap(), 0);

        // alice leaves too; the emptied pool has no reward rate per token
        // left, so asking it for a reward surfaces the division by zero.
        stakers.unstake(&mut pools, &alice, 60, now).unwrap();
        assert!(matches!(
            stakers.pending_reward(&pools, &alice, now),
            Err(StakingError::MathOverflow)
        ));
    }

    #[test]
    fn queries_need_a_pool_assignment() {
        let (stakers, pools, _, _) = operational_pair();
        let stranger = Pubkey::new_unique();

        assert!(matches!(
            stakers.claimable_vested(&pools, &stranger, T0),
            Err(StakingError::NotStaking)
        ));
        assert!(matches!(
            stakers.annual_yield_for(&pools, &stranger),
            Err(StakingError::NotStaking)
        ));
    }

    #[test]
    fn annual_yield_reads_the_callers_own_pool() {
        let (mut stakers, mut pools, alice, _) = operational_pair();
        configure(&mut pools, 2, 0, 5, 10);
        pools.pool_mut(2).unwrap().total_staked = 0;

        // alice sits in pool 1: 100 * 365 * 100 / 100 = 36500.
        assert_eq!(stakers.annual_yield_for(&pools, &alice).unwrap(), 36_500);

        stakers.stake(&mut pools, &alice, 2, 50, T0 + DAY).unwrap();
        // Now pool 2: 10 * 365 * 100 / 50 = 7300.
        assert_eq!(stakers.annual_yield_for(&pools, &alice).unwrap(), 7_300);
    }
}

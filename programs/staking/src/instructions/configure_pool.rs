use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::{PoolRegistry, StakingConfig};
use crate::vesting::VestingCurve;

pub fn configure_pool(
    ctx: Context<ConfigurePool>,
    pool_id: u8,
    cliff_days: u32,
    release_days: u32,
    rewards_per_day: u64,
) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        StakingError::NotAuthorized
    );
    config.require_configuring()?;

    // Reconfiguring an already-set slot overwrites curve and rate; totals
    // accumulated by registration are kept.
    let curve = VestingCurve::from_days(cliff_days, release_days)?;
    let pool = ctx.accounts.pools.pool_mut(pool_id)?;
    pool.curve = Some(curve);
    pool.rewards_per_day = rewards_per_day;

    emit!(PoolConfigured {
        pool_id,
        cliff_days,
        release_days,
        rewards_per_day,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigurePool<'info> {
    #[account(seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(mut, seeds = [b"pools", config.key().as_ref()], bump)]
    pub pools: Account<'info, PoolRegistry>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

#[event]
pub struct PoolConfigured {
    pub pool_id: u8,
    pub cliff_days: u32,
    pub release_days: u32,
    pub rewards_per_day: u64,
}

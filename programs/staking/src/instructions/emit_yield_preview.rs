use anchor_lang::prelude::*;

use crate::state::{PoolRegistry, StakingConfig};

pub fn emit_yield_preview(
    ctx: Context<EmitYieldPreview>,
    pool_id: u8,
    additional_stake: u64,
) -> Result<()> {
    let config = &ctx.accounts.config;
    config.require_started()?;

    // Yield as it would stand with `additional_stake` more in the pool.
    let pool = ctx.accounts.pools.configured_pool(pool_id)?;
    let annual_yield = pool.annual_yield(additional_stake)?;

    emit!(YieldPreview {
        pool_id,
        additional_stake,
        annual_yield,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitYieldPreview<'info> {
    #[account(seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(seeds = [b"pools", config.key().as_ref()], bump)]
    pub pools: Account<'info, PoolRegistry>,
}

#[event]
pub struct YieldPreview {
    pub pool_id: u8,
    pub additional_stake: u64,
    pub annual_yield: u64,
}

use anchor_lang::prelude::*;

use crate::state::{PoolRegistry, StakerRegistry, StakingConfig};

pub fn emit_yield_quote(ctx: Context<EmitYieldQuote>, wallet: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;
    config.require_started()?;

    let annual_yield = ctx
        .accounts
        .stakers
        .annual_yield_for(&ctx.accounts.pools, &wallet)?;

    emit!(YieldQuote {
        wallet,
        annual_yield,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitYieldQuote<'info> {
    #[account(seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(seeds = [b"pools", config.key().as_ref()], bump)]
    pub pools: Account<'info, PoolRegistry>,

    #[account(seeds = [b"stakers", config.key().as_ref()], bump)]
    pub stakers: Box<Account<'info, StakerRegistry>>,
}

#[event]
pub struct YieldQuote {
    pub wallet: Pubkey,
    /// Projected yield of the wallet's pool over a 365-day year, in whole
    /// percent of the amount staked.
    pub annual_yield: u64,
}

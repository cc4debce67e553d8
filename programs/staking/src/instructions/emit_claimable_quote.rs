use anchor_lang::prelude::*;

use crate::state::{PoolRegistry, StakerRegistry, StakingConfig};

pub fn emit_claimable_quote(ctx: Context<EmitClaimableQuote>, wallet: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;
    config.require_started()?;

    let now = Clock::get()?.unix_timestamp;
    let claimable = ctx
        .accounts
        .stakers
        .claimable_vested(&ctx.accounts.pools, &wallet, now)?;

    emit!(ClaimableQuote { wallet, claimable });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimableQuote<'info> {
    #[account(seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(seeds = [b"pools", config.key().as_ref()], bump)]
    pub pools: Account<'info, PoolRegistry>,

    #[account(seeds = [b"stakers", config.key().as_ref()], bump)]
    pub stakers: Box<Account<'info, StakerRegistry>>,
}

#[event]
pub struct ClaimableQuote {
    pub wallet: Pubkey,
    /// Pool-level vested ceiling an unstake by `wallet` would be held to.
    pub claimable: u64,
}

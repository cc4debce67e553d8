use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::error::StakingError;
use crate::state::StakingConfig;

pub fn emit_pool_stats(ctx: Context<EmitPoolStats>) -> Result<()> {
    let config = &ctx.accounts.config;

    emit!(PoolStats {
        rewards_pool: config.rewards_pool,
        total_token_supply: ctx.accounts.mint.supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitPoolStats<'info> {
    #[account(seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(constraint = mint.key() == config.mint @ StakingError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,
}

#[event]
pub struct PoolStats {
    pub rewards_pool: u64,
    pub total_token_supply: u64,
}

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_POOLS, MAX_STAKERS};
use crate::state::{Pool, PoolRegistry, StakerEntry, StakerRegistry, StakingConfig};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.owner = ctx.accounts.owner.key();
    config.mint = ctx.accounts.mint.key();
    config.is_started = false;
    config.start_time = 0;
    config.rewards_pool = 0;

    let pools = &mut ctx.accounts.pools;
    pools.pools = [Pool::default(); MAX_POOLS];

    let stakers = &mut ctx.accounts.stakers;
    stakers.entries = [StakerEntry::default(); MAX_STAKERS];
    stakers.count = 0;

    emit!(EngineInitialized {
        owner: config.owner,
        mint: config.mint,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + StakingConfig::SIZE,
        seeds = [b"staking_config"],
        bump
    )]
    pub config: Account<'info, StakingConfig>,

    #[account(
        init,
        payer = owner,
        space = 8 + PoolRegistry::SIZE,
        seeds = [b"pools", config.key().as_ref()],
        bump
    )]
    pub pools: Account<'info, PoolRegistry>,

    #[account(
        init,
        payer = owner,
        space = 8 + StakerRegistry::SIZE,
        seeds = [b"stakers", config.key().as_ref()],
        bump
    )]
    pub stakers: Box<Account<'info, StakerRegistry>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = config,
        seeds = [b"vault", config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct EngineInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
}

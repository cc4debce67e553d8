use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::state::{PoolRegistry, StakerRegistry, StakingConfig};

pub fn start(ctx: Context<Start>, rewards_pool_size: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        StakingError::NotAuthorized
    );
    config.require_configuring()?;
    ctx.accounts
        .stakers
        .require_pools_configured(&ctx.accounts.pools)?;

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        config.mint,
        StakingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        StakingError::InvalidTokenAccount
    );

    // One shared timestamp: the lifecycle flip, every pool's accrual clock
    // and every registered stake's vesting clock.
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.config.begin(rewards_pool_size, now)?;
    ctx.accounts.pools.mark_operational(now);
    ctx.accounts.stakers.stamp_start_times(now);

    if rewards_pool_size > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.owner_token_account.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            rewards_pool_size,
        )?;
    }

    emit!(StakingStarted {
        start_time: now,
        rewards_pool: rewards_pool_size,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Start<'info> {
    #[account(mut, seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(mut, seeds = [b"pools", config.key().as_ref()], bump)]
    pub pools: Account<'info, PoolRegistry>,

    #[account(mut, seeds = [b"stakers", config.key().as_ref()], bump)]
    pub stakers: Box<Account<'info, StakerRegistry>>,

    #[account(
        mut,
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ StakingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct StakingStarted {
    pub start_time: i64,
    pub rewards_pool: u64,
}

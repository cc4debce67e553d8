use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::state::{PoolRegistry, StakerRegistry, StakingConfig};

pub fn stake(ctx: Context<Stake>, pool_id: u8, amount: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    config.require_started()?;

    require_keys_eq!(
        ctx.accounts.staker_token_account.mint,
        config.mint,
        StakingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.staker_token_account.owner,
        ctx.accounts.staker.key(),
        StakingError::InvalidTokenAccount
    );

    let wallet = ctx.accounts.staker.key();
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .stakers
        .stake(&mut ctx.accounts.pools, &wallet, pool_id, amount, now)?;

    if amount > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.staker_token_account.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.staker.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    emit!(Staked {
        wallet,
        pool_id,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(seeds = [b"staking_config"], bump)]
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
    pub staker_token_account: Account<'info, TokenAccount>,

    pub staker: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Staked {
    pub wallet: Pubkey,
    pub pool_id: u8,
    pub amount: u64,
}

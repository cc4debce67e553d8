use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::state::StakingConfig;

pub fn increase_rewards_pool(ctx: Context<IncreaseRewardsPool>, amount: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        StakingError::NotAuthorized
    );

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

    ctx.accounts.config.fund_rewards(amount)?;

    if amount > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.owner_token_account.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    emit!(RewardsPoolIncreased {
        amount,
        rewards_pool: ctx.accounts.config.rewards_pool,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct IncreaseRewardsPool<'info> {
    #[account(mut, seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

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
pub struct RewardsPoolIncreased {
    pub amount: u64,
    pub rewards_pool: u64,
}

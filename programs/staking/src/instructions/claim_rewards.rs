use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::state::{PoolRegistry, StakerRegistry, StakingConfig};

pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
    // Capture the vault authority's AccountInfo and bump before mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

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
    let reward = ctx
        .accounts
        .stakers
        .pending_reward(&ctx.accounts.pools, &wallet, now)?;

    // The payout comes out of the reward budget, never out of principal.
    ctx.accounts.config.pay_reward(reward)?;

    if reward > 0 {
        require!(
            ctx.accounts.vault.amount >= reward,
            StakingError::InsufficientVaultBalance
        );
        let signer_seeds: &[&[&[u8]]] = &[&[b"staking_config", &[config_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.staker_token_account.to_account_info(),
                    authority: config_ai,
                },
                signer_seeds,
            ),
            reward,
        )?;
    }

    emit!(RewardsClaimed {
        wallet,
        reward,
        rewards_pool: ctx.accounts.config.rewards_pool,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(mut, seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(seeds = [b"pools", config.key().as_ref()], bump)]
    pub pools: Account<'info, PoolRegistry>,

    #[account(seeds = [b"stakers", config.key().as_ref()], bump)]
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
pub struct RewardsClaimed {
    pub wallet: Pubkey,
    pub reward: u64,
    pub rewards_pool: u64,
}

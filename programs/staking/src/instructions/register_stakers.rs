use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::state::{PoolRegistry, StakerInit, StakerRegistry, StakingConfig};

pub fn register_stakers(ctx: Context<RegisterStakers>, inputs: Vec<StakerInit>) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        StakingError::NotAuthorized
    );
    config.require_configuring()?;

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

    let batch_stake = ctx
        .accounts
        .stakers
        .register_batch(&mut ctx.accounts.pools, &inputs)?;

    // Opening principal moves owner -> vault in a single leg for the batch.
    if batch_stake > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.owner_token_account.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            batch_stake,
        )?;
    }

    emit!(StakersRegistered {
        count: inputs.len() as u8,
        batch_stake,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterStakers<'info> {
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
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct StakersRegistered {
    pub count: u8,
    pub batch_stake: u64,
}

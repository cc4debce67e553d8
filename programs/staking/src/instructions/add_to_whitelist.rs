use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::{StakerRegistry, StakingConfig};

pub fn add_to_whitelist(ctx: Context<AddToWhitelist>, wallet: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        StakingError::NotAuthorized
    );

    ctx.accounts.stakers.whitelist_add(wallet)?;

    emit!(WhitelistAdded { wallet });

    Ok(())
}

#[derive(Accounts)]
pub struct AddToWhitelist<'info> {
    #[account(seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(mut, seeds = [b"stakers", config.key().as_ref()], bump)]
    pub stakers: Box<Account<'info, StakerRegistry>>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

#[event]
pub struct WhitelistAdded {
    pub wallet: Pubkey,
}

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::{StakerRegistry, StakingConfig};

pub fn remove_from_whitelist(ctx: Context<RemoveFromWhitelist>, wallet: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        StakingError::NotAuthorized
    );

    // Rights only; any stake record stays in place and keeps vesting.
    ctx.accounts.stakers.whitelist_remove(&wallet)?;

    emit!(WhitelistRemoved { wallet });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveFromWhitelist<'info> {
    #[account(seeds = [b"staking_config"], bump)]
    pub config: Account<'info, StakingConfig>,

    #[account(mut, seeds = [b"stakers", config.key().as_ref()], bump)]
    pub stakers: Box<Account<'info, StakerRegistry>>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

#[event]
pub struct WhitelistRemoved {
    pub wallet: Pubkey,
}

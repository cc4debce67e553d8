use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod vesting;

use instructions::*;
use state::StakerInit;

declare_id!("BD8jpd5CjFrhPpRMP5FUwfQGRiZtoed75fRtjTndFHXo");

#[program]
pub mod staking {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn configure_pool(
        ctx: Context<ConfigurePool>,
        pool_id: u8,
        cliff_days: u32,
        release_days: u32,
        rewards_per_day: u64,
    ) -> Result<()> {
        instructions::configure_pool(ctx, pool_id, cliff_days, release_days, rewards_per_day)
    }

    pub fn register_stakers(ctx: Context<RegisterStakers>, inputs: Vec<StakerInit>) -> Result<()> {
        instructions::register_stakers(ctx, inputs)
    }

    pub fn add_to_whitelist(ctx: Context<AddToWhitelist>, wallet: Pubkey) -> Result<()> {
        instructions::add_to_whitelist(ctx, wallet)
    }

    pub fn remove_from_whitelist(ctx: Context<RemoveFromWhitelist>, wallet: Pubkey) -> Result<()> {
        instructions::remove_from_whitelist(ctx, wallet)
    }

    pub fn start(ctx: Context<Start>, rewards_pool_size: u64) -> Result<()> {
        instructions::start(ctx, rewards_pool_size)
    }

    pub fn stake(ctx: Context<Stake>, pool_id: u8, amount: u64) -> Result<()> {
        instructions::stake(ctx, pool_id, amount)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake(ctx, amount)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards(ctx)
    }

    pub fn increase_rewards_pool(ctx: Context<IncreaseRewardsPool>, amount: u64) -> Result<()> {
        instructions::increase_rewards_pool(ctx, amount)
    }

    pub fn emit_pool_stats(ctx: Context<EmitPoolStats>) -> Result<()> {
        instructions::emit_pool_stats(ctx)
    }

    pub fn emit_claimable_quote(ctx: Context<EmitClaimableQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_claimable_quote(ctx, wallet)
    }

    pub fn emit_yield_quote(ctx: Context<EmitYieldQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_yield_quote(ctx, wallet)
    }

    pub fn emit_yield_preview(
        ctx: Context<EmitYieldPreview>,
        pool_id: u8,
        additional_stake: u64,
    ) -> Result<()> {
        instructions::emit_yield_preview(ctx, pool_id, additional_stake)
    }
}

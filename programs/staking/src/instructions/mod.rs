pub mod initialize;
pub mod configure_pool;
pub mod register_stakers;
pub mod add_to_whitelist;
pub mod remove_from_whitelist;
pub mod start;
pub mod stake;
pub mod unstake;
pub mod claim_rewards;
pub mod increase_rewards_pool;
pub mod emit_pool_stats;
pub mod emit_claimable_quote;
pub mod emit_yield_quote;
pub mod emit_yield_preview;

pub use initialize::*;
pub use configure_pool::*;
pub use register_stakers::*;
pub use add_to_whitelist::*;
pub use remove_from_whitelist::*;
pub use start::*;
pub use stake::*;
pub use unstake::*;
pub use claim_rewards::*;
pub use increase_rewards_pool::*;
pub use emit_pool_stats::*;
pub use emit_claimable_quote::*;
pub use emit_yield_quote::*;
pub use emit_yield_preview::*;

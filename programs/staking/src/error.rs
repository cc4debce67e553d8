use anchor_lang::prelude::*;

/// Custom error codes for the staking program.
#[error_code]
pub enum StakingError {
    #[msg("Unauthorized: owner signature required")]
    NotAuthorized,

    #[msg("Operation not allowed in the current lifecycle phase")]
    InvalidPhase,

    #[msg("A pool referenced by a registered stake has no vesting curve")]
    IncompleteConfiguration,

    #[msg("Unknown or sentinel pool id")]
    InvalidPool,

    #[msg("Registration batch too large")]
    TooManyEntries,

    #[msg("Requested amount exceeds the current stake")]
    InsufficientStake,

    #[msg("Requested amount exceeds the vested ceiling")]
    VestingNotReached,

    #[msg("Rewards pool cannot cover the computed reward")]
    InsufficientRewardsPool,

    #[msg("Wallet is already whitelisted")]
    AlreadyWhitelisted,

    #[msg("Wallet is not whitelisted")]
    NotWhitelisted,

    #[msg("Wallet has no pool assignment")]
    NotStaking,

    #[msg("Staker registry is full")]
    RegistryFull,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}

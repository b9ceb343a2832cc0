use anchor_lang::prelude::*;

#[error_code]
pub enum BingoError {
    #[msg("Game has not been created")]
    GameNotCreated,
    #[msg("Game is over")]
    GameIsOver,
    #[msg("Game is already in progress")]
    GameInProgress,
    #[msg("Player already joined this game")]
    CannotJoinTwice,
    #[msg("Join window has not elapsed yet")]
    GameNotStarted,
    #[msg("Turn interval has not elapsed yet")]
    WaitForNextTurn,
    #[msg("Caller holds no board for this game")]
    NotAPlayer,
    #[msg("Board is not covered by any winning pattern")]
    BingoCheckFailed,
    #[msg("Not authorized")]
    NotAuthorized,
    #[msg("Durations must not be negative")]
    InvalidDuration,
    #[msg("Token mint does not match the game mint")]
    InvalidMint,
    #[msg("Recent slot hash is unavailable")]
    EntropyUnavailable,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}

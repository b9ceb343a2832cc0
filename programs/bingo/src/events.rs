use anchor_lang::prelude::*;

#[event]
pub struct GameCreated {
    pub game_id: u64,
}

#[event]
pub struct EntryFeeUpdated {
    pub entry_fee: u64,
}

#[event]
pub struct JoinWindowUpdated {
    pub join_window: i64,
}

#[event]
pub struct TurnIntervalUpdated {
    pub turn_interval: i64,
}

#[event]
pub struct PlayerJoined {
    pub game_id: u64,
    pub player: Pubkey,
}

#[event]
pub struct NumberDrawn {
    pub game_id: u64,
    pub number: u8,
}

/// Emitted once per game, when the pot is paid to the winner.
#[event]
pub struct GameOver {
    pub game_id: u64,
    pub winner: Pubkey,
    pub amount: u64,
    /// Index of the first satisfied pattern.
    pub pattern: u8,
}

pub mod admin;
pub mod claim_bingo;
pub mod create_game;
pub mod draw;
pub mod join_game;
pub mod views;

pub use admin::*;
pub use claim_bingo::*;
pub use create_game::*;
pub use draw::*;
pub use join_game::*;
pub use views::*;

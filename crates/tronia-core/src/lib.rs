//! tronia-core — shared domain types for the Tronia slot-battle backend
//!
//! Holds the value types the whole backend agrees on: the player profile,
//! the bet, the battle state machine and the error taxonomy. No engine
//! math and no session logic live here.

pub mod battle;
pub mod bet;
pub mod error;
pub mod player;

pub use battle::*;
pub use bet::*;
pub use error::*;
pub use player::*;

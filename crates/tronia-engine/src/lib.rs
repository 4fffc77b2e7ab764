//! # tronia-engine — spin resolution for the Tronia slot-battle backend
//!
//! Maps uniform random draws to reel symbols and evaluates wagered lines
//! into damage, payout and epicness. Everything in this crate is pure and
//! deterministic: the only randomness is the RNG the caller hands to
//! [`SpinEngine::spin`], and every spin can be replayed from its raw
//! draws.
//!
//! ## Architecture
//!
//! ```text
//! SpinEngine
//!     │
//!     ├── ReelLayout (cumulative [0,1) intervals, one per symbol)
//!     └── PayTable (per-symbol damage/payout/epicness weights)
//!           │
//!           v
//!     draws → Vec<Move> → EvaluationResult
//! ```

pub mod config;
pub mod engine;
pub mod paytable;
pub mod reel;
pub mod symbols;

pub use config::*;
pub use engine::*;
pub use paytable::*;
pub use reel::*;
pub use symbols::*;

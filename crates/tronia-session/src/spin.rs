//! Spin result snapshot

use serde::{Deserialize, Serialize};

use tronia_core::{Battle, Bet, Player};
use tronia_engine::EvaluationResult;

/// Immutable snapshot handed to the rendering layer after a spin:
/// post-spin clones of the player and battle, the bet as submitted, the
/// raw per-line draws, and the evaluated outcome. The reels animate
/// deterministically from the draws; the outcome saves the renderer from
/// re-running the paytable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinResult {
    pub player: Player,
    pub battle: Battle,
    pub bet: Bet,
    /// One uniform draw in [0, 1) per wagered line
    pub draws: Vec<f64>,
    pub outcome: EvaluationResult,
}

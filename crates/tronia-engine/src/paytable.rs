//! Paytable and line evaluation

use serde::{Deserialize, Serialize};

use tronia_core::Bet;

use crate::symbols::{Move, MoveSet};

/// One line's contribution to the spin outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineResult {
    /// Line index within the bet (0-based)
    pub line_index: u8,
    /// Symbol the line resolved to
    pub symbol: Move,
    pub damage: u64,
    pub payout: u64,
    pub epicness: u64,
}

/// Totals across all wagered lines, with the per-line breakdown kept for
/// presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub line_results: Vec<LineResult>,
    /// Damage dealt to the villain
    pub damage: u64,
    /// Tronium paid back to the player
    pub payout: u64,
    /// Score earned
    pub epicness: u64,
}

impl EvaluationResult {
    pub fn empty() -> Self {
        Self {
            line_results: Vec::new(),
            damage: 0,
            payout: 0,
            epicness: 0,
        }
    }

    pub fn is_win(&self) -> bool {
        self.payout > 0 || self.damage > 0
    }
}

/// Fixed per-symbol pay weights. Lines are evaluated independently
/// (no cross-line combinations), so evaluation is O(lines) with a
/// constant-size lookup per line.
#[derive(Debug, Clone)]
pub struct PayTable {
    set: MoveSet,
}

impl PayTable {
    pub fn new(set: MoveSet) -> Self {
        Self { set }
    }

    pub fn move_set(&self) -> &MoveSet {
        &self.set
    }

    /// Evaluate the resolved symbols of one spin, one entry in `moves`
    /// per wagered line. Each line contributes its symbol's base weights
    /// scaled by `bet.tronium * bet.level`. A zero-line or zero-stake
    /// bet evaluates to an all-zero outcome rather than an error.
    pub fn evaluate(&self, bet: &Bet, moves: &[Move]) -> EvaluationResult {
        debug_assert_eq!(moves.len(), bet.lines as usize);

        let scale = bet.tronium * bet.level as u64;
        let mut result = EvaluationResult::empty();

        for (i, &symbol) in moves.iter().enumerate() {
            let weight = self.set.get(symbol);
            let line = LineResult {
                line_index: i as u8,
                symbol,
                damage: weight.damage * scale,
                payout: weight.payout * scale,
                epicness: weight.epicness * scale,
            };
            result.damage += line.damage;
            result.payout += line.payout;
            result.epicness += line.epicness;
            result.line_results.push(line);
        }

        result
    }
}

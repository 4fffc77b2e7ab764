//! Reel symbol alphabet and weight table

use serde::{Deserialize, Serialize};

use tronia_core::{GameError, GameResult};

/// Tolerance when checking that probabilities sum to 1.0
const PROBABILITY_EPSILON: f64 = 1e-9;

/// A reel symbol ("move"). The alphabet is closed and evaluation is a
/// table lookup, so this is a plain tagged enum rather than anything
/// polymorphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Nothing happens on this line
    Miss,
    /// Plain attack
    Hit,
    /// Heavy attack
    Critical,
    /// Small tronium payout
    Coin,
    /// Payout plus a scratch of damage
    Loot,
    /// Top payout symbol
    Jackpot,
}

impl Move {
    /// Every symbol, in canonical order
    pub const ALL: [Move; 6] = [
        Move::Miss,
        Move::Hit,
        Move::Critical,
        Move::Coin,
        Move::Loot,
        Move::Jackpot,
    ];

    /// Canonical index, used for table lookups
    pub const fn index(self) -> usize {
        match self {
            Move::Miss => 0,
            Move::Hit => 1,
            Move::Critical => 2,
            Move::Coin => 3,
            Move::Loot => 4,
            Move::Jackpot => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Miss => "MISS",
            Move::Hit => "HIT",
            Move::Critical => "CRITICAL",
            Move::Coin => "COIN",
            Move::Loot => "LOOT",
            Move::Jackpot => "JACKPOT",
        }
    }
}

/// Per-symbol configuration row: appearance probability plus the base
/// weights a line scores when it lands on the symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SymbolWeight {
    pub symbol: Move,
    /// Appearance probability; all rows together must sum to 1.0
    pub probability: f64,
    /// Base damage per line, scaled by stake and boost
    pub damage: u64,
    /// Base tronium payout per line, scaled by stake and boost
    pub payout: u64,
    /// Base score per line, scaled by stake and boost
    pub epicness: u64,
}

impl SymbolWeight {
    pub fn new(symbol: Move, probability: f64, damage: u64, payout: u64, epicness: u64) -> Self {
        Self { symbol, probability, damage, payout, epicness }
    }
}

/// Validated weight table covering the full alphabet. Row order is the
/// reel-interval order used by the draw mapping, so it is part of the
/// replay contract and never reordered after construction.
#[derive(Debug, Clone)]
pub struct MoveSet {
    rows: Vec<SymbolWeight>,
    by_symbol: [SymbolWeight; 6],
}

impl MoveSet {
    /// Build a table from explicit rows. Rejects tables that miss or
    /// duplicate a symbol, carry non-positive probabilities, or whose
    /// probabilities do not sum to 1.0.
    pub fn new(rows: Vec<SymbolWeight>) -> GameResult<Self> {
        if rows.len() != Move::ALL.len() {
            return Err(GameError::InvalidConfig(format!(
                "expected {} symbol rows, got {}",
                Move::ALL.len(),
                rows.len()
            )));
        }

        let mut seen = [false; 6];
        let mut total = 0.0f64;
        for row in &rows {
            let idx = row.symbol.index();
            if seen[idx] {
                return Err(GameError::InvalidConfig(format!(
                    "duplicate row for symbol {}",
                    row.symbol.name()
                )));
            }
            seen[idx] = true;

            if !row.probability.is_finite() || row.probability <= 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "probability for {} must be positive, got {}",
                    row.symbol.name(),
                    row.probability
                )));
            }
            total += row.probability;
        }

        if (total - 1.0).abs() > PROBABILITY_EPSILON {
            return Err(GameError::InvalidConfig(format!(
                "probabilities must sum to 1.0, got {total}"
            )));
        }

        let mut by_symbol = [rows[0]; 6];
        for row in &rows {
            by_symbol[row.symbol.index()] = *row;
        }

        Ok(Self { rows, by_symbol })
    }

    /// Placeholder math table. The production probabilities and weights
    /// come from the game math sheet, which is supplied separately; this
    /// table keeps the engine playable and unit-testable until then.
    /// Epicness mirrors damage: a fight's score is the damage dealt.
    pub fn standard() -> Self {
        let rows = vec![
            SymbolWeight::new(Move::Miss, 0.33, 0, 0, 0),
            SymbolWeight::new(Move::Hit, 0.28, 1, 0, 1),
            SymbolWeight::new(Move::Critical, 0.12, 3, 0, 3),
            SymbolWeight::new(Move::Coin, 0.15, 0, 2, 0),
            SymbolWeight::new(Move::Loot, 0.08, 1, 3, 1),
            SymbolWeight::new(Move::Jackpot, 0.04, 2, 10, 2),
        ];
        // The table above sums to exactly 1.0; construction cannot fail.
        match Self::new(rows) {
            Ok(set) => set,
            Err(_) => unreachable!("standard table is statically valid"),
        }
    }

    /// Weight row for a symbol. Total: construction guarantees every
    /// symbol has exactly one row.
    pub fn get(&self, symbol: Move) -> &SymbolWeight {
        &self.by_symbol[symbol.index()]
    }

    /// Rows in reel-interval order
    pub fn rows(&self) -> &[SymbolWeight] {
        &self.rows
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::standard()
    }
}

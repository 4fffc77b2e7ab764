//! Bet value type and the playable wager domain

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Line counts a bet may wager on
pub const LINE_CHOICES: [u8; 3] = [1, 2, 3];

/// Boost tiers (damage/payout multiplier)
pub const BOOST_CHOICES: [u8; 3] = [1, 2, 3];

/// A wager for one spin: a tronium stake per line, a line count and a
/// boost tier. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// Boost tier; multiplies both damage and payout
    pub level: u8,
    /// Stake per line
    pub tronium: u64,
    /// Number of lines wagered
    pub lines: u8,
}

impl Bet {
    pub fn new(level: u8, tronium: u64, lines: u8) -> Self {
        Self { level, tronium, lines }
    }

    /// Total cost of the spin: `lines * tronium * level`
    pub fn stake(&self) -> u64 {
        self.lines as u64 * self.tronium * self.level as u64
    }

    /// Check the bet against the playable domain. The evaluator itself
    /// tolerates zero-cost bets; this is the stricter rule the session
    /// applies before accepting a spin.
    pub fn validate(&self) -> GameResult<()> {
        if !LINE_CHOICES.contains(&self.lines) {
            return Err(GameError::InvalidBet(format!("lines must be one of {LINE_CHOICES:?}, got {}", self.lines)));
        }
        if !BOOST_CHOICES.contains(&self.level) {
            return Err(GameError::InvalidBet(format!("level must be one of {BOOST_CHOICES:?}, got {}", self.level)));
        }
        if self.tronium == 0 {
            return Err(GameError::InvalidBet("stake per line must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake() {
        assert_eq!(Bet::new(2, 10, 3).stake(), 60);
        assert_eq!(Bet::new(1, 5, 1).stake(), 5);
    }

    #[test]
    fn test_validate_accepts_playable_bets() {
        for &lines in &LINE_CHOICES {
            for &level in &BOOST_CHOICES {
                assert!(Bet::new(level, 10, lines).validate().is_ok());
            }
        }
    }

    #[test]
    fn test_validate_rejects_out_of_domain() {
        assert!(matches!(Bet::new(1, 10, 0).validate(), Err(GameError::InvalidBet(_))));
        assert!(matches!(Bet::new(1, 10, 4).validate(), Err(GameError::InvalidBet(_))));
        assert!(matches!(Bet::new(0, 10, 1).validate(), Err(GameError::InvalidBet(_))));
        assert!(matches!(Bet::new(4, 10, 1).validate(), Err(GameError::InvalidBet(_))));
        assert!(matches!(Bet::new(1, 0, 1).validate(), Err(GameError::InvalidBet(_))));
    }
}

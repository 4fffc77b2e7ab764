//! Pass-through battle statistics
//!
//! Leaderboard data is aggregated by an external collaborator; the
//! session only relays it. `SessionStats` below is the one locally kept
//! tally, bookkeeping for the current session only.

use serde::{Deserialize, Serialize};

/// Outcome summary of one fight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FightStats {
    pub epicness: u64,
    pub tronium: u64,
    pub seconds: u64,
}

/// Per-player aggregates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub best_fight: FightStats,
    pub villains_defeated: u64,
}

/// Global aggregates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalStats {
    /// All-time best fights, sorted by epicness descending
    pub all_time: Vec<FightStats>,
    /// Villains defeated across all players
    pub villains_defeated: u64,
    pub best_fight_week: FightStats,
}

/// External stats collaborator
pub trait StatsProvider: Send + Sync {
    fn global_stats(&self) -> GlobalStats;
    fn player_stats(&self, name: &str) -> PlayerStats;
}

/// Stats source for sessions with no collaborator wired up
#[derive(Debug, Default)]
pub struct NullStats;

impl StatsProvider for NullStats {
    fn global_stats(&self) -> GlobalStats {
        GlobalStats::default()
    }

    fn player_stats(&self, _name: &str) -> PlayerStats {
        PlayerStats::default()
    }
}

/// Local bookkeeping over the current session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub total_staked: u64,
    pub total_payout: u64,
    /// Spins that paid anything back
    pub wins: u64,
    pub battles_won: u64,
}

impl SessionStats {
    /// Return-to-player over the session, in percent
    pub fn rtp(&self) -> f64 {
        if self.total_staked > 0 {
            (self.total_payout as f64 / self.total_staked as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Share of spins that paid out, in percent
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

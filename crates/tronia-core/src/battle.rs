//! Battle state machine

use serde::{Deserialize, Serialize};

/// The villain being fought
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Villain {
    /// Current hit points, clamped at zero
    pub hp: u64,
    /// Hit points at battle creation
    pub max_hp: u64,
}

impl Villain {
    pub fn new(max_hp: u64) -> Self {
        Self { hp: max_hp, max_hp }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// Battle lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleStatus {
    /// Villain at full health, no spins resolved yet
    Ready,
    /// At least one spin resolved, villain alive
    Ongoing,
    /// Villain down to zero hp; terminal
    Finished,
}

/// One encounter against a villain. The session owns at most one of
/// these at a time; a finished battle is only ever replaced, never
/// resumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    pub status: BattleStatus,
    pub villain: Villain,
    /// Net currency change since battle start (payouts minus stakes)
    pub tronium: i64,
    /// Accumulated score
    pub epicness: u64,
}

impl Battle {
    /// New battle against a full-health villain
    pub fn new(villain_hp: u64) -> Self {
        Self {
            status: BattleStatus::Ready,
            villain: Villain::new(villain_hp),
            tronium: 0,
            epicness: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == BattleStatus::Finished
    }

    /// Apply one resolved spin. This is the only state transition of the
    /// machine: hp decreases (clamped at zero), the net currency delta
    /// and score accumulate, and the status is recomputed to `Finished`
    /// exactly when the villain reaches zero hp.
    pub fn apply_outcome(&mut self, damage: u64, delta: i64, epicness: u64) {
        self.villain.hp = self.villain.hp.saturating_sub(damage);
        self.tronium += delta;
        self.epicness += epicness;
        self.status = if self.villain.is_defeated() {
            BattleStatus::Finished
        } else {
            BattleStatus::Ongoing
        };
        if self.is_finished() {
            log::debug!("villain defeated after {} epicness", self.epicness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_battle_is_ready_at_full_health() {
        let battle = Battle::new(300);
        assert_eq!(battle.status, BattleStatus::Ready);
        assert_eq!(battle.villain.hp, 300);
        assert_eq!(battle.villain.max_hp, 300);
        assert_eq!(battle.tronium, 0);
        assert_eq!(battle.epicness, 0);
    }

    #[test]
    fn test_zero_damage_spin_still_starts_the_battle() {
        let mut battle = Battle::new(300);
        battle.apply_outcome(0, -10, 0);
        assert_eq!(battle.status, BattleStatus::Ongoing);
        assert_eq!(battle.villain.hp, 300);
        assert_eq!(battle.tronium, -10);
    }

    #[test]
    fn test_finished_iff_hp_zero() {
        let mut battle = Battle::new(10);
        battle.apply_outcome(9, 0, 9);
        assert_eq!(battle.status, BattleStatus::Ongoing);
        battle.apply_outcome(1, 0, 1);
        assert_eq!(battle.status, BattleStatus::Finished);
        assert!(battle.villain.is_defeated());
    }

    #[test]
    fn test_overkill_clamps_hp_to_zero() {
        let mut battle = Battle::new(50);
        battle.apply_outcome(500, 20, 500);
        assert_eq!(battle.villain.hp, 0);
        assert_eq!(battle.status, BattleStatus::Finished);
    }

    #[test]
    fn test_net_tronium_accumulates_signed() {
        let mut battle = Battle::new(1000);
        battle.apply_outcome(1, -30, 1);
        battle.apply_outcome(1, 50, 1);
        battle.apply_outcome(1, -5, 1);
        assert_eq!(battle.tronium, 15);
    }
}

//! Session contract consumed by the rendering layer
//!
//! Mirrors the operation surface the UI polls and drives. All state it
//! returns is owned (defensive copies); nothing here hands out a live
//! reference into the session.

use tronia_core::{Battle, Bet, Collectable, GameResult, Player};

use crate::spin::SpinResult;
use crate::stats::{GlobalStats, PlayerStats};
use crate::status::SessionStatus;

pub trait GameApi {
    /// Session health; the UI checks this every few seconds
    fn status(&self) -> SessionStatus;

    /// Open the currency channel and credit the opening amount
    fn open_channel(&mut self, tronium: u64) -> GameResult<()>;

    /// Credit further tronium through an open channel
    fn add_tronium(&mut self, tronium: u64) -> GameResult<()>;

    /// Snapshot of the player profile
    fn player(&self) -> Player;

    /// Rename the player; returns the updated profile
    fn update_player_name(&mut self, name: &str) -> GameResult<Player>;

    /// Replace all four equip slots atomically; returns the updated
    /// profile
    fn update_player_items(
        &mut self,
        item1: Option<Collectable>,
        item2: Option<Collectable>,
        item3: Option<Collectable>,
        item4: Option<Collectable>,
    ) -> Player;

    /// Snapshot of the active battle, lazily creating a fresh one on
    /// first access
    fn current_battle(&mut self) -> Battle;

    /// Replace a finished (or absent) battle with a fresh one
    fn start_battle(&mut self) -> GameResult<Battle>;

    /// Cash out: zero the spendable balance and close the channel.
    /// Returns the amount cashed out.
    fn close_channel(&mut self) -> GameResult<u64>;

    /// Resolve one spin transactionally
    fn spin(&mut self, bet: Bet) -> GameResult<SpinResult>;

    /// Leaderboard aggregates from the external stats collaborator
    fn global_stats(&self) -> GlobalStats;

    /// This player's aggregates from the external stats collaborator
    fn player_stats(&self) -> PlayerStats;
}

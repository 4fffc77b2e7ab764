//! Thread-safe session handle

use std::sync::Arc;

use tronia_core::{Bet, GameResult};

use crate::api::GameApi;
use crate::session::GameSession;
use crate::spin::SpinResult;
use crate::status::SessionStatus;

/// Shared handle over one session. A spin holds the write lock for the
/// whole resolve-and-commit sequence, so concurrent spin calls against
/// the same session serialize and the player/battle balances cannot
/// interleave.
pub struct SharedSession {
    inner: Arc<parking_lot::RwLock<GameSession>>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(parking_lot::RwLock::new(session)),
        }
    }

    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, GameSession> {
        self.inner.read()
    }

    pub fn write(&self) -> parking_lot::RwLockWriteGuard<'_, GameSession> {
        self.inner.write()
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.read().status()
    }

    pub fn spin(&self, bet: Bet) -> GameResult<SpinResult> {
        self.inner.write().spin(bet)
    }
}

impl Clone for SharedSession {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

//! Game session — exclusive owner of player and battle state

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use tronia_core::{
    Battle, Bet, Collectable, GameError, GameResult, Player, MAX_NAME_LEN,
};
use tronia_engine::{EngineConfig, SpinEngine};

use crate::api::GameApi;
use crate::spin::SpinResult;
use crate::stats::{GlobalStats, NullStats, PlayerStats, SessionStats, StatsProvider};
use crate::status::{SessionStatus, WalletLink};

/// Tunable session parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub player_name: String,
    pub starting_tronium: u64,
    pub starting_fame: u64,
    /// Villain hit points for each new battle
    pub villain_hp: u64,
    pub engine: EngineConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: "Papu".into(),
            starting_tronium: 0,
            starting_fame: 0,
            villain_hp: 300,
            engine: EngineConfig::standard(),
        }
    }
}

/// One player's game session. Exclusively owns the `Player` and the
/// current `Battle`; every accessor returns clones, so the only way to
/// mutate session state is through the [`GameApi`] operations.
pub struct GameSession {
    config: SessionConfig,
    engine: SpinEngine,
    rng: StdRng,
    wallet: WalletLink,
    channel_open: bool,
    faulted: bool,
    player: Player,
    battle: Option<Battle>,
    stats: SessionStats,
    stats_provider: Box<dyn StatsProvider>,
}

/// Apply a signed spin delta to a balance. The stake check before any
/// draw guarantees the negative branch cannot underflow.
fn apply_delta(balance: u64, delta: i64) -> u64 {
    if delta >= 0 {
        balance + delta as u64
    } else {
        balance.saturating_sub(delta.unsigned_abs())
    }
}

impl GameSession {
    /// Create a session with no stats collaborator
    pub fn new(config: SessionConfig) -> GameResult<Self> {
        Self::with_stats(config, Box::new(NullStats))
    }

    /// Create a session backed by an external stats collaborator
    pub fn with_stats(
        config: SessionConfig,
        stats_provider: Box<dyn StatsProvider>,
    ) -> GameResult<Self> {
        let engine = config.engine.build()?;
        let player = Player::new(
            config.player_name.clone(),
            config.starting_tronium,
            config.starting_fame,
        );
        Ok(Self {
            config,
            engine,
            rng: StdRng::from_os_rng(),
            wallet: WalletLink::Connected,
            channel_open: false,
            faulted: false,
            player,
            battle: None,
            stats: SessionStats::default(),
            stats_provider,
        })
    }

    /// Seed the RNG for reproducible sessions
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Update the wallet link state reported by the host integration
    pub fn set_wallet_link(&mut self, wallet: WalletLink) {
        self.wallet = wallet;
    }

    /// Flag or clear an external fault; a faulted session reports
    /// `SessionStatus::Error` until cleared
    pub fn set_faulted(&mut self, faulted: bool) {
        self.faulted = faulted;
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Local bookkeeping for this session
    pub fn session_stats(&self) -> &SessionStats {
        &self.stats
    }
}

impl GameApi for GameSession {
    fn status(&self) -> SessionStatus {
        if self.faulted {
            return SessionStatus::Error;
        }
        match self.wallet {
            WalletLink::Missing => SessionStatus::NeedsInstall,
            WalletLink::Locked => SessionStatus::NeedsLogin,
            WalletLink::Connected => {
                if !self.channel_open {
                    SessionStatus::NoChannel
                } else if self.player.tronium == 0 {
                    SessionStatus::InsufficientBalance
                } else {
                    SessionStatus::Ready
                }
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CHANNEL
    // ═══════════════════════════════════════════════════════════════════════

    fn open_channel(&mut self, tronium: u64) -> GameResult<()> {
        if tronium == 0 {
            return Err(GameError::InvalidAmount);
        }
        if self.wallet != WalletLink::Connected {
            return Err(GameError::ChannelClosed);
        }
        self.channel_open = true;
        self.player.tronium += tronium;
        log::info!("channel opened with {tronium} tronium");
        Ok(())
    }

    fn add_tronium(&mut self, tronium: u64) -> GameResult<()> {
        if tronium == 0 {
            return Err(GameError::InvalidAmount);
        }
        if !self.channel_open {
            return Err(GameError::ChannelClosed);
        }
        self.player.tronium += tronium;
        log::debug!("credited {tronium} tronium");
        Ok(())
    }

    fn close_channel(&mut self) -> GameResult<u64> {
        let cashed = self.player.tronium;
        self.player.tronium = 0;
        self.channel_open = false;
        log::info!("channel closed, cashed out {cashed} tronium");
        Ok(cashed)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PLAYER
    // ═══════════════════════════════════════════════════════════════════════

    fn player(&self) -> Player {
        self.player.clone()
    }

    fn update_player_name(&mut self, name: &str) -> GameResult<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidName("name must not be empty".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(GameError::InvalidName(format!(
                "name longer than {MAX_NAME_LEN} characters"
            )));
        }
        self.player.name = name.to_string();
        Ok(self.player.clone())
    }

    fn update_player_items(
        &mut self,
        item1: Option<Collectable>,
        item2: Option<Collectable>,
        item3: Option<Collectable>,
        item4: Option<Collectable>,
    ) -> Player {
        self.player.equip(item1, item2, item3, item4);
        self.player.clone()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // BATTLE
    // ═══════════════════════════════════════════════════════════════════════

    fn current_battle(&mut self) -> Battle {
        let villain_hp = self.config.villain_hp;
        self.battle
            .get_or_insert_with(|| {
                log::debug!("battle created: villain hp {villain_hp}");
                Battle::new(villain_hp)
            })
            .clone()
    }

    fn start_battle(&mut self) -> GameResult<Battle> {
        if let Some(battle) = &self.battle {
            if !battle.is_finished() {
                return Err(GameError::BattleOngoing);
            }
        }
        let battle = Battle::new(self.config.villain_hp);
        self.battle = Some(battle.clone());
        log::info!("new battle started: villain hp {}", battle.villain.max_hp);
        Ok(battle)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SPIN
    // ═══════════════════════════════════════════════════════════════════════

    fn spin(&mut self, bet: Bet) -> GameResult<SpinResult> {
        bet.validate()?;

        let available = self.player.tronium;
        let battle = self.battle.as_mut().ok_or(GameError::NotInBattle)?;
        if battle.is_finished() {
            return Err(GameError::BattleFinished);
        }

        let stake = bet.stake();
        if available < stake {
            return Err(GameError::InsufficientTronium {
                required: stake,
                available,
            });
        }

        // Resolve fully before mutating anything; a failed spin must
        // leave player and battle untouched.
        let (draws, outcome) = self.engine.spin(&bet, &mut self.rng);
        let delta = outcome.payout as i64 - stake as i64;

        // Commit. Battle and player take the same delta in the same
        // step, which is what keeps the two balances in lockstep.
        battle.apply_outcome(outcome.damage, delta, outcome.epicness);
        let battle_snapshot = battle.clone();

        self.player.tronium = apply_delta(self.player.tronium, delta);
        self.player.fame += outcome.epicness;

        self.stats.total_spins += 1;
        self.stats.total_staked += stake;
        self.stats.total_payout += outcome.payout;
        if outcome.payout > 0 {
            self.stats.wins += 1;
        }
        if battle_snapshot.is_finished() {
            self.stats.battles_won += 1;
            log::info!(
                "battle won: {} epicness, net {} tronium",
                battle_snapshot.epicness,
                battle_snapshot.tronium
            );
        }

        log::debug!(
            "spin resolved: stake {stake}, payout {}, damage {}",
            outcome.payout,
            outcome.damage
        );

        Ok(SpinResult {
            player: self.player.clone(),
            battle: battle_snapshot,
            bet,
            draws,
            outcome,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // STATS PASS-THROUGH
    // ═══════════════════════════════════════════════════════════════════════

    fn global_stats(&self) -> GlobalStats {
        self.stats_provider.global_stats()
    }

    fn player_stats(&self) -> PlayerStats {
        self.stats_provider.player_stats(&self.player.name)
    }
}

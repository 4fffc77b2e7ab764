//! Engine configuration with JSON import/export

use serde::{Deserialize, Serialize};

use tronia_core::{GameError, GameResult};

use crate::engine::SpinEngine;
use crate::symbols::{MoveSet, SymbolWeight};

/// Serializable engine configuration: the full symbol weight table, in
/// reel-interval order. Weights are a tunable input: the math team
/// ships revised tables as JSON without touching engine code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub symbols: Vec<SymbolWeight>,
}

impl EngineConfig {
    /// The built-in placeholder table (see [`MoveSet::standard`])
    pub fn standard() -> Self {
        Self {
            symbols: MoveSet::standard().rows().to_vec(),
        }
    }

    /// Validate the table and build a ready-to-use engine
    pub fn build(&self) -> GameResult<SpinEngine> {
        let set = MoveSet::new(self.symbols.clone())?;
        Ok(SpinEngine::new(set))
    }

    /// Export as pretty-printed JSON
    pub fn to_json(&self) -> GameResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::Serialization(e.to_string()))
    }

    /// Import from JSON. Shape errors surface here; table validity is
    /// checked by [`EngineConfig::build`].
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::Serialization(e.to_string()))?;
        log::debug!("engine config imported: {} symbol rows", config.symbols.len());
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Move;

    #[test]
    fn test_standard_config_builds() {
        assert!(EngineConfig::standard().build().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::standard();
        let json = config.to_json().unwrap();
        let restored = EngineConfig::from_json(&json).unwrap();
        assert_eq!(restored.symbols.len(), config.symbols.len());
        for (a, b) in restored.symbols.iter().zip(&config.symbols) {
            assert_eq!(a.symbol, b.symbol);
            assert_eq!(a.probability, b.probability);
            assert_eq!(a.payout, b.payout);
        }
    }

    #[test]
    fn test_invalid_table_rejected_at_build() {
        let mut config = EngineConfig::standard();
        config.symbols.retain(|row| row.symbol != Move::Jackpot);
        assert!(config.build().is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            EngineConfig::from_json("{not json"),
            Err(GameError::Serialization(_))
        ));
    }
}

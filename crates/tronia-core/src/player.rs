//! Player profile and collectables

use serde::{Deserialize, Serialize};

/// Maximum accepted length for a player name, in characters
pub const MAX_NAME_LEN: usize = 32;

/// An owned collectable (trophy or equippable item).
///
/// The id is the address of the asset on the external collectables
/// registry; this core treats it as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectable {
    pub id: String,
}

impl Collectable {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Player profile. Owned exclusively by the game session; callers only
/// ever see clones of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    pub name: String,
    /// Spendable currency balance
    pub tronium: u64,
    /// Score currency earned from battles
    pub fame: u64,
    /// Owned collectables, in acquisition order
    pub collectables: Vec<Collectable>,
    /// Equip slot 1 (each slot independently nullable)
    pub item1: Option<Collectable>,
    /// Equip slot 2
    pub item2: Option<Collectable>,
    /// Equip slot 3
    pub item3: Option<Collectable>,
    /// Equip slot 4
    pub item4: Option<Collectable>,
}

impl Player {
    /// Create a fresh player with nothing equipped
    pub fn new(name: impl Into<String>, tronium: u64, fame: u64) -> Self {
        Self {
            name: name.into(),
            tronium,
            fame,
            collectables: Vec::new(),
            item1: None,
            item2: None,
            item3: None,
            item4: None,
        }
    }

    /// Replace all four equip slots in one step. Partial updates are not
    /// supported; slots not mentioned are cleared, never merged.
    pub fn equip(
        &mut self,
        item1: Option<Collectable>,
        item2: Option<Collectable>,
        item3: Option<Collectable>,
        item4: Option<Collectable>,
    ) {
        self.item1 = item1;
        self.item2 = item2;
        self.item3 = item3;
        self.item4 = item4;
    }
}

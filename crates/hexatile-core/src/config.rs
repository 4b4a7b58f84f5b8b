use serde::{Deserialize, Serialize};

use crate::constants::MAX_LEVEL;
use crate::types::TileType;
use crate::upgrade::UpgradeRules;

fn default_max_level() -> u8 {
    MAX_LEVEL
}

/// Game-wide tile configuration, loaded from RON data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tile types that may be upgraded. Types not listed never upgrade.
    pub upgradable: Vec<TileType>,
    /// Highest tile level. Must match the 2-bit level field (3).
    #[serde(default = "default_max_level")]
    pub max_level: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            upgradable: Vec::new(),
            max_level: MAX_LEVEL,
        }
    }
}

impl GameConfig {
    /// Upgradable types in declaration order.
    pub fn upgradable_types(&self) -> &[TileType] {
        &self.upgradable
    }

    /// Number of upgradable types.
    pub fn len(&self) -> usize {
        self.upgradable.len()
    }

    /// Whether no type is upgradable.
    pub fn is_empty(&self) -> bool {
        self.upgradable.is_empty()
    }
}

impl UpgradeRules for GameConfig {
    fn allows_upgrade(&self, tile_type: TileType) -> bool {
        self.upgradable.contains(&tile_type)
    }
}

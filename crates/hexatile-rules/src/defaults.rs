//! Built-in base game configuration.

use hexatile_core::constants::MAX_LEVEL;
use hexatile_core::{GameConfig, TileType};

/// RON source of the base game configuration.
pub const DEFAULT_CONFIG_RON: &str = include_str!("../../../data/config/tiles.ron");

/// Types that upgrade in the base game.
pub const DEFAULT_UPGRADABLE: [TileType; 4] = [
    TileType::Home,
    TileType::Grass,
    TileType::Water,
    TileType::Tree,
];

/// The base game configuration, built without parsing.
pub fn default_config() -> GameConfig {
    GameConfig {
        upgradable: DEFAULT_UPGRADABLE.to_vec(),
        max_level: MAX_LEVEL,
    }
}

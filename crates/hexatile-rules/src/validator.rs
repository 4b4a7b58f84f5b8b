use hexatile_core::constants::MAX_LEVEL;
use hexatile_core::{GameConfig, TileType};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty tiles cannot be listed as upgradable")]
    EmptyUpgradable,
    #[error("Tile type {0} listed as upgradable more than once")]
    DuplicateUpgradable(TileType),
    #[error("max_level {0} does not match the 2-bit level field (expected 3)")]
    InvalidMaxLevel(u8),
}

/// Validate a tile config. Collects every problem rather than stopping at the first.
pub fn validate_config(config: &GameConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for &tile_type in config.upgradable_types() {
        if tile_type == TileType::Empty {
            errors.push(ValidationError::EmptyUpgradable);
        }
        if !seen.insert(tile_type) {
            errors.push(ValidationError::DuplicateUpgradable(tile_type));
        }
    }

    if config.max_level != MAX_LEVEL {
        errors.push(ValidationError::InvalidMaxLevel(config.max_level));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

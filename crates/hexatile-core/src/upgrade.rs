use std::collections::{BTreeSet, HashSet};

use crate::types::TileType;

/// Source of truth for which tile types may be upgraded.
///
/// Queried on every eligibility check; implementors are free to change
/// their answer between calls.
pub trait UpgradeRules {
    /// Whether tiles of `tile_type` are currently eligible for upgrade.
    fn allows_upgrade(&self, tile_type: TileType) -> bool;
}

impl<R: UpgradeRules + ?Sized> UpgradeRules for &R {
    fn allows_upgrade(&self, tile_type: TileType) -> bool {
        (**self).allows_upgrade(tile_type)
    }
}

impl UpgradeRules for [TileType] {
    fn allows_upgrade(&self, tile_type: TileType) -> bool {
        self.contains(&tile_type)
    }
}

impl<const N: usize> UpgradeRules for [TileType; N] {
    fn allows_upgrade(&self, tile_type: TileType) -> bool {
        self.contains(&tile_type)
    }
}

impl UpgradeRules for Vec<TileType> {
    fn allows_upgrade(&self, tile_type: TileType) -> bool {
        self.contains(&tile_type)
    }
}

impl UpgradeRules for HashSet<TileType> {
    fn allows_upgrade(&self, tile_type: TileType) -> bool {
        self.contains(&tile_type)
    }
}

impl UpgradeRules for BTreeSet<TileType> {
    fn allows_upgrade(&self, tile_type: TileType) -> bool {
        self.contains(&tile_type)
    }
}

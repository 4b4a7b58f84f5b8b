use std::hash::{Hash, Hasher};

use hexatile_core::GameConfig;

/// Compute a deterministic hash of a tile config for save compatibility checks.
///
/// Upgradable types are sorted and deduplicated first, so declaration order
/// does not change the hash.
pub fn compute_config_hash(config: &GameConfig) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();

    let mut types: Vec<u8> = config.upgradable_types().iter().map(|t| t.bits()).collect();
    types.sort_unstable();
    types.dedup();

    types.hash(&mut hasher);
    config.max_level.hash(&mut hasher);

    hasher.finish()
}

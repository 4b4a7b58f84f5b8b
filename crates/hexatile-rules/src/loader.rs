use hexatile_core::GameConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse tile config RON: {0}")]
    ConfigParseError(String),
}

/// Parse a single config RON string into a GameConfig.
pub fn load_config_from_str(ron_str: &str) -> Result<GameConfig, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::ConfigParseError(e.to_string()))
}

/// Load and merge several config sources into one GameConfig.
///
/// The upgradable set is the union of all sources, keeping the order in which
/// types first appear. `max_level` comes from the last source.
pub fn load_all_configs(sources: &[&str]) -> Result<GameConfig, LoadError> {
    let mut merged = GameConfig::default();
    for source in sources {
        let config = load_config_from_str(source)?;
        for tile_type in config.upgradable {
            if !merged.upgradable.contains(&tile_type) {
                merged.upgradable.push(tile_type);
            }
        }
        merged.max_level = config.max_level;
    }
    log::info!(
        "Loaded tile config from {} source(s): {} upgradable type(s)",
        sources.len(),
        merged.len()
    );
    Ok(merged)
}

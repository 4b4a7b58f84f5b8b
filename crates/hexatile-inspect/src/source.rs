use std::path::Path;

use hexatile_core::{GameConfig, PackedTile};
use hexatile_persist::{BoardData, PersistError};
use hexatile_rules::{LoadError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid tile byte '{0}' (expected 0-255, 0x.. or 0b..)")]
    InvalidByte(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("invalid tile config: {}", format_validation(.0))]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a tile byte written as decimal, `0x` hex or `0b` binary.
pub fn parse_tile_byte(text: &str) -> Result<PackedTile, SourceError> {
    let trimmed = text.trim();
    let parsed = if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = trimmed.strip_prefix("0b").or_else(|| trimmed.strip_prefix("0B")) {
        u8::from_str_radix(&bin.replace('_', ""), 2)
    } else {
        trimmed.parse::<u8>()
    };
    parsed
        .map(PackedTile::from_byte)
        .map_err(|_| SourceError::InvalidByte(text.to_string()))
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SourceError + '_ {
    move |source| SourceError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Load and validate a tile config, or fall back to the built-in one.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, SourceError> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(io_error(path))?;
            let config = hexatile_rules::load_config_from_str(&text)?;
            log::info!("Loaded tile config from {}", path.display());
            config
        }
        None => hexatile_rules::default_config(),
    };
    hexatile_rules::validate_config(&config).map_err(SourceError::Invalid)?;
    Ok(config)
}

/// Load a saved board, checking it against `config`.
pub fn load_board(path: &Path, config: &GameConfig) -> Result<BoardData, SourceError> {
    let bytes = std::fs::read(path).map_err(io_error(path))?;
    let board = hexatile_persist::load(&bytes, hexatile_rules::compute_config_hash(config))?;
    log::info!(
        "Loaded board from {} ({} tiles, turn {})",
        path.display(),
        board.tiles.len(),
        board.header.turn
    );
    Ok(board)
}

use hexatile_core::PackedTile;

use crate::compress;
use crate::error::PersistError;
use crate::format::*;

/// Parsed board ready for play.
pub struct BoardData {
    pub header: BoardHeader,
    pub tiles: Vec<PackedTile>,
    /// Compatibility warnings (e.g., config hash mismatch).
    pub warnings: Vec<String>,
}

/// Check that a header describes a board this build can read, before any
/// payload byte is touched.
///
/// Fatal: wrong magic or version, more than `MAX_TILES` tiles, or a
/// `payload_size` no encoding of `tile_count` tiles could produce.
/// A different config hash only yields a warning.
fn check_header(header: &BoardHeader, current_config_hash: u64) -> Result<Vec<String>, PersistError> {
    if header.magic != MAGIC {
        return Err(PersistError::InvalidMagic);
    }
    if header.version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(header.version));
    }

    let tile_count = header.tile_count as usize;
    if tile_count > MAX_TILES {
        return Err(PersistError::TooManyTiles {
            count: tile_count,
            max: MAX_TILES,
        });
    }

    let size = header.payload_size as usize;
    let fits_fill = size == FILL_SIZE && tile_count > 0;
    let fits_lz4 = size > FILL_SIZE && size <= compress::max_payload_size(tile_count);
    if !fits_fill && !fits_lz4 {
        return Err(PersistError::InvalidPayloadSize { size, tile_count });
    }

    let mut warnings = Vec::new();
    if header.config_hash != current_config_hash {
        let warning = format!(
            "Board was saved under tile config {:016x} but {:016x} is active; \
             upgrade eligibility may differ.",
            header.config_hash, current_config_hash
        );
        log::warn!("{warning}");
        warnings.push(warning);
    }
    Ok(warnings)
}

/// Load and parse a saved board from raw bytes.
pub fn load(bytes: &[u8], current_config_hash: u64) -> Result<BoardData, PersistError> {
    if bytes.len() < HEADER_SIZE {
        return Err(PersistError::FileTooSmall(bytes.len(), HEADER_SIZE));
    }

    let header: BoardHeader = bytemuck::pod_read_unaligned(&bytes[..HEADER_SIZE]);
    let warnings = check_header(&header, current_config_hash)?;

    let payload_end = HEADER_SIZE + header.payload_size as usize;
    if bytes.len() < payload_end {
        return Err(PersistError::TruncatedFile {
            expected: payload_end,
            actual: bytes.len(),
        });
    }

    let payload = &bytes[HEADER_SIZE..payload_end];
    let tile_count = header.tile_count as usize;

    let tiles = if compress::is_fill(payload) {
        compress::expand_fill(payload, tile_count)?
    } else {
        compress::decompress_tiles(payload, tile_count)?
    };

    Ok(BoardData {
        header,
        tiles,
        warnings,
    })
}

use hexatile_core::PackedTile;

use crate::error::PersistError;
use crate::format::{tiles_as_bytes, tiles_from_bytes, FILL_FLAG, FILL_SIZE, LZ4_PREFIX_SIZE};

/// Compress a tile array using LZ4.
pub fn compress_tiles(tiles: &[PackedTile]) -> Vec<u8> {
    lz4_flex::compress_prepend_size(tiles_as_bytes(tiles))
}

/// Largest payload a board of `tile_count` tiles can produce.
pub fn max_payload_size(tile_count: usize) -> usize {
    LZ4_PREFIX_SIZE + lz4_flex::block::get_maximum_output_size(tile_count)
}

/// Decompress an LZ4 payload, validating the tile count.
///
/// The size prefix is checked against `expected_count` before anything is
/// allocated.
pub fn decompress_tiles(
    compressed: &[u8],
    expected_count: usize,
) -> Result<Vec<PackedTile>, PersistError> {
    let prefix: [u8; LZ4_PREFIX_SIZE] = compressed
        .get(..LZ4_PREFIX_SIZE)
        .and_then(|p| p.try_into().ok())
        .ok_or_else(|| PersistError::DecompressError("missing size prefix".to_string()))?;
    let declared = u32::from_le_bytes(prefix) as usize;
    if declared != expected_count {
        return Err(PersistError::TileCountMismatch {
            expected: expected_count,
            actual: declared,
        });
    }

    let decompressed = lz4_flex::decompress_size_prepended(compressed)
        .map_err(|e| PersistError::DecompressError(e.to_string()))?;

    if decompressed.len() != expected_count {
        return Err(PersistError::TileCountMismatch {
            expected: expected_count,
            actual: decompressed.len(),
        });
    }

    Ok(tiles_from_bytes(&decompressed).to_vec())
}

/// Return the shared tile if every tile in a non-empty array is identical.
pub fn detect_fill(tiles: &[PackedTile]) -> Option<PackedTile> {
    let (first, rest) = tiles.split_first()?;
    rest.iter().all(|t| t == first).then_some(*first)
}

/// Encode a fill payload: (tile byte, FILL_FLAG).
pub fn encode_fill(tile: PackedTile) -> [u8; FILL_SIZE] {
    [tile.to_byte(), FILL_FLAG]
}

/// Check whether a payload is a fill marker.
pub fn is_fill(data: &[u8]) -> bool {
    data.len() == FILL_SIZE && data[1] == FILL_FLAG
}

/// Expand a fill payload back into `count` identical tiles.
pub fn expand_fill(data: &[u8], count: usize) -> Result<Vec<PackedTile>, PersistError> {
    if !is_fill(data) {
        return Err(PersistError::InvalidFill);
    }
    Ok(vec![PackedTile::from_byte(data[0]); count])
}

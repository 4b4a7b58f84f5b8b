use hexatile_core::PackedTile;

use crate::compress;
use crate::error::PersistError;
use crate::format::*;

/// Serialize a tile array into the board save format.
///
/// Layout: header (32B) + payload (fill marker or LZ4 block).
/// Boards larger than `MAX_TILES` are rejected.
pub fn save(tiles: &[PackedTile], config_hash: u64, turn: u64) -> Result<Vec<u8>, PersistError> {
    if tiles.len() > MAX_TILES {
        return Err(PersistError::TooManyTiles {
            count: tiles.len(),
            max: MAX_TILES,
        });
    }

    let payload = match compress::detect_fill(tiles) {
        Some(tile) => {
            log::debug!("Board of {} tiles saved as fill of {tile}", tiles.len());
            compress::encode_fill(tile).to_vec()
        }
        None => compress::compress_tiles(tiles),
    };

    let header = BoardHeader {
        magic: MAGIC,
        version: FORMAT_VERSION,
        _pad0: 0,
        config_hash,
        turn,
        tile_count: u32::try_from(tiles.len()).map_err(|_| PersistError::TooManyTiles {
            count: tiles.len(),
            max: MAX_TILES,
        })?,
        payload_size: u32::try_from(payload.len()).map_err(|_| {
            PersistError::InvalidPayloadSize {
                size: payload.len(),
                tile_count: tiles.len(),
            }
        })?,
    };

    let mut output = Vec::with_capacity(HEADER_SIZE + payload.len());
    output.extend_from_slice(bytemuck::bytes_of(&header));
    output.extend_from_slice(&payload);
    Ok(output)
}

use hexatile_core::PackedTile;

/// Magic bytes identifying a saved board.
pub const MAGIC: [u8; 4] = *b"HEXT";

/// Current save format version.
pub const FORMAT_VERSION: u16 = 1;

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 32;

/// Largest board a save may hold. Keeps header-driven allocations bounded.
pub const MAX_TILES: usize = 1 << 16;

/// Length of the little-endian size prefix on LZ4 payloads.
pub const LZ4_PREFIX_SIZE: usize = 4;

/// Second byte of a fill payload. LZ4 payloads are never 2 bytes long.
pub const FILL_FLAG: u8 = 0xFF;

/// Size of a fill payload: (tile byte, FILL_FLAG).
pub const FILL_SIZE: usize = 2;

/// Board save header. Fixed 32 bytes, repr(C) for byte-level serialization.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoardHeader {
    pub magic: [u8; 4],
    pub version: u16,
    pub _pad0: u16,
    pub config_hash: u64,
    pub turn: u64,
    pub tile_count: u32,
    pub payload_size: u32,
}

/// View a tile array as its raw bytes.
pub fn tiles_as_bytes(tiles: &[PackedTile]) -> &[u8] {
    bytemuck::cast_slice(tiles)
}

/// View raw bytes as tiles. Every byte is a valid tile, so this never fails.
pub fn tiles_from_bytes(bytes: &[u8]) -> &[PackedTile] {
    bytemuck::cast_slice(bytes)
}

/// Errors that can occur while saving or loading a board.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("invalid magic bytes (expected HEXT)")]
    InvalidMagic,

    #[error("unsupported save format version {0}")]
    UnsupportedVersion(u16),

    #[error("file too small ({0} bytes, minimum {1})")]
    FileTooSmall(usize, usize),

    #[error("truncated file: expected {expected} bytes, got {actual}")]
    TruncatedFile { expected: usize, actual: usize },

    #[error("LZ4 decompression failed: {0}")]
    DecompressError(String),

    #[error("tile count mismatch: header says {expected}, payload holds {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error("invalid fill payload (expected 2 bytes)")]
    InvalidFill,

    #[error("board of {count} tiles exceeds the {max} tile limit")]
    TooManyTiles { count: usize, max: usize },

    #[error("payload of {size} bytes cannot hold {tile_count} tiles")]
    InvalidPayloadSize { size: usize, tile_count: usize },
}

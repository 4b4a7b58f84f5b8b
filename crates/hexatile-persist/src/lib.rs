pub mod compress;
pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::PersistError;
pub use format::{tiles_as_bytes, tiles_from_bytes, BoardHeader};
pub use load::{load, BoardData};
pub use save::save;

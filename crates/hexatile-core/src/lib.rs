pub mod config;
pub mod constants;
pub mod tile;
pub mod types;
pub mod upgrade;

pub use config::GameConfig;
pub use tile::PackedTile;
pub use types::{TilePattern, TileType};
pub use upgrade::UpgradeRules;

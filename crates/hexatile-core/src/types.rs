use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{PATTERN_MASK, TYPE_MASK};

/// Category of a tile. Stored in the 3-bit type field, so the eight
/// variants cover every possible field value. 0 = Empty (no tile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Empty = 0,
    Home = 1,
    Grass = 2,
    Water = 3,
    Mountain = 4,
    Tree = 5,
    Desert = 6,
    Cave = 7,
}

impl TileType {
    /// All tile types in field-value order.
    pub const ALL: [TileType; 8] = [
        TileType::Empty,
        TileType::Home,
        TileType::Grass,
        TileType::Water,
        TileType::Mountain,
        TileType::Tree,
        TileType::Desert,
        TileType::Cave,
    ];

    /// Decode a type from the low 3 bits of `bits`. Higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & TYPE_MASK {
            0 => TileType::Empty,
            1 => TileType::Home,
            2 => TileType::Grass,
            3 => TileType::Water,
            4 => TileType::Mountain,
            5 => TileType::Tree,
            6 => TileType::Desert,
            _ => TileType::Cave,
        }
    }

    /// Raw field value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            TileType::Empty => "Empty",
            TileType::Home => "Home",
            TileType::Grass => "Grass",
            TileType::Water => "Water",
            TileType::Mountain => "Mountain",
            TileType::Tree => "Tree",
            TileType::Desert => "Desert",
            TileType::Cave => "Cave",
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural/visual sub-variant of a tile. Any 3-bit value is valid;
/// only the first four carry a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TilePattern(u8);

impl TilePattern {
    pub const NORMAL: TilePattern = TilePattern(0);
    pub const DELTA: TilePattern = TilePattern(1);
    pub const LINE: TilePattern = TilePattern(2);
    pub const YPSILON: TilePattern = TilePattern(3);

    /// Build a pattern from the low 3 bits of `bits`. Higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        TilePattern(bits & PATTERN_MASK)
    }

    /// Raw field value (0–7).
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Name of the pattern, if it has one.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Normal"),
            1 => Some("Delta"),
            2 => Some("Line"),
            3 => Some("Ypsilon"),
            _ => None,
        }
    }
}

impl fmt::Display for TilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

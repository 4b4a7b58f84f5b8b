use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::{TilePattern, TileType};
use crate::upgrade::UpgradeRules;

/// Pack raw field values into a tile byte.
///
/// Each value is truncated to its field width; out-of-range input is masked,
/// never rejected.
pub const fn encode(type_bits: u8, level: u8, pattern_bits: u8) -> u8 {
    ((level & LEVEL_MASK) << LEVEL_SHIFT)
        | ((type_bits & TYPE_MASK) << TYPE_SHIFT)
        | ((pattern_bits & PATTERN_MASK) << PATTERN_SHIFT)
}

/// Split a tile byte into (type, level, pattern). Total over all 256 values.
pub const fn decode(byte: u8) -> (TileType, u8, TilePattern) {
    (
        TileType::from_bits(byte >> TYPE_SHIFT),
        (byte >> LEVEL_SHIFT) & LEVEL_MASK,
        TilePattern::from_bits(byte >> PATTERN_SHIFT),
    )
}

/// Complete state of one board cell in a single byte.
///
/// Bit layout:
///   [7:6] level   (0–3)
///   [5:3] type    (0 = Empty)
///   [2:0] pattern
///
/// `repr(transparent)` over `u8`, so tile slices cast to byte slices for
/// storage and transport without copying.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct PackedTile(u8);

impl PackedTile {
    /// An empty tile (all bits zero).
    pub const EMPTY: PackedTile = PackedTile(0);

    /// Build a tile from its fields. `level` is masked to 2 bits.
    pub const fn new(tile_type: TileType, level: u8, pattern: TilePattern) -> Self {
        PackedTile(encode(tile_type.bits(), level, pattern.bits()))
    }

    /// Wrap a raw byte, e.g. one read back from a save or network payload.
    pub const fn from_byte(byte: u8) -> Self {
        PackedTile(byte)
    }

    /// The raw packed byte.
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Replace the whole packed byte.
    pub fn set_byte(&mut self, byte: u8) {
        self.0 = byte;
    }

    /// (type, level, pattern) in one call.
    pub const fn parts(self) -> (TileType, u8, TilePattern) {
        decode(self.0)
    }

    pub const fn level(self) -> u8 {
        (self.0 >> LEVEL_SHIFT) & LEVEL_MASK
    }

    /// Overwrite the level bits only. `level` is masked to 2 bits.
    pub fn set_level(&mut self, level: u8) {
        self.0 = (self.0 & !LEVEL_BITS) | ((level & LEVEL_MASK) << LEVEL_SHIFT);
    }

    pub const fn tile_type(self) -> TileType {
        TileType::from_bits(self.0 >> TYPE_SHIFT)
    }

    /// Overwrite the type bits only.
    pub fn set_tile_type(&mut self, tile_type: TileType) {
        self.0 = (self.0 & !TYPE_BITS) | ((tile_type.bits() & TYPE_MASK) << TYPE_SHIFT);
    }

    pub const fn pattern(self) -> TilePattern {
        TilePattern::from_bits(self.0 >> PATTERN_SHIFT)
    }

    /// Overwrite the pattern bits only.
    pub fn set_pattern(&mut self, pattern: TilePattern) {
        self.0 = (self.0 & !PATTERN_BITS) | ((pattern.bits() & PATTERN_MASK) << PATTERN_SHIFT);
    }

    /// Whether this cell holds no tile.
    pub const fn is_empty(self) -> bool {
        matches!(self.tile_type(), TileType::Empty)
    }

    /// Same tile type as `other`, ignoring level and pattern.
    /// Always false when there is no other tile.
    pub fn same(self, other: Option<&PackedTile>) -> bool {
        match other {
            Some(other) => self.tile_type() == other.tile_type(),
            None => false,
        }
    }

    /// Whether `upgrade` would raise the level.
    ///
    /// Rejects, in order: a tile already at `MAX_LEVEL`, an empty tile, and a
    /// type `rules` does not currently allow. `rules` is consulted on every
    /// call.
    pub fn can_upgrade<R: UpgradeRules + ?Sized>(self, rules: &R) -> bool {
        if self.level() == MAX_LEVEL {
            log::debug!("Cannot upgrade past level {MAX_LEVEL}");
            return false;
        }

        let tile_type = self.tile_type();
        if tile_type == TileType::Empty {
            log::debug!("{tile_type} cannot be upgraded");
            return false;
        }

        if !rules.allows_upgrade(tile_type) {
            log::debug!("{tile_type} cannot be upgraded");
            return false;
        }

        true
    }

    /// Raise the level by one if eligible. Returns whether the tile changed.
    /// Ineligible tiles are left untouched.
    pub fn upgrade<R: UpgradeRules + ?Sized>(&mut self, rules: &R) -> bool {
        if !self.can_upgrade(rules) {
            return false;
        }
        self.set_level(self.level() + 1);
        true
    }

    /// Human-readable form: `"<Type> - <Level> - <Pattern>"`.
    pub fn render(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PackedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.tile_type(), self.level(), self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const UPGRADABLE: [TileType; 3] = [TileType::Home, TileType::Grass, TileType::Water];

    #[test]
    fn test_tile_is_one_byte() {
        assert_eq!(std::mem::size_of::<PackedTile>(), TILE_BYTES);
    }

    #[test]
    fn test_tile_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PackedTile>();
    }

    #[test]
    fn test_byte_roundtrip_all_values() {
        for b in 0u8..=255 {
            let (t, l, p) = decode(b);
            assert_eq!(encode(t.bits(), l, p.bits()), b);
            assert_eq!(PackedTile::new(t, l, p).to_byte(), b);
            assert_eq!(PackedTile::from_byte(b).to_byte(), b);
        }
    }

    #[test]
    fn test_fields_roundtrip_in_range() {
        for t in TileType::ALL {
            for l in 0..=MAX_LEVEL {
                for p in 0..=PATTERN_MASK {
                    let pattern = TilePattern::from_bits(p);
                    let tile = PackedTile::new(t, l, pattern);
                    assert_eq!(tile.parts(), (t, l, pattern));
                }
            }
        }
    }

    #[test]
    fn test_known_encoding() {
        let tile = PackedTile::new(TileType::Water, 2, TilePattern::LINE);
        assert_eq!(tile.to_byte(), 0b10_011_010);
    }

    #[test]
    fn test_encode_masks_out_of_range() {
        assert_eq!(encode(9, 5, 10), encode(9 & 0b111, 5 & 0b11, 10 & 0b111));
        assert_eq!(encode(9, 5, 10), 0b01_001_010);
        let tile = PackedTile::new(TileType::Home, 7, TilePattern::NORMAL);
        assert_eq!(tile.level(), 3);
        assert_eq!(tile.tile_type(), TileType::Home);
    }

    #[test]
    fn test_set_level_preserves_other_fields() {
        for b in 0u8..=255 {
            for l in 0..=MAX_LEVEL {
                let mut tile = PackedTile::from_byte(b);
                let before = tile.parts();
                tile.set_level(l);
                assert_eq!(tile.level(), l);
                assert_eq!(tile.tile_type(), before.0);
                assert_eq!(tile.pattern(), before.2);
            }
        }
    }

    #[test]
    fn test_set_tile_type_preserves_other_fields() {
        for b in 0u8..=255 {
            for t in TileType::ALL {
                let mut tile = PackedTile::from_byte(b);
                let before = tile.parts();
                tile.set_tile_type(t);
                assert_eq!(tile.tile_type(), t);
                assert_eq!(tile.level(), before.1);
                assert_eq!(tile.pattern(), before.2);
            }
        }
    }

    #[test]
    fn test_set_pattern_preserves_other_fields() {
        for b in 0u8..=255 {
            for p in 0..=PATTERN_MASK {
                let pattern = TilePattern::from_bits(p);
                let mut tile = PackedTile::from_byte(b);
                let before = tile.parts();
                tile.set_pattern(pattern);
                assert_eq!(tile.pattern(), pattern);
                assert_eq!(tile.tile_type(), before.0);
                assert_eq!(tile.level(), before.1);
            }
        }
    }

    #[test]
    fn test_set_level_masks() {
        let mut tile = PackedTile::new(TileType::Cave, 0, TilePattern::DELTA);
        tile.set_level(6);
        assert_eq!(tile.level(), 2);
        assert_eq!(tile.tile_type(), TileType::Cave);
        assert_eq!(tile.pattern(), TilePattern::DELTA);
    }

    #[test]
    fn test_empty_regardless_of_level_and_pattern() {
        for l in 0..=MAX_LEVEL {
            for p in 0..=PATTERN_MASK {
                let tile = PackedTile::new(TileType::Empty, l, TilePattern::from_bits(p));
                assert!(tile.is_empty());
            }
        }
        assert!(PackedTile::EMPTY.is_empty());
        assert!(PackedTile::default().is_empty());
        assert!(!PackedTile::new(TileType::Desert, 0, TilePattern::NORMAL).is_empty());
    }

    #[test]
    fn test_same_compares_type_only() {
        let a = PackedTile::new(TileType::Tree, 0, TilePattern::NORMAL);
        let b = PackedTile::new(TileType::Tree, 3, TilePattern::YPSILON);
        let c = PackedTile::new(TileType::Grass, 0, TilePattern::NORMAL);
        assert!(a.same(Some(&b)));
        assert!(b.same(Some(&a)));
        assert!(!a.same(Some(&c)));
        assert!(!a.same(None));
        assert_ne!(a, b);
    }

    #[test]
    fn test_upgrade_ceiling() {
        let mut tile = PackedTile::new(TileType::Home, 3, TilePattern::NORMAL);
        assert!(!tile.can_upgrade(&UPGRADABLE));
        for _ in 0..5 {
            assert!(!tile.upgrade(&UPGRADABLE));
            assert_eq!(tile.level(), 3);
        }
        assert_eq!(tile.tile_type(), TileType::Home);
    }

    #[test]
    fn test_upgrade_walks_to_max() {
        let mut tile = PackedTile::new(TileType::Grass, 0, TilePattern::LINE);
        for expected in 1..=MAX_LEVEL {
            assert!(tile.upgrade(&UPGRADABLE));
            assert_eq!(tile.level(), expected);
            assert_eq!(tile.tile_type(), TileType::Grass);
            assert_eq!(tile.pattern(), TilePattern::LINE);
        }
        assert!(!tile.upgrade(&UPGRADABLE));
        assert_eq!(tile.level(), MAX_LEVEL);
    }

    #[test]
    fn test_empty_tile_cannot_upgrade() {
        let everything = TileType::ALL;
        let mut tile = PackedTile::new(TileType::Empty, 0, TilePattern::DELTA);
        assert!(!tile.can_upgrade(&everything));
        assert!(!tile.upgrade(&everything));
        assert_eq!(tile.to_byte(), PackedTile::new(TileType::Empty, 0, TilePattern::DELTA).to_byte());
    }

    #[test]
    fn test_upgrade_gated_by_type() {
        let mut mountain = PackedTile::new(TileType::Mountain, 0, TilePattern::NORMAL);
        assert!(!mountain.can_upgrade(&UPGRADABLE));
        assert!(!mountain.upgrade(&UPGRADABLE));
        assert_eq!(mountain.level(), 0);

        let mut water = PackedTile::new(TileType::Water, 0, TilePattern::NORMAL);
        assert!(water.can_upgrade(&UPGRADABLE));
        assert!(water.upgrade(&UPGRADABLE));
        assert_eq!(water.level(), 1);
    }

    /// Rules whose answer can change between calls.
    struct SwitchableRules {
        allowed: RefCell<Vec<TileType>>,
        queries: RefCell<u32>,
    }

    impl UpgradeRules for SwitchableRules {
        fn allows_upgrade(&self, tile_type: TileType) -> bool {
            *self.queries.borrow_mut() += 1;
            self.allowed.borrow().contains(&tile_type)
        }
    }

    #[test]
    fn test_rules_queried_on_every_check() {
        let rules = SwitchableRules {
            allowed: RefCell::new(vec![TileType::Tree]),
            queries: RefCell::new(0),
        };
        let mut tile = PackedTile::new(TileType::Tree, 0, TilePattern::NORMAL);
        assert!(tile.can_upgrade(&rules));

        rules.allowed.borrow_mut().clear();
        assert!(!tile.can_upgrade(&rules));
        assert!(!tile.upgrade(&rules));
        assert_eq!(tile.level(), 0);
        assert_eq!(*rules.queries.borrow(), 3);
    }

    #[test]
    fn test_rules_not_queried_for_max_or_empty() {
        let rules = SwitchableRules {
            allowed: RefCell::new(TileType::ALL.to_vec()),
            queries: RefCell::new(0),
        };
        assert!(!PackedTile::new(TileType::Home, 3, TilePattern::NORMAL).can_upgrade(&rules));
        assert!(!PackedTile::EMPTY.can_upgrade(&rules));
        assert_eq!(*rules.queries.borrow(), 0);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = PackedTile::new(TileType::Home, 1, TilePattern::DELTA);
        let mut copy = original;
        copy.set_level(3);
        assert_eq!(original.level(), 1);
        assert_eq!(copy.level(), 3);

        #[allow(clippy::clone_on_copy)]
        let mut cloned = original.clone();
        cloned.upgrade(&UPGRADABLE);
        assert_eq!(original.level(), 1);
        assert_eq!(cloned.level(), 2);
    }

    #[test]
    fn test_render() {
        let tile = PackedTile::new(TileType::Water, 2, TilePattern::LINE);
        assert_eq!(tile.render(), "Water - 2 - Line");
        assert_eq!(PackedTile::from_byte(0b11_111_111).render(), "Cave - 3 - 7");
        assert_eq!(PackedTile::EMPTY.to_string(), "Empty - 0 - Normal");
    }

    #[test]
    fn test_slice_cast_is_zero_copy() {
        let tiles = [
            PackedTile::new(TileType::Home, 1, TilePattern::NORMAL),
            PackedTile::EMPTY,
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&tiles);
        assert_eq!(bytes, &[tiles[0].to_byte(), 0]);
    }

    #[test]
    fn test_set_byte_restores_saved_state() {
        let saved = PackedTile::new(TileType::Tree, 2, TilePattern::DELTA).to_byte();
        let mut tile = PackedTile::EMPTY;
        tile.set_byte(saved);
        assert_eq!(tile.parts(), (TileType::Tree, 2, TilePattern::DELTA));
        assert_eq!(tile.to_byte(), saved);

        tile.set_byte(0);
        assert!(tile.is_empty());
        assert_eq!(tile, PackedTile::EMPTY);
    }
}

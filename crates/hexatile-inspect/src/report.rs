use hexatile_core::{PackedTile, UpgradeRules};
use serde::Serialize;

/// Decoded view of one tile for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileReport {
    /// Position in the input (argument order or board index).
    pub index: usize,
    pub byte: u8,
    pub tile_type: String,
    pub level: u8,
    pub pattern: String,
    pub empty: bool,
    pub can_upgrade: bool,
}

impl TileReport {
    pub fn new<R: UpgradeRules + ?Sized>(index: usize, tile: PackedTile, rules: &R) -> Self {
        Self {
            index,
            byte: tile.to_byte(),
            tile_type: tile.tile_type().to_string(),
            level: tile.level(),
            pattern: tile.pattern().to_string(),
            empty: tile.is_empty(),
            can_upgrade: tile.can_upgrade(rules),
        }
    }
}

/// Build reports for a sequence of tiles.
pub fn build<R: UpgradeRules + ?Sized>(tiles: &[PackedTile], rules: &R) -> Vec<TileReport> {
    tiles
        .iter()
        .enumerate()
        .map(|(i, &tile)| TileReport::new(i, tile, rules))
        .collect()
}

/// Format reports as a markdown table. Empty tiles are skipped when `skip_empty` is set.
pub fn format_markdown(reports: &[TileReport], skip_empty: bool) -> String {
    let mut out = String::new();
    out.push_str("| # | Byte | Type | Level | Pattern | Upgradable |\n");
    out.push_str("|---|------|------|-------|---------|------------|\n");

    for r in reports.iter().filter(|r| !(skip_empty && r.empty)) {
        out.push_str(&format!(
            "| {} | 0x{:02X} | {} | {} | {} | {} |\n",
            r.index,
            r.byte,
            r.tile_type,
            r.level,
            r.pattern,
            if r.can_upgrade { "yes" } else { "no" },
        ));
    }

    out
}

/// Format reports as pretty JSON.
pub fn format_json(reports: &[TileReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

use std::path::PathBuf;
use std::process;

use hexatile_inspect::report;
use hexatile_inspect::source;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut bytes: Vec<String> = Vec::new();
    let mut board_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut json = false;
    let mut skip_empty = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--byte" | "--board" | "--config" if i + 1 >= args.len() => {
                eprintln!("Missing value for {}", args[i]);
                process::exit(1);
            }
            "--byte" => {
                i += 1;
                bytes.push(args[i].clone());
            }
            "--board" => {
                i += 1;
                board_path = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--json" => json = true,
            "--skip-empty" => skip_empty = true,
            "--help" | "-h" => {
                eprintln!("Usage: tile-inspect [OPTIONS]");
                eprintln!("  --byte <n>        Decode a tile byte (decimal, 0x.., 0b..); repeatable");
                eprintln!("  --board <path>    Decode every tile of a saved board");
                eprintln!("  --config <path>   Tile config RON (default: built-in)");
                eprintln!("  --json            Print a JSON report instead of a table");
                eprintln!("  --skip-empty      Leave empty tiles out of the table");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match source::load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };

    let mut tiles = Vec::with_capacity(bytes.len());
    for text in &bytes {
        match source::parse_tile_byte(text) {
            Ok(tile) => tiles.push(tile),
            Err(e) => {
                log::error!("{e}");
                process::exit(1);
            }
        }
    }

    if let Some(ref path) = board_path {
        match source::load_board(path, &config) {
            Ok(board) => tiles.extend(board.tiles),
            Err(e) => {
                log::error!("{e}");
                process::exit(1);
            }
        }
    }

    if tiles.is_empty() {
        log::warn!("Nothing to inspect; pass --byte or --board");
        return;
    }

    let reports = report::build(&tiles, &config);
    if json {
        match report::format_json(&reports) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                log::error!("Failed to serialize report: {e}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", report::format_markdown(&reports, skip_empty));
    }
}

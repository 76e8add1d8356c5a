//! DragDeck demo entry point.
//!
//! Runs each widget scenario against the core. Set `RUST_LOG=info` (or
//! `debug` for per-gesture detail) to follow along; pass a JSON config path
//! as the first argument to override defaults.

mod scenarios;

use dragdeck_core::DeckConfig;

fn main() {
    env_logger::init();
    log::info!("Starting DragDeck demo");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = match std::fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) => {
                    log::error!("Failed to read config {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            match DeckConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Invalid config {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => DeckConfig::default(),
    };

    if let Err(e) = scenarios::run_all(&config) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

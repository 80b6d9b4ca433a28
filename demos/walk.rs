//! Headless click-to-move demo.
//!
//! Run: RUST_LOG=debug cargo run --bin walk -- --speed 4

use clap::Parser;
use tilepath_demos::{Config, load_map, run};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let map = match load_map(&config) {
        Ok(map) => map,
        Err(e) => {
            log::error!("Error: {e}");
            std::process::exit(1);
        }
    };

    let summary = run(&config, &map);
    if !summary.arrived {
        std::process::exit(2);
    }
}

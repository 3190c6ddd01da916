//! Generate a maze and print its depth-first, breadth-first and A* solutions.
//!
//! Run: cargo run --bin maze [config.json]
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::io;

use statespace_demos::{DemoConfig, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match DemoConfig::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error: {path}: {e}");
                std::process::exit(2);
            }
        },
        None => DemoConfig::default(),
    };

    let stdout = io::stdout();
    if let Err(e) = run(&config, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

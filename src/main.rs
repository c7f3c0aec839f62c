// In src/main.rs

// Declare modules
pub mod calc;
pub mod config;
pub mod keys;

// Use statements for items needed in main.rs
use crate::{
    calc::{Calculator, CalculatorInterface},
    config::Config,
};

// Logging
use anyhow::Context; // For context on Results
use log::{debug, info};

use std::io::BufRead;
use std::path::Path;

/// Main entry point for the `core-calc` driver.
///
/// The real logic lives in [`calc`]; this shim only maps stdin characters to
/// symbols and echoes the display text after each input line.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting core-calc...");

    // --- Configuration ---
    // An optional JSON config path may be given as the first argument.
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path))?,
        None => Config::default(),
    };
    info!(
        "Configuration loaded (display width {}, range {} ..= {}).",
        config.display.width, config.limits.min_value, config.limits.max_value
    );

    let mut calculator = Calculator::new(&config);
    run(&mut calculator)
}

/// Feeds stdin through any calculator implementation, printing the display
/// text after each line of input.
fn run<C: CalculatorInterface>(calculator: &mut C) -> anyhow::Result<()> {
    println!("{}", calculator.display_text());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading symbols from stdin")?;
        for c in line.chars() {
            match keys::symbol_for_char(c) {
                Some(symbol) => {
                    calculator.process_symbol(symbol);
                }
                None => debug!("no symbol bound to {:?}", c),
            }
        }
        println!("{}", calculator.display_text());
    }
    Ok(())
}

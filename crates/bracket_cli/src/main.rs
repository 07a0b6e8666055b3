//! Double-elimination bracket CLI
//!
//! Takes one argument, a JSON array of players in seed order, and prints the
//! generated bracket as JSON.
//!
//! ```bash
//! double_elimination '["Magnus", "Hikaru", "Fabiano", "Ian", "Ding"]'
//! ```
//!
//! Set `DOUBLE_ELIM_CONFIG` to a TOML file to change the starting round or
//! output format; logs go to stderr, filtered by `RUST_LOG`.

mod config;

use bracket_core::{generate_with, parse_roster, BracketOptions};
use serde_json::Value;
use std::env;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{BracketConfig, OutputFormat};

fn fail(reason: &str) -> ! {
    println!("Unable to generate bracket -- {reason}");
    process::exit(1);
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Render a player identifier for the text report; strings lose their quotes.
fn display_player(player: &Value) -> String {
    match player {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

fn run(input: &str, config: &BracketConfig) -> anyhow::Result<String> {
    let players = parse_roster(input)?;
    info!(players = players.len(), "roster parsed");

    let options = BracketOptions {
        starting_round: config.starting_round,
    };
    let bracket = generate_with(&players, &options)?;
    info!(
        matches = bracket.matches.len(),
        rounds = bracket.rounds.len(),
        "bracket generated"
    );

    match config.format {
        OutputFormat::Json => Ok(bracket.to_json(config.pretty)?),
        OutputFormat::Report => Ok(bracket.generate_report(display_player)),
    }
}

fn main() {
    let config = match BracketConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail(&format!("{e:#}")),
    };
    init_tracing(&config.log_filter);

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 1 {
        error!(count = args.len(), "wrong argument count");
        fail("expected exactly one argument (a JSON array of players)");
    }

    match run(&args[0], &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!(error = %e, "generation failed");
            fail(&format!("{e:#}"));
        }
    }
}

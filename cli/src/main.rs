//! Scuffle - pick a creature and battle a computer opponent in the terminal.

mod output;
mod prompt;

use anyhow::{bail, Context, Result};
use clap::Parser;
use scuffle_battle::{run_battle, BattleConfig, Catalog, DEFAULT_OPPONENT};
use tracing_subscriber::EnvFilter;

use output::{format_roster, ConsoleReporter};
use prompt::InquirePrompt;

/// Turn-based creature battles in the terminal
#[derive(Parser, Debug)]
#[command(name = "scuffle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Creature the computer plays
    #[arg(short, long, default_value = DEFAULT_OPPONENT)]
    opponent: String,

    /// Seed for the opponent's move choices (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the creature roster and exit
    #[arg(long)]
    list: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn battle_config(&self) -> BattleConfig {
        BattleConfig {
            opponent: self.opponent.clone(),
            seed: self.seed,
        }
    }
}

/// Build the log filter from `RUST_LOG` (falling back to `warn`)
///
/// `--verbose` raises the global level to debug; otherwise `RUST_LOG` is
/// used exactly as given.
fn env_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .init();
}

/// Fail early, listing the roster, if the opponent is not in the catalog
fn validate_opponent(catalog: &Catalog, opponent: &str) -> Result<()> {
    if !catalog.contains(opponent) {
        let names: Vec<&str> = catalog.list_creatures().iter().map(|c| c.name()).collect();
        bail!(
            "Unknown opponent {:?}, expected one of: {}",
            opponent,
            names.join(", ")
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let catalog = Catalog::standard();

    if args.list {
        print!("{}", format_roster(&catalog));
        return Ok(());
    }

    validate_opponent(&catalog, &args.opponent)?;

    let config = args.battle_config();
    tracing::debug!(?config, "starting battle");

    let result = run_battle(
        &catalog,
        &config,
        InquirePrompt::new(),
        config.opponent_policy(),
        ConsoleReporter::new(),
    )
    .context("Battle ended without a result")?;

    tracing::debug!(
        outcome = ?result.outcome,
        turns = result.turns,
        player_health = result.player.health(),
        opponent_health = result.opponent.health(),
        "battle complete"
    );

    Ok(())
}

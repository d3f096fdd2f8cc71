//! farecard-sim - scripted fare card demonstration
//!
//! Drives a card through top-up, touch-in, and touch-out against the
//! configured station roster, then prints the journey history as JSON.
//!
//! Module structure:
//! - `domain/` - Core card types (Station, Journey, Amount, FarePolicy)
//! - `services/` - Business logic (Card, JourneyTracker)
//! - `infra/` - Infrastructure (Config)

use clap::Parser;
use farecard::domain::Amount;
use farecard::infra::Config;
use farecard::services::Card;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// farecard-sim - stored-value card ride simulator
#[derive(Parser, Debug)]
#[command(name = "farecard-sim", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "config/card.toml")]
    config: String,

    /// Amount loaded onto the card before riding
    #[arg(short, long, default_value_t = 20)]
    top_up: i64,

    /// Number of rides across the station roster
    #[arg(short, long, default_value_t = 2)]
    rides: usize,

    /// Finish with a touch-out that was never touched in
    #[arg(long)]
    penalty: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with configurable level via RUST_LOG env var
    // Default: INFO, use RUST_LOG=debug for full event visibility
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!("farecard-sim starting");

    let args = Args::parse();

    let config = Config::load_from_path(&args.config);
    let policy = config.fare_policy();

    info!(
        config_file = %config.config_file(),
        maximum_balance = %policy.maximum_balance,
        minimum_fare = %policy.minimum_fare,
        penalty_fare = %policy.penalty_fare,
        stations = ?config.stations().iter().map(|s| s.name()).collect::<Vec<_>>(),
        "config_loaded"
    );

    let mut card = Card::with_policy(policy);
    card.top_up(Amount(args.top_up))?;

    // Ride back and forth over consecutive roster pairs.
    let stations = config.stations();
    for ride in 0..args.rides {
        let entry = &stations[ride % stations.len()];
        let exit = &stations[(ride + 1) % stations.len()];
        card.touch_in(entry)?;
        card.touch_out(exit);
    }

    if args.penalty {
        // Rider walks out a gate they never entered through.
        let exit = &stations[args.rides % stations.len()];
        card.touch_out(exit);
    }

    println!("{}", serde_json::to_string_pretty(card.journey().history())?);
    println!("final balance: {}", card.balance());

    Ok(())
}

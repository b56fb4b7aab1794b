//! proflevel - Command Line Interface
//!
//! This is the main entry point for the profession levelling planner.
//! Run with `--help` to see all available options.

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use proflevel::{
    data::{load_all_data, load_price_snapshot},
    display::display_results,
    models::{Faction, Profession, SkillupDifficulty, Source},
    optimizer::plan_levelling,
    pricing::{PriceType, SnapshotOracle},
    request::LevelRequest,
};

/// Command-line arguments for proflevel.
#[derive(Parser, Debug)]
#[command(name = "proflevel")]
#[command(author, version, about = "Plan the cheapest way to level a crafting profession", long_about = None)]
struct Args {
    /// Profession to level (name or numeric code)
    #[arg(short, long)]
    profession: Profession,

    /// Starting skill level
    #[arg(short, long)]
    start: u32,

    /// Target skill level
    #[arg(short, long)]
    finish: u32,

    // ========== Market ==========
    /// Server name
    #[arg(long)]
    server: String,

    /// Server region (EU or US)
    #[arg(long, default_value = "EU")]
    region: String,

    /// Faction whose auction house is priced (alliance or horde)
    #[arg(long)]
    faction: Faction,

    /// Auction figure used as the reagent price
    #[arg(long, default_value = "min-buyout")]
    price_type: PriceType,

    // ========== Filters ==========
    /// Recipe sources to allow, comma separated (trainer-taught recipes always pass)
    #[arg(long, value_delimiter = ',', default_values_t = [Source::Trainer, Source::Vendor])]
    sources: Vec<Source>,

    /// Easiest recipe colour to accept (orange, yellow or green)
    #[arg(long, default_value = "yellow")]
    skillup: SkillupDifficulty,

    // ========== Input / Output ==========
    /// Directory holding recipes.json, items.json, vendor.json and servers.json
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Auction house price snapshot (CSV) [default: <DATA_DIR>/prices.csv]
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Give up pricing after this many milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Print the plan as JSON instead of a table
    #[arg(long, default_value = "false")]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

impl Args {
    fn prices_path(&self) -> PathBuf {
        self.prices
            .clone()
            .unwrap_or_else(|| self.data_dir.join("prices.csv"))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "proflevel=debug" } else { "proflevel=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !args.data_dir.exists() {
        eprintln!(
            "Error: '{}' directory not found. Please run from the project root.",
            args.data_dir.display()
        );
        std::process::exit(1);
    }

    let catalog = load_all_data(&args.data_dir)?;
    tracing::info!(
        recipes = catalog.recipe_count(),
        items = catalog.item_count(),
        "catalog loaded"
    );

    let prices = load_price_snapshot(&args.prices_path())?;
    let oracle = SnapshotOracle::new(prices, args.price_type);
    tracing::info!(quotes = oracle.len(), price_type = %args.price_type, "price snapshot loaded");

    let request = LevelRequest {
        region: args.region,
        server: args.server,
        faction: args.faction,
        profession: args.profession,
        start_level: args.start,
        finish_level: args.finish,
        filter_source: args.sources,
        filter_skillup: args.skillup,
    };

    let deadline = args
        .deadline_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));

    let outcome = plan_levelling(&catalog, &oracle, &request, deadline)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display_results(&outcome, &catalog);
    }

    if !outcome.is_completed() {
        eprintln!("[WARNING] Could not reach level {}.", request.finish_level);
        eprintln!("Try allowing more recipe sources or an easier skill-up colour.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let base = [
            "proflevel", "--profession", "tailoring", "--start", "1", "--finish", "75",
            "--server", "Firemaw", "--faction", "horde",
        ];
        Args::parse_from(base.iter().chain(extra))
    }

    #[test]
    fn test_prices_default_to_data_dir() {
        assert_eq!(parse(&[]).prices_path(), PathBuf::from("data").join("prices.csv"));

        let args = parse(&["--data-dir", "/srv/wow"]);
        assert_eq!(args.prices_path(), PathBuf::from("/srv/wow/prices.csv"));
    }

    #[test]
    fn test_explicit_prices_override_data_dir() {
        let args = parse(&["--data-dir", "/srv/wow", "--prices", "snapshots/today.csv"]);
        assert_eq!(args.prices_path(), PathBuf::from("snapshots/today.csv"));
    }
}

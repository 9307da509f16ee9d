use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use flight_planner::catalog::load_catalog;
use flight_planner::domain::{AirportCode, MAX_CONNECTION_MINS, MIN_CONNECTION_MINS};
use flight_planner::output::{itineraries_to_json, round_trips_to_json, write_json};
use flight_planner::planner::{Planner, SearchConfig, SearchRequest};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Longest layover the CLI accepts: one year.
const MAX_LAYOVER_MINS: i64 = 366 * 24 * 60;

/// Find every flight itinerary between two airports, cheapest first.
#[derive(Debug, Parser)]
#[command(name = "flight-planner", version)]
struct Args {
    /// CSV flight catalog
    #[arg(value_name = "DATASET_FILE")]
    dataset_file: PathBuf,

    /// Origin airport code, e.g. WIW
    origin: AirportCode,

    /// Destination airport code, e.g. ECV
    destination: AirportCode,

    /// Number of checked bags
    #[arg(long, default_value_t = 0)]
    bags: u32,

    /// Also search the way back and print round trips
    #[arg(long = "return")]
    round_trip: bool,

    /// Minimum layover in minutes (exclusive)
    #[arg(
        long,
        default_value_t = MIN_CONNECTION_MINS,
        value_parser = clap::value_parser!(i64).range(0..=MAX_LAYOVER_MINS)
    )]
    min_connection: i64,

    /// Maximum layover in minutes (exclusive)
    #[arg(
        long,
        default_value_t = MAX_CONNECTION_MINS,
        value_parser = clap::value_parser!(i64).range(0..=MAX_LAYOVER_MINS)
    )]
    max_connection: i64,

    /// Explore starting flights on all cores
    #[arg(long)]
    parallel: bool,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.min_connection >= args.max_connection {
        anyhow::bail!(
            "--min-connection ({}) must be less than --max-connection ({})",
            args.min_connection,
            args.max_connection
        );
    }

    let catalog = load_catalog(&args.dataset_file)
        .with_context(|| format!("loading {}", args.dataset_file.display()))?;

    let config = SearchConfig::new(args.min_connection, args.max_connection, args.parallel);
    let planner = Planner::new(&catalog, &config);
    let request = SearchRequest::new(args.origin, args.destination, args.bags);

    let json = if args.round_trip {
        let result = planner.search_round_trip(&request);
        info!(
            trips = result.trips.len(),
            paths_explored = result.paths_explored,
            "Round trip search finished"
        );
        round_trips_to_json(&result.trips)?
    } else {
        let result = planner.search(&request);
        info!(
            itineraries = result.itineraries.len(),
            paths_explored = result.paths_explored,
            "Search finished"
        );
        itineraries_to_json(&result.itineraries)?
    };

    write_json(&json, args.output.as_deref()).context("writing results")?;
    Ok(())
}

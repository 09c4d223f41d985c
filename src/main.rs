use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fuelrank::api::AppState;
use fuelrank::ranking::format::{StationLabels, location_line};
use fuelrank::{
    AnnotatedRecord, Coordinates, FuelRankConfig, FuelRankError, FuelType, JsonFileSource,
    SortMode, StationProvider, SupabaseSource, VehicleProfile, rank, telemetry, web,
};
use tracing::{debug, warn};

/// Rank nearby gas stations by price, distance or total trip cost
#[derive(Debug, Parser)]
#[command(name = "fuelrank", version, about)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch station prices and print them ranked
    Rank(RankArgs),
    /// Serve the ranking API over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct RankArgs {
    /// Fuel grade: regular, midgrade, premium or diesel
    #[arg(long)]
    fuel: Option<FuelType>,

    /// Sort mode: cheapest, most_expensive, closest or best
    #[arg(long)]
    sort: Option<SortMode>,

    /// Your latitude in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lon", value_parser = parse_coordinate)]
    lat: Option<f64>,

    /// Your longitude in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lat", value_parser = parse_coordinate)]
    lon: Option<f64>,

    /// Tank size in gallons
    #[arg(long, allow_hyphen_values = true, requires = "mpg")]
    tank: Option<String>,

    /// Fuel economy in miles per gallon
    #[arg(long, allow_hyphen_values = true, requires = "tank")]
    mpg: Option<String>,

    /// Read station rows from a JSON file instead of the remote table
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Show at most this many stations
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Port to listen on (overrides server.port)
    #[arg(long)]
    port: Option<u16>,

    /// Serve station rows from a JSON file instead of the remote table
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        match error.downcast_ref::<FuelRankError>() {
            Some(app_error) => eprintln!("Error: {}", app_error.user_message()),
            None => eprintln!("Error: {error:#}"),
        }
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = FuelRankConfig::load_from_path(cli.config.clone())?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    telemetry::init(&config.logging)?;
    debug!(table = %config.source.table, "Configuration loaded");

    match cli.command {
        Command::Rank(args) => {
            let provider = build_provider(&config, args.file.clone())?;
            rank_command(&config, provider.as_ref(), args).await
        }
        Command::Serve(args) => {
            let provider = build_provider(&config, args.file)?;
            let state = AppState::new(provider, config.defaults.clone());
            web::run(args.port.unwrap_or(config.server.port), state).await
        }
    }
}

fn build_provider(
    config: &FuelRankConfig,
    file: Option<PathBuf>,
) -> Result<Arc<dyn StationProvider>> {
    match file {
        Some(path) => Ok(Arc::new(JsonFileSource::new(path))),
        None => {
            let source = SupabaseSource::new(&config.source)?;
            Ok(Arc::new(source))
        }
    }
}

async fn rank_command(
    config: &FuelRankConfig,
    provider: &dyn StationProvider,
    args: RankArgs,
) -> Result<()> {
    let fuel_type = args.fuel.unwrap_or(config.defaults.fuel_type);
    let sort_mode = args.sort.unwrap_or(config.defaults.sort_mode);
    let user_location = Coordinates::from_parts(args.lat, args.lon);

    // A rejected profile is reported, then ranking carries on without one
    let vehicle = match (args.tank.as_deref(), args.mpg.as_deref()) {
        (Some(tank), Some(mpg)) => match VehicleProfile::validate(tank, mpg) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(field = e.field(), "Vehicle profile rejected");
                eprintln!("Ignoring vehicle profile: {e}");
                None
            }
        },
        _ => None,
    };

    if sort_mode.needs_location() && user_location.is_none() {
        eprintln!("Note: '{sort_mode}' needs --lat/--lon; showing stations in table order");
    } else if sort_mode.needs_vehicle() && vehicle.is_none() {
        eprintln!("Note: '{sort_mode}' needs --tank/--mpg; showing stations in table order");
    }

    let records = provider.fetch_stations().await?;
    let mut ranked = rank(&records, user_location, fuel_type, sort_mode, vehicle.as_ref());
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&ranked).context("Failed to encode stations")?;
        println!("{json}");
    } else {
        print_table(&ranked, fuel_type, sort_mode);
    }
    Ok(())
}

fn print_table(ranked: &[AnnotatedRecord], fuel_type: FuelType, sort_mode: SortMode) {
    println!("{fuel_type} prices, {sort_mode}");
    println!(
        "{:>3}  {:<24} {:<40} {:>8} {:>9} {:>9} {:>9}",
        "#", "Station", "Location", "Price", "Distance", "Fill", "Total"
    );

    for (index, station) in ranked.iter().enumerate() {
        let labels = StationLabels::new(station, fuel_type, sort_mode);
        println!(
            "{:>3}  {:<24} {:<40} {:>8} {:>9} {:>9} {:>9}",
            index + 1,
            truncate(&station.record.station_name, 24),
            truncate(&location_line(&station.record), 40),
            labels.price,
            labels.distance,
            labels.fill_cost,
            labels.total_cost,
        );
    }

    if ranked.is_empty() {
        println!("No stations found.");
    }
}

fn parse_coordinate(value: &str) -> std::result::Result<f64, String> {
    let degrees: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if degrees.is_finite() {
        Ok(degrees)
    } else {
        Err(format!("'{value}' is not a finite number"))
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

//! wayfinder CLI
//!
//! Fetches a route between two coordinates, or decodes an encoded polyline.

#![allow(clippy::print_stdout)]

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfinder::directions::{DirectionsClient, DirectionsConfig};
use wayfinder::fetcher::RouteFetcher;
use wayfinder::geo::Coordinate;
use wayfinder::mode::TravelMode;
use wayfinder::polyline::Polyline;

#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(version, about = "Route lookup and polyline decoding", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a route and print its distance and geometry
    ///
    /// Example: wayfinder route --from 36.1147,-115.1728 --to 36.1727,-115.1580 --mode bus
    Route {
        /// Origin as "lat,lng"
        #[arg(long, value_parser = parse_coordinate)]
        from: Coordinate,

        /// Destination as "lat,lng"
        #[arg(long, value_parser = parse_coordinate)]
        to: Coordinate,

        /// Travel mode: driving, walking, bicycle or bus
        #[arg(short, long, default_value = "driving")]
        mode: TravelMode,

        /// Directions API key
        #[arg(long, env = "DIRECTIONS_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Directions service base URL
        #[arg(long, default_value = "https://maps.googleapis.com")]
        base_url: String,

        /// Request timeout in seconds (HTTP client default when omitted)
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode an encoded polyline and print its coordinates
    Decode {
        /// Encoded polyline string
        encoded: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got \"{value}\""))?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude \"{lat}\": {e}"))?;
    let longitude: f64 = lng
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude \"{lng}\": {e}"))?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(format!("latitude {latitude} out of range"));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("longitude {longitude} out of range"));
    }
    Ok(Coordinate::new(latitude, longitude))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Route {
            from,
            to,
            mode,
            api_key,
            base_url,
            timeout_secs,
            json,
        } => {
            let config = DirectionsConfig {
                base_url,
                api_key,
                timeout_secs,
            };
            let client =
                DirectionsClient::new(config).context("failed to build directions client")?;
            let fetcher = RouteFetcher::new(client);

            let Some(result) = fetcher.fetch(Some(from), Some(to), mode) else {
                bail!("origin and destination are required");
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{}: {}",
                    mode.label(),
                    result.distance_text.as_deref().unwrap_or("-")
                );
                println!("{} points", result.coordinates.len());
                if let Some(bounds) = result.bounds() {
                    let center = bounds.center();
                    println!("center {}", center.to_query_value());
                }
            }
        }
        Commands::Decode { encoded } => {
            let polyline = Polyline::decode(&encoded).context("failed to decode polyline")?;
            for point in polyline.points() {
                println!("{}", point.to_query_value());
            }
            println!("{} points, {:.2} km", polyline.len(), polyline.length_km());
        }
    }

    Ok(())
}

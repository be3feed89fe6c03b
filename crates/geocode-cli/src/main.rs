//! geocode - look up addresses and coordinates from the command line

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use geocoding_client::{Address, ComponentFilter, GeocodingClient, GeocodingConfig};
use tracing::{debug, error};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Targets are this binary's crate name and the client library's
const DEFAULT_LOG_FILTER: &str = "geocode=info,geocoding_client=info";

#[derive(Parser)]
#[command(name = "geocode")]
#[command(version, about = "Forward and reverse geocoding", long_about = None)]
struct Cli {
    /// API key sent with every request
    #[arg(short, long, env = "GEOCODING_API_KEY", global = true)]
    key: Option<String>,

    /// Service root URL
    #[arg(long, env = "GEOCODING_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Print the full service response as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Address to coordinates
    Forward {
        address: String,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Coordinates ("lat,lng") to address
    Reverse {
        #[arg(allow_hyphen_values = true)]
        lat_lng: String,
    },
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long)]
    administrative_area: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    locality: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    route: Option<String>,
}

impl From<FilterArgs> for ComponentFilter {
    fn from(args: FilterArgs) -> Self {
        ComponentFilter {
            administrative_area: args.administrative_area,
            country: args.country,
            locality: args.locality,
            postal_code: args.postal_code,
            route: args.route,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    };
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GeocodingConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    debug!(base_url = %config.base_url, "Using geocoding service");

    let client = GeocodingClient::with_config(config)?;
    let key = cli.key.unwrap_or_default();

    let address = match cli.command {
        Command::Forward { address, filter } => {
            client
                .geocode_authenticated_with_components(&address, &filter.into(), &key)
                .await?
        }
        Command::Reverse { lat_lng } => {
            client.reverse_geocode_authenticated(&lat_lng, &key).await?
        }
    };

    print_address(&address, cli.json)?;
    Ok(())
}

fn print_address(address: &Address, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&address.response)?);
    } else {
        println!("{address}");
    }
    Ok(())
}

//! Weather CLI
//!
//! Command-line interface for the Weather API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use weather_client::WeatherClient;

#[derive(Parser)]
#[command(name = "weather")]
#[command(author, version, about = "Weather API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Weather API
    #[arg(long, env = "WEATHER_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and store current weather for a city
    Current {
        /// City name
        city: String,
    },
    /// List stored records, newest first
    All {
        /// Zero-based page number
        #[arg(long)]
        page: Option<u32>,
        /// Records per page
        #[arg(long)]
        size: Option<u32>,
    },
    /// List stored records for a city
    ByCity {
        /// City name (case-insensitive)
        city: String,
    },
    /// Show the most recent stored record for a city
    Latest {
        /// City name (case-insensitive)
        city: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = WeatherClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }
        Commands::Current { city } => {
            let record = client.current(&city).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::All { page, size } => {
            let records = client.all(page, size).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::ByCity { city } => {
            let records = client.by_city(&city).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::Latest { city } => {
            let record = client.latest(&city).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

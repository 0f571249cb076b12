use clap::Parser;
use geodude_core::{GeocoderConfig, DEFAULT_ENDPOINT};
use std::time::Duration;

/// A tiny command-line utility for geocoding addresses
#[derive(Parser, Debug)]
#[command(name = "geodude")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Geocodes an address and prints its normalized form and coordinates", long_about = None)]
pub struct Args {
    /// Free-text address; multiple words are joined with spaces
    #[arg(value_name = "ADDRESS")]
    pub address: Vec<String>,

    /// Google Maps API key
    #[arg(long = "api-key", env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Geocoding API endpoint
    #[arg(long = "endpoint", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = 10)]
    pub timeout: u64,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Join the address tokens into a single query, None when there is nothing to look up
    pub fn query(&self) -> Option<String> {
        let query = self.address.join(" ");
        if query.trim().is_empty() {
            None
        } else {
            Some(query)
        }
    }

    /// Provider configuration derived from the flags
    pub fn geocoder_config(&self) -> GeocoderConfig {
        GeocoderConfig {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..GeocoderConfig::default()
        }
        .with_api_key(self.api_key.clone())
    }
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

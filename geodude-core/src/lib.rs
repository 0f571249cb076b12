use std::time::Duration;

// Internal modules (private)
mod error;
mod geocoding;
mod google;

// Re-export public types
pub use error::{GeocodeError, ProviderError, Stage};
pub use geocoding::{round_trip, GeocodeResult, Geocoder, Point};
pub use google::GoogleGeocoder;

/// Default Google Maps Geocoding API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Configuration options for the geocoding provider
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// API key sent with every request (omitted from the request when None)
    pub api_key: Option<String>,
    /// Geocoding endpoint; both lookups are issued against it
    pub endpoint: String,
    /// Per-request timeout applied by the HTTP client
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl GeocoderConfig {
    /// Set the API key, ignoring blank values
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }
}

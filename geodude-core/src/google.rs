use serde::Deserialize;

use crate::error::ProviderError;
use crate::geocoding::{Geocoder, Point};
use crate::GeocoderConfig;

/// Google Maps Geocoding API response structure
#[derive(Debug, Deserialize)]
struct GoogleResponse {
    status: String,
    #[serde(default)]
    results: Vec<GoogleResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// Geocoder backed by the Google Maps Geocoding API
pub struct GoogleGeocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleGeocoder {
    /// Build a geocoder with its own blocking HTTP client
    pub fn new(config: GeocoderConfig) -> Result<Self, ProviderError> {
        let user_agent = format!("geodude/{}", env!("CARGO_PKG_VERSION"));

        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_key: config.api_key,
        })
    }

    /// Issue one lookup and return the first result
    fn lookup(&self, param: &str, value: String) -> Result<GoogleResult, ProviderError> {
        log::debug!("Requesting {}?{}={}", self.endpoint, param, value);

        let mut query = vec![(param, value)];
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        // The request URL carries the API key; keep it out of errors
        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .map_err(|e| ProviderError::Transport(e.without_url()))?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let data: GoogleResponse = response
            .json()
            .map_err(|e| ProviderError::Transport(e.without_url()))?;
        first_result(data)
    }
}

/// Map the provider status onto a result or an error
fn first_result(data: GoogleResponse) -> Result<GoogleResult, ProviderError> {
    match data.status.as_str() {
        "OK" | "ZERO_RESULTS" => data
            .results
            .into_iter()
            .next()
            .ok_or(ProviderError::NoResults),
        _ => Err(ProviderError::Status {
            message: data
                .error_message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "request rejected by geocoding provider".to_string()),
            status: data.status,
        }),
    }
}

impl Geocoder for GoogleGeocoder {
    fn geocode(&self, query: &str) -> Result<Point, ProviderError> {
        let result = self.lookup("address", query.to_string())?;
        let Location { lat, lng } = result.geometry.location;
        Ok(Point::new(lat, lng))
    }

    fn reverse_geocode(&self, point: &Point) -> Result<String, ProviderError> {
        let latlng = format!("{},{}", point.lat(), point.lng());
        let result = self.lookup("latlng", latlng)?;
        Ok(result.formatted_address)
    }
}

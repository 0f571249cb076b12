//! Error types for the geocoding round trip and its providers.
use std::fmt;

use thiserror::Error;

/// Errors surfaced by a geocoding provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider found nothing for the request.
    #[error("no results")]
    NoResults,

    /// The provider answered but rejected the request.
    #[error("{status}: {message}")]
    Status {
        /// Provider status code, e.g. `REQUEST_DENIED`.
        status: String,
        /// Human-readable explanation from the provider (may be empty).
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("geocoding API returned status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The request could not be sent or the response could not be read.
    ///
    /// The wrapped error has its URL stripped, since the URL may carry the API key.
    #[error("geocoding request failed")]
    Transport(#[source] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build geocoding client")]
    Client(#[source] reqwest::Error),
}

/// Step of the round trip that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocode,
    ReverseGeocode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Geocode => f.write_str("geocode"),
            Stage::ReverseGeocode => f.write_str("reverse geocode"),
        }
    }
}

/// Errors from a geocode-then-reverse-geocode round trip.
///
/// Provider errors pass through verbatim (display and source); the wrapping
/// variant only records which lookup produced them.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The query was empty or only whitespace.
    #[error("address query is empty")]
    EmptyQuery,

    /// Forward lookup failed.
    #[error(transparent)]
    Geocode(ProviderError),

    /// Reverse lookup failed.
    #[error(transparent)]
    ReverseGeocode(ProviderError),
}

impl GeocodeError {
    /// The lookup that failed, if any was attempted.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::EmptyQuery => None,
            Self::Geocode(_) => Some(Stage::Geocode),
            Self::ReverseGeocode(_) => Some(Stage::ReverseGeocode),
        }
    }

    /// The underlying provider error, if any.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::EmptyQuery => None,
            Self::Geocode(e) | Self::ReverseGeocode(e) => Some(e),
        }
    }
}

use crate::error::{GeocodeError, ProviderError};

/// A geographic coordinate pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

/// A geocoding provider that resolves addresses to coordinates and back
pub trait Geocoder {
    /// Forward geocode: resolve a free-text address to a point
    fn geocode(&self, query: &str) -> Result<Point, ProviderError>;

    /// Reverse geocode: resolve a point to a formatted address
    fn reverse_geocode(&self, point: &Point) -> Result<String, ProviderError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, query: &str) -> Result<Point, ProviderError> {
        (**self).geocode(query)
    }

    fn reverse_geocode(&self, point: &Point) -> Result<String, ProviderError> {
        (**self).reverse_geocode(point)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn geocode(&self, query: &str) -> Result<Point, ProviderError> {
        (**self).geocode(query)
    }

    fn reverse_geocode(&self, point: &Point) -> Result<String, ProviderError> {
        (**self).reverse_geocode(point)
    }
}

/// Normalized address paired with the point it was resolved from.
///
/// Only [`round_trip`] builds one, so the address is always the reverse
/// lookup of exactly this point.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    address: String,
    point: Point,
}

impl GeocodeResult {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

/// Geocode `query`, then reverse-geocode the resulting point.
///
/// Fails fast: a failed forward lookup never triggers the reverse lookup, and
/// a failed reverse lookup discards the point.
pub fn round_trip<G: Geocoder + ?Sized>(
    query: &str,
    geocoder: &G,
) -> Result<GeocodeResult, GeocodeError> {
    if query.trim().is_empty() {
        return Err(GeocodeError::EmptyQuery);
    }

    log::debug!("Geocoding {:?}", query);
    let point = geocoder.geocode(query).map_err(|e| {
        log::debug!("Geocode failed: {}", e);
        GeocodeError::Geocode(e)
    })?;

    log::debug!("Geocoded to {},{}; reverse geocoding", point.lat(), point.lng());
    let address = geocoder.reverse_geocode(&point).map_err(|e| {
        log::debug!("Reverse geocode failed: {}", e);
        GeocodeError::ReverseGeocode(e)
    })?;

    log::debug!("Round trip complete: {}", address);
    Ok(GeocodeResult { address, point })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use std::cell::{Cell, RefCell};

    /// Deterministic stub that counts calls and records reverse lookups
    struct StubGeocoder {
        point: Result<Point, &'static str>,
        address: Result<&'static str, &'static str>,
        geocode_calls: Cell<usize>,
        reverse_calls: Cell<usize>,
        reversed: RefCell<Vec<Point>>,
    }

    impl StubGeocoder {
        fn new(
            point: Result<Point, &'static str>,
            address: Result<&'static str, &'static str>,
        ) -> Self {
            Self {
                point,
                address,
                geocode_calls: Cell::new(0),
                reverse_calls: Cell::new(0),
                reversed: RefCell::new(Vec::new()),
            }
        }
    }

    fn stub_error(message: &str) -> ProviderError {
        if message == "no results" {
            ProviderError::NoResults
        } else {
            ProviderError::Status {
                status: "UNKNOWN_ERROR".to_string(),
                message: message.to_string(),
            }
        }
    }

    impl Geocoder for StubGeocoder {
        fn geocode(&self, _query: &str) -> Result<Point, ProviderError> {
            self.geocode_calls.set(self.geocode_calls.get() + 1);
            self.point.map_err(stub_error)
        }

        fn reverse_geocode(&self, point: &Point) -> Result<String, ProviderError> {
            self.reverse_calls.set(self.reverse_calls.get() + 1);
            self.reversed.borrow_mut().push(*point);
            self.address.map(str::to_string).map_err(stub_error)
        }
    }

    const GOOGLEPLEX: Point = Point::new(37.4224, -122.0841);
    const GOOGLEPLEX_ADDRESS: &str = "1600 Amphitheatre Pkwy, Mountain View, CA";

    #[test]
    fn test_round_trip_pairs_geocode_point_with_reverse_address() {
        let stub = StubGeocoder::new(Ok(GOOGLEPLEX), Ok(GOOGLEPLEX_ADDRESS));

        let result = round_trip("1600 Amphitheatre Parkway", &stub).unwrap();

        assert_eq!(result.point(), GOOGLEPLEX);
        assert_eq!(result.address(), GOOGLEPLEX_ADDRESS);
        assert_eq!(stub.geocode_calls.get(), 1);
        assert_eq!(stub.reverse_calls.get(), 1);
        // Reverse lookup used the very point the forward lookup returned
        assert_eq!(*stub.reversed.borrow(), vec![GOOGLEPLEX]);
    }

    #[test]
    fn test_geocode_failure_skips_reverse_geocode() {
        let stub = StubGeocoder::new(Err("no results"), Ok(GOOGLEPLEX_ADDRESS));

        let err = round_trip("nowhere at all", &stub).unwrap_err();

        assert!(matches!(
            err,
            GeocodeError::Geocode(ProviderError::NoResults)
        ));
        assert_eq!(err.to_string(), "no results");
        assert_eq!(stub.geocode_calls.get(), 1);
        assert_eq!(stub.reverse_calls.get(), 0);
    }

    #[test]
    fn test_reverse_failure_returns_no_partial_result() {
        let stub = StubGeocoder::new(Ok(GOOGLEPLEX), Err("over quota"));

        let err = round_trip("1600 Amphitheatre Parkway", &stub).unwrap_err();

        assert_eq!(err.stage(), Some(Stage::ReverseGeocode));
        assert_eq!(err.to_string(), "UNKNOWN_ERROR: over quota");
        assert_eq!(stub.geocode_calls.get(), 1);
        assert_eq!(stub.reverse_calls.get(), 1);
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let stub = StubGeocoder::new(Ok(GOOGLEPLEX), Ok(GOOGLEPLEX_ADDRESS));

        let first = round_trip("1600 Amphitheatre Parkway", &stub).unwrap();
        let second = round_trip("1600 Amphitheatre Parkway", &stub).unwrap();

        assert_eq!(first, second);
        assert_eq!(stub.geocode_calls.get(), 2);
    }

    #[test]
    fn test_empty_query_makes_no_calls() {
        let stub = StubGeocoder::new(Ok(GOOGLEPLEX), Ok(GOOGLEPLEX_ADDRESS));

        for query in ["", "   ", "\t\n"] {
            let err = round_trip(query, &stub).unwrap_err();
            assert!(matches!(err, GeocodeError::EmptyQuery));
        }
        assert_eq!(stub.geocode_calls.get(), 0);
        assert_eq!(stub.reverse_calls.get(), 0);
    }

    #[test]
    fn test_round_trip_through_trait_object() {
        let stub: Box<dyn Geocoder> =
            Box::new(StubGeocoder::new(Ok(GOOGLEPLEX), Ok(GOOGLEPLEX_ADDRESS)));

        let result = round_trip("1600 Amphitheatre Parkway", &stub).unwrap();
        assert_eq!(result.address(), GOOGLEPLEX_ADDRESS);
    }
}

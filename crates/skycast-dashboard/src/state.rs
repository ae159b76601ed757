use skycast_weather::{Coordinates, ForecastSnapshot, WeatherError};

/// Start-up coordinates (New York City)
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 40.7128,
    longitude: -74.0060,
};

/// A fetch the controller has been asked to run. `seq` ties the eventual
/// result back to the state revision that issued it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchRequest {
    pub seq: u64,
    pub coordinates: Coordinates,
}

/// View state: selected coordinates, the last snapshot if any, and whether
/// a fetch for the latest issued request is still in flight.
#[derive(Debug)]
pub struct Dashboard {
    coordinates: Coordinates,
    snapshot: Option<ForecastSnapshot>,
    loading: bool,
    request_seq: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            coordinates: DEFAULT_COORDINATES,
            snapshot: None,
            loading: true,
            request_seq: 0,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> Option<&ForecastSnapshot> {
        self.snapshot.as_ref()
    }

    /// Whether any fetch has been issued yet.
    pub fn has_fetched(&self) -> bool {
        self.request_seq > 0
    }

    /// The fetch issued when the view first appears.
    pub fn initial_fetch(&mut self) -> FetchRequest {
        self.loading = true;
        self.next_request()
    }

    /// Apply raw text from the coordinate field and issue a fetch for the
    /// result. The pair is accepted unconditionally; a component that does
    /// not parse becomes NaN and flows into the request as-is.
    pub fn set_location_input(&mut self, raw: &str) -> FetchRequest {
        let coords = parse_coordinates(raw);
        if coords.latitude.is_nan() || coords.longitude.is_nan() {
            tracing::debug!(input = raw, "coordinate input did not parse as numbers");
        }
        self.coordinates = coords;
        self.loading = true;
        self.next_request()
    }

    /// Record the outcome of an issued fetch.
    ///
    /// A result carrying a superseded sequence number is discarded, so the
    /// latest issued request wins regardless of completion order. Failures
    /// are logged and leave the previous snapshot in place.
    pub fn complete_fetch(&mut self, seq: u64, result: Result<ForecastSnapshot, WeatherError>) {
        if seq != self.request_seq {
            tracing::debug!(
                seq,
                latest = self.request_seq,
                "discarding superseded fetch result"
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(snapshot) => self.snapshot = Some(snapshot),
            Err(e) => tracing::warn!("Weather fetch failed: {e}"),
        }
    }

    fn next_request(&mut self) -> FetchRequest {
        self.request_seq += 1;
        FetchRequest {
            seq: self.request_seq,
            coordinates: self.coordinates,
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a "lat, lon" pair. Each side is trimmed and parsed as a float;
/// anything unparseable yields NaN rather than an error.
fn parse_coordinates(raw: &str) -> Coordinates {
    let mut parts = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().unwrap_or(f64::NAN));

    Coordinates {
        latitude: parts.next().unwrap_or(f64::NAN),
        longitude: parts.next().unwrap_or(f64::NAN),
    }
}

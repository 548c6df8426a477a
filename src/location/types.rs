//! Core types for the location subsystem.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Which geocoding endpoint a lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Zip,
    City,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zip => write!(f, "ZIP"),
            Self::City => write!(f, "city"),
        }
    }
}

/// A latitude/longitude pair as the provider reported it.
///
/// The text is kept verbatim so "-74.0060" is not reformatted to "-74.006".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

impl Coordinates {
    /// Pull `lat`/`lon` out of a provider object. Both strings and numbers are accepted.
    pub fn from_json(obj: &Value) -> Result<Self, LocationError> {
        let field = |name: &str| -> Result<String, LocationError> {
            match obj.get(name) {
                Some(Value::String(s)) => Ok(s.clone()),
                Some(Value::Number(n)) => Ok(n.to_string()),
                Some(other) => Err(LocationError::InvalidResponse(format!(
                    "'{}' is not a number: {}",
                    name, other
                ))),
                None => Err(LocationError::InvalidResponse(format!("no '{}' field", name))),
            }
        };
        Ok(Self {
            lat: field("lat")?,
            lon: field("lon")?,
        })
    }

    /// Parsed degrees, if both parts are numeric.
    pub fn as_degrees(&self) -> Option<(f64, f64)> {
        let lat = self.lat.trim().parse().ok()?;
        let lon = self.lon.trim().parse().ok()?;
        Some((lat, lon))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// Geocoding errors. `Display` gives the text printed in place of coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Non-success status (or an empty body) from the provider.
    #[error("{}", http_message(.kind, .status, .status_text))]
    Http {
        kind: LookupKind,
        status: u16,
        status_text: String,
    },
    #[error("Error: network request failed: {0}")]
    Network(String),
    #[error("Error: invalid response from geocoding service: {0}")]
    InvalidResponse(String),
    #[error("Error: no results for '{0}'")]
    NotFound(String),
}

fn http_message(kind: &LookupKind, status: &u16, status_text: &str) -> String {
    match kind {
        LookupKind::Zip => format!(
            "Error: {}\nError fetching Lat Long from ZIP Code:\t {}",
            status, status_text
        ),
        LookupKind::City => format!("Error: Error fetching City data: {}", status_text),
    }
}

/// Outcome of geocoding one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoResult {
    pub input: String,
    pub outcome: Result<Coordinates, LocationError>,
}

impl GeoResult {
    pub fn new(input: impl Into<String>, outcome: Result<Coordinates, LocationError>) -> Self {
        Self {
            input: input.into(),
            outcome,
        }
    }

    /// "lat, lon" on success, the error text otherwise.
    pub fn coordinates(&self) -> String {
        match &self.outcome {
            Ok(coords) => coords.to_string(),
            Err(e) => e.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

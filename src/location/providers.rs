//! Geocoding provider: ZIP and direct (free-text) lookups over HTTP.

use super::types::{Coordinates, LocationError, LookupKind};
use crate::config::Config;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("geolatlong/", env!("CARGO_PKG_VERSION"));

// ─── Transport ──────────────────────────────────────────────────

/// A completed HTTP exchange, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    /// Parsed JSON body; `None` when the body was empty or not JSON.
    pub body: Option<Value>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests. Non-2xx statuses come back as responses;
/// only transport failures are errors.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, LocationError>;
}

/// Blocking transport backed by `ureq`.
pub struct UreqTransport {
    timeout: Duration,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, LocationError> {
        let response = match ureq::get(url)
            .set("User-Agent", USER_AGENT)
            .timeout(self.timeout)
            .call()
        {
            Ok(r) => r,
            Err(ureq::Error::Status(_, r)) => r,
            Err(e) => return Err(LocationError::Network(redact(&e.to_string()))),
        };
        let status = response.status();
        let status_text = response.status_text().to_string();
        let body = response.into_json::<Value>().ok();
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

// ─── Geocoder ───────────────────────────────────────────────────

/// The two lookups the location resolver needs.
pub trait Geocoder {
    fn by_zip(&self, zip: &str) -> Result<Coordinates, LocationError>;
    fn by_city_query(&self, query: &str) -> Result<Coordinates, LocationError>;
}

/// Geocode client for the OpenWeatherMap geocoding API.
pub struct GeocodeClient<T = UreqTransport> {
    config: Config,
    transport: T,
}

impl GeocodeClient<UreqTransport> {
    pub fn new(config: Config) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self { config, transport }
    }
}

impl<T: Transport> GeocodeClient<T> {
    /// Create a client with a custom transport (for testing).
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn zip_url(&self, zip: &str) -> String {
        format!(
            "{}zip?zip={},{}&{}",
            self.config.base_url,
            zip,
            self.config.country,
            self.config.query_suffix()
        )
    }

    pub fn city_url(&self, query: &str) -> String {
        format!(
            "{}direct?q={}&{}",
            self.config.base_url,
            utf8_percent_encode(query, NON_ALPHANUMERIC),
            self.config.query_suffix()
        )
    }

    fn fetch(&self, kind: LookupKind, url: &str) -> Result<Value, LocationError> {
        tracing::debug!(%kind, url = %redact(url), "geocoding request");
        let response = self.transport.get(url)?;
        tracing::debug!(status = response.status, "geocoding response");

        let success = response.is_success();
        match response.body {
            Some(body) if success => Ok(body),
            _ => Err(LocationError::Http {
                kind,
                status: response.status,
                status_text: response.status_text,
            }),
        }
    }
}

impl<T: Transport> Geocoder for GeocodeClient<T> {
    fn by_zip(&self, zip: &str) -> Result<Coordinates, LocationError> {
        let body = self.fetch(LookupKind::Zip, &self.zip_url(zip))?;
        Coordinates::from_json(&body)
    }

    /// The provider returns an array of matches; the first one wins.
    fn by_city_query(&self, query: &str) -> Result<Coordinates, LocationError> {
        let body = self.fetch(LookupKind::City, &self.city_url(query))?;
        let first = match &body {
            Value::Array(items) => items
                .first()
                .ok_or_else(|| LocationError::NotFound(query.to_string()))?,
            other => {
                return Err(LocationError::InvalidResponse(format!(
                    "expected an array of matches, got {}",
                    json_kind(other)
                )))
            }
        };
        Coordinates::from_json(first)
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Mask the `appid` value in a URL or in an error message that embeds one.
/// The key is percent-encoded in URLs, so it ends at the first character
/// outside `[A-Za-z0-9%]`.
fn redact(text: &str) -> String {
    const KEY: &str = "appid=";
    match text.find(KEY) {
        Some(idx) => {
            let start = idx + KEY.len();
            let end = text[start..]
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '%'))
                .map_or(text.len(), |i| start + i);
            format!("{}***{}", &text[..start], &text[end..])
        }
        None => text.to_string(),
    }
}

//! Location subsystem: region codes, input classification, geocoding,
//! and the resolver that ties them together.

pub mod classify;
pub mod providers;
pub mod region;
pub mod resolver;
pub mod types;

pub use classify::{classify, is_help_trigger, needs_help, ClassifiedLocation};
pub use providers::{GeocodeClient, Geocoder, HttpResponse, Transport, UreqTransport};
pub use region::{convert_region, lookup_code, lookup_full_name};
pub use resolver::LocationResolver;
pub use types::{Coordinates, GeoResult, LocationError, LookupKind};

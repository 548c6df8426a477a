//! geo_latlong: resolve ZIP codes and "City, State" pairs to coordinates.
//!
//! The pipeline is classify → geocode → render, one location at a time.

pub mod config;
pub mod location;
pub mod output;

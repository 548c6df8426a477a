//! Location resolver: classify each input and geocode it, strictly in order.
//!
//! Flow per input:  classify → Invalid: write help, skip
//!                           → Zip:     by_zip
//!                           → City:    by_city_query

use super::classify::{classify, ClassifiedLocation};
use super::providers::Geocoder;
use super::types::GeoResult;
use crate::output::HELP_TEXT;
use std::io::{self, Write};

pub struct LocationResolver<G> {
    geocoder: G,
}

impl<G: Geocoder> LocationResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Geocode every input in order.
    ///
    /// Invalid inputs print the help text to `help_out` and are left out of
    /// the results; the remaining inputs are still processed. Lookup failures
    /// are kept in the results as errors. Only a failed write to `help_out`
    /// aborts the run.
    pub fn process<S, W>(&self, inputs: &[S], help_out: &mut W) -> io::Result<Vec<GeoResult>>
    where
        S: AsRef<str>,
        W: Write,
    {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let input = input.as_ref();
            let outcome = match classify(input) {
                ClassifiedLocation::Invalid => {
                    tracing::warn!(input, "unrecognized location, skipping");
                    help_out.write_all(HELP_TEXT.as_bytes())?;
                    continue;
                }
                ClassifiedLocation::Zip(zip) => self.geocoder.by_zip(&zip),
                ClassifiedLocation::City(query) => self.geocoder.by_city_query(&query),
            };
            if let Err(e) = &outcome {
                tracing::warn!(input, error = %e, "lookup failed");
            }
            results.push(GeoResult::new(input, outcome));
        }
        Ok(results)
    }
}

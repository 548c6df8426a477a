//! Console output: usage text and result rendering.

use crate::location::GeoResult;
use std::fmt;
use std::str::FromStr;

/// Printed for help triggers, an empty argument list, and invalid locations.
pub const HELP_TEXT: &str = concat!(
    "Please retry with the following syntax:\n",
    "\n",
    "    node /path/to/GeoToLatLong.js \"ZIP_CODE\" \"CITY, STATE\"\n",
    "    \n",
    "NOTE: You can list multiple locations as long as they are separated by only a space, no commas\n",
    "Please ensure your city names have more than two characters.\n",
);

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON array of `[input, coordinates]` pairs, printed after all lookups.
    #[default]
    Array,
    /// One `input: coordinates` line per result.
    Lines,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "array" | "json" => Ok(Self::Array),
            "lines" | "text" => Ok(Self::Lines),
            _ => Err(format!("Unknown format '{}'. Use 'array' or 'lines'.", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array => write!(f, "array"),
            Self::Lines => write!(f, "lines"),
        }
    }
}

/// Render results in the given format. The output ends with a newline.
pub fn render(results: &[GeoResult], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Array => {
            let pairs: Vec<(&str, String)> = results
                .iter()
                .map(|r| (r.input.as_str(), r.coordinates()))
                .collect();
            let mut out = serde_json::to_string_pretty(&pairs)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Lines => Ok(results
            .iter()
            .map(|r| format!("{}: {}\n", r.input, r.coordinates()))
            .collect()),
    }
}

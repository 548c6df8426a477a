use anyhow::Context;
use clap::Parser;
use geo_latlong::config::{self, Overrides, Sources};
use geo_latlong::location::{is_help_trigger, GeocodeClient, LocationResolver};
use geo_latlong::output::{render, OutputFormat, HELP_TEXT};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// geolatlong: resolve ZIP codes and "City, State" pairs to coordinates
///
/// Examples:
///   geolatlong 10001
///   geolatlong "Denver, CO" 94103
///   geolatlong --format lines "Toronto, ON"
#[derive(Parser)]
#[command(name = "geolatlong", version, about, long_about = None, disable_help_flag = true)]
struct Cli {
    /// Locations: all-digit ZIP codes or "City, Region" pairs.
    locations: Vec<String>,

    /// Geocoding API key.
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Geocoding API base URL.
    #[arg(long, env = "GEO_BASE_URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format: "array" (one JSON array) or "lines" (one line per location).
    #[arg(long, default_value = "array", value_parser = parse_format)]
    format: OutputFormat,

    /// Debug logging to stderr.
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

/// Pull help triggers ("help", "-h", "-H", ...) out of argv before clap sees
/// them, so they count wherever they appear and every other flag still parses.
/// The program name is always kept.
fn split_help_triggers<I>(args: I) -> (bool, Vec<OsString>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut help_requested = false;
    for arg in args {
        if arg.to_str().is_some_and(is_help_trigger) {
            help_requested = true;
        } else {
            kept.push(arg);
        }
    }
    (help_requested, kept)
}

fn main() -> ExitCode {
    let (help_requested, args) = split_help_triggers(env::args_os());
    let cli = Cli::parse_from(args);
    init_tracing(cli.verbose);

    // ── Usage ───────────────────────────────────────────────────

    if help_requested {
        print!("{}", HELP_TEXT);
        return ExitCode::SUCCESS;
    }
    if cli.locations.is_empty() {
        print!("{}", HELP_TEXT);
        return ExitCode::from(1);
    }

    // ── Geocode ─────────────────────────────────────────────────

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let overrides = Overrides {
        api_key: cli.api_key.clone(),
        base_url: cli.base_url.clone(),
        timeout: cli.timeout.map(Duration::from_secs),
    };
    let config = config::load(overrides, &Sources::standard()).context("loading configuration")?;
    let resolver = LocationResolver::new(GeocodeClient::new(config));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let results = resolver
        .process(&cli.locations, &mut out)
        .context("writing help text")?;

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    tracing::info!(total = results.len(), failed, "lookups finished");

    let rendered = render(&results, cli.format).context("rendering results")?;
    out.write_all(rendered.as_bytes()).context("writing results")?;
    out.flush().context("writing results")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_split_help_triggers_anywhere() {
        let (help, rest) = split_help_triggers(os(&["geolatlong", "10001", "-h", "--format", "lines"]));
        assert!(help);
        assert_eq!(rest, os(&["geolatlong", "10001", "--format", "lines"]));
    }

    #[test]
    fn test_split_help_triggers_none() {
        let args = os(&["geolatlong", "Denver, CO", "--timeout", "1"]);
        let (help, rest) = split_help_triggers(args.clone());
        assert!(!help);
        assert_eq!(rest, args);
    }

    #[test]
    fn test_split_keeps_program_name() {
        let (help, rest) = split_help_triggers(os(&["help"]));
        assert!(!help);
        assert_eq!(rest, os(&["help"]));
    }

    #[test]
    fn test_flags_after_location_parse() {
        let (_, args) = split_help_triggers(os(&[
            "geolatlong",
            "10001",
            "--base-url",
            "http://127.0.0.1:9/",
            "--timeout",
            "1",
            "--format",
            "lines",
        ]));
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.locations, vec!["10001"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9/"));
        assert_eq!(cli.timeout, Some(1));
        assert_eq!(cli.format, OutputFormat::Lines);
    }
}

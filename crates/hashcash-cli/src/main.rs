//! Hashcash stamp minting CLI

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hashcash::{MintConfig, MintRequest, Minter, StampFormat};

#[derive(Parser)]
#[command(name = "hashcash")]
#[command(about = "Mint hashcash proof-of-work stamps", long_about = None)]
struct Cli {
    /// Resource to stamp (email address, URL, message ID)
    resource: String,

    /// Required leading zero bits (defaults to the configured default)
    #[arg(short, long)]
    denomination: Option<u32>,

    /// Stamp format: 0 or 1
    #[arg(short, long)]
    format: Option<String>,

    /// Stamp date as YYYY-MM-DD (defaults to today, UTC)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// JSON file with minter configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the stamp with its digest and search statistics as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct MintReport<'a> {
    stamp: &'a str,
    format: StampFormat,
    requested_denomination: u32,
    denomination: u32,
    digest: String,
    iterations: u64,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<MintConfig> {
    let Some(path) = path else {
        return Ok(MintConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!(path = %path.display(), "loaded minter config");
    Ok(config)
}

fn build_request(cli: &Cli) -> Result<MintRequest> {
    let mut request = MintRequest::new(cli.resource.clone());

    if let Some(denomination) = cli.denomination {
        request = request.denomination(denomination);
    }
    if let Some(format) = &cli.format {
        let format: StampFormat = format.parse()?;
        request = request.format(format);
    }
    if let Some(date) = cli.date {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .context("stamp date has no midnight")?;
        request = request.date(Utc.from_utc_datetime(&midnight));
    }

    Ok(request)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let minter = Minter::new(config)?;
    let request = build_request(&cli)?;

    let stamp = minter.mint(&request)?;

    if cli.json {
        let report = MintReport {
            stamp: stamp.as_str(),
            format: stamp.format(),
            requested_denomination: stamp.requested_denomination(),
            denomination: stamp.denomination(),
            digest: stamp.digest().to_hex(),
            iterations: stamp.iterations(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{stamp}");
    }

    Ok(())
}

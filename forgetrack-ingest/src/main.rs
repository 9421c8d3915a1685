use std::io::Read;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use forgetrack_ingest::validate::{validate_ip_address, validate_mac_address, MSG_INVALID_IP, MSG_INVALID_MAC};
use forgetrack_ingest::{Config, Outcome, SystemInfoExtractor};
use shared::types::System;

/// Parse a pasted system-info dump into a ForgeTrack device record
#[derive(Parser)]
#[command(name = "forgetrack-ingest", version)]
struct Cli {
    /// TOML config file; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file holding the target device record
    #[arg(short, long)]
    system: PathBuf,

    /// Text file with the pasted report; read from stdin when omitted
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Print the merged record instead of the extraction result
    #[arg(long)]
    apply: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("forgetrack_ingest=info"))
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        None => Config::default(),
    };

    let system_json = std::fs::read_to_string(&cli.system)
        .with_context(|| format!("Failed to read system record: {}", cli.system.display()))?;
    let mut system: System = serde_json::from_str(&system_json)
        .with_context(|| format!("Failed to parse system record: {}", cli.system.display()))?;

    let report = match &cli.report {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read report: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read report from stdin")?;
            buf
        }
    };

    let extractor = SystemInfoExtractor::new(config.parser);
    let extraction = extractor.extract(&report, &system.snapshot());

    match extraction.outcome {
        Outcome::NoInput | Outcome::OsConflict => tracing::warn!("{}", extraction.message),
        Outcome::Applied => tracing::info!("{}", extraction.message),
    }

    if !extraction.changed(&system.snapshot()) {
        tracing::info!("No fields changed for {}", system.id);
    }

    extraction.updates.apply_to(&mut system);

    if !validate_mac_address(&system.mac_address) {
        tracing::warn!("{} Got {:?}", MSG_INVALID_MAC, system.mac_address);
    }
    if !validate_ip_address(&system.ip_address) {
        tracing::warn!("{} Got {:?}", MSG_INVALID_IP, system.ip_address);
    }

    let output = if cli.apply {
        serde_json::to_string_pretty(&system)
    } else {
        serde_json::to_string_pretty(&extraction)
    }
    .context("Failed to serialize output")?;

    println!("{}", output);
    Ok(())
}

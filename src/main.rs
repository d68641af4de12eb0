use std::path::PathBuf;

use anyhow::{Context, bail};
use log::{info, warn};
use sport_impact::loader::{load_config, load_program_record};
use sport_impact::{ImpactConfig, ImpactReport};

const USAGE: &str = "usage: sport-impact <snapshot.json> [--config <config.json>] [--json]";

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut snapshot: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut as_json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => as_json = true,
            "--config" => {
                let Some(path) = args.next() else {
                    bail!("--config needs a path\n{USAGE}");
                };
                config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            other if snapshot.is_none() => snapshot = Some(PathBuf::from(other)),
            other => bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }

    let Some(snapshot) = snapshot else {
        bail!("{USAGE}");
    };

    let config = match &config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ImpactConfig::default(),
    };

    info!("Loading program record from: {}", snapshot.display());
    let record = load_program_record(&snapshot)
        .with_context(|| format!("Failed to load program record from {}", snapshot.display()))?;

    let report = ImpactReport::build(&record, &config).context("Failed to build impact report")?;
    if !report.quality.is_clean() {
        warn!("{} data quality issue(s) found", report.quality.issues.len());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.summary());
    }

    Ok(())
}

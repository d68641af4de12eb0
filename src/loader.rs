//! Program record loading
//!
//! Snapshots come in two shapes: the record object itself, or a session
//! store dump keyed by storage name (`programsPage`, `programForm`,
//! `programs`) with the record under one of those keys.

use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use crate::config::ImpactConfig;
use crate::error::util::safe_read_to_string;
use crate::error::{ImpactError, Result};
use crate::models::program::ProgramRecord;

/// Storage keys a session dump may hold the record under, in priority order
pub const STORAGE_KEYS: &[&str] = &["programsPage", "programForm", "programs"];

/// Pick the program record out of a parsed snapshot
pub fn extract_program_record(snapshot: Value) -> Result<ProgramRecord> {
    let Value::Object(mut map) = snapshot else {
        return Err(ImpactError::RecordNotFound(
            "snapshot is not a JSON object".to_string(),
        ));
    };

    for key in STORAGE_KEYS {
        if matches!(map.get(*key), Some(Value::Object(_))) {
            debug!("Using program record stored under '{key}'");
            if let Some(record) = map.remove(*key) {
                return Ok(ProgramRecord::from_value(record));
            }
        }
    }

    Ok(ProgramRecord::from_value(Value::Object(map)))
}

/// Parse a program record from JSON text
pub fn parse_program_record(json: &str) -> Result<ProgramRecord> {
    let snapshot: Value = serde_json::from_str(json)?;
    extract_program_record(snapshot)
}

/// Load a program record from a JSON snapshot file
pub fn load_program_record(path: &Path) -> Result<ProgramRecord> {
    let content = safe_read_to_string(path, "program record snapshot")?;
    let record = parse_program_record(&content)?;
    info!(
        "Loaded program record from {} ({} sports, {} PA programs)",
        path.display(),
        record.sports.len(),
        record.pa.len()
    );
    Ok(record)
}

/// Load an impact configuration from a JSON file; missing keys keep defaults
pub fn load_config(path: &Path) -> Result<ImpactConfig> {
    let content = safe_read_to_string(path, "impact configuration")?;
    let config: ImpactConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

//! Utility functions for error handling
//!
//! Helpers that turn filesystem failures into errors that name the file
//! and the reason it was needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ImpactError, Result};

/// Read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(ImpactError::file_access(
            path,
            format!("File not found (needed for: {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(ImpactError::file_access(
            path,
            format!("Path is not a file (expected a file for: {purpose})"),
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        ImpactError::file_access_with_source(path, message, e)
    })
}

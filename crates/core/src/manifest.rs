//! Manifest reading
//!
//! Reads the two values nwpack needs out of a package's `package.json`: the
//! `main` entry point and the `dependencies.nw` version string. Both fields
//! are required; a missing field is fatal, never defaulted.

use crate::errors::{ManifestError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the manifest file expected directly inside the package directory
pub const MANIFEST_FILE: &str = "package.json";

/// The values extracted from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestValues {
    /// Application entry point, passed through to the tool verbatim
    pub main: String,
    /// NW.js version with any leading `^` compatibility marker removed
    pub nw_version: String,
}

/// Load `main` and `dependencies.nw` from the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<ManifestValues> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let json: Value = serde_json::from_str(&content).map_err(|e| ManifestError::Parsing {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let main = json
        .get("main")
        .and_then(Value::as_str)
        .ok_or_else(|| missing_field("main", path))?
        .to_string();

    let raw_version = json
        .get("dependencies")
        .and_then(|deps| deps.get("nw"))
        .and_then(Value::as_str)
        .ok_or_else(|| missing_field("dependencies/nw", path))?;

    // The version is sometimes published as "^x.y.z"; the caret marks a
    // minimum compatible version and must not reach the packaging tool.
    let nw_version = strip_caret(raw_version).to_string();

    debug!(main = %main, nw_version = %nw_version, "Extracted manifest values");

    Ok(ManifestValues { main, nw_version })
}

fn missing_field(field: &str, path: &Path) -> ManifestError {
    ManifestError::MissingField {
        field: field.to_string(),
        path: path.display().to_string(),
    }
}

/// Strip leading `^` characters from a version string.
fn strip_caret(raw: &str) -> &str {
    raw.trim_start_matches('^')
}

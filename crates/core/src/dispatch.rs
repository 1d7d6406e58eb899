//! Command construction and dispatch
//!
//! Builds the Web2Executable command line from the extracted manifest values
//! and runs it as a blocking child process. There is no retry and no timeout:
//! a single invocation either fully succeeds or the run fails.

use crate::errors::{DispatchError, Result};
use crate::manifest::{self, ManifestValues, MANIFEST_FILE};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// File name of the packaging tool, installed next to the nwpack binary
pub const TOOL_FILE: &str = "command_line.py";

/// Environment variable overriding the resolved tool path
pub const TOOL_ENV: &str = "NWPACK_TOOL";

/// Target platform passed to the tool
const EXPORT_TARGET: &str = "linux-x32";

/// Compression level passed to the tool
const COMPRESSION_LEVEL: &str = "9";

/// Resolve the packaging tool's path.
///
/// The tool lives next to the installed nwpack executable, not in the current
/// working directory or the package directory. `NWPACK_TOOL` overrides the
/// resolved path for relocated installs.
pub fn resolve_tool_path() -> Result<PathBuf> {
    if let Some(tool) = env::var_os(TOOL_ENV) {
        return Ok(PathBuf::from(tool));
    }

    let exe = env::current_exe().map_err(|e| DispatchError::ToolResolution { source: e })?;
    Ok(exe.parent().unwrap_or_else(|| Path::new(".")).join(TOOL_FILE))
}

/// Build the full command vector for the packaging tool.
///
/// The tool parses its arguments positionally and by flag name, so the order
/// here is part of the contract.
pub fn build_command(
    tool: &Path,
    package_dir: &Path,
    outdir: &str,
    manifest_path: &Path,
    values: &ManifestValues,
) -> Vec<OsString> {
    vec![
        tool.as_os_str().to_os_string(),
        package_dir.as_os_str().to_os_string(),
        OsString::from("--export-to"),
        OsString::from(EXPORT_TARGET),
        OsString::from("--nw-version"),
        OsString::from(&values.nw_version),
        OsString::from("--nw-compression-level"),
        OsString::from(COMPRESSION_LEVEL),
        OsString::from("--output-dir"),
        package_dir.join(outdir).into_os_string(),
        OsString::from("--package-json"),
        manifest_path.as_os_str().to_os_string(),
        OsString::from("--main"),
        OsString::from(&values.main),
    ]
}

/// Render a command vector for diagnostics.
fn render_command(command: &[OsString]) -> String {
    shell_words::join(command.iter().map(|arg| arg.to_string_lossy()))
}

/// Run a packaging build for the package at `package_dir`, writing results
/// into the `outdir` subdirectory.
///
/// Checks the directory and manifest preconditions, reads the manifest, then
/// launches the packaging tool and blocks until it exits. A non-zero exit from
/// the tool is an error carrying the full command line for diagnostics.
pub fn run_build(package_dir: &Path, outdir: &str) -> Result<()> {
    let tool = resolve_tool_path()?;
    run_build_with_tool(&tool, package_dir, outdir)
}

/// Like [`run_build`], but with an explicit tool path.
pub fn run_build_with_tool(tool: &Path, package_dir: &Path, outdir: &str) -> Result<()> {
    // Precondition checks come first; the manifest is never opened for a bad
    // package directory.
    if !package_dir.is_dir() {
        return Err(DispatchError::NotADirectory {
            path: package_dir.display().to_string(),
        }
        .into());
    }

    let manifest_path = package_dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(DispatchError::MissingManifest {
            path: manifest_path.display().to_string(),
        }
        .into());
    }

    let values = manifest::load_manifest(&manifest_path)?;
    let command = build_command(tool, package_dir, outdir, &manifest_path, &values);

    debug!("command = {}", render_command(&command));

    let status = Command::new(&command[0])
        .args(&command[1..])
        .status()
        .map_err(|e| DispatchError::Spawn { source: e })?;

    if !status.success() {
        return Err(DispatchError::SubprocessFailure {
            command: render_command(&command),
            // code() is None when the child was killed by a signal
            code: status.code().unwrap_or(-1),
        }
        .into());
    }

    info!("Packaging finished for {}", package_dir.display());
    Ok(())
}

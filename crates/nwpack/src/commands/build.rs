//! Build command implementation
//!
//! Validates the package directory, reads its manifest, and delegates the
//! actual packaging work to the external tool via `nwpack_core::dispatch`.

use anyhow::Result;
use nwpack_core::dispatch;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Build command arguments
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Directory containing the package to build
    pub path: PathBuf,
    /// Subdirectory of `path` receiving build products
    pub outdir: String,
}

/// Execute the build command
#[instrument(skip(args))]
pub fn execute_build(args: BuildArgs) -> Result<()> {
    debug!("Build args: {:?}", args);

    dispatch::run_build(&args.path, &args.outdir)?;
    Ok(())
}

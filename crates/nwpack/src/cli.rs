use crate::commands::build::{execute_build, BuildArgs};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log format options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    Text,
    /// JSON structured format
    Json,
}

/// Log level options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Informational messages and above
    Info,
    /// Debug messages and above
    Debug,
    /// All messages including trace
    Trace,
}

/// NW.js packaging wrapper
///
/// Reads the entry point and NW.js version out of a package's package.json
/// and delegates the build to Web2Executable's command_line.py.
#[derive(Debug, Parser)]
#[command(
    name = "nwpack",
    version,
    about = "NW.js packaging wrapper",
    long_about = "NW.js packaging wrapper\n\n\
                  Reads `main` and `dependencies.nw` from a package's package.json and \
                  invokes the Web2Executable packaging tool with them."
)]
pub struct Cli {
    /// Path to where the code to be packaged lives
    pub path: PathBuf,

    /// Directory (under 'path') where build products are written
    pub outdir: String,

    /// Log format (text or json)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Initialize logging from the global options, then run the build.
    pub fn dispatch(self) -> Result<()> {
        let log_format = match self.log_format {
            Some(LogFormat::Text) => Some("text"),
            Some(LogFormat::Json) => Some("json"),
            None => None, // Let the logging module check the environment
        };

        let log_level = match self.log_level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        // Set the filter before initializing logging, unless the user already
        // pinned one via the environment.
        if std::env::var_os("NWPACK_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
            std::env::set_var(
                "RUST_LOG",
                format!("nwpack={},nwpack_core={}", log_level, log_level),
            );
        }
        nwpack_core::logging::init(log_format)?;

        tracing::debug!("CLI initialized with log level: {}", log_level);

        execute_build(BuildArgs {
            path: self.path,
            outdir: self.outdir,
        })
    }
}

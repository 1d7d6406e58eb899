//! Core library for the nwpack CLI
//!
//! This crate contains the shared logic for manifest reading, packaging tool
//! dispatch, logging, and error handling.

pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod manifest;

/// Get the version of the core library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

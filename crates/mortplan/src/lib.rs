//! Command-line front end for the mortgage calculator.
//!
//! Loads a YAML config, builds the mortgage, runs the configured
//! sensitivity analyses, and renders the report to stdout.

pub mod config;
pub mod logging;
pub mod report;
pub mod util;

pub use logging::init_logging;

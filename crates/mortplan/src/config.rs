//! YAML configuration loading.
//!
//! The config file has two sections:
//!
//! ```yaml
//! mortgage:
//!   house_cost: 400000
//!   percent_down: 10
//!   annual_taxes: 6000
//!   percent_interest: 6.5
//!   term_months: 360
//!
//! analysis:
//!   sweeps:
//!     - field: percent_interest
//!       percent_changes: [-10, 0, 10]
//! ```
//!
//! The `mortgage` section is required; `analysis` defaults to no sweeps.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use mortplan_core::analysis::{SweepSpec, TraceConfig};
use mortplan_core::{MortgageParams, OutputField};

/// Error types for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level structure of the config file
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub mortgage: MortgageParams,
    #[serde(default)]
    pub analysis: AnalysisSection,
}

/// The `analysis:` section of the config file
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSection {
    /// Outputs reported for each sweep point
    #[serde(default = "default_outputs")]
    pub outputs: Vec<OutputField>,
    /// Percent sweeps to run
    #[serde(default)]
    pub sweeps: Vec<SweepSpec>,
    /// Optional trace (inverse sensitivity) analysis
    #[serde(default)]
    pub trace: Option<TraceConfig>,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            outputs: default_outputs(),
            sweeps: Vec::new(),
            trace: None,
        }
    }
}

fn default_outputs() -> Vec<OutputField> {
    vec![
        OutputField::MonthlyPayment,
        OutputField::MonthlyTotalCost,
        OutputField::LifetimeCost,
    ]
}

/// Load and parse the config file.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_saphyr::from_str(&content)
        .map_err(|e| ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
}

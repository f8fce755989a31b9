//! Configuration types for sensitivity analysis.

use serde::{Deserialize, Serialize};

use crate::mortgage::{InputField, OutputField};

/// One percent-change sweep over a single input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    /// The input to perturb
    pub field: InputField,
    /// Percent changes to apply to the base value (0 means no change)
    pub percent_changes: Vec<f64>,
}

impl SweepSpec {
    /// Absolute input values for each configured percent change
    pub fn sweep_values(&self, base: f64) -> Vec<f64> {
        self.percent_changes
            .iter()
            .map(|pct| base * (1.0 + pct / 100.0))
            .collect()
    }
}

/// One linear trace sweep over a single input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSpec {
    /// The input to sweep
    pub field: InputField,
    /// Absolute distance to sweep from the base value
    pub span: f64,
}

/// Configuration for trace (inverse sensitivity) analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// The output whose response is surveyed
    pub output: OutputField,
    /// Target percent increase in the surveyed output
    pub percent_increase: f64,
    /// Dollar change in the output to attribute back to each input
    pub output_change: f64,
    /// Number of points in each linear sweep
    #[serde(default = "default_num_values")]
    pub num_values: usize,
    /// Inputs to trace, each with its sweep span
    pub spans: Vec<TraceSpec>,
}

fn default_num_values() -> usize {
    25
}

/// Evenly spaced values from `start` to `stop` inclusive
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

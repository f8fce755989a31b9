//! Sensitivity analysis over mortgage inputs.
//!
//! Two kinds of analysis are supported:
//!
//! 1. **Percent sweeps** (`sweep_evaluate`): perturb an input by each of a
//!    list of percent changes and report the resulting output deltas.
//! 2. **Trace analysis** (`trace_evaluate`): sweep an input linearly across
//!    a configured span and interpolate the input delta that produces a
//!    target percent increase in a surveyed output.
//!
//! ```ignore
//! use mortplan_core::analysis::{SweepSpec, sweep_evaluate};
//! use mortplan_core::{InputField, OutputField};
//!
//! let specs = vec![SweepSpec {
//!     field: InputField::PercentInterest,
//!     percent_changes: vec![-10.0, 0.0, 10.0],
//! }];
//! let sweeps = sweep_evaluate(&mortgage, &specs, &[OutputField::MonthlyPayment])?;
//! ```

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;

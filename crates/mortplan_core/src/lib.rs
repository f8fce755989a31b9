//! Mortgage calculation library
//!
//! This crate computes the full cost picture of a fixed-rate mortgage and
//! runs sensitivity analyses over its inputs. It supports:
//! - Monthly principal-and-interest payment via standard amortization
//! - PMI duration and cost, closing costs, and upfront cash
//! - Monthly and lifetime carrying-cost totals
//! - Percent sweeps: output deltas for configured percent changes of an input
//! - Trace analysis: the input change required for a target output increase
//!
//! # Example
//!
//! ```ignore
//! use mortplan_core::{Mortgage, MortgageParams};
//!
//! let mortgage = Mortgage::new(MortgageParams {
//!     house_cost: 400_000.0,
//!     percent_down: 10.0,
//!     annual_taxes: 6_000.0,
//!     percent_interest: 6.5,
//!     term_months: 360,
//!     percent_pmi: 0.5,
//!     annual_homeowner_cost: 1_800.0,
//!     monthly_bills: 350.0,
//! })?;
//! println!("{:.2}/mo", mortgage.monthly_total_cost());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod mortgage;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{SweepError, ValidationError};
pub use mortgage::{InputField, Mortgage, MortgageBreakdown, MortgageParams, OutputField};

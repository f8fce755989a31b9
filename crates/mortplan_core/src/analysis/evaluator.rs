//! Sweep and trace evaluators - rebuild the mortgage at each swept point.

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::mortgage::{InputField, Mortgage, OutputField};

use super::{SweepSpec, TraceConfig, linspace};

/// One output evaluated at a swept point, with deltas against the base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDelta {
    pub output: OutputField,
    /// Output value at the swept point
    pub value: f64,
    /// Absolute change against the base mortgage
    pub delta: f64,
    /// Percent change against the base mortgage (0 when the base is 0)
    pub percent_delta: f64,
}

/// One swept point of a percent sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// The configured percent change applied to the input
    pub percent_change: f64,
    /// The resulting absolute input value
    pub input_value: f64,
    pub outputs: Vec<OutputDelta>,
}

/// All swept points for one input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSweep {
    pub field: InputField,
    pub base_value: f64,
    pub points: Vec<SweepPoint>,
}

/// Run percent sweeps: perturb each spec's input by each configured percent
/// change, rebuild the mortgage, and evaluate the requested outputs.
///
/// A 0% change reports a 0 delta. Perturbations that push a parameter out of
/// its valid range surface the underlying validation error.
pub fn sweep_evaluate(
    base: &Mortgage,
    specs: &[SweepSpec],
    outputs: &[OutputField],
) -> Result<Vec<FieldSweep>, SweepError> {
    if specs.is_empty() {
        return Err(SweepError::EmptySweep);
    }
    if outputs.is_empty() {
        return Err(SweepError::NoOutputs);
    }

    let base_outputs: Vec<f64> = outputs.iter().map(|o| o.compute(base)).collect();

    let mut sweeps = Vec::with_capacity(specs.len());
    for spec in specs {
        let base_value = base.input(spec.field);
        let mut points = Vec::with_capacity(spec.percent_changes.len());

        for (&pct, input_value) in spec.percent_changes.iter().zip(spec.sweep_values(base_value)) {
            let perturbed = base.with_input(spec.field, input_value)?;
            let deltas = outputs
                .iter()
                .zip(&base_outputs)
                .map(|(output, &base_output)| {
                    let value = output.compute(&perturbed);
                    let delta = value - base_output;
                    let percent_delta = if base_output == 0.0 {
                        0.0
                    } else {
                        delta / base_output * 100.0
                    };
                    OutputDelta {
                        output: *output,
                        value,
                        delta,
                        percent_delta,
                    }
                })
                .collect();
            points.push(SweepPoint {
                percent_change: pct,
                input_value,
                outputs: deltas,
            });
        }

        sweeps.push(FieldSweep {
            field: spec.field,
            base_value,
            points,
        });
    }

    Ok(sweeps)
}

/// Result of tracing one input against the surveyed output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceResult {
    pub field: InputField,
    pub output: OutputField,
    pub base_input: f64,
    pub base_output: f64,
    /// Target percent increase in the output
    pub target_percent: f64,
    /// Dollar increase in the output corresponding to the target percent
    pub output_increase: f64,
    /// Configured dollar change in the output attributed back to the input
    pub output_change: f64,
    /// Input change that produces the target percent increase
    pub input_delta: f64,
    /// Input change corresponding to the configured dollar output change
    pub input_delta_per_output_change: f64,
}

/// Run trace analysis: for each configured input, sweep it linearly across
/// its span and interpolate the input delta that moves the surveyed output
/// by the target percentage.
///
/// The interpolation finds the first sweep point whose absolute percent
/// change exceeds the target and scales its input delta linearly. A falling
/// output (for example monthly cost against a growing down payment) yields a
/// negative delta: the input must move the other way to raise the output.
pub fn trace_evaluate(base: &Mortgage, config: &TraceConfig) -> Result<Vec<TraceResult>, SweepError> {
    if config.spans.is_empty() {
        return Err(SweepError::EmptySweep);
    }
    if config.num_values < 2 {
        return Err(SweepError::InvalidPointCount(config.num_values));
    }

    let mut results = Vec::with_capacity(config.spans.len());
    for spec in &config.spans {
        let base_input = base.input(spec.field);
        let values = linspace(base_input, base_input + spec.span, config.num_values);

        let mut output_vals = Vec::with_capacity(values.len());
        for &value in &values {
            let perturbed = base.with_input(spec.field, value)?;
            output_vals.push(config.output.compute(&perturbed));
        }

        let base_output = output_vals[0];
        if base_output == 0.0 {
            return Err(SweepError::ZeroBaseOutput(config.output));
        }

        let crossing = output_vals.iter().zip(&values).skip(1).find_map(|(&v, &input)| {
            let percent_change = (v - base_output) / base_output * 100.0;
            (percent_change.abs() > config.percent_increase)
                .then_some((input - base_input, percent_change))
        });
        let Some((input_span, percent_change)) = crossing else {
            return Err(SweepError::TargetNotReached {
                field: spec.field,
                target_percent: config.percent_increase,
            });
        };

        let input_delta = input_span * config.percent_increase / percent_change;
        let output_increase = config.percent_increase / 100.0 * base_output;
        results.push(TraceResult {
            field: spec.field,
            output: config.output,
            base_input,
            base_output,
            target_percent: config.percent_increase,
            output_increase,
            output_change: config.output_change,
            input_delta,
            input_delta_per_output_change: input_delta * config.output_change / output_increase,
        });
    }

    Ok(results)
}

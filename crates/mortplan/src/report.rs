//! Report rendering for stdout.
//!
//! The text form prints the full mortgage breakdown followed by one table
//! per sensitivity sweep and one line per trace result. The same `Report`
//! serializes to JSON for `--format json`.

use std::fmt;

use serde::Serialize;

use mortplan_core::MortgageBreakdown;
use mortplan_core::analysis::{FieldSweep, OutputDelta, TraceResult};

use crate::util::format::{format_currency, format_percent, format_signed_currency};

/// Everything the run produced, in rendering order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub breakdown: MortgageBreakdown,
    pub sweeps: Vec<FieldSweep>,
    pub trace: Vec<TraceResult>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_breakdown(f, &self.breakdown)?;
        if !self.sweeps.is_empty() {
            writeln!(f, "Sensitivity Sweeps")?;
            writeln!(f)?;
            for sweep in &self.sweeps {
                write_sweep(f, sweep)?;
            }
        }
        if !self.trace.is_empty() {
            writeln!(f, "Trace Analysis")?;
            writeln!(f)?;
            for result in &self.trace {
                write_trace(f, result)?;
            }
        }
        Ok(())
    }
}

fn write_breakdown(f: &mut fmt::Formatter<'_>, b: &MortgageBreakdown) -> fmt::Result {
    writeln!(f, "Mortgage Breakdown")?;
    writeln!(f)?;
    let rows = [
        ("House Cost:", format_currency(b.house_cost)),
        ("Down Payment:", format_currency(b.down_payment)),
        ("Closing Costs:", format_currency(b.closing_cost)),
        ("Total Upfront Costs:", format_currency(b.upfront_cost)),
        ("Loan Amount:", format_currency(b.loan_amount)),
        (
            "Monthly Interest:",
            format_percent(b.monthly_rate * 100.0),
        ),
    ];
    for (label, value) in rows {
        writeln!(f, "  {label:<26} {value:>15}")?;
    }
    writeln!(f)?;
    let monthly_rows = [
        ("Monthly P/I Cost:", b.monthly_payment),
        ("Monthly PMI Cost:", b.monthly_pmi_cost),
        ("Monthly Tax Cost:", b.monthly_tax_cost),
        ("Monthly Home Ins Cost:", b.monthly_homeowner_cost),
        ("Monthly Bills:", b.monthly_bills),
        ("Monthly Total Cost:", b.monthly_total_cost),
        ("Monthly Total minus PMI:", b.monthly_total_cost_minus_pmi),
    ];
    for (label, value) in monthly_rows {
        writeln!(f, "  {label:<26} {:>15} / mo", format_currency(value))?;
    }
    writeln!(f)?;
    writeln!(f, "  {:<26} {:>15}", "Months of PMI:", b.pmi_months)?;
    let lifetime_rows = [
        ("Lifetime PMI Cost:", b.total_pmi_cost),
        ("Lifetime P/I Cost:", b.lifetime_payment),
        ("Lifetime Mortgage Cost:", b.lifetime_mortgage),
        ("Lifetime Total Cost:", b.lifetime_cost),
    ];
    for (label, value) in lifetime_rows {
        writeln!(f, "  {label:<26} {:>15}", format_currency(value))?;
    }
    writeln!(f)
}

fn write_sweep(f: &mut fmt::Formatter<'_>, sweep: &FieldSweep) -> fmt::Result {
    writeln!(f, "  {} (base {:.2})", sweep.field, sweep.base_value)?;

    let Some(first) = sweep.points.first() else {
        return writeln!(f);
    };
    write!(f, "  {:>9}", "change")?;
    for delta in &first.outputs {
        write!(f, "  {:<28}", delta.output.label())?;
    }
    writeln!(f)?;

    for point in &sweep.points {
        write!(f, "  {:>9}", format_percent(point.percent_change))?;
        for delta in &point.outputs {
            write!(f, "  {:<28}", delta_cell(delta))?;
        }
        writeln!(f)?;
    }
    writeln!(f)
}

fn delta_cell(delta: &OutputDelta) -> String {
    format!(
        "{} ({:+.2}%)",
        format_signed_currency(delta.delta),
        delta.percent_delta
    )
}

fn write_trace(f: &mut fmt::Formatter<'_>, t: &TraceResult) -> fmt::Result {
    writeln!(
        f,
        "  A {} increase ({}) in {} corresponds to a change in {} of {:.2}",
        format_percent(t.target_percent),
        format_currency(t.output_increase),
        t.output,
        t.field,
        t.input_delta,
    )?;
    writeln!(
        f,
        "  A {} change in {} corresponds to a change in {} of {:.2}",
        format_currency(t.output_change),
        t.output,
        t.field,
        t.input_delta_per_output_change,
    )?;
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortplan_core::analysis::{SweepSpec, TraceConfig, TraceSpec, sweep_evaluate, trace_evaluate};
    use mortplan_core::{InputField, Mortgage, MortgageParams, OutputField};

    fn mortgage() -> Mortgage {
        Mortgage::new(MortgageParams {
            house_cost: 300_000.0,
            percent_down: 0.0,
            annual_taxes: 6_000.0,
            percent_interest: 6.0,
            term_months: 360,
            percent_pmi: 0.5,
            annual_homeowner_cost: 1_200.0,
            monthly_bills: 0.0,
        })
        .unwrap()
    }

    fn report() -> Report {
        let mortgage = mortgage();
        let sweeps = sweep_evaluate(
            &mortgage,
            &[SweepSpec {
                field: InputField::PercentInterest,
                percent_changes: vec![-10.0, 0.0, 10.0],
            }],
            &[OutputField::MonthlyPayment, OutputField::LifetimeCost],
        )
        .unwrap();
        let trace = trace_evaluate(
            &mortgage,
            &TraceConfig {
                output: OutputField::MonthlyTotalCost,
                percent_increase: 5.0,
                output_change: 100.0,
                num_values: 40,
                spans: vec![TraceSpec {
                    field: InputField::AnnualTaxes,
                    span: 5_000.0,
                }],
            },
        )
        .unwrap();
        Report {
            breakdown: mortgage.breakdown(),
            sweeps,
            trace,
        }
    }

    #[test]
    fn test_text_report_contains_breakdown() {
        let text = report().to_string();
        assert!(text.contains("Mortgage Breakdown"));
        assert!(text.contains("$1,798.65"));
        assert!(text.contains("$300,000.00"));
    }

    #[test]
    fn test_text_report_contains_sweep_table() {
        let text = report().to_string();
        assert!(text.contains("Sensitivity Sweeps"));
        assert!(text.contains("percent_interest (base 6.00)"));
        assert!(text.contains("monthly_payment"));
        assert!(text.contains("-10.00%"));
    }

    #[test]
    fn test_text_report_contains_trace_lines() {
        let text = report().to_string();
        assert!(text.contains("Trace Analysis"));
        assert!(text.contains("corresponds to a change in annual_taxes"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let json = serde_json::to_string_pretty(&report()).unwrap();
        assert!(json.contains("\"monthly_payment\""));
        assert!(json.contains("\"sweeps\""));
        assert!(json.contains("\"input_delta\""));
    }
}

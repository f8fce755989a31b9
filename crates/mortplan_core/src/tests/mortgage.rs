//! Tests for payment math, PMI, lifetime totals, and validation

use crate::error::ValidationError;
use crate::mortgage::{InputField, Mortgage, MortgageParams};

fn base_params() -> MortgageParams {
    MortgageParams {
        house_cost: 400_000.0,
        percent_down: 10.0,
        annual_taxes: 6_000.0,
        percent_interest: 6.5,
        term_months: 360,
        percent_pmi: 0.5,
        annual_homeowner_cost: 1_800.0,
        monthly_bills: 350.0,
    }
}

/// Textbook case: $300k at 6% over 30 years is about $1798.65/mo
#[test]
fn test_monthly_payment_reference_value() {
    let mortgage = Mortgage::new(MortgageParams {
        house_cost: 300_000.0,
        percent_down: 0.0,
        annual_taxes: 0.0,
        percent_interest: 6.0,
        term_months: 360,
        percent_pmi: 0.0,
        annual_homeowner_cost: 0.0,
        monthly_bills: 0.0,
    })
    .unwrap();

    let payment = mortgage.monthly_payment();
    assert!(
        (payment - 1798.65).abs() < 0.01,
        "expected ~1798.65, got {payment:.4}"
    );
}

/// A zero-rate loan amortizes linearly: payment is loan / term
#[test]
fn test_zero_interest_amortizes_linearly() {
    let mortgage = Mortgage::new(MortgageParams {
        house_cost: 120_000.0,
        percent_down: 0.0,
        annual_taxes: 0.0,
        percent_interest: 0.0,
        term_months: 120,
        percent_pmi: 0.0,
        annual_homeowner_cost: 0.0,
        monthly_bills: 0.0,
    })
    .unwrap();

    assert_eq!(mortgage.monthly_payment(), 1_000.0);
}

#[test]
fn test_lifetime_payment_is_monthly_times_term() {
    let mortgage = Mortgage::new(base_params()).unwrap();
    assert_eq!(
        mortgage.lifetime_payment(),
        mortgage.monthly_payment() * 360.0
    );
}

/// Raising the rate with everything else fixed must raise the payment
#[test]
fn test_interest_rate_strictly_increases_payment() {
    let mortgage = Mortgage::new(base_params()).unwrap();

    let mut previous = Mortgage::new(MortgageParams {
        percent_interest: 0.0,
        ..base_params()
    })
    .unwrap()
    .monthly_payment();

    for rate in 1..=12 {
        let payment = mortgage
            .with_input(InputField::PercentInterest, f64::from(rate))
            .unwrap()
            .monthly_payment();
        assert!(
            payment > previous,
            "payment at {rate}% ({payment:.2}) not above payment at {}% ({previous:.2})",
            rate - 1
        );
        previous = payment;
    }
}

/// $100k house, 10% down at 6%: equity hits 20% after 89 payments
#[test]
fn test_pmi_months_reference_value() {
    let mortgage = Mortgage::new(MortgageParams {
        house_cost: 100_000.0,
        percent_down: 10.0,
        annual_taxes: 0.0,
        percent_interest: 6.0,
        term_months: 360,
        percent_pmi: 0.5,
        annual_homeowner_cost: 0.0,
        monthly_bills: 0.0,
    })
    .unwrap();

    assert_eq!(mortgage.pmi_months(), 89);
}

/// Zero-rate PMI falls back to the linear-equity branch:
/// $10k of equity needed at $250 of principal per month is 40 months
#[test]
fn test_pmi_months_zero_interest() {
    let mortgage = Mortgage::new(MortgageParams {
        house_cost: 100_000.0,
        percent_down: 10.0,
        annual_taxes: 0.0,
        percent_interest: 0.0,
        term_months: 360,
        percent_pmi: 0.5,
        annual_homeowner_cost: 0.0,
        monthly_bills: 0.0,
    })
    .unwrap();

    assert_eq!(mortgage.pmi_months(), 40);
}

#[test]
fn test_no_pmi_with_twenty_percent_down() {
    let mortgage = Mortgage::new(MortgageParams {
        percent_down: 20.0,
        ..base_params()
    })
    .unwrap();

    assert_eq!(mortgage.pmi_months(), 0);
    assert_eq!(mortgage.monthly_pmi_cost(), 0.0);
    assert_eq!(mortgage.total_pmi_cost(), 0.0);
}

#[test]
fn test_monthly_total_is_sum_of_parts() {
    let mortgage = Mortgage::new(base_params()).unwrap();
    let expected = mortgage.monthly_payment()
        + mortgage.monthly_pmi_cost()
        + mortgage.monthly_tax_cost()
        + mortgage.monthly_homeowner_cost()
        + mortgage.params().monthly_bills;
    assert!((mortgage.monthly_total_cost() - expected).abs() < 1e-9);
}

#[test]
fn test_lifetime_mortgage_composition() {
    let mortgage = Mortgage::new(base_params()).unwrap();
    let expected =
        mortgage.lifetime_payment() + mortgage.total_pmi_cost() + mortgage.down_payment();
    assert!((mortgage.lifetime_mortgage() - expected).abs() < 1e-9);
}

#[test]
fn test_upfront_cost() {
    let mortgage = Mortgage::new(base_params()).unwrap();
    // 2.84% closing on $400k plus $40k down
    assert!((mortgage.closing_cost() - 11_360.0).abs() < 1e-9);
    assert!((mortgage.upfront_cost() - 51_360.0).abs() < 1e-9);
}

#[test]
fn test_validation_rejects_bad_params() {
    assert_eq!(
        Mortgage::new(MortgageParams {
            term_months: 0,
            ..base_params()
        })
        .unwrap_err(),
        ValidationError::ZeroTerm
    );

    assert!(matches!(
        Mortgage::new(MortgageParams {
            house_cost: -1.0,
            ..base_params()
        })
        .unwrap_err(),
        ValidationError::NonPositive {
            field: "house_cost",
            ..
        }
    ));

    assert!(matches!(
        Mortgage::new(MortgageParams {
            percent_interest: 150.0,
            ..base_params()
        })
        .unwrap_err(),
        ValidationError::PercentOutOfRange {
            field: "percent_interest",
            ..
        }
    ));

    assert!(matches!(
        Mortgage::new(MortgageParams {
            annual_taxes: -500.0,
            ..base_params()
        })
        .unwrap_err(),
        ValidationError::Negative {
            field: "annual_taxes",
            ..
        }
    ));
}

#[test]
fn test_breakdown_matches_methods() {
    let mortgage = Mortgage::new(base_params()).unwrap();
    let breakdown = mortgage.breakdown();

    assert_eq!(breakdown.monthly_payment, mortgage.monthly_payment());
    assert_eq!(breakdown.pmi_months, mortgage.pmi_months());
    assert_eq!(breakdown.monthly_total_cost, mortgage.monthly_total_cost());
    assert_eq!(breakdown.lifetime_cost, mortgage.lifetime_cost());
    assert_eq!(breakdown.loan_amount, 360_000.0);
}

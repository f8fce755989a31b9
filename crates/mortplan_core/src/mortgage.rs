//! Mortgage parameters and derived cost figures.
//!
//! A [`Mortgage`] wraps validated [`MortgageParams`] and exposes every
//! derived figure as a method. Construction is the only fallible step;
//! once built, all figures are total functions of the parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Closing costs as a fraction of house cost
pub const CLOSING_COST_RATIO: f64 = 0.0284;
/// PMI is dropped once equity reaches this fraction of house cost
pub const PMI_EQUITY_STOP: f64 = 0.2;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Input parameters of a mortgage, as loaded from configuration.
///
/// Percentages are expressed 0-100, dollar amounts in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageParams {
    /// Total cost of the house in dollars
    pub house_cost: f64,
    /// Percent of house cost paid down up front
    pub percent_down: f64,
    /// Property taxes per year
    pub annual_taxes: f64,
    /// Annual interest rate on the loan (APR)
    pub percent_interest: f64,
    /// Loan term in months
    pub term_months: u32,
    /// Annual PMI rate charged on the loan amount until 20% equity
    #[serde(default)]
    pub percent_pmi: f64,
    /// Homeowner insurance per year
    #[serde(default)]
    pub annual_homeowner_cost: f64,
    /// Utilities and other bills per month
    #[serde(default)]
    pub monthly_bills: f64,
}

impl MortgageParams {
    /// Check every field against its valid range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.house_cost <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: "house_cost",
                value: self.house_cost,
            });
        }
        if self.term_months == 0 {
            return Err(ValidationError::ZeroTerm);
        }
        for (field, value) in [
            ("percent_down", self.percent_down),
            ("percent_interest", self.percent_interest),
            ("percent_pmi", self.percent_pmi),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::PercentOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("annual_taxes", self.annual_taxes),
            ("annual_homeowner_cost", self.annual_homeowner_cost),
            ("monthly_bills", self.monthly_bills),
        ] {
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// Input parameters that sensitivity sweeps can vary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    HouseCost,
    PercentDown,
    PercentInterest,
    AnnualTaxes,
}

impl InputField {
    /// Name matching the configuration key
    pub fn label(&self) -> &'static str {
        match self {
            InputField::HouseCost => "house_cost",
            InputField::PercentDown => "percent_down",
            InputField::PercentInterest => "percent_interest",
            InputField::AnnualTaxes => "annual_taxes",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived figures that sweeps and reports can survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputField {
    MonthlyPayment,
    MonthlyTotalCost,
    LifetimePayment,
    LifetimeMortgage,
    LifetimeCost,
    UpfrontCost,
}

impl OutputField {
    /// Name matching the configuration key
    pub fn label(&self) -> &'static str {
        match self {
            OutputField::MonthlyPayment => "monthly_payment",
            OutputField::MonthlyTotalCost => "monthly_total_cost",
            OutputField::LifetimePayment => "lifetime_payment",
            OutputField::LifetimeMortgage => "lifetime_mortgage",
            OutputField::LifetimeCost => "lifetime_cost",
            OutputField::UpfrontCost => "upfront_cost",
        }
    }

    /// Evaluate this output for a mortgage
    pub fn compute(&self, mortgage: &Mortgage) -> f64 {
        match self {
            OutputField::MonthlyPayment => mortgage.monthly_payment(),
            OutputField::MonthlyTotalCost => mortgage.monthly_total_cost(),
            OutputField::LifetimePayment => mortgage.lifetime_payment(),
            OutputField::LifetimeMortgage => mortgage.lifetime_mortgage(),
            OutputField::LifetimeCost => mortgage.lifetime_cost(),
            OutputField::UpfrontCost => mortgage.upfront_cost(),
        }
    }
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated mortgage
#[derive(Debug, Clone, PartialEq)]
pub struct Mortgage {
    params: MortgageParams,
}

impl Mortgage {
    /// Validate the parameters and wrap them.
    pub fn new(params: MortgageParams) -> Result<Self, ValidationError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &MortgageParams {
        &self.params
    }

    /// Read the base value of a sweepable input
    pub fn input(&self, field: InputField) -> f64 {
        match field {
            InputField::HouseCost => self.params.house_cost,
            InputField::PercentDown => self.params.percent_down,
            InputField::PercentInterest => self.params.percent_interest,
            InputField::AnnualTaxes => self.params.annual_taxes,
        }
    }

    /// Rebuild the mortgage with one input replaced, revalidating.
    pub fn with_input(&self, field: InputField, value: f64) -> Result<Self, ValidationError> {
        let mut params = self.params.clone();
        match field {
            InputField::HouseCost => params.house_cost = value,
            InputField::PercentDown => params.percent_down = value,
            InputField::PercentInterest => params.percent_interest = value,
            InputField::AnnualTaxes => params.annual_taxes = value,
        }
        Self::new(params)
    }

    /// Down payment in dollars
    pub fn down_payment(&self) -> f64 {
        self.params.house_cost * self.params.percent_down / 100.0
    }

    /// Closing costs in dollars
    pub fn closing_cost(&self) -> f64 {
        CLOSING_COST_RATIO * self.params.house_cost
    }

    /// Cash due at signing: closing costs plus down payment
    pub fn upfront_cost(&self) -> f64 {
        self.closing_cost() + self.down_payment()
    }

    /// Amount borrowed: house cost minus down payment
    pub fn loan_amount(&self) -> f64 {
        self.params.house_cost - self.down_payment()
    }

    /// Monthly interest rate as a fraction (APR / 100 / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.params.percent_interest / 100.0 / MONTHS_PER_YEAR
    }

    /// Monthly principal-and-interest payment.
    ///
    /// Standard amortization: `L * r * (1+r)^n / ((1+r)^n - 1)`.
    /// Zero-rate loans amortize linearly to `L / n`.
    pub fn monthly_payment(&self) -> f64 {
        let loan = self.loan_amount();
        let n = f64::from(self.params.term_months);
        let r = self.monthly_rate();
        if r == 0.0 {
            return loan / n;
        }
        let compound = (1.0 + r).powf(n);
        loan * (r * compound) / (compound - 1.0)
    }

    /// Number of months PMI is charged before equity reaches 20% of house cost.
    ///
    /// Closed form over the compound factor `c = (1+r)^n`:
    /// `ceil(ln(c - (1 - stop) * (c - 1) * house/loan) / ln(1+r))`.
    pub fn pmi_months(&self) -> u32 {
        let loan = self.loan_amount();
        if loan <= 0.0 {
            return 0;
        }
        let equity_target = PMI_EQUITY_STOP * self.params.house_cost;
        if self.down_payment() >= equity_target {
            return 0;
        }
        let n = f64::from(self.params.term_months);
        let r = self.monthly_rate();
        if r == 0.0 {
            // Equal principal slices of loan/n per month
            let needed = equity_target - self.down_payment();
            return (needed / (loan / n)).ceil().min(n) as u32;
        }
        let compound = (1.0 + r).powf(n);
        let arg =
            compound - (1.0 - PMI_EQUITY_STOP) * (compound - 1.0) * (self.params.house_cost / loan);
        if arg <= 1.0 {
            return 0;
        }
        (arg.ln() / (1.0 + r).ln()).ceil().min(n) as u32
    }

    /// Total PMI paid over the life of the loan
    pub fn total_pmi_cost(&self) -> f64 {
        self.loan_amount() * self.params.percent_pmi / 100.0 / MONTHS_PER_YEAR
            * f64::from(self.pmi_months())
    }

    /// PMI per month while PMI is charged
    pub fn monthly_pmi_cost(&self) -> f64 {
        let months = self.pmi_months();
        if months == 0 {
            return 0.0;
        }
        self.total_pmi_cost() / f64::from(months)
    }

    /// Property taxes averaged per month
    pub fn monthly_tax_cost(&self) -> f64 {
        self.params.annual_taxes / MONTHS_PER_YEAR
    }

    /// Homeowner insurance averaged per month
    pub fn monthly_homeowner_cost(&self) -> f64 {
        self.params.annual_homeowner_cost / MONTHS_PER_YEAR
    }

    /// Full monthly carrying cost: P/I, PMI, taxes, insurance, and bills
    pub fn monthly_total_cost(&self) -> f64 {
        self.monthly_payment()
            + self.monthly_pmi_cost()
            + self.monthly_tax_cost()
            + self.monthly_homeowner_cost()
            + self.params.monthly_bills
    }

    /// Monthly carrying cost once PMI has dropped off
    pub fn monthly_total_cost_minus_pmi(&self) -> f64 {
        self.monthly_total_cost() - self.monthly_pmi_cost()
    }

    /// Principal-and-interest paid over the full term: monthly payment x term
    pub fn lifetime_payment(&self) -> f64 {
        self.monthly_payment() * f64::from(self.params.term_months)
    }

    /// Lifetime mortgage cost: P/I lifetime plus PMI plus down payment
    pub fn lifetime_mortgage(&self) -> f64 {
        self.lifetime_payment() + self.total_pmi_cost() + self.down_payment()
    }

    /// Lifetime total cost including carrying costs and upfront cash
    pub fn lifetime_cost(&self) -> f64 {
        let pmi_months = f64::from(self.pmi_months());
        let remaining = f64::from(self.params.term_months) - pmi_months;
        self.monthly_total_cost() * pmi_months
            + self.monthly_total_cost_minus_pmi() * remaining
            + self.upfront_cost()
    }

    /// Collect every derived figure into one serializable record
    pub fn breakdown(&self) -> MortgageBreakdown {
        MortgageBreakdown {
            house_cost: self.params.house_cost,
            down_payment: self.down_payment(),
            closing_cost: self.closing_cost(),
            upfront_cost: self.upfront_cost(),
            loan_amount: self.loan_amount(),
            monthly_rate: self.monthly_rate(),
            monthly_payment: self.monthly_payment(),
            pmi_months: self.pmi_months(),
            monthly_pmi_cost: self.monthly_pmi_cost(),
            total_pmi_cost: self.total_pmi_cost(),
            monthly_tax_cost: self.monthly_tax_cost(),
            monthly_homeowner_cost: self.monthly_homeowner_cost(),
            monthly_bills: self.params.monthly_bills,
            monthly_total_cost: self.monthly_total_cost(),
            monthly_total_cost_minus_pmi: self.monthly_total_cost_minus_pmi(),
            lifetime_payment: self.lifetime_payment(),
            lifetime_mortgage: self.lifetime_mortgage(),
            lifetime_cost: self.lifetime_cost(),
        }
    }
}

/// Every derived figure of a mortgage, computed once for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageBreakdown {
    pub house_cost: f64,
    pub down_payment: f64,
    pub closing_cost: f64,
    pub upfront_cost: f64,
    pub loan_amount: f64,
    pub monthly_rate: f64,
    pub monthly_payment: f64,
    pub pmi_months: u32,
    pub monthly_pmi_cost: f64,
    pub total_pmi_cost: f64,
    pub monthly_tax_cost: f64,
    pub monthly_homeowner_cost: f64,
    pub monthly_bills: f64,
    pub monthly_total_cost: f64,
    pub monthly_total_cost_minus_pmi: f64,
    pub lifetime_payment: f64,
    pub lifetime_mortgage: f64,
    pub lifetime_cost: f64,
}

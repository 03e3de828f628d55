//! Loan input records shared by the mortgage and personal-loan calculators

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How often the borrower makes payments.
///
/// The amortization math always runs on monthly periods; the frequency only
/// controls how the monthly payment is split into a displayed per-period
/// amount (biweekly halves it, weekly quarters it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Monthly,
    Biweekly,
    Weekly,
}

impl PaymentFrequency {
    /// Display divisor applied to the monthly payment
    pub fn payments_per_month(&self) -> f64 {
        match self {
            PaymentFrequency::Monthly => 1.0,
            PaymentFrequency::Biweekly => 2.0,
            PaymentFrequency::Weekly => 4.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Biweekly => "biweekly",
            PaymentFrequency::Weekly => "weekly",
        }
    }
}

impl FromStr for PaymentFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "biweekly" => Ok(PaymentFrequency::Biweekly),
            "weekly" => Ok(PaymentFrequency::Weekly),
            other => Err(format!("unknown payment frequency: {}", other)),
        }
    }
}

/// Inputs for one amortization run
///
/// Plain value record: every calculation recomputes from a full snapshot of
/// these fields, so there is no identity or mutable state across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Purchase price / amount borrowed before down payment
    pub principal: f64,

    /// Nominal annual interest rate in percent (e.g. 6.5)
    pub annual_rate_percent: f64,

    /// Loan term in months
    pub term_months: u32,

    /// Additional principal paid every month on top of the level payment
    #[serde(default)]
    pub extra_monthly_payment: f64,

    /// Origination fee in percent of the financed base, rolled into the loan
    #[serde(default)]
    pub origination_fee_percent: f64,

    /// Up-front payment subtracted from the principal before financing
    #[serde(default)]
    pub down_payment: f64,

    /// Balloon amount due at term end; echoed in the result, does not
    /// change the schedule
    #[serde(default)]
    pub balloon_payment: f64,

    /// Prepayment penalty in percent of the financed amount; informational
    #[serde(default)]
    pub prepayment_penalty_percent: f64,

    /// Date of the first scheduled payment; period labels and the payoff
    /// date are derived from it when present
    #[serde(default)]
    pub first_payment_date: Option<NaiveDate>,
}

impl LoanParameters {
    /// Create a loan with the required fields; fees, extras and dates default to zero/none
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
            extra_monthly_payment: 0.0,
            origination_fee_percent: 0.0,
            down_payment: 0.0,
            balloon_payment: 0.0,
            prepayment_penalty_percent: 0.0,
            first_payment_date: None,
        }
    }

    /// Principal actually financed before the origination fee.
    ///
    /// A down payment at or above the principal degenerates to zero rather
    /// than going negative.
    pub fn financed_base(&self) -> f64 {
        (self.principal - self.down_payment).max(0.0)
    }

    /// Origination fee amount, charged on the financed base
    pub fn origination_fee_amount(&self) -> f64 {
        self.financed_base() * self.origination_fee_percent / 100.0
    }

    /// Total amount amortized: financed base plus the rolled-in fee
    pub fn financed_amount(&self) -> f64 {
        self.financed_base() + self.origination_fee_amount()
    }

    /// Periodic (monthly) rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Scheduled date of a given 1-based payment period, when a first
    /// payment date is set.
    ///
    /// Dates are anchored to the first payment date rather than chained
    /// month to month, so a month-end start does not drift.
    pub fn payment_date(&self, period: u32) -> Option<NaiveDate> {
        self.first_payment_date
            .and_then(|d| d.checked_add_months(Months::new(period.saturating_sub(1))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financed_amount_with_fee_and_down_payment() {
        let mut loan = LoanParameters::new(300_000.0, 6.5, 360);
        loan.down_payment = 60_000.0;
        loan.origination_fee_percent = 1.0;

        assert_eq!(loan.financed_base(), 240_000.0);
        assert_eq!(loan.origination_fee_amount(), 2_400.0);
        assert_eq!(loan.financed_amount(), 242_400.0);
    }

    #[test]
    fn test_down_payment_exceeding_principal_degenerates_to_zero() {
        let mut loan = LoanParameters::new(50_000.0, 5.0, 60);
        loan.down_payment = 80_000.0;

        assert_eq!(loan.financed_base(), 0.0);
        assert_eq!(loan.financed_amount(), 0.0);
    }

    #[test]
    fn test_payment_dates_anchor_to_first_payment() {
        let mut loan = LoanParameters::new(10_000.0, 8.5, 36);
        loan.first_payment_date = NaiveDate::from_ymd_opt(2025, 1, 31);

        assert_eq!(loan.payment_date(1), NaiveDate::from_ymd_opt(2025, 1, 31));
        // February clamps to month end but March recovers the day-of-month
        assert_eq!(loan.payment_date(2), NaiveDate::from_ymd_opt(2025, 2, 28));
        assert_eq!(loan.payment_date(3), NaiveDate::from_ymd_opt(2025, 3, 31));
        assert_eq!(loan.payment_date(13), NaiveDate::from_ymd_opt(2026, 1, 31));
    }

    #[test]
    fn test_frequency_parsing_and_multipliers() {
        assert_eq!("monthly".parse::<PaymentFrequency>().unwrap(), PaymentFrequency::Monthly);
        assert_eq!("BiWeekly".parse::<PaymentFrequency>().unwrap(), PaymentFrequency::Biweekly);
        assert!("fortnightly".parse::<PaymentFrequency>().is_err());

        assert_eq!(PaymentFrequency::Monthly.payments_per_month(), 1.0);
        assert_eq!(PaymentFrequency::Biweekly.payments_per_month(), 2.0);
        assert_eq!(PaymentFrequency::Weekly.payments_per_month(), 4.0);
    }
}

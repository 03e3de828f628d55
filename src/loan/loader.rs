//! Load loan batches from CSV
//!
//! Used by the portfolio binary to run whole books of loans through the
//! amortization engine in one pass.

use super::LoanParameters;
use crate::error::LoaderError;
use chrono::NaiveDate;
use csv::Reader;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default location of the sample portfolio shipped with the crate
pub const DEFAULT_PORTFOLIO_PATH: &str = "data/loans/sample_portfolio.csv";

/// Raw CSV row matching the portfolio file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_percent: f64,
    #[serde(rename = "TermMonths")]
    term_months: u32,
    #[serde(rename = "ExtraMonthlyPayment", default)]
    extra_monthly_payment: f64,
    #[serde(rename = "OriginationFeePct", default)]
    origination_fee_percent: f64,
    #[serde(rename = "DownPayment", default)]
    down_payment: f64,
    #[serde(rename = "BalloonPayment", default)]
    balloon_payment: f64,
    #[serde(rename = "PrepaymentPenaltyPct", default)]
    prepayment_penalty_percent: f64,
    #[serde(rename = "FirstPaymentDate", default)]
    first_payment_date: Option<NaiveDate>,
}

impl CsvRow {
    fn into_loan(self) -> LoanParameters {
        LoanParameters {
            principal: self.principal,
            annual_rate_percent: self.annual_rate_percent,
            term_months: self.term_months,
            extra_monthly_payment: self.extra_monthly_payment,
            origination_fee_percent: self.origination_fee_percent,
            down_payment: self.down_payment,
            balloon_payment: self.balloon_payment,
            prepayment_penalty_percent: self.prepayment_penalty_percent,
            first_payment_date: self.first_payment_date,
        }
    }
}

/// Load loans from any CSV reader
pub fn load_loans_from_reader<R: Read>(reader: R) -> Result<Vec<LoanParameters>, LoaderError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut loans = Vec::new();

    for (idx, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Header is row 1, so data rows start at 2
        let row = result.map_err(|e| LoaderError::row(idx + 2, e.to_string()))?;
        loans.push(row.into_loan());
    }

    debug!("loaded {} loans", loans.len());
    Ok(loans)
}

/// Load loans from a CSV file on disk
pub fn load_loans(path: &Path) -> Result<Vec<LoanParameters>, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_loans_from_reader(file)
}

/// Load the sample portfolio from the default location
pub fn load_default_portfolio() -> Result<Vec<LoanParameters>, LoaderError> {
    load_loans(Path::new(DEFAULT_PORTFOLIO_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Principal,AnnualRatePct,TermMonths,ExtraMonthlyPayment,OriginationFeePct,DownPayment,BalloonPayment,PrepaymentPenaltyPct,FirstPaymentDate
300000,6.5,360,0,0,60000,0,0,2025-09-01
10000,8.5,36,0,1.0,0,0,0,
";

    #[test]
    fn test_load_from_reader() {
        let loans = load_loans_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(loans.len(), 2);
        assert_eq!(loans[0].principal, 300_000.0);
        assert_eq!(loans[0].down_payment, 60_000.0);
        assert_eq!(loans[0].term_months, 360);
        assert_eq!(
            loans[0].first_payment_date,
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );

        assert_eq!(loans[1].origination_fee_percent, 1.0);
        assert_eq!(loans[1].first_payment_date, None);
    }

    #[test]
    fn test_malformed_row_reports_row_number() {
        let bad = "\
Principal,AnnualRatePct,TermMonths
300000,six-and-a-half,360
";
        let err = load_loans_from_reader(bad.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"), "got: {}", err);
    }

    #[test]
    fn test_load_default_portfolio() {
        let loans = load_default_portfolio().unwrap();
        assert!(!loans.is_empty());
        assert!(loans.iter().all(|l| l.principal > 0.0 && l.term_months > 0));
    }
}

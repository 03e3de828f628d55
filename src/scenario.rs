//! Scenario runner for batch calculations
//!
//! Pre-loads the historical rate table once, then runs any number of
//! loan, investment, or inflation calculations against it without
//! re-reading CSV files.

use std::path::Path;

use crate::amortization::{AmortizationConfig, AmortizationEngine, AmortizationResult};
use crate::error::LoaderError;
use crate::inflation::{InflationEngine, InflationParameters, InflationResult};
use crate::investment::{InvestmentAnalysis, InvestmentConfig, InvestmentEngine};
use crate::loan::LoanParameters;
use crate::rates::{self, RateTable};

/// Pre-loaded runner shared by the CLI and batch binaries
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for extra in [0.0, 100.0, 250.0] {
///     let mut loan = base_loan.clone();
///     loan.extra_monthly_payment = extra;
///     let result = runner.run_loan(&loan, AmortizationConfig::default());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Historical inflation series backing the inflation runs
    rates: RateTable,
}

impl ScenarioRunner {
    /// Create a runner over the built-in rate series
    pub fn new() -> Self {
        Self {
            rates: RateTable::builtin(),
        }
    }

    /// Create a runner with the default CSV overlay merged over the
    /// built-in series
    pub fn from_csv() -> Result<Self, LoaderError> {
        let mut rates = RateTable::builtin();
        rates.merge(rates::load_default_rates()?);
        Ok(Self { rates })
    }

    /// Create a runner with a specific CSV overlay merged over the
    /// built-in series
    pub fn from_csv_path(path: &Path) -> Result<Self, LoaderError> {
        let mut rates = RateTable::builtin();
        rates.merge(rates::load_rates(path)?);
        Ok(Self { rates })
    }

    /// Create a runner over a pre-built rate table
    pub fn with_rates(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Amortize a single loan
    pub fn run_loan(&self, loan: &LoanParameters, config: AmortizationConfig) -> AmortizationResult {
        AmortizationEngine::new(config).amortize(loan)
    }

    /// Amortize many loans with the same config
    pub fn run_loan_batch(
        &self,
        loans: &[LoanParameters],
        config: AmortizationConfig,
    ) -> Vec<AmortizationResult> {
        let engine = AmortizationEngine::new(config);
        loans.iter().map(|loan| engine.amortize(loan)).collect()
    }

    /// Analyze a single property
    pub fn run_investment(
        &self,
        params: &crate::investment::PropertyInvestmentParameters,
        config: InvestmentConfig,
    ) -> InvestmentAnalysis {
        InvestmentEngine::new(config).analyze(params)
    }

    /// Adjust an amount for inflation against the pre-loaded rates
    pub fn run_inflation(&self, params: &InflationParameters) -> InflationResult {
        InflationEngine::new(self.rates.clone()).adjust(params)
    }

    /// Get a reference to the rate table for inspection
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Get a mutable reference to the rate table for customization
    pub fn rates_mut(&mut self) -> &mut RateTable {
        &mut self.rates
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RateSeries;

    #[test]
    fn test_loan_batch_ordering() {
        let runner = ScenarioRunner::new();

        let loans: Vec<_> = [0.0, 100.0, 250.0]
            .iter()
            .map(|&extra| {
                let mut loan = LoanParameters::new(300_000.0, 6.5, 360);
                loan.down_payment = 60_000.0;
                loan.extra_monthly_payment = extra;
                loan
            })
            .collect();

        let results = runner.run_loan_batch(&loans, AmortizationConfig::default());
        assert_eq!(results.len(), 3);

        // More extra principal means less total interest
        assert!(results[2].total_interest < results[1].total_interest);
        assert!(results[1].total_interest < results[0].total_interest);
    }

    #[test]
    fn test_inflation_uses_runner_rates() {
        let mut table = RateTable::empty();
        table.insert("XTS", RateSeries::new(2020, vec![10.0]));
        let runner = ScenarioRunner::with_rates(table);

        let mut params = InflationParameters::new(100.0, 2020, 2020);
        params.currency = "XTS".to_string();
        let result = runner.run_inflation(&params);
        assert!((result.adjusted_amount - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_investment_through_runner() {
        let runner = ScenarioRunner::new();
        let params =
            crate::investment::PropertyInvestmentParameters::new(100_000.0, 100_000.0, 0.0, 30, 800.0);
        let analysis = runner.run_investment(&params, InvestmentConfig::default());
        assert_eq!(analysis.monthly_payment, 0.0);
        assert!(analysis.is_cash_flow_positive());
    }
}

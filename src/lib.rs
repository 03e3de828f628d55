//! Financial calculation engines behind the loan, investment, and
//! inflation calculators
//!
//! This library provides:
//! - Loan amortization schedules with extra-payment and early-payoff handling
//! - Rental property cash flow, return ratios, and multi-year projections
//! - Inflation adjustment over historical or custom annual rate series
//! - Batch scenario running over CSV loan portfolios

pub mod amortization;
pub mod error;
pub mod inflation;
pub mod investment;
pub mod loan;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use amortization::{AmortizationEngine, AmortizationEntry, AmortizationResult};
pub use error::LoaderError;
pub use inflation::{InflationEngine, InflationParameters, InflationResult};
pub use investment::{InvestmentAnalysis, InvestmentEngine, PropertyInvestmentParameters};
pub use loan::{LoanParameters, PaymentFrequency};
pub use rates::RateTable;
pub use scenario::ScenarioRunner;

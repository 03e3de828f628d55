//! Rental property investment analysis: cash flow, return ratios, and a
//! multi-year value/equity projection.

pub mod analysis;
pub mod data;
pub mod engine;
pub mod irr;

pub use analysis::{InvestmentAnalysis, YearProjection};
pub use data::{ExpenseBreakdown, PropertyInvestmentParameters};
pub use engine::{InvestmentConfig, InvestmentEngine};
pub use irr::annual_irr;

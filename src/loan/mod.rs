//! Loan input records and batch loading

mod data;
pub mod loader;

pub use data::{LoanParameters, PaymentFrequency};
pub use loader::{load_default_portfolio, load_loans, load_loans_from_reader};

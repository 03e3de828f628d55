//! Loan amortization: level-payment math, per-period schedules, and
//! payoff/savings summaries.

pub mod engine;
pub mod schedule;
pub mod state;

pub use engine::{annuity_payment, remaining_balance, AmortizationConfig, AmortizationEngine};
pub use schedule::{AmortizationEntry, AmortizationResult};
pub use state::ScheduleState;

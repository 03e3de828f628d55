//! Running state for a single schedule pass

use crate::loan::LoanParameters;
use chrono::NaiveDate;

/// State of the loan at a point in the forward pass
#[derive(Debug, Clone)]
pub struct ScheduleState {
    /// Current period (1-indexed once the pass starts)
    pub period: u32,

    /// Outstanding principal at the start of the period
    pub balance: f64,

    /// Interest accrued across all periods so far
    pub cumulative_interest: f64,

    /// Total principal repaid so far
    pub cumulative_principal: f64,

    /// First scheduled payment date, if the loan carries one
    first_payment_date: Option<NaiveDate>,
}

impl ScheduleState {
    /// Initialize state from loan parameters at the start of the pass
    pub fn from_loan(loan: &LoanParameters) -> Self {
        Self {
            period: 0,
            balance: loan.financed_amount(),
            cumulative_interest: 0.0,
            cumulative_principal: 0.0,
            first_payment_date: loan.first_payment_date,
        }
    }

    /// Advance to the next period
    pub fn advance(&mut self) {
        self.period += 1;
    }

    /// Date of the current period, anchored to the first payment date
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.first_payment_date.and_then(|d| {
            d.checked_add_months(chrono::Months::new(self.period.saturating_sub(1)))
        })
    }

    /// Apply one period's split and roll the balance forward
    pub fn apply_payment(&mut self, principal_portion: f64, interest_portion: f64) {
        self.balance = (self.balance - principal_portion).max(0.0);
        self.cumulative_interest += interest_portion;
        self.cumulative_principal += principal_portion;
    }

    /// Whether the loan has been fully repaid
    pub fn paid_off(&self) -> bool {
        self.balance <= 0.0
    }
}

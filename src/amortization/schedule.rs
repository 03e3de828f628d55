//! Schedule output structures for amortization runs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One period of the amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// Period number, 1-based
    pub period: u32,

    /// Scheduled date, present when the loan has a first payment date
    pub date: Option<NaiveDate>,

    /// Cash actually paid this period (interest + principal; the final
    /// period is usually smaller than the level payment)
    pub payment_amount: f64,

    /// Portion applied to principal, including any extra payment
    pub principal_portion: f64,

    /// Portion covering interest on the opening balance
    pub interest_portion: f64,

    /// Outstanding principal after this payment; never negative and never
    /// increasing period over period
    pub remaining_balance: f64,

    /// Interest accrued from period 1 through this period
    pub cumulative_interest: f64,
}

/// Complete result of one amortization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Per-period rows, truncated at full payoff
    pub schedule: Vec<AmortizationEntry>,

    /// Amount amortized: principal less down payment, plus origination fee
    pub financed_amount: f64,

    /// Level monthly principal-and-interest payment (excluding extra)
    pub monthly_payment: f64,

    /// Monthly payment divided by the display frequency multiplier
    pub per_period_payment: f64,

    /// Interest paid over the life of the loan
    pub total_interest: f64,

    /// Financed amount plus total interest
    pub total_cost: f64,

    /// Interest avoided versus the same loan with no extra payments;
    /// zero when no extra payment was supplied
    pub interest_savings: f64,

    /// Period in which the balance reached zero
    pub payoff_period: u32,

    /// Date of the payoff period, when dates are in play
    pub payoff_date: Option<NaiveDate>,

    /// Balloon amount echoed from the inputs; does not alter the schedule
    pub balloon_payment: f64,

    /// Prepayment penalty on the financed amount; informational only
    pub prepayment_penalty: f64,
}

impl AmortizationResult {
    /// Months the schedule was shortened relative to the nominal term
    pub fn months_saved(&self, term_months: u32) -> u32 {
        term_months.saturating_sub(self.payoff_period)
    }

    /// Total principal repaid across the schedule
    pub fn total_principal(&self) -> f64 {
        self.schedule.iter().map(|e| e.principal_portion).sum()
    }

    /// Final entry of the schedule, if any periods were generated
    pub fn final_entry(&self) -> Option<&AmortizationEntry> {
        self.schedule.last()
    }
}

//! Output structures for the investment projector

use serde::Serialize;

use super::data::ExpenseBreakdown;

/// One row of the forward projection.
///
/// Year 0 carries the unadjusted base figures; each later year compounds
/// value, income, and operating expenses by their fixed growth rates.
#[derive(Debug, Clone, Serialize)]
pub struct YearProjection {
    pub year: u32,
    pub property_value: f64,
    /// Gross scheduled rent for the year
    pub annual_income: f64,
    /// Operating expenses for the year, debt service excluded
    pub annual_expenses: f64,
    /// Outstanding mortgage balance at the start of the year
    pub loan_balance: f64,
    /// Property value net of the loan balance
    pub equity: f64,
}

/// Complete result of one property analysis run
#[derive(Debug, Clone, Serialize)]
pub struct InvestmentAnalysis {
    /// Monthly principal-and-interest payment on the financed amount
    pub monthly_payment: f64,
    /// Rent minus mortgage and all operating expenses
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    /// Annual rent minus operating expenses, before debt service
    pub net_operating_income: f64,
    /// Net operating income over property value (percent)
    pub cap_rate: f64,
    /// Annual cash flow over cash invested (percent)
    pub cash_on_cash_return: f64,
    /// First-year total return: cash flow plus appreciation plus
    /// principal paydown, over cash invested (percent)
    pub roi: f64,
    /// Cash required to close the purchase
    pub total_investment: f64,
    /// Months until cumulative benefit recovers the cash invested;
    /// None when the monthly benefit is zero or negative
    pub break_even_months: Option<u32>,
    /// Annualized internal rate of return over the projection horizon,
    /// assuming a sale at the final year's equity
    pub projection_irr: Option<f64>,
    pub expenses: ExpenseBreakdown,
    pub projections: Vec<YearProjection>,
}

impl InvestmentAnalysis {
    /// Last projection row, if the horizon is non-empty
    pub fn final_projection(&self) -> Option<&YearProjection> {
        self.projections.last()
    }

    /// Whether the property carries itself month to month
    pub fn is_cash_flow_positive(&self) -> bool {
        self.monthly_cash_flow > 0.0
    }
}

//! Rental property analysis engine
//!
//! Computes month-one cash flow and return ratios, then projects value,
//! income, expenses, and equity forward year by year.

use crate::amortization::{annuity_payment, remaining_balance};

use super::analysis::{InvestmentAnalysis, YearProjection};
use super::data::{ExpenseBreakdown, PropertyInvestmentParameters};
use super::irr::annual_irr;

/// Configuration for the forward projection
#[derive(Debug, Clone)]
pub struct InvestmentConfig {
    /// Projection horizon in years (rows run 0..=projection_years)
    pub projection_years: u32,
}

impl Default for InvestmentConfig {
    fn default() -> Self {
        Self {
            projection_years: 30,
        }
    }
}

/// Investment analysis engine
pub struct InvestmentEngine {
    config: InvestmentConfig,
}

/// Ratio of `amount` to `base` as a percentage, 0 when the base is not
/// positive. Every displayed ratio goes through this guard.
fn percent_of(amount: f64, base: f64) -> f64 {
    if base > 0.0 {
        amount / base * 100.0
    } else {
        0.0
    }
}

impl InvestmentEngine {
    /// Create a new engine with the given config
    pub fn new(config: InvestmentConfig) -> Self {
        Self { config }
    }

    /// Run the full analysis for a single property
    pub fn analyze(&self, params: &PropertyInvestmentParameters) -> InvestmentAnalysis {
        let financed = params.financed_amount();
        let monthly_rate = params.monthly_rate();
        let monthly_payment = annuity_payment(financed, monthly_rate, params.term_months());

        let expenses = ExpenseBreakdown::from_parameters(params);
        let monthly_operating = expenses.monthly_total();
        let monthly_cash_flow = params.monthly_rent - monthly_payment - monthly_operating;
        let annual_cash_flow = monthly_cash_flow * 12.0;

        let total_investment = params.total_investment();
        let net_operating_income = (params.monthly_rent - monthly_operating) * 12.0;

        // First-year return components beyond raw cash flow: the value
        // growth and the principal retired by twelve payments.
        let annual_appreciation =
            params.property_value * params.appreciation_rate_percent / 100.0;
        let first_year_paydown =
            financed - remaining_balance(financed, monthly_rate, monthly_payment, 12);

        let cap_rate = percent_of(net_operating_income, params.property_value);
        let cash_on_cash_return = percent_of(annual_cash_flow, total_investment);
        let roi = percent_of(
            annual_cash_flow + annual_appreciation + first_year_paydown,
            total_investment,
        );

        // Month-one principal portion of the level payment
        let monthly_equity_gain = monthly_payment - financed * monthly_rate;
        let monthly_benefit =
            monthly_cash_flow + monthly_equity_gain + annual_appreciation / 12.0;
        let break_even_months = if total_investment <= 0.0 {
            Some(0)
        } else if monthly_benefit <= 0.0 {
            None
        } else {
            Some((total_investment / monthly_benefit).ceil() as u32)
        };

        let projections = self.project(params, monthly_payment);
        let cashflows = projection_cashflows(
            &projections,
            total_investment,
            monthly_payment,
            params.term_months(),
        );
        let projection_irr = annual_irr(&cashflows);

        InvestmentAnalysis {
            monthly_payment,
            monthly_cash_flow,
            annual_cash_flow,
            net_operating_income,
            cap_rate,
            cash_on_cash_return,
            roi,
            total_investment,
            break_even_months,
            projection_irr,
            expenses,
            projections,
        }
    }

    /// Year-by-year forward projection.
    ///
    /// Value, income, and operating expenses compound at their fixed
    /// growth rates from the year-0 base; the loan balance comes from the
    /// closed-form annuity balance rather than an approximate decay.
    fn project(
        &self,
        params: &PropertyInvestmentParameters,
        monthly_payment: f64,
    ) -> Vec<YearProjection> {
        let financed = params.financed_amount();
        let monthly_rate = params.monthly_rate();

        let mut property_value = params.property_value;
        let mut annual_income = params.monthly_rent * 12.0;
        let mut annual_expenses =
            ExpenseBreakdown::from_parameters(params).monthly_total() * 12.0;

        let mut rows = Vec::with_capacity(self.config.projection_years as usize + 1);
        for year in 0..=self.config.projection_years {
            let loan_balance =
                remaining_balance(financed, monthly_rate, monthly_payment, year * 12);
            rows.push(YearProjection {
                year,
                property_value,
                annual_income,
                annual_expenses,
                loan_balance,
                equity: property_value - loan_balance,
            });

            property_value *= 1.0 + params.appreciation_rate_percent / 100.0;
            annual_income *= 1.0 + params.rent_growth_rate_percent / 100.0;
            annual_expenses *= 1.0 + params.expense_growth_rate_percent / 100.0;
        }
        rows
    }
}

impl Default for InvestmentEngine {
    fn default() -> Self {
        Self::new(InvestmentConfig::default())
    }
}

/// Annual net cash flows over the projection horizon, for the IRR.
///
/// Year 0 is the cash to close; each later year nets rent against
/// operating expenses and that year's debt service, and the final year
/// adds the sale proceeds (ending equity).
fn projection_cashflows(
    rows: &[YearProjection],
    total_investment: f64,
    monthly_payment: f64,
    term_months: u32,
) -> Vec<f64> {
    let mut flows = Vec::with_capacity(rows.len());
    flows.push(-total_investment);

    let horizon = rows.len() - 1;
    for year in 1..=horizon {
        let months_paid_before = ((year as u32 - 1) * 12).min(term_months);
        let months_paid_after = (year as u32 * 12).min(term_months);
        let debt_service = monthly_payment * (months_paid_after - months_paid_before) as f64;

        let base = &rows[year - 1];
        let mut flow = base.annual_income - base.annual_expenses - debt_service;
        if year == horizon {
            flow += rows[horizon].equity;
        }
        flows.push(flow);
    }

    flows
}

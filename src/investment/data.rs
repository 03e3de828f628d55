//! Input parameters for rental property analysis

use serde::{Deserialize, Serialize};

/// Full input snapshot for a rental property analysis.
///
/// Rates are annual percentages unless the field name says otherwise;
/// vacancy and management are charged against monthly rent directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyInvestmentParameters {
    /// Purchase price of the property
    pub property_value: f64,
    /// Cash down payment
    pub down_payment: f64,
    /// Annual interest rate on the financed remainder (percent)
    pub interest_rate_percent: f64,
    /// Loan term in years
    pub loan_term_years: u32,
    /// Gross rent per month
    pub monthly_rent: f64,
    /// Property tax, percent of property value per year
    pub property_tax_rate_percent: f64,
    /// Insurance, percent of property value per year
    pub insurance_rate_percent: f64,
    /// Maintenance reserve, percent of property value per year
    pub maintenance_rate_percent: f64,
    /// Expected vacancy, percent of monthly rent
    pub vacancy_rate_percent: f64,
    /// Property management fee, percent of monthly rent
    pub management_fee_percent: f64,
    /// HOA dues per month
    pub hoa_fees_monthly: f64,
    /// Owner-paid utilities per month
    pub utilities_monthly: f64,
    /// Closing costs, percent of property value
    pub closing_costs_percent: f64,
    /// Up-front repair budget
    pub repair_costs: f64,
    /// Up-front furnishing budget
    pub furnishing_costs: f64,
    /// Annual property appreciation (percent)
    pub appreciation_rate_percent: f64,
    /// Annual rent growth (percent)
    pub rent_growth_rate_percent: f64,
    /// Annual growth of operating expenses (percent)
    pub expense_growth_rate_percent: f64,
}

impl Default for PropertyInvestmentParameters {
    fn default() -> Self {
        Self {
            property_value: 0.0,
            down_payment: 0.0,
            interest_rate_percent: 0.0,
            loan_term_years: 30,
            monthly_rent: 0.0,
            property_tax_rate_percent: 0.0,
            insurance_rate_percent: 0.0,
            maintenance_rate_percent: 0.0,
            vacancy_rate_percent: 0.0,
            management_fee_percent: 0.0,
            hoa_fees_monthly: 0.0,
            utilities_monthly: 0.0,
            closing_costs_percent: 0.0,
            repair_costs: 0.0,
            furnishing_costs: 0.0,
            appreciation_rate_percent: 0.0,
            rent_growth_rate_percent: 0.0,
            expense_growth_rate_percent: 0.0,
        }
    }
}

impl PropertyInvestmentParameters {
    /// Minimal constructor; remaining rates and costs default to zero
    pub fn new(
        property_value: f64,
        down_payment: f64,
        interest_rate_percent: f64,
        loan_term_years: u32,
        monthly_rent: f64,
    ) -> Self {
        Self {
            property_value,
            down_payment,
            interest_rate_percent,
            loan_term_years,
            monthly_rent,
            ..Self::default()
        }
    }

    /// Amount borrowed against the property, never negative
    pub fn financed_amount(&self) -> f64 {
        (self.property_value - self.down_payment).max(0.0)
    }

    /// Periodic rate for the monthly amortization math
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate_percent / 100.0 / 12.0
    }

    /// Loan term expressed in monthly periods
    pub fn term_months(&self) -> u32 {
        self.loan_term_years * 12
    }

    /// Cash required to close: down payment, closing costs, repairs,
    /// and furnishing.
    pub fn total_investment(&self) -> f64 {
        self.down_payment
            + self.property_value * self.closing_costs_percent / 100.0
            + self.repair_costs
            + self.furnishing_costs
    }
}

/// Monthly operating expense components, mortgage excluded
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseBreakdown {
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub vacancy: f64,
    pub management: f64,
    pub hoa: f64,
    pub utilities: f64,
}

impl ExpenseBreakdown {
    /// Expand the rate inputs into monthly dollar amounts
    pub fn from_parameters(params: &PropertyInvestmentParameters) -> Self {
        Self {
            property_tax: params.property_value * params.property_tax_rate_percent / 100.0 / 12.0,
            insurance: params.property_value * params.insurance_rate_percent / 100.0 / 12.0,
            maintenance: params.property_value * params.maintenance_rate_percent / 100.0 / 12.0,
            vacancy: params.monthly_rent * params.vacancy_rate_percent / 100.0,
            management: params.monthly_rent * params.management_fee_percent / 100.0,
            hoa: params.hoa_fees_monthly,
            utilities: params.utilities_monthly,
        }
    }

    /// Total monthly operating cost across all components
    pub fn monthly_total(&self) -> f64 {
        self.property_tax
            + self.insurance
            + self.maintenance
            + self.vacancy
            + self.management
            + self.hoa
            + self.utilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_financed_amount_and_total_investment() {
        let mut params = PropertyInvestmentParameters::new(300_000.0, 60_000.0, 6.5, 30, 2_800.0);
        params.closing_costs_percent = 2.0;
        params.repair_costs = 10_000.0;
        params.furnishing_costs = 5_000.0;

        assert_eq!(params.financed_amount(), 240_000.0);
        assert_eq!(params.term_months(), 360);
        assert_relative_eq!(params.total_investment(), 81_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_all_cash_purchase_has_no_loan() {
        let params = PropertyInvestmentParameters::new(150_000.0, 200_000.0, 7.0, 30, 1_500.0);
        assert_eq!(params.financed_amount(), 0.0);
    }

    #[test]
    fn test_expense_breakdown_components() {
        let mut params = PropertyInvestmentParameters::new(240_000.0, 48_000.0, 6.0, 30, 2_000.0);
        params.property_tax_rate_percent = 1.2;
        params.insurance_rate_percent = 0.5;
        params.maintenance_rate_percent = 1.0;
        params.vacancy_rate_percent = 5.0;
        params.management_fee_percent = 8.0;
        params.hoa_fees_monthly = 50.0;
        params.utilities_monthly = 75.0;

        let expenses = ExpenseBreakdown::from_parameters(&params);
        assert_relative_eq!(expenses.property_tax, 240.0, max_relative = 1e-12);
        assert_relative_eq!(expenses.insurance, 100.0, max_relative = 1e-12);
        assert_relative_eq!(expenses.maintenance, 200.0, max_relative = 1e-12);
        assert_relative_eq!(expenses.vacancy, 100.0, max_relative = 1e-12);
        assert_relative_eq!(expenses.management, 160.0, max_relative = 1e-12);
        assert_relative_eq!(expenses.monthly_total(), 925.0, max_relative = 1e-12);
    }
}

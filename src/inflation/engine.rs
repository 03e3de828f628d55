//! Inflation compounding engine
//!
//! Walks a year range applying one rate per year, historical or custom,
//! and reports the adjusted amount with a per-year breakdown.

use crate::rates::RateTable;

use super::data::{Compounding, InflationParameters, InflationResult, InflationSeriesPoint};

/// Growth factor for one year at the given nominal rate
fn growth_factor(rate_percent: f64, compounding: Compounding) -> f64 {
    match compounding {
        Compounding::Annual => 1.0 + rate_percent / 100.0,
        Compounding::Monthly => (1.0 + rate_percent / 100.0 / 12.0).powi(12),
    }
}

/// Inflation engine backed by a historical rate table
pub struct InflationEngine {
    rates: RateTable,
}

impl InflationEngine {
    /// Create an engine over the given rate table
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Engine over the built-in USD/EUR/GBP series
    pub fn builtin() -> Self {
        Self::new(RateTable::builtin())
    }

    /// The backing rate table
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Adjust an amount across the year range, inclusive on both ends.
    ///
    /// An end year below the start year is clamped up, so a reversed range
    /// behaves exactly like the single start year. Historical lookup
    /// misses fall back to the custom rate without raising.
    pub fn adjust(&self, params: &InflationParameters) -> InflationResult {
        let end_year = params.end_year.max(params.start_year);

        let mut adjusted = params.amount;
        let mut total_rate = 0.0;
        let mut breakdown = Vec::with_capacity((end_year - params.start_year + 1) as usize);

        for year in params.start_year..=end_year {
            let rate = if params.use_custom_rate {
                params.custom_rate_percent
            } else {
                self.rates
                    .rate_or_default(&params.currency, year, params.custom_rate_percent)
            };

            adjusted *= growth_factor(rate, params.compounding);
            total_rate += rate;
            breakdown.push(InflationSeriesPoint {
                year,
                applied_rate_percent: rate,
                adjusted_value: adjusted,
            });
        }

        let purchasing_power_loss_percent = if params.amount > 0.0 {
            (adjusted - params.amount) / params.amount * 100.0
        } else {
            0.0
        };

        InflationResult {
            original_amount: params.amount,
            adjusted_amount: adjusted,
            total_inflation_percent: total_rate,
            purchasing_power_loss_percent,
            yearly_breakdown: breakdown,
        }
    }
}

impl Default for InflationEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_rate_round_trip() {
        let mut params = InflationParameters::new(1_000.0, 2020, 2024);
        params.use_custom_rate = true;
        params.custom_rate_percent = 3.0;

        let result = InflationEngine::builtin().adjust(&params);
        assert_relative_eq!(
            result.adjusted_amount,
            1_000.0 * 1.03f64.powi(5),
            max_relative = 1e-12
        );
        assert_relative_eq!(result.total_inflation_percent, 15.0, max_relative = 1e-12);
        assert_eq!(result.yearly_breakdown.len(), 5);
    }

    #[test]
    fn test_usd_historical_decade() {
        let engine = InflationEngine::builtin();
        let result = engine.adjust(&InflationParameters::new(1_000.0, 2015, 2024));

        // Fold the same table the engine reads
        let mut expected = 1_000.0;
        for year in 2015..=2024 {
            expected *= 1.0 + engine.rates().rate("USD", year).unwrap() / 100.0;
        }
        assert_relative_eq!(result.adjusted_amount, expected, max_relative = 1e-12);
        // 2015-2024 compounds to roughly a third over the decade
        assert!(
            result.adjusted_amount > 1_320.0 && result.adjusted_amount < 1_325.0,
            "adjusted: {}",
            result.adjusted_amount
        );
        assert!((result.total_inflation_percent - 28.6).abs() < 1e-9);
        assert_relative_eq!(
            result.purchasing_power_loss_percent,
            (result.adjusted_amount - 1_000.0) / 10.0,
            max_relative = 1e-12
        );

        let first = &result.yearly_breakdown[0];
        assert_eq!(first.year, 2015);
        assert_eq!(first.applied_rate_percent, 0.1);
        assert_eq!(result.yearly_breakdown.len(), 10);
    }

    #[test]
    fn test_monthly_compounding_beats_annual() {
        let mut annual = InflationParameters::new(1_000.0, 2021, 2021);
        annual.use_custom_rate = true;
        annual.custom_rate_percent = 6.0;
        let mut monthly = annual.clone();
        monthly.compounding = Compounding::Monthly;

        let engine = InflationEngine::builtin();
        let a = engine.adjust(&annual);
        let m = engine.adjust(&monthly);

        assert_relative_eq!(
            m.adjusted_amount,
            1_000.0 * 1.005f64.powi(12),
            max_relative = 1e-12
        );
        assert!(m.adjusted_amount > a.adjusted_amount);
        // The display total stays a simple sum either way
        assert_eq!(m.total_inflation_percent, a.total_inflation_percent);
    }

    #[test]
    fn test_reversed_range_clamps_to_single_year() {
        let engine = InflationEngine::builtin();
        let reversed = engine.adjust(&InflationParameters::new(1_000.0, 2020, 2015));
        let single = engine.adjust(&InflationParameters::new(1_000.0, 2020, 2020));

        assert_eq!(reversed.yearly_breakdown.len(), 1);
        assert_eq!(reversed.adjusted_amount, single.adjusted_amount);
        // USD 2020 is 1.2%
        assert_relative_eq!(reversed.adjusted_amount, 1_012.0, max_relative = 1e-12);
    }

    #[test]
    fn test_unknown_currency_falls_back_to_custom_rate() {
        let mut params = InflationParameters::new(1_000.0, 2020, 2022);
        params.currency = "JPY".to_string();
        params.custom_rate_percent = 2.0;

        let result = InflationEngine::builtin().adjust(&params);
        assert_relative_eq!(
            result.adjusted_amount,
            1_000.0 * 1.02f64.powi(3),
            max_relative = 1e-12
        );
        for point in &result.yearly_breakdown {
            assert_eq!(point.applied_rate_percent, 2.0);
        }
    }

    #[test]
    fn test_partial_coverage_mixes_table_and_fallback() {
        // USD history ends in 2024; later years take the custom rate
        let mut params = InflationParameters::new(1_000.0, 2023, 2026);
        params.custom_rate_percent = 2.0;

        let result = InflationEngine::builtin().adjust(&params);
        let rates: Vec<f64> = result
            .yearly_breakdown
            .iter()
            .map(|p| p.applied_rate_percent)
            .collect();
        assert_eq!(rates, vec![4.1, 2.9, 2.0, 2.0]);
    }

    #[test]
    fn test_deflation_year_reduces_value() {
        let engine = InflationEngine::builtin();
        let result = engine.adjust(&InflationParameters::new(1_000.0, 2009, 2009));
        assert_relative_eq!(result.adjusted_amount, 996.0, max_relative = 1e-12);
        assert!(result.purchasing_power_loss_percent < 0.0);
    }

    #[test]
    fn test_zero_amount_guards_loss_percent() {
        let result = InflationEngine::builtin().adjust(&InflationParameters::new(0.0, 2015, 2024));
        assert_eq!(result.adjusted_amount, 0.0);
        assert_eq!(result.purchasing_power_loss_percent, 0.0);
    }
}

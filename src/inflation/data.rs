//! Input and output records for the inflation calculator

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Compounding convention for applying a year's rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compounding {
    /// One factor of (1 + rate) per year
    Annual,
    /// Twelve factors of (1 + rate/12) per year
    Monthly,
}

impl Compounding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compounding::Annual => "annual",
            Compounding::Monthly => "monthly",
        }
    }
}

impl FromStr for Compounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "annual" | "yearly" => Ok(Compounding::Annual),
            "monthly" => Ok(Compounding::Monthly),
            other => Err(format!("unknown compounding: {}", other)),
        }
    }
}

/// Inputs for one inflation adjustment run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InflationParameters {
    /// Amount in start-year money
    pub amount: f64,
    pub start_year: u32,
    /// Inclusive; silently clamped up to `start_year` when below it
    pub end_year: u32,
    /// Currency code for the historical lookup
    pub currency: String,
    /// When set, `custom_rate_percent` applies to every year and the
    /// historical table is ignored
    pub use_custom_rate: bool,
    /// Constant annual rate; also the fallback for historical lookup misses
    pub custom_rate_percent: f64,
    pub compounding: Compounding,
}

impl Default for InflationParameters {
    fn default() -> Self {
        Self {
            amount: 0.0,
            start_year: 2015,
            end_year: 2024,
            currency: "USD".to_string(),
            use_custom_rate: false,
            custom_rate_percent: 2.5,
            compounding: Compounding::Annual,
        }
    }
}

impl InflationParameters {
    /// Historical-rate run over a year span; other fields take defaults
    pub fn new(amount: f64, start_year: u32, end_year: u32) -> Self {
        Self {
            amount,
            start_year,
            end_year,
            ..Self::default()
        }
    }
}

/// One year of the adjustment, value after that year's rate is applied
#[derive(Debug, Clone, Serialize)]
pub struct InflationSeriesPoint {
    pub year: u32,
    pub applied_rate_percent: f64,
    pub adjusted_value: f64,
}

/// Complete result of one inflation run
#[derive(Debug, Clone, Serialize)]
pub struct InflationResult {
    pub original_amount: f64,
    /// Start-year amount expressed in end-year money
    pub adjusted_amount: f64,
    /// Simple sum of the applied nominal rates; display figure only,
    /// deliberately not compounded
    pub total_inflation_percent: f64,
    /// Relative change of the adjusted amount against the original
    pub purchasing_power_loss_percent: f64,
    pub yearly_breakdown: Vec<InflationSeriesPoint>,
}

impl InflationResult {
    /// Mean applied rate across the covered years
    pub fn average_annual_rate_percent(&self) -> f64 {
        if self.yearly_breakdown.is_empty() {
            return 0.0;
        }
        self.total_inflation_percent / self.yearly_breakdown.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compounding_parsing() {
        assert_eq!("annual".parse::<Compounding>().unwrap(), Compounding::Annual);
        assert_eq!("Yearly".parse::<Compounding>().unwrap(), Compounding::Annual);
        assert_eq!("MONTHLY".parse::<Compounding>().unwrap(), Compounding::Monthly);
        assert!("daily".parse::<Compounding>().is_err());
    }

    #[test]
    fn test_average_rate() {
        let result = InflationResult {
            original_amount: 100.0,
            adjusted_amount: 110.0,
            total_inflation_percent: 9.0,
            purchasing_power_loss_percent: 10.0,
            yearly_breakdown: vec![
                InflationSeriesPoint {
                    year: 2020,
                    applied_rate_percent: 4.0,
                    adjusted_value: 104.0,
                },
                InflationSeriesPoint {
                    year: 2021,
                    applied_rate_percent: 5.0,
                    adjusted_value: 109.2,
                },
            ],
        };
        assert_eq!(result.average_annual_rate_percent(), 4.5);
    }
}

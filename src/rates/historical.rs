//! Historical annual inflation rates by currency
//!
//! Built-in series cover USD (1960-2024), EUR (1997-2024), and GBP
//! (1989-2024); additional currencies can be merged in from CSV.

use std::collections::HashMap;

/// Contiguous run of annual rates for one currency
#[derive(Debug, Clone)]
pub struct RateSeries {
    start_year: u32,
    rates: Vec<f64>,
}

impl RateSeries {
    /// Create a series starting at `start_year`, one rate per year
    pub fn new(start_year: u32, rates: Vec<f64>) -> Self {
        Self { start_year, rates }
    }

    /// Annual rate (percent) for the given year, if covered
    pub fn rate(&self, year: u32) -> Option<f64> {
        if year < self.start_year {
            return None;
        }
        self.rates.get((year - self.start_year) as usize).copied()
    }

    /// First and last covered year
    pub fn year_range(&self) -> Option<(u32, u32)> {
        if self.rates.is_empty() {
            return None;
        }
        Some((self.start_year, self.start_year + self.rates.len() as u32 - 1))
    }
}

/// Lookup table of historical inflation series keyed by currency code
#[derive(Debug, Clone)]
pub struct RateTable {
    series: HashMap<String, RateSeries>,
}

impl RateTable {
    /// Table with no series; populate via `insert` or `merge`
    pub fn empty() -> Self {
        Self {
            series: HashMap::new(),
        }
    }

    /// Table preloaded with the built-in USD, EUR, and GBP series
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert("USD", RateSeries::new(1960, Self::usd_rates()));
        table.insert("EUR", RateSeries::new(1997, Self::eur_rates()));
        table.insert("GBP", RateSeries::new(1989, Self::gbp_rates()));
        table
    }

    /// Add or replace the series for a currency (code is case-insensitive)
    pub fn insert(&mut self, currency: &str, series: RateSeries) {
        self.series.insert(currency.to_uppercase(), series);
    }

    /// Fold another table's series into this one, replacing on conflict
    pub fn merge(&mut self, other: RateTable) {
        self.series.extend(other.series);
    }

    /// Historical rate for (currency, year), if present
    pub fn rate(&self, currency: &str, year: u32) -> Option<f64> {
        self.series
            .get(&currency.to_uppercase())
            .and_then(|s| s.rate(year))
    }

    /// Historical rate with an explicit fallback for lookup misses.
    ///
    /// A miss is any unknown currency or a year outside the series; both
    /// take the caller's fallback, never an error.
    pub fn rate_or_default(&self, currency: &str, year: u32, fallback: f64) -> f64 {
        match self.rate(currency, year) {
            Some(rate) => rate,
            None => {
                log::debug!(
                    "no rate for {}/{}, using fallback {:.2}%",
                    currency,
                    year,
                    fallback
                );
                fallback
            }
        }
    }

    /// Covered year span for a currency
    pub fn year_range(&self, currency: &str) -> Option<(u32, u32)> {
        self.series
            .get(&currency.to_uppercase())
            .and_then(|s| s.year_range())
    }

    /// Known currency codes, sorted
    pub fn currencies(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.series.keys().map(|s| s.as_str()).collect();
        codes.sort_unstable();
        codes
    }

    /// US CPI-U annual averages, percent
    fn usd_rates() -> Vec<f64> {
        vec![
            // 1960-1969
            1.7, 1.0, 1.0, 1.3, 1.3, 1.6, 2.9, 3.1, 4.2, 5.5,
            // 1970-1979
            5.7, 4.4, 3.2, 6.2, 11.0, 9.1, 5.8, 6.5, 7.6, 11.3,
            // 1980-1989
            13.5, 10.3, 6.2, 3.2, 4.3, 3.6, 1.9, 3.6, 4.1, 4.8,
            // 1990-1999
            5.4, 4.2, 3.0, 3.0, 2.6, 2.8, 3.0, 2.3, 1.6, 2.2,
            // 2000-2009
            3.4, 2.8, 1.6, 2.3, 2.7, 3.4, 3.2, 2.8, 3.8, -0.4,
            // 2010-2019
            1.6, 3.2, 2.1, 1.5, 1.6, 0.1, 1.3, 2.1, 2.4, 1.8,
            // 2020-2024
            1.2, 4.7, 8.0, 4.1, 2.9,
        ]
    }

    /// Euro-area HICP annual averages, percent
    fn eur_rates() -> Vec<f64> {
        vec![
            // 1997-1999
            1.7, 1.2, 1.1,
            // 2000-2009
            2.1, 2.4, 2.3, 2.1, 2.2, 2.2, 2.2, 2.1, 3.3, 0.3,
            // 2010-2019
            1.6, 2.7, 2.5, 1.4, 0.4, 0.2, 0.2, 1.5, 1.8, 1.2,
            // 2020-2024
            0.3, 2.6, 8.4, 5.4, 2.4,
        ]
    }

    /// UK CPI annual averages, percent
    fn gbp_rates() -> Vec<f64> {
        vec![
            // 1989
            5.2,
            // 1990-1999
            7.0, 7.5, 4.3, 2.5, 2.0, 2.6, 2.5, 1.8, 1.6, 1.3,
            // 2000-2009
            0.8, 1.2, 1.3, 1.4, 1.3, 2.1, 2.3, 2.3, 3.6, 2.2,
            // 2010-2019
            3.3, 4.5, 2.8, 2.6, 1.5, 0.0, 0.7, 2.7, 2.5, 1.8,
            // 2020-2024
            0.9, 2.6, 9.1, 7.3, 2.5,
        ]
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

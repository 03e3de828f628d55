//! CSV loader for additional inflation rate series

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::LoaderError;

use super::historical::{RateSeries, RateTable};

/// Default location of the rate overlay file
pub const DEFAULT_RATES_PATH: &str = "data/rates/inflation_rates.csv";

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "RatePct")]
    rate_pct: f64,
}

/// Parse a rate table from CSV with columns Currency, Year, RatePct.
///
/// Rows may arrive in any order, but each currency must cover a
/// contiguous year range with no duplicates.
pub fn load_rates_from_reader<R: Read>(reader: R) -> Result<RateTable, LoaderError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_currency: HashMap<String, Vec<(u32, f64)>> = HashMap::new();

    for (idx, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1, first data row is line 2
        let row = record.map_err(|e| LoaderError::row(idx + 2, e.to_string()))?;
        by_currency
            .entry(row.currency.to_uppercase())
            .or_default()
            .push((row.year, row.rate_pct));
    }

    let mut table = RateTable::empty();
    for (currency, mut years) in by_currency {
        years.sort_unstable_by_key(|&(year, _)| year);
        let start_year = years[0].0;

        let mut rates = Vec::with_capacity(years.len());
        for (offset, &(year, rate)) in years.iter().enumerate() {
            let expected = start_year + offset as u32;
            if year != expected {
                return Err(LoaderError::series(format!(
                    "{}: expected year {} but found {} (series must be contiguous)",
                    currency, expected, year
                )));
            }
            rates.push(rate);
        }
        table.insert(&currency, RateSeries::new(start_year, rates));
    }

    debug!("loaded {} rate series from CSV", table.currencies().len());
    Ok(table)
}

/// Load a rate table from a CSV file on disk
pub fn load_rates(path: &Path) -> Result<RateTable, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_rates_from_reader(file)
}

/// Load the default overlay shipped alongside the binaries
pub fn load_default_rates() -> Result<RateTable, LoaderError> {
    load_rates(Path::new(DEFAULT_RATES_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Currency,Year,RatePct
CAD,2020,0.7
CAD,2021,3.4
CAD,2022,6.8
CHF,2022,2.8
CHF,2023,2.1
";

    #[test]
    fn test_load_from_reader() {
        let table = load_rates_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.rate("CAD", 2021), Some(3.4));
        assert_eq!(table.rate("CHF", 2023), Some(2.1));
        assert_eq!(table.year_range("CAD"), Some((2020, 2022)));
    }

    #[test]
    fn test_out_of_order_rows_are_sorted() {
        let csv = "Currency,Year,RatePct\nCAD,2022,6.8\nCAD,2020,0.7\nCAD,2021,3.4\n";
        let table = load_rates_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.rate("CAD", 2020), Some(0.7));
        assert_eq!(table.rate("CAD", 2022), Some(6.8));
    }

    #[test]
    fn test_gap_in_series_is_rejected() {
        let csv = "Currency,Year,RatePct\nCAD,2020,0.7\nCAD,2022,6.8\n";
        let err = load_rates_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("contiguous"), "got: {}", err);
    }

    #[test]
    fn test_malformed_rate_reports_row() {
        let csv = "Currency,Year,RatePct\nCAD,2020,0.7\nCAD,2021,none\n";
        let err = load_rates_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 3"), "got: {}", err);
    }

    #[test]
    fn test_default_overlay_loads() {
        let table = load_default_rates().unwrap();
        assert!(table.rate("CAD", 2022).is_some());
    }
}

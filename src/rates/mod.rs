//! Historical inflation rate tables and their CSV loader.

pub mod historical;
pub mod loader;

pub use historical::{RateSeries, RateTable};
pub use loader::{load_default_rates, load_rates, load_rates_from_reader, DEFAULT_RATES_PATH};

//! Inflation adjustment over historical or custom annual rates.

pub mod data;
pub mod engine;

pub use data::{
    Compounding, InflationParameters, InflationResult, InflationSeriesPoint,
};
pub use engine::InflationEngine;

//! Sweep extra monthly payment amounts for a single loan
//!
//! Shows how total interest and the payoff date respond to additional
//! principal each month. Supports JSON output via --json flag.
//! Accepts the loan via environment variables:
//!   PRINCIPAL, ANNUAL_RATE_PCT, TERM_MONTHS, DOWN_PAYMENT,
//!   SWEEP_MAX, SWEEP_STEP

use fincalc::amortization::{AmortizationConfig, AmortizationEngine};
use fincalc::loan::LoanParameters;
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct SweepResponse {
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    down_payment: f64,
    monthly_payment: f64,
    rows: Vec<SweepRow>,
    execution_time_ms: u64,
}

#[derive(Serialize, Clone)]
struct SweepRow {
    extra_payment: f64,
    total_interest: f64,
    interest_savings: f64,
    payoff_period: u32,
    months_saved: u32,
}

fn main() {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    // Read the loan from environment or use defaults
    let principal: f64 = env::var("PRINCIPAL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(300_000.0);

    let annual_rate_percent: f64 = env::var("ANNUAL_RATE_PCT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(6.5);

    let term_months: u32 = env::var("TERM_MONTHS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(360);

    let down_payment: f64 = env::var("DOWN_PAYMENT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);

    let sweep_max: u32 = env::var("SWEEP_MAX")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000);

    let sweep_step: u32 = env::var("SWEEP_STEP")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(100)
        .max(1);

    let mut base_loan = LoanParameters::new(principal, annual_rate_percent, term_months);
    base_loan.down_payment = down_payment;

    if !json_output {
        println!(
            "Sweeping extra payments 0..={} (step {}) on ${:.0} at {}% over {} months",
            sweep_max, sweep_step, principal, annual_rate_percent, term_months
        );
    }

    let extras: Vec<u32> = (0..=sweep_max).step_by(sweep_step as usize).collect();
    let rows: Vec<SweepRow> = extras
        .par_iter()
        .map(|&extra| {
            let mut loan = base_loan.clone();
            loan.extra_monthly_payment = extra as f64;
            let result = AmortizationEngine::new(AmortizationConfig::default()).amortize(&loan);
            SweepRow {
                extra_payment: extra as f64,
                total_interest: result.total_interest,
                interest_savings: result.interest_savings,
                payoff_period: result.payoff_period,
                months_saved: result.months_saved(term_months),
            }
        })
        .collect();

    let monthly_payment = AmortizationEngine::new(AmortizationConfig::default())
        .amortize(&base_loan)
        .monthly_payment;

    let execution_time_ms = start.elapsed().as_millis() as u64;

    if json_output {
        let response = SweepResponse {
            principal,
            annual_rate_percent,
            term_months,
            down_payment,
            monthly_payment,
            rows,
            execution_time_ms,
        };
        println!("{}", serde_json::to_string(&response).unwrap());
    } else {
        println!("\nBase monthly payment: ${:.2}\n", monthly_payment);
        println!(
            "{:>8} {:>14} {:>14} {:>8} {:>9}",
            "Extra", "Interest", "Saved", "Payoff", "Mo Saved"
        );
        println!("{}", "-".repeat(58));
        for row in &rows {
            println!(
                "{:>8.0} {:>14.2} {:>14.2} {:>8} {:>9}",
                row.extra_payment,
                row.total_interest,
                row.interest_savings,
                row.payoff_period,
                row.months_saved,
            );
        }

        println!("\nTotal time: {:?}", start.elapsed());
    }
}

//! Amortize every loan in a portfolio CSV
//!
//! Outputs per-period aggregated payment, principal, interest, and
//! balance totals across the portfolio.
//! Set PORTFOLIO_CSV to read a different file than the default.

use fincalc::amortization::{AmortizationConfig, AmortizationEngine, AmortizationResult};
use fincalc::loan::loader::{load_loans, DEFAULT_PORTFOLIO_PATH};
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Aggregated per-period results across all loans
#[derive(Debug, Clone, Default)]
struct AggregatedRow {
    period: u32,
    active_loans: u32,
    total_payment: f64,
    total_principal: f64,
    total_interest: f64,
    total_balance: f64,
}

fn main() {
    env_logger::init();

    let start = Instant::now();
    let path = env::var("PORTFOLIO_CSV").unwrap_or_else(|_| DEFAULT_PORTFOLIO_PATH.to_string());

    println!("Loading loans from {}...", path);
    let loans = load_loans(Path::new(&path)).expect("Failed to load loan portfolio");
    println!("Loaded {} loans in {:?}", loans.len(), start.elapsed());

    println!("Amortizing...");
    let amort_start = Instant::now();

    // Run schedules in parallel
    let results: Vec<AmortizationResult> = loans
        .par_iter()
        .map(|loan| {
            let engine = AmortizationEngine::new(AmortizationConfig::default());
            engine.amortize(loan)
        })
        .collect();

    println!("Schedules complete in {:?}", amort_start.elapsed());

    // Aggregate results by period
    let num_periods = results.iter().map(|r| r.schedule.len()).max().unwrap_or(0);
    let mut aggregated: Vec<AggregatedRow> = (1..=num_periods as u32)
        .map(|p| AggregatedRow { period: p, ..Default::default() })
        .collect();

    for result in &results {
        for row in &result.schedule {
            let idx = (row.period - 1) as usize;
            if idx < aggregated.len() {
                let agg = &mut aggregated[idx];
                agg.active_loans += 1;
                agg.total_payment += row.payment_amount;
                agg.total_principal += row.principal_portion;
                agg.total_interest += row.interest_portion;
                agg.total_balance += row.remaining_balance;
            }
        }
    }

    // Write output
    let output_path = "portfolio_schedule.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "Period,ActiveLoans,Payment,Principal,Interest,Balance").unwrap();
    for row in &aggregated {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2}",
            row.period,
            row.active_loans,
            row.total_payment,
            row.total_principal,
            row.total_interest,
            row.total_balance,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    let total_financed: f64 = results.iter().map(|r| r.financed_amount).sum();
    let total_interest: f64 = results.iter().map(|r| r.total_interest).sum();
    let combined_payment: f64 = results.iter().map(|r| r.monthly_payment).sum();
    let first_payoff = results.iter().map(|r| r.payoff_period).min().unwrap_or(0);
    let last_payoff = results.iter().map(|r| r.payoff_period).max().unwrap_or(0);

    println!("\nPortfolio Summary:");
    println!("  Loans:            {}", results.len());
    println!("  Total Financed:   ${:.2}", total_financed);
    println!("  Combined Payment: ${:.2}/month", combined_payment);
    println!("  Total Interest:   ${:.2}", total_interest);
    println!("  First Payoff:     period {}", first_payoff);
    println!("  Last Payoff:      period {}", last_payoff);

    println!("\nKey Periods:");
    for &p in &[1usize, 12, 60, 120, 240, 360] {
        if let Some(row) = aggregated.get(p - 1) {
            println!(
                "  Period {:>3}: Active={:>3} Balance=${:>12.0} Interest=${:>10.2}",
                p, row.active_loans, row.total_balance, row.total_interest
            );
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
}

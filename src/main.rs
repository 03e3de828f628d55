//! fincalc CLI
//!
//! Command-line interface for the loan, investment, and inflation
//! calculators

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use fincalc::amortization::{AmortizationConfig, AmortizationResult};
use fincalc::inflation::{Compounding, InflationParameters, InflationResult};
use fincalc::investment::{InvestmentAnalysis, InvestmentConfig, PropertyInvestmentParameters};
use fincalc::loan::{LoanParameters, PaymentFrequency};
use fincalc::ScenarioRunner;

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Loan, investment, and inflation calculators")]
struct Cli {
    /// CSV of extra inflation rate series, merged over the built-in tables
    #[arg(long, value_name = "FILE", global = true)]
    rates: Option<PathBuf>,

    /// Print the result as JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Amortize a mortgage
    Mortgage {
        /// Purchase price
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Term in months
        #[arg(long, default_value_t = 360)]
        term: u32,
        #[arg(long, default_value_t = 0.0)]
        down_payment: f64,
        /// Extra principal paid each month
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
        /// Balloon amount due at term end (informational)
        #[arg(long, default_value_t = 0.0)]
        balloon: f64,
        /// Prepayment penalty in percent of the financed amount
        #[arg(long, default_value_t = 0.0)]
        penalty: f64,
        /// Date of the first payment (YYYY-MM-DD)
        #[arg(long)]
        first_payment: Option<NaiveDate>,
        /// Displayed payment frequency
        #[arg(long, default_value = "monthly")]
        frequency: PaymentFrequency,
        /// Write the full schedule to a CSV file
        #[arg(long, value_name = "FILE")]
        schedule_csv: Option<PathBuf>,
    },
    /// Amortize a personal loan
    Loan {
        /// Amount borrowed
        #[arg(long)]
        amount: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Term in months
        #[arg(long)]
        term: u32,
        /// Origination fee in percent, rolled into the loan
        #[arg(long, default_value_t = 0.0)]
        fee: f64,
        /// Extra principal paid each month
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
        /// Write the full schedule to a CSV file
        #[arg(long, value_name = "FILE")]
        schedule_csv: Option<PathBuf>,
    },
    /// Analyze a rental property
    Investment {
        /// Purchase price
        #[arg(long)]
        value: f64,
        #[arg(long)]
        down_payment: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Loan term in years
        #[arg(long, default_value_t = 30)]
        term_years: u32,
        /// Gross monthly rent
        #[arg(long)]
        rent: f64,
        /// Property tax, percent of value per year
        #[arg(long, default_value_t = 0.0)]
        tax_rate: f64,
        /// Insurance, percent of value per year
        #[arg(long, default_value_t = 0.0)]
        insurance_rate: f64,
        /// Maintenance reserve, percent of value per year
        #[arg(long, default_value_t = 0.0)]
        maintenance_rate: f64,
        /// Vacancy, percent of rent
        #[arg(long, default_value_t = 0.0)]
        vacancy: f64,
        /// Management fee, percent of rent
        #[arg(long, default_value_t = 0.0)]
        management: f64,
        #[arg(long, default_value_t = 0.0)]
        hoa: f64,
        #[arg(long, default_value_t = 0.0)]
        utilities: f64,
        /// Closing costs, percent of value
        #[arg(long, default_value_t = 0.0)]
        closing: f64,
        #[arg(long, default_value_t = 0.0)]
        repairs: f64,
        #[arg(long, default_value_t = 0.0)]
        furnishing: f64,
        /// Annual appreciation in percent
        #[arg(long, default_value_t = 0.0)]
        appreciation: f64,
        /// Annual rent growth in percent
        #[arg(long, default_value_t = 0.0)]
        rent_growth: f64,
        /// Annual expense growth in percent
        #[arg(long, default_value_t = 0.0)]
        expense_growth: f64,
        /// Projection horizon in years
        #[arg(long, default_value_t = 30)]
        years: u32,
        /// Write the projection rows to a CSV file
        #[arg(long, value_name = "FILE")]
        projection_csv: Option<PathBuf>,
    },
    /// Adjust an amount for inflation over a year range
    Inflation {
        #[arg(long)]
        amount: f64,
        /// First year, inclusive
        #[arg(long)]
        from: u32,
        /// Last year, inclusive
        #[arg(long)]
        to: u32,
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Constant rate applied to every year instead of the table
        #[arg(long)]
        custom_rate: Option<f64>,
        /// Fallback rate for years missing from the table
        #[arg(long, default_value_t = 2.5)]
        fallback_rate: f64,
        #[arg(long, default_value = "annual")]
        compounding: Compounding,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = match &cli.rates {
        Some(path) => ScenarioRunner::from_csv_path(path)
            .with_context(|| format!("loading rates from {}", path.display()))?,
        None => ScenarioRunner::new(),
    };

    match cli.command {
        Command::Mortgage {
            principal,
            rate,
            term,
            down_payment,
            extra,
            balloon,
            penalty,
            first_payment,
            frequency,
            schedule_csv,
        } => {
            let mut loan = LoanParameters::new(principal, rate, term);
            loan.down_payment = down_payment;
            loan.extra_monthly_payment = extra;
            loan.balloon_payment = balloon;
            loan.prepayment_penalty_percent = penalty;
            loan.first_payment_date = first_payment;

            let result = runner.run_loan(&loan, AmortizationConfig { frequency });
            if let Some(path) = &schedule_csv {
                write_schedule_csv(path, &result)?;
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_loan_report("Mortgage", &loan, frequency, &result);
            }
        }
        Command::Loan {
            amount,
            rate,
            term,
            fee,
            extra,
            schedule_csv,
        } => {
            let mut loan = LoanParameters::new(amount, rate, term);
            loan.origination_fee_percent = fee;
            loan.extra_monthly_payment = extra;

            let result = runner.run_loan(&loan, AmortizationConfig::default());
            if let Some(path) = &schedule_csv {
                write_schedule_csv(path, &result)?;
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_loan_report("Personal Loan", &loan, PaymentFrequency::Monthly, &result);
            }
        }
        Command::Investment {
            value,
            down_payment,
            rate,
            term_years,
            rent,
            tax_rate,
            insurance_rate,
            maintenance_rate,
            vacancy,
            management,
            hoa,
            utilities,
            closing,
            repairs,
            furnishing,
            appreciation,
            rent_growth,
            expense_growth,
            years,
            projection_csv,
        } => {
            let params = PropertyInvestmentParameters {
                property_value: value,
                down_payment,
                interest_rate_percent: rate,
                loan_term_years: term_years,
                monthly_rent: rent,
                property_tax_rate_percent: tax_rate,
                insurance_rate_percent: insurance_rate,
                maintenance_rate_percent: maintenance_rate,
                vacancy_rate_percent: vacancy,
                management_fee_percent: management,
                hoa_fees_monthly: hoa,
                utilities_monthly: utilities,
                closing_costs_percent: closing,
                repair_costs: repairs,
                furnishing_costs: furnishing,
                appreciation_rate_percent: appreciation,
                rent_growth_rate_percent: rent_growth,
                expense_growth_rate_percent: expense_growth,
            };

            let analysis = runner.run_investment(
                &params,
                InvestmentConfig {
                    projection_years: years,
                },
            );
            if let Some(path) = &projection_csv {
                write_projection_csv(path, &analysis)?;
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_investment_report(&analysis);
            }
        }
        Command::Inflation {
            amount,
            from,
            to,
            currency,
            custom_rate,
            fallback_rate,
            compounding,
        } => {
            let params = InflationParameters {
                amount,
                start_year: from,
                end_year: to,
                currency,
                use_custom_rate: custom_rate.is_some(),
                custom_rate_percent: custom_rate.unwrap_or(fallback_rate),
                compounding,
            };

            let result = runner.run_inflation(&params);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_inflation_report(&params, &result);
            }
        }
    }

    Ok(())
}

fn print_loan_report(
    title: &str,
    loan: &LoanParameters,
    frequency: PaymentFrequency,
    result: &AmortizationResult,
) {
    println!("{} Amortization", title);
    println!("{}\n", "=".repeat(title.len() + 13));

    println!("  Financed Amount:  ${:.2}", result.financed_amount);
    println!("  Monthly Payment:  ${:.2}", result.monthly_payment);
    if frequency != PaymentFrequency::Monthly {
        println!(
            "  {} Payment: ${:.2}",
            capitalized(frequency.as_str()),
            result.per_period_payment
        );
    }
    println!("  Total Interest:   ${:.2}", result.total_interest);
    println!("  Total Cost:       ${:.2}", result.total_cost);
    if loan.extra_monthly_payment > 0.0 {
        println!("  Interest Saved:   ${:.2}", result.interest_savings);
        println!(
            "  Months Saved:     {}",
            result.months_saved(loan.term_months)
        );
    }
    match result.payoff_date {
        Some(date) => println!("  Paid Off:         period {} ({})", result.payoff_period, date),
        None => println!("  Paid Off:         period {}", result.payoff_period),
    }
    if result.balloon_payment > 0.0 {
        println!("  Balloon Due:      ${:.2}", result.balloon_payment);
    }
    if result.prepayment_penalty > 0.0 {
        println!("  Prepay Penalty:   ${:.2}", result.prepayment_penalty);
    }
    println!();

    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>14} {:>14}",
        "Period", "Payment", "Principal", "Interest", "Balance", "Cum Interest"
    );
    println!("{}", "-".repeat(74));
    for entry in result.schedule.iter().take(12) {
        println!(
            "{:>6} {:>12.2} {:>12.2} {:>12.2} {:>14.2} {:>14.2}",
            entry.period,
            entry.payment_amount,
            entry.principal_portion,
            entry.interest_portion,
            entry.remaining_balance,
            entry.cumulative_interest,
        );
    }
    if result.schedule.len() > 12 {
        println!("... ({} more periods)", result.schedule.len() - 12);
    }
}

fn print_investment_report(analysis: &InvestmentAnalysis) {
    println!("Property Investment Analysis");
    println!("============================\n");

    println!("  Monthly Payment:    ${:.2}", analysis.monthly_payment);
    println!("  Monthly Cash Flow:  ${:.2}", analysis.monthly_cash_flow);
    println!("  NOI (annual):       ${:.2}", analysis.net_operating_income);
    println!("  Cap Rate:           {:.2}%", analysis.cap_rate);
    println!("  Cash-on-Cash:       {:.2}%", analysis.cash_on_cash_return);
    println!("  ROI (year 1):       {:.2}%", analysis.roi);
    println!("  Total Investment:   ${:.2}", analysis.total_investment);
    match analysis.break_even_months {
        Some(months) => println!("  Break-even:         {} months", months),
        None => println!("  Break-even:         never (negative benefit)"),
    }
    match analysis.projection_irr {
        Some(irr) => println!("  Projection IRR:     {:.2}%", irr * 100.0),
        None => println!("  Projection IRR:     n/a"),
    }
    println!();

    println!("Monthly Expenses:");
    println!("  Property Tax:  ${:.2}", analysis.expenses.property_tax);
    println!("  Insurance:     ${:.2}", analysis.expenses.insurance);
    println!("  Maintenance:   ${:.2}", analysis.expenses.maintenance);
    println!("  Vacancy:       ${:.2}", analysis.expenses.vacancy);
    println!("  Management:    ${:.2}", analysis.expenses.management);
    println!("  HOA:           ${:.2}", analysis.expenses.hoa);
    println!("  Utilities:     ${:.2}", analysis.expenses.utilities);
    println!();

    println!(
        "{:>4} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Value", "Income", "Expenses", "Balance", "Equity"
    );
    println!("{}", "-".repeat(80));
    for row in analysis.projections.iter().take(11) {
        println!(
            "{:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.year,
            row.property_value,
            row.annual_income,
            row.annual_expenses,
            row.loan_balance,
            row.equity,
        );
    }
    if analysis.projections.len() > 11 {
        println!("... ({} more years)", analysis.projections.len() - 11);
    }
}

fn print_inflation_report(params: &InflationParameters, result: &InflationResult) {
    println!("Inflation Adjustment");
    println!("====================\n");

    let end_year = params.end_year.max(params.start_year);
    println!(
        "  ${:.2} in {} is worth ${:.2} in {} ({})",
        result.original_amount,
        params.start_year,
        result.adjusted_amount,
        end_year,
        params.currency,
    );
    println!("  Total Inflation:     {:.1}%", result.total_inflation_percent);
    println!(
        "  Price Level Change:  {:.2}%",
        result.purchasing_power_loss_percent
    );
    println!(
        "  Average Annual Rate: {:.2}%",
        result.average_annual_rate_percent()
    );
    println!();

    println!("{:>6} {:>8} {:>14}", "Year", "Rate", "Value");
    println!("{}", "-".repeat(30));
    for point in &result.yearly_breakdown {
        println!(
            "{:>6} {:>7.1}% {:>14.2}",
            point.year, point.applied_rate_percent, point.adjusted_value
        );
    }
}

fn write_schedule_csv(path: &Path, result: &AmortizationResult) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("creating schedule file {}", path.display()))?;

    writeln!(
        file,
        "Period,Date,Payment,Principal,Interest,Balance,CumulativeInterest"
    )?;
    for entry in &result.schedule {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            entry.period,
            entry.date.map(|d| d.to_string()).unwrap_or_default(),
            entry.payment_amount,
            entry.principal_portion,
            entry.interest_portion,
            entry.remaining_balance,
            entry.cumulative_interest,
        )?;
    }

    println!("Full schedule written to: {}\n", path.display());
    Ok(())
}

fn write_projection_csv(path: &Path, analysis: &InvestmentAnalysis) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("creating projection file {}", path.display()))?;

    writeln!(file, "Year,PropertyValue,AnnualIncome,AnnualExpenses,LoanBalance,Equity")?;
    for row in &analysis.projections {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.year,
            row.property_value,
            row.annual_income,
            row.annual_expenses,
            row.loan_balance,
            row.equity,
        )?;
    }

    println!("Projection written to: {}\n", path.display());
    Ok(())
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

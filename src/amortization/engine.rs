//! Core amortization engine producing per-period schedules and totals

use super::schedule::{AmortizationEntry, AmortizationResult};
use super::state::ScheduleState;
use crate::loan::{LoanParameters, PaymentFrequency};

/// Level payment for a fully amortizing loan via the standard annuity
/// formula.
///
/// Degenerate inputs (no term, nothing financed, a denominator of zero, or
/// a non-finite intermediate) return a payment of 0 rather than failing:
/// the calculators display a blank figure, they do not raise.
pub fn annuity_payment(financed: f64, monthly_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 || financed <= 0.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return financed / term_months as f64;
    }

    let growth = (1.0 + monthly_rate).powi(term_months as i32);
    let denominator = growth - 1.0;
    if denominator == 0.0 {
        return 0.0;
    }

    let payment = financed * monthly_rate * growth / denominator;
    if payment.is_finite() {
        payment
    } else {
        0.0
    }
}

/// Outstanding balance of a level-payment loan after a number of payments,
/// from the closed form rather than walking the schedule.
///
/// Clamped at zero once the loan is repaid, so the count may run past the
/// term.
pub fn remaining_balance(
    financed: f64,
    monthly_rate: f64,
    payment: f64,
    periods_elapsed: u32,
) -> f64 {
    if financed <= 0.0 || periods_elapsed == 0 {
        return financed.max(0.0);
    }

    let balance = if monthly_rate == 0.0 {
        financed - payment * periods_elapsed as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(periods_elapsed as i32);
        financed * growth - payment * (growth - 1.0) / monthly_rate
    };

    balance.max(0.0)
}

/// Configuration for an amortization run
#[derive(Debug, Clone)]
pub struct AmortizationConfig {
    /// Display frequency for the per-period payment amount
    pub frequency: PaymentFrequency,
}

impl Default for AmortizationConfig {
    fn default() -> Self {
        Self {
            frequency: PaymentFrequency::Monthly,
        }
    }
}

/// Amortization engine
///
/// Stateless between runs; every call recomputes from the full loan
/// snapshot.
pub struct AmortizationEngine {
    config: AmortizationConfig,
}

/// Totals from one forward pass over the schedule
struct PassTotals {
    entries: Vec<AmortizationEntry>,
    total_interest: f64,
    payoff_period: u32,
    payoff_date: Option<chrono::NaiveDate>,
}

impl AmortizationEngine {
    /// Create a new engine with the given config
    pub fn new(config: AmortizationConfig) -> Self {
        Self { config }
    }

    /// Run the full amortization for a single loan
    pub fn amortize(&self, loan: &LoanParameters) -> AmortizationResult {
        let financed = loan.financed_amount();
        let monthly_rate = loan.monthly_rate();
        let monthly_payment = annuity_payment(financed, monthly_rate, loan.term_months);

        let pass = self.schedule_pass(loan, monthly_payment, loan.extra_monthly_payment);

        // The savings figure compares against the same loan with no extra
        // payments; skip the second pass when there is nothing to compare.
        let interest_savings = if loan.extra_monthly_payment > 0.0 {
            let baseline = self.schedule_pass(loan, monthly_payment, 0.0);
            (baseline.total_interest - pass.total_interest).max(0.0)
        } else {
            0.0
        };

        AmortizationResult {
            financed_amount: financed,
            monthly_payment,
            per_period_payment: monthly_payment / self.config.frequency.payments_per_month(),
            total_interest: pass.total_interest,
            total_cost: financed + pass.total_interest,
            interest_savings,
            payoff_period: pass.payoff_period,
            payoff_date: pass.payoff_date,
            balloon_payment: loan.balloon_payment,
            prepayment_penalty: financed * loan.prepayment_penalty_percent / 100.0,
            schedule: pass.entries,
        }
    }

    /// Forward pass over periods 1..=term, truncating at full payoff
    fn schedule_pass(
        &self,
        loan: &LoanParameters,
        monthly_payment: f64,
        extra_payment: f64,
    ) -> PassTotals {
        let monthly_rate = loan.monthly_rate();
        let mut state = ScheduleState::from_loan(loan);
        let mut entries = Vec::new();

        if monthly_payment > 0.0 {
            for _ in 1..=loan.term_months {
                state.advance();

                let interest_portion = state.balance * monthly_rate;
                // The annuity payment always covers the interest on the
                // opening balance, so the split stays non-negative; the min
                // keeps the final period from overshooting.
                let principal_portion =
                    (monthly_payment - interest_portion + extra_payment).min(state.balance);
                state.apply_payment(principal_portion, interest_portion);

                entries.push(AmortizationEntry {
                    period: state.period,
                    date: state.current_date(),
                    payment_amount: interest_portion + principal_portion,
                    principal_portion,
                    interest_portion,
                    remaining_balance: state.balance,
                    cumulative_interest: state.cumulative_interest,
                });

                if state.paid_off() {
                    break;
                }
            }
        }

        let payoff_period = entries.last().map(|e| e.period).unwrap_or(0);
        let payoff_date = entries.last().and_then(|e| e.date);

        PassTotals {
            entries,
            total_interest: state.cumulative_interest,
            payoff_period,
            payoff_date,
        }
    }
}

impl Default for AmortizationEngine {
    fn default() -> Self {
        Self::new(AmortizationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn mortgage_300k() -> LoanParameters {
        let mut loan = LoanParameters::new(300_000.0, 6.5, 360);
        loan.down_payment = 60_000.0;
        loan
    }

    #[test]
    fn test_annuity_payment_guards() {
        assert_eq!(annuity_payment(100_000.0, 0.005, 0), 0.0);
        assert_eq!(annuity_payment(0.0, 0.005, 360), 0.0);
        assert_eq!(annuity_payment(-5.0, 0.005, 360), 0.0);
        // Zero rate falls back to straight division
        assert_eq!(annuity_payment(12_000.0, 0.0, 12), 1_000.0);
    }

    #[test]
    fn test_mortgage_scenario() {
        let engine = AmortizationEngine::default();
        let result = engine.amortize(&mortgage_300k());

        assert_eq!(result.financed_amount, 240_000.0);
        // Standard 30-year P&I payment for 240k at 6.5%
        assert!(
            (result.monthly_payment - 1_516.96).abs() < 1.0,
            "payment: {}",
            result.monthly_payment
        );
        assert_eq!(result.schedule.len(), 360);
        assert_eq!(result.payoff_period, 360);

        let final_balance = result.final_entry().unwrap().remaining_balance;
        assert!(final_balance.abs() < 1e-4, "final balance: {}", final_balance);

        // Principal repaid must reconcile with the financed amount
        assert_relative_eq!(result.total_principal(), 240_000.0, max_relative = 1e-8);
        assert_relative_eq!(
            result.total_cost,
            240_000.0 + result.total_interest,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_rate_splits_evenly() {
        let loan = LoanParameters::new(12_000.0, 0.0, 12);
        let result = AmortizationEngine::default().amortize(&loan);

        assert_eq!(result.monthly_payment, 1_000.0);
        assert_eq!(result.total_interest, 0.0);
        for entry in &result.schedule {
            assert_eq!(entry.interest_portion, 0.0);
            assert_relative_eq!(entry.principal_portion, 1_000.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_extra_payment_monotonicity() {
        let engine = AmortizationEngine::default();
        let mut prior_interest = f64::INFINITY;
        let mut prior_payoff = u32::MAX;

        for extra in [0.0, 100.0, 300.0, 500.0] {
            let mut loan = mortgage_300k();
            loan.extra_monthly_payment = extra;
            let result = engine.amortize(&loan);

            assert!(
                result.total_interest < prior_interest,
                "extra {} did not reduce interest",
                extra
            );
            assert!(
                result.payoff_period <= prior_payoff,
                "extra {} did not shorten payoff",
                extra
            );
            prior_interest = result.total_interest;
            prior_payoff = result.payoff_period;
        }
    }

    #[test]
    fn test_interest_savings_matches_baseline_difference() {
        let engine = AmortizationEngine::default();

        let baseline = engine.amortize(&mortgage_300k());
        assert_eq!(baseline.interest_savings, 0.0);

        let mut accelerated = mortgage_300k();
        accelerated.extra_monthly_payment = 200.0;
        let result = engine.amortize(&accelerated);

        assert!(result.interest_savings > 0.0);
        assert_relative_eq!(
            result.interest_savings,
            baseline.total_interest - result.total_interest,
            max_relative = 1e-10
        );
        assert!(result.payoff_period < 360);
        assert_eq!(result.schedule.len() as u32, result.payoff_period);
    }

    #[test]
    fn test_personal_loan_scenario() {
        let mut loan = LoanParameters::new(10_000.0, 8.5, 36);
        loan.origination_fee_percent = 1.0;

        let result = AmortizationEngine::default().amortize(&loan);

        assert_eq!(result.financed_amount, 10_100.0);
        let expected = annuity_payment(10_100.0, 8.5 / 100.0 / 12.0, 36);
        assert_relative_eq!(result.monthly_payment, expected, max_relative = 1e-12);
        assert_eq!(result.schedule.len(), 36);
    }

    #[test]
    fn test_degenerate_inputs_yield_empty_result() {
        let engine = AmortizationEngine::default();

        let zero_term = LoanParameters::new(50_000.0, 5.0, 0);
        let result = engine.amortize(&zero_term);
        assert_eq!(result.monthly_payment, 0.0);
        assert!(result.schedule.is_empty());
        assert_eq!(result.payoff_period, 0);
        assert_eq!(result.total_interest, 0.0);

        let mut swamped = LoanParameters::new(50_000.0, 5.0, 60);
        swamped.down_payment = 50_000.0;
        let result = engine.amortize(&swamped);
        assert_eq!(result.financed_amount, 0.0);
        assert!(result.schedule.is_empty());
    }

    #[test]
    fn test_payoff_date_tracks_truncated_schedule() {
        let mut loan = LoanParameters::new(10_000.0, 6.0, 120);
        loan.extra_monthly_payment = 500.0;
        loan.first_payment_date = NaiveDate::from_ymd_opt(2025, 1, 1);

        let result = AmortizationEngine::default().amortize(&loan);

        assert!(result.payoff_period < 120);
        assert_eq!(result.schedule.len() as u32, result.payoff_period);
        let expected_date = loan.payment_date(result.payoff_period);
        assert_eq!(result.payoff_date, expected_date);
        assert_eq!(result.final_entry().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_frequency_divides_displayed_payment() {
        let loan = mortgage_300k();

        let monthly = AmortizationEngine::default().amortize(&loan);
        let biweekly = AmortizationEngine::new(AmortizationConfig {
            frequency: PaymentFrequency::Biweekly,
        })
        .amortize(&loan);
        let weekly = AmortizationEngine::new(AmortizationConfig {
            frequency: PaymentFrequency::Weekly,
        })
        .amortize(&loan);

        assert_relative_eq!(
            biweekly.per_period_payment,
            monthly.monthly_payment / 2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            weekly.per_period_payment,
            monthly.monthly_payment / 4.0,
            max_relative = 1e-12
        );
        // The underlying schedule is identical regardless of frequency
        assert_eq!(biweekly.schedule.len(), monthly.schedule.len());
        assert_eq!(biweekly.total_interest, monthly.total_interest);
    }

    #[test]
    fn test_remaining_balance_closed_form_matches_schedule() {
        let loan = mortgage_300k();
        let result = AmortizationEngine::default().amortize(&loan);
        let payment = result.monthly_payment;

        for checkpoint in [1u32, 12, 60, 180, 359, 360] {
            let from_schedule = result.schedule[checkpoint as usize - 1].remaining_balance;
            let closed_form =
                remaining_balance(240_000.0, loan.monthly_rate(), payment, checkpoint);
            assert!(
                (from_schedule - closed_form).abs() < 1e-3,
                "period {}: schedule {} vs closed form {}",
                checkpoint,
                from_schedule,
                closed_form
            );
        }

        // Past the term the balance stays clamped at zero
        assert_eq!(
            remaining_balance(240_000.0, loan.monthly_rate(), payment, 400),
            0.0
        );
    }

    #[test]
    fn test_balloon_and_penalty_are_informational() {
        let mut loan = mortgage_300k();
        loan.balloon_payment = 25_000.0;
        loan.prepayment_penalty_percent = 2.0;

        let plain = AmortizationEngine::default().amortize(&mortgage_300k());
        let result = AmortizationEngine::default().amortize(&loan);

        assert_eq!(result.balloon_payment, 25_000.0);
        assert_relative_eq!(result.prepayment_penalty, 4_800.0, max_relative = 1e-12);
        // Neither input changes the schedule itself
        assert_eq!(result.schedule.len(), plain.schedule.len());
        assert_eq!(result.total_interest, plain.total_interest);
    }
}

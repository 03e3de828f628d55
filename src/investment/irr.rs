//! Internal rate of return over annual cash flows
//!
//! Used to score the multi-year property projection as a single
//! annualized return figure.

/// Solve for the annual rate at which the given cash flows discount to a
/// net present value of zero. Index 0 is "now"; positive is an inflow.
///
/// Newton-Raphson from a modest initial guess, with a bisection fallback
/// when the derivative flattens out or the iteration fails to converge.
/// Returns None when no root exists (for example, no sign change).
pub fn annual_irr(cashflows: &[f64]) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }
    if cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Some(0.0);
    }

    // A root requires at least one inflow and one outflow
    let has_inflow = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_outflow = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_inflow || !has_outflow {
        return None;
    }

    let tolerance = 1e-10;
    let mut rate: f64 = 0.08;

    for _ in 0..1_000 {
        let (npv, derivative) = npv_with_derivative(cashflows, rate);
        if derivative.abs() < 1e-20 {
            return bisect_irr(cashflows);
        }

        let next = (rate - npv / derivative).clamp(-0.99, 10.0);
        if (next - rate).abs() < tolerance {
            return Some(next);
        }
        rate = next;
    }

    bisect_irr(cashflows)
}

fn npv_with_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut derivative = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            derivative -= t as f64 * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, derivative)
}

fn npv_at(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

fn bisect_irr(cashflows: &[f64]) -> Option<f64> {
    let mut low = -0.99_f64;
    let mut high = 10.0_f64;
    let tolerance = 1e-10;

    if npv_at(cashflows, low) * npv_at(cashflows, high) > 0.0 {
        return None;
    }

    for _ in 0..1_000 {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at(cashflows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if npv_mid * npv_at(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}

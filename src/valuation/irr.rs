//! Internal Rate of Return (IRR) calculation
//!
//! Newton-Raphson root-find on NPV as a function of the discount rate.

use serde::{Deserialize, Serialize};

use super::net_present_value;
use crate::error::ModelError;

const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-4;
const DEFAULT_GUESS: f64 = 0.1;

/// IRR estimate with an explicit convergence flag.
///
/// A non-converged result is advisory, not an error: a degenerate cash
/// flow sequence has no meaningful IRR and the caller decides whether the
/// estimate is acceptable. The flag replaces sentinel NaN values so a bad
/// estimate cannot silently propagate as a plain number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IrrResult {
    /// Annual rate estimate (decimal)
    pub rate: f64,
    /// True only if `|NPV(rate)|` dropped below tolerance before the
    /// iteration budget ran out or the derivative vanished
    pub converged: bool,
}

/// Calculate the IRR of a cash flow sequence with the default initial
/// guess of 10%.
///
/// Sign convention: `cash_flows[0]` is the initial outflow (cost), the
/// remaining elements are inflows.
pub fn internal_rate_of_return(cash_flows: &[f64]) -> Result<IrrResult, ModelError> {
    internal_rate_of_return_with_guess(cash_flows, DEFAULT_GUESS)
}

/// Calculate the IRR of a cash flow sequence starting from `initial_guess`.
///
/// Convergence is not globally guaranteed; it depends on a single real
/// root existing near the guess (one sign change in the sequence). With
/// multiple sign changes the iteration returns whichever root it lands on.
pub fn internal_rate_of_return_with_guess(
    cash_flows: &[f64],
    initial_guess: f64,
) -> Result<IrrResult, ModelError> {
    if cash_flows.is_empty() {
        return Err(ModelError::EmptyCashflows);
    }

    let mut rate = initial_guess;

    for _ in 0..MAX_ITERATIONS {
        let npv = net_present_value(-cash_flows[0], &cash_flows[1..], rate);

        if npv.abs() < TOLERANCE {
            return Ok(IrrResult {
                rate,
                converged: true,
            });
        }

        let derivative = npv_derivative(cash_flows, rate);

        if derivative == 0.0 {
            // Flat NPV curve (e.g. all-zero inflows): no root to walk
            // toward, so stop with the current best estimate
            log::debug!("IRR derivative vanished at rate {rate}; returning non-converged estimate");
            return Ok(IrrResult {
                rate,
                converged: false,
            });
        }

        rate -= npv / derivative;
    }

    log::debug!("IRR did not converge within {MAX_ITERATIONS} iterations; last rate {rate}");
    Ok(IrrResult {
        rate,
        converged: false,
    })
}

/// Analytic derivative of the DCF sum with respect to the rate:
/// `sum over k of -k * cf[k] / (1 + rate)^(k + 1)`
fn npv_derivative(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(k, &cf)| -(k as f64) * cf / (1.0 + rate).powi(k as i32 + 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_single_period_irr() {
        // Invest 1000, receive 1100 one year later: IRR is exactly 10%
        let result = internal_rate_of_return(&[-1000.0, 1100.0]).unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.rate, 0.10, epsilon = 1e-3);
    }

    #[test]
    fn test_level_inflows_converge_and_invert_npv() {
        let cash_flows = [-1000.0, 300.0, 300.0, 300.0, 300.0, 300.0];
        let result = internal_rate_of_return(&cash_flows).unwrap();
        assert!(result.converged);

        // Discounting the inflows at the IRR recovers the initial outflow
        let npv = net_present_value(1000.0, &cash_flows[1..], result.rate);
        assert!(npv.abs() < 1e-3, "NPV at IRR was {npv}");
    }

    #[test]
    fn test_zero_derivative_terminates_early() {
        // All-zero inflows: NPV is constant at -100, derivative is zero
        // at the very first iteration
        let result = internal_rate_of_return(&[-100.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(!result.converged);
        assert_relative_eq!(result.rate, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_sequence_is_a_precondition_error() {
        assert!(matches!(
            internal_rate_of_return(&[]),
            Err(ModelError::EmptyCashflows)
        ));
    }

    #[test]
    fn test_custom_guess_reaches_same_root() {
        let cash_flows = [-1000.0, 500.0, 500.0, 500.0];
        let from_low = internal_rate_of_return_with_guess(&cash_flows, 0.01).unwrap();
        let from_high = internal_rate_of_return_with_guess(&cash_flows, 0.5).unwrap();

        assert!(from_low.converged && from_high.converged);
        assert_relative_eq!(from_low.rate, from_high.rate, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_irr_for_losing_investment() {
        // Total inflows below the outflow force a negative rate
        let result = internal_rate_of_return(&[-1000.0, 400.0, 400.0]).unwrap();
        assert!(result.converged);
        assert!(result.rate < 0.0);
    }
}

//! Discounted cash flow valuation
//!
//! Pure functions over plain numeric sequences; independent of the
//! projection and ratio layers.

mod irr;

pub use irr::{internal_rate_of_return, internal_rate_of_return_with_guess, IrrResult};

use serde::{Deserialize, Serialize};

/// Present value of a cash flow sequence.
///
/// `cash_flows[k]` is received at the end of period `k + 1`, so each
/// element is discounted by `(1 + rate)^(k + 1)`. An empty sequence is
/// worth zero.
pub fn present_value(cash_flows: &[f64], discount_rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(k, &cf)| cf / (1.0 + discount_rate).powi(k as i32 + 1))
        .sum()
}

/// Net present value: discounted inflows less the initial investment
pub fn net_present_value(initial_investment: f64, cash_flows: &[f64], discount_rate: f64) -> f64 {
    present_value(cash_flows, discount_rate) - initial_investment
}

/// DCF/IRR summary over one cash flow sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub present_value: f64,
    pub net_present_value: f64,
    pub internal_rate_of_return: f64,
    /// Advisory flag from the IRR solver; a `false` here means the rate
    /// is a best-effort estimate, not a root
    pub converged: bool,
}

/// Value a cash flow sequence against an initial investment.
///
/// The IRR runs over the combined sequence with the investment as the
/// period-zero outflow, so it is defined even when `cash_flows` is empty
/// (it just will not converge).
pub fn summarize(
    initial_investment: f64,
    cash_flows: &[f64],
    discount_rate: f64,
) -> ValuationSummary {
    let pv = present_value(cash_flows, discount_rate);

    let mut sequence = Vec::with_capacity(cash_flows.len() + 1);
    sequence.push(-initial_investment);
    sequence.extend_from_slice(cash_flows);

    // The combined sequence always has the investment element, so the
    // solver's empty-input error cannot occur here
    let irr = internal_rate_of_return(&sequence).unwrap_or(IrrResult {
        rate: 0.0,
        converged: false,
    });

    ValuationSummary {
        present_value: pv,
        net_present_value: pv - initial_investment,
        internal_rate_of_return: irr.rate,
        converged: irr.converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_present_value_of_empty_sequence_is_zero() {
        assert_eq!(present_value(&[], 0.1), 0.0);
    }

    #[test]
    fn test_present_value_discounts_from_period_one() {
        // Single flow of 110 one period out at 10%
        assert_relative_eq!(present_value(&[110.0], 0.10), 100.0, epsilon = 1e-9);

        // Two periods: 100/1.05 + 100/1.05^2
        let expected = 100.0 / 1.05 + 100.0 / (1.05 * 1.05);
        assert_relative_eq!(present_value(&[100.0, 100.0], 0.05), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_net_present_value_subtracts_investment() {
        let pv = present_value(&[300.0, 300.0], 0.08);
        assert_relative_eq!(
            net_present_value(500.0, &[300.0, 300.0], 0.08),
            pv - 500.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_summary_fields_are_consistent() {
        let flows = [300.0, 300.0, 300.0, 300.0, 300.0];
        let summary = summarize(1000.0, &flows, 0.10);

        assert!(summary.converged);
        assert_relative_eq!(
            summary.net_present_value,
            summary.present_value - 1000.0,
            epsilon = 1e-9
        );
        // At the IRR the same sequence nets to zero
        let at_irr = net_present_value(1000.0, &flows, summary.internal_rate_of_return);
        assert!(at_irr.abs() < 1e-3);
    }

    #[test]
    fn test_summary_flags_degenerate_sequence() {
        let summary = summarize(100.0, &[], 0.10);
        assert_eq!(summary.present_value, 0.0);
        assert_relative_eq!(summary.net_present_value, -100.0, epsilon = 1e-12);
        assert!(!summary.converged);
    }
}

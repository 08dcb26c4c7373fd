//! Financial statement structures produced by projections
//!
//! Every `total` field is derived from its components at construction;
//! nothing downstream recomputes or overrides it.

use serde::{Deserialize, Serialize};

use crate::ratios::RatioGroups;

/// Revenue lines for one fiscal year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revenue {
    pub sales: f64,
    pub services: f64,
    pub other: f64,
    /// Always `sales + services + other`
    pub total: f64,
}

impl Revenue {
    pub fn from_components(sales: f64, services: f64, other: f64) -> Self {
        Self {
            sales,
            services,
            other,
            total: sales + services + other,
        }
    }
}

/// Cost lines for one fiscal year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Costs {
    pub cost_of_goods_sold: f64,
    pub operating_expenses: f64,
    pub depreciation: f64,
    pub amortization: f64,
    /// Always the sum of the four components
    pub total: f64,
}

impl Costs {
    pub fn from_components(
        cost_of_goods_sold: f64,
        operating_expenses: f64,
        depreciation: f64,
        amortization: f64,
    ) -> Self {
        Self {
            cost_of_goods_sold,
            operating_expenses,
            depreciation,
            amortization,
            total: cost_of_goods_sold + operating_expenses + depreciation + amortization,
        }
    }
}

/// Profit cascade derived from revenue and costs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profitability {
    pub gross_profit: f64,
    pub ebitda: f64,
    pub ebit: f64,
    pub net_income: f64,
}

/// Asset side of the balance sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assets {
    pub current: f64,
    pub fixed: f64,
    pub total: f64,
}

impl Assets {
    pub fn from_components(current: f64, fixed: f64) -> Self {
        Self {
            current,
            fixed,
            total: current + fixed,
        }
    }
}

/// Liability side of the balance sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Liabilities {
    pub current: f64,
    pub long_term_debt: f64,
    pub total: f64,
}

impl Liabilities {
    pub fn from_components(current: f64, long_term_debt: f64) -> Self {
        Self {
            current,
            long_term_debt,
            total: current + long_term_debt,
        }
    }
}

/// Equity section
///
/// `total` is a plug figure: it is solved from the accounting identity
/// `assets.total = liabilities.total + equity.total`, never projected
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equity {
    pub retained_earnings: f64,
    pub total: f64,
}

/// Balance sheet for one fiscal year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub assets: Assets,
    pub liabilities: Liabilities,
    pub equity: Equity,
}

impl BalanceSheet {
    /// Residual between the two sides of the accounting identity.
    ///
    /// Zero (within float tolerance) for every correctly generated period.
    pub fn identity_residual(&self) -> f64 {
        self.assets.total - (self.liabilities.total + self.equity.total)
    }
}

/// Cash flow statement for one fiscal year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlow {
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
    /// Always `operating + investing + financing`
    pub net: f64,
}

impl CashFlow {
    pub fn from_components(operating: f64, investing: f64, financing: f64) -> Self {
        Self {
            operating,
            investing,
            financing,
            net: operating + investing + financing,
        }
    }
}

/// One fiscal year of projected statements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialPeriod {
    /// Fiscal year, strictly increasing by 1 within a sequence
    pub year: i32,
    pub revenue: Revenue,
    pub costs: Costs,
    pub profitability: Profitability,
    pub balance_sheet: BalanceSheet,
    pub cash_flow: CashFlow,
    /// Populated by `RatioEngine::annotate`, absent on a fresh projection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratios: Option<RatioGroups>,
}

/// Aggregate totals over a projected sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub total_revenue: f64,
    pub total_net_income: f64,
    pub cumulative_net_cash_flow: f64,
    pub final_equity: f64,
}

/// Compute aggregate totals over a generated sequence
pub fn summarize(periods: &[FinancialPeriod]) -> ProjectionSummary {
    let total_revenue: f64 = periods.iter().map(|p| p.revenue.total).sum();
    let total_net_income: f64 = periods.iter().map(|p| p.profitability.net_income).sum();
    let cumulative_net_cash_flow: f64 = periods.iter().map(|p| p.cash_flow.net).sum();
    let final_equity = periods
        .last()
        .map(|p| p.balance_sheet.equity.total)
        .unwrap_or(0.0);

    ProjectionSummary {
        years: periods.len() as u32,
        total_revenue,
        total_net_income,
        cumulative_net_cash_flow,
        final_equity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_are_component_sums() {
        let revenue = Revenue::from_components(1000.0, 500.0, 100.0);
        assert_eq!(revenue.total, 1600.0);

        let costs = Costs::from_components(960.0, 320.0, 100.0, 50.0);
        assert_eq!(costs.total, 1430.0);

        let cash_flow = CashFlow::from_components(270.0, -160.0, -36.0);
        assert!((cash_flow.net - 74.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_residual_zero_for_plugged_equity() {
        let assets = Assets::from_components(480.0, 800.0);
        let liabilities = Liabilities::from_components(320.0, 480.0);
        let equity = Equity {
            retained_earnings: 84.0,
            total: assets.total - liabilities.total,
        };
        let bs = BalanceSheet {
            assets,
            liabilities,
            equity,
        };
        assert!(bs.identity_residual().abs() < 1e-12);
    }

    #[test]
    fn test_summarize_empty_sequence() {
        let summary = summarize(&[]);
        assert_eq!(summary.years, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.final_equity, 0.0);
    }
}

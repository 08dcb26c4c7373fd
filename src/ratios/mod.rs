//! Financial ratio calculations over projected periods
//!
//! Every ratio follows one division policy: a denominator of exactly zero
//! yields `0.0`, never NaN or infinity. Downstream consumers (tables,
//! charts, serialized snapshots) rely on every numeric field being finite.

use serde::{Deserialize, Serialize};

use crate::projection::FinancialPeriod;

/// Profitability ratios (margins as percentages, returns as decimals)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitabilityRatios {
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub net_margin: f64,
    pub roe: f64,
    pub roa: f64,
}

/// Liquidity ratios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityRatios {
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub cash_ratio: f64,
}

/// Leverage ratios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeverageRatios {
    pub debt_to_equity: f64,
    /// `None` when there is no interest expense: coverage is undefined,
    /// not infinite
    pub interest_coverage: Option<f64>,
}

/// Efficiency ratios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyRatios {
    pub asset_turnover: f64,
    pub inventory_turnover: f64,
    pub receivables_days: f64,
}

/// All ratio groups for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioGroups {
    pub profitability: ProfitabilityRatios,
    pub liquidity: LiquidityRatios,
    pub leverage: LeverageRatios,
    pub efficiency: EfficiencyRatios,
}

/// Proxy coefficients for figures the simplified statements do not carry.
///
/// The projected balance sheet has no explicit inventory, cash, or
/// receivables lines, so the liquidity and efficiency ratios estimate
/// them as fixed shares of total revenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioProxies {
    /// Inventory estimate as a share of total revenue
    pub inventory_to_revenue: f64,

    /// Cash estimate as a share of total revenue
    pub cash_to_revenue: f64,

    /// Receivables estimate as a share of total revenue
    pub receivables_to_revenue: f64,

    /// Annual interest expense (the simplified model carries no debt
    /// service line; zero means coverage is undefined)
    pub interest_expense: f64,
}

impl Default for RatioProxies {
    fn default() -> Self {
        Self {
            inventory_to_revenue: 0.1,
            cash_to_revenue: 0.05,
            receivables_to_revenue: 0.15,
            interest_expense: 0.0,
        }
    }
}

/// Ratio calculator over period-shaped input
#[derive(Debug, Clone, Default)]
pub struct RatioEngine {
    proxies: RatioProxies,
}

impl RatioEngine {
    pub fn new(proxies: RatioProxies) -> Self {
        Self { proxies }
    }

    /// Compute all ratio groups for a single period. Pure; the period is
    /// not modified.
    pub fn compute(&self, period: &FinancialPeriod) -> RatioGroups {
        let revenue = period.revenue.total;
        let bs = &period.balance_sheet;
        let p = &period.profitability;

        let inventory = revenue * self.proxies.inventory_to_revenue;
        let cash = revenue * self.proxies.cash_to_revenue;
        let receivables = revenue * self.proxies.receivables_to_revenue;

        let profitability = ProfitabilityRatios {
            gross_margin: safe_div(p.gross_profit, revenue) * 100.0,
            operating_margin: safe_div(p.ebit, revenue) * 100.0,
            net_margin: safe_div(p.net_income, revenue) * 100.0,
            roe: safe_div(p.net_income, bs.equity.total),
            roa: safe_div(p.net_income, bs.assets.total),
        };

        let liquidity = LiquidityRatios {
            current_ratio: safe_div(bs.assets.current, bs.liabilities.current),
            quick_ratio: safe_div(bs.assets.current - inventory, bs.liabilities.current),
            cash_ratio: safe_div(cash, bs.liabilities.current),
        };

        let leverage = LeverageRatios {
            debt_to_equity: safe_div(bs.liabilities.total, bs.equity.total),
            interest_coverage: if self.proxies.interest_expense == 0.0 {
                None
            } else {
                Some(p.ebit / self.proxies.interest_expense)
            },
        };

        let efficiency = EfficiencyRatios {
            asset_turnover: safe_div(revenue, bs.assets.total),
            inventory_turnover: safe_div(period.costs.cost_of_goods_sold, inventory),
            receivables_days: safe_div(receivables, revenue) * 365.0,
        };

        RatioGroups {
            profitability,
            liquidity,
            leverage,
            efficiency,
        }
    }

    /// Populate `ratios` on every period in a sequence
    pub fn annotate(&self, periods: &mut [FinancialPeriod]) {
        for period in periods.iter_mut() {
            period.ratios = Some(self.compute(period));
        }
    }
}

/// Division with the uniform zero-denominator policy
fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Working capital: current assets less current liabilities
pub fn working_capital(period: &FinancialPeriod) -> f64 {
    period.balance_sheet.assets.current - period.balance_sheet.liabilities.current
}

/// Units required to cover fixed costs at a given unit margin.
///
/// A non-positive unit margin yields `0.0` under the same zero-denominator
/// policy as the ratios.
pub fn break_even_units(fixed_costs: f64, unit_price: f64, unit_variable_cost: f64) -> f64 {
    safe_div(fixed_costs, unit_price - unit_variable_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::statements::{
        Assets, BalanceSheet, CashFlow, Costs, Equity, FinancialPeriod, Liabilities,
        Profitability, Revenue,
    };
    use approx::assert_relative_eq;

    fn test_period() -> FinancialPeriod {
        let revenue = Revenue::from_components(1_000_000.0, 500_000.0, 100_000.0);
        let costs = Costs::from_components(960_000.0, 320_000.0, 100_000.0, 50_000.0);
        let gross_profit = revenue.total - costs.cost_of_goods_sold;
        let ebitda = gross_profit - costs.operating_expenses;
        let ebit = ebitda - costs.depreciation - costs.amortization;
        let net_income = ebit * 0.75;

        let assets = Assets::from_components(480_000.0, 800_000.0);
        let liabilities = Liabilities::from_components(320_000.0, 480_000.0);
        let equity = Equity {
            retained_earnings: net_income * 0.7,
            total: assets.total - liabilities.total,
        };

        FinancialPeriod {
            year: 2025,
            cash_flow: CashFlow::from_components(
                net_income + 150_000.0,
                -160_000.0,
                -net_income * 0.3,
            ),
            profitability: Profitability {
                gross_profit,
                ebitda,
                ebit,
                net_income,
            },
            balance_sheet: BalanceSheet {
                assets,
                liabilities,
                equity,
            },
            revenue,
            costs,
            ratios: None,
        }
    }

    #[test]
    fn test_profitability_margins() {
        let period = test_period();
        let ratios = RatioEngine::default().compute(&period);

        assert_relative_eq!(ratios.profitability.gross_margin, 40.0, epsilon = 1e-9);
        // EBIT = 1_600_000 - 1_430_000 = 170_000
        assert_relative_eq!(
            ratios.profitability.operating_margin,
            170_000.0 / 1_600_000.0 * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            ratios.profitability.roe,
            period.profitability.net_income / 480_000.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_current_liabilities_yield_zero_not_infinity() {
        let mut period = test_period();
        period.balance_sheet.liabilities = Liabilities::from_components(0.0, 480_000.0);

        let ratios = RatioEngine::default().compute(&period);
        assert_eq!(ratios.liquidity.current_ratio, 0.0);
        assert_eq!(ratios.liquidity.quick_ratio, 0.0);
        assert_eq!(ratios.liquidity.cash_ratio, 0.0);
        assert!(ratios.liquidity.current_ratio.is_finite());
    }

    #[test]
    fn test_zero_equity_yields_zero_ratios() {
        let mut period = test_period();
        period.balance_sheet.equity.total = 0.0;

        let ratios = RatioEngine::default().compute(&period);
        assert_eq!(ratios.profitability.roe, 0.0);
        assert_eq!(ratios.leverage.debt_to_equity, 0.0);
    }

    #[test]
    fn test_interest_coverage_undefined_without_interest() {
        let period = test_period();

        let ratios = RatioEngine::default().compute(&period);
        assert!(ratios.leverage.interest_coverage.is_none());

        let with_interest = RatioEngine::new(RatioProxies {
            interest_expense: 85_000.0,
            ..Default::default()
        });
        let ratios = with_interest.compute(&period);
        assert_relative_eq!(
            ratios.leverage.interest_coverage.unwrap(),
            2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_liquidity_uses_revenue_proxies() {
        let period = test_period();
        let ratios = RatioEngine::default().compute(&period);

        // Inventory estimate = 160_000, so quick = (480k - 160k) / 320k
        assert_relative_eq!(ratios.liquidity.quick_ratio, 1.0, epsilon = 1e-9);
        assert_relative_eq!(ratios.liquidity.current_ratio, 1.5, epsilon = 1e-9);
        // Receivables at 15% of revenue is a constant 54.75 days
        assert_relative_eq!(ratios.efficiency.receivables_days, 54.75, epsilon = 1e-9);
    }

    #[test]
    fn test_annotate_populates_every_period() {
        let mut periods = vec![test_period(), test_period()];
        RatioEngine::default().annotate(&mut periods);
        assert!(periods.iter().all(|p| p.ratios.is_some()));
    }

    #[test]
    fn test_working_capital_and_break_even() {
        let period = test_period();
        assert_relative_eq!(working_capital(&period), 160_000.0, epsilon = 1e-9);

        assert_relative_eq!(break_even_units(50_000.0, 25.0, 15.0), 5_000.0);
        // Zero unit margin falls under the zero-denominator policy
        assert_eq!(break_even_units(50_000.0, 15.0, 15.0), 0.0);
    }
}

//! Core projection engine for annual financial statement cascades

use crate::assumptions::ProjectionAssumptions;

use super::statements::{
    Assets, BalanceSheet, CashFlow, Costs, Equity, FinancialPeriod, Liabilities, Profitability,
    Revenue,
};

/// Main projection engine.
///
/// Owns an immutable copy of its assumptions; every call to [`generate`]
/// computes a fresh sequence from those assumptions alone, so overlapping
/// invocations with different assumption sets cannot interfere.
///
/// [`generate`]: ProjectionEngine::generate
pub struct ProjectionEngine {
    assumptions: ProjectionAssumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given assumptions
    pub fn new(assumptions: ProjectionAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.assumptions
    }

    /// Generate the full projected sequence, one period per year of the
    /// horizon. A zero horizon yields an empty sequence.
    pub fn generate(&self) -> Vec<FinancialPeriod> {
        (0..self.assumptions.horizon)
            .map(|i| self.project_year(i))
            .collect()
    }

    /// Build the statement cascade for year index `i` (0-based)
    fn project_year(&self, index: u32) -> FinancialPeriod {
        let a = &self.assumptions;
        let year = a.base_year + index as i32;
        let growth = (1.0 + a.growth_rate).powi(index as i32);

        let revenue = Revenue::from_components(
            a.base_sales * growth,
            a.base_services * growth,
            a.base_other * growth,
        );

        // Depreciation and amortization are level charges, not scaled by
        // growth
        let costs = Costs::from_components(
            revenue.total * a.cogs_ratio,
            revenue.total * a.opex_ratio,
            a.depreciation,
            a.amortization,
        );

        let gross_profit = revenue.total - costs.cost_of_goods_sold;
        let ebitda = gross_profit - costs.operating_expenses;
        let ebit = ebitda - costs.depreciation - costs.amortization;
        let net_income = ebit * (1.0 - a.effective_tax_rate);

        let profitability = Profitability {
            gross_profit,
            ebitda,
            ebit,
            net_income,
        };

        let assets = Assets::from_components(
            revenue.total * a.current_asset_ratio,
            revenue.total * a.fixed_asset_ratio,
        );
        let liabilities = Liabilities::from_components(
            revenue.total * a.current_liability_ratio,
            revenue.total * a.long_term_debt_ratio,
        );

        // Equity is the plug figure: solved from the accounting identity
        // after both other sides are set, never projected independently
        let equity = Equity {
            retained_earnings: net_income * a.retention_ratio,
            total: assets.total - liabilities.total,
        };

        let balance_sheet = BalanceSheet {
            assets,
            liabilities,
            equity,
        };

        let cash_flow = CashFlow::from_components(
            net_income + costs.depreciation + costs.amortization,
            -revenue.total * a.capex_ratio,
            -net_income * a.distribution_ratio,
        );

        let period = FinancialPeriod {
            year,
            revenue,
            costs,
            profitability,
            balance_sheet,
            cash_flow,
            ratios: None,
        };

        // Identity failure here is an implementation defect, not a runtime
        // condition
        debug_assert!(
            period.balance_sheet.identity_residual().abs()
                <= 1e-9 * period.balance_sheet.assets.total.abs().max(1.0),
            "balance sheet identity violated for year {}",
            period.year
        );

        period
    }
}

//! Projection assumptions: growth, cost structure, and balance sheet ratios
//!
//! The proportional coefficients are business assumptions, not accounting
//! constants. Every one of them is a named, tunable field with the
//! historical model values as defaults.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Full set of inputs for a projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// First projected fiscal year
    pub base_year: i32,

    /// Number of years to project
    pub horizon: u32,

    /// Annual revenue growth rate (decimal, may be negative)
    pub growth_rate: f64,

    /// Year-zero revenue lines, scaled geometrically by `growth_rate`
    pub base_sales: f64,
    pub base_services: f64,
    pub base_other: f64,

    /// Cost of goods sold as a share of total revenue
    pub cogs_ratio: f64,

    /// Operating expenses as a share of total revenue
    pub opex_ratio: f64,

    /// Annual depreciation charge (constant, not scaled by growth)
    pub depreciation: f64,

    /// Annual amortization charge (constant, not scaled by growth)
    pub amortization: f64,

    /// Effective tax rate applied to EBIT
    pub effective_tax_rate: f64,

    /// Current assets as a share of total revenue
    pub current_asset_ratio: f64,

    /// Fixed assets as a share of total revenue
    pub fixed_asset_ratio: f64,

    /// Current liabilities as a share of total revenue
    pub current_liability_ratio: f64,

    /// Long-term debt as a share of total revenue
    pub long_term_debt_ratio: f64,

    /// Share of net income retained as earnings
    pub retention_ratio: f64,

    /// Capital expenditure as a share of total revenue (investing outflow)
    pub capex_ratio: f64,

    /// Share of net income distributed to owners (financing outflow)
    pub distribution_ratio: f64,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            base_year: 2025,
            horizon: 5,
            growth_rate: 0.05,
            base_sales: 1_000_000.0,
            base_services: 500_000.0,
            base_other: 100_000.0,
            cogs_ratio: 0.6,
            opex_ratio: 0.2,
            depreciation: 100_000.0,
            amortization: 50_000.0,
            effective_tax_rate: 0.25,
            current_asset_ratio: 0.3,
            fixed_asset_ratio: 0.5,
            current_liability_ratio: 0.2,
            long_term_debt_ratio: 0.3,
            retention_ratio: 0.7,
            capex_ratio: 0.1,
            distribution_ratio: 0.3,
        }
    }
}

impl ProjectionAssumptions {
    /// Boundary validation for caller-supplied assumptions.
    ///
    /// The engine itself tolerates a zero horizon (empty sequence) and an
    /// unbounded growth rate; this rejects inputs that can never describe
    /// a meaningful projection before they reach it.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.horizon == 0 {
            return Err(ModelError::InvalidHorizon(self.horizon));
        }

        for (name, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteAssumption(name));
            }
        }

        Ok(())
    }

    /// Named numeric fields checked by boundary validation
    pub(crate) fn numeric_fields(&self) -> [(&'static str, f64); 16] {
        [
            ("growth_rate", self.growth_rate),
            ("base_sales", self.base_sales),
            ("base_services", self.base_services),
            ("base_other", self.base_other),
            ("cogs_ratio", self.cogs_ratio),
            ("opex_ratio", self.opex_ratio),
            ("depreciation", self.depreciation),
            ("amortization", self.amortization),
            ("effective_tax_rate", self.effective_tax_rate),
            ("current_asset_ratio", self.current_asset_ratio),
            ("fixed_asset_ratio", self.fixed_asset_ratio),
            ("current_liability_ratio", self.current_liability_ratio),
            ("long_term_debt_ratio", self.long_term_debt_ratio),
            ("retention_ratio", self.retention_ratio),
            ("capex_ratio", self.capex_ratio),
            ("distribution_ratio", self.distribution_ratio),
        ]
    }

    /// Set a field by its override key
    pub(crate) fn set_field(&mut self, key: &str, value: f64) -> Result<(), ModelError> {
        match key {
            "growth_rate" => self.growth_rate = value,
            "base_sales" => self.base_sales = value,
            "base_services" => self.base_services = value,
            "base_other" => self.base_other = value,
            "cogs_ratio" => self.cogs_ratio = value,
            "opex_ratio" => self.opex_ratio = value,
            "depreciation" => self.depreciation = value,
            "amortization" => self.amortization = value,
            "effective_tax_rate" => self.effective_tax_rate = value,
            "current_asset_ratio" => self.current_asset_ratio = value,
            "fixed_asset_ratio" => self.fixed_asset_ratio = value,
            "current_liability_ratio" => self.current_liability_ratio = value,
            "long_term_debt_ratio" => self.long_term_debt_ratio = value,
            "retention_ratio" => self.retention_ratio = value,
            "capex_ratio" => self.capex_ratio = value,
            "distribution_ratio" => self.distribution_ratio = value,
            "base_year" => self.base_year = value as i32,
            "horizon" => self.horizon = value as u32,
            _ => return Err(ModelError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_model() {
        let a = ProjectionAssumptions::default();
        assert_eq!(a.base_year, 2025);
        assert_eq!(a.horizon, 5);
        assert_eq!(a.cogs_ratio, 0.6);
        assert_eq!(a.effective_tax_rate, 0.25);
        assert_eq!(a.retention_ratio, 0.7);
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        let a = ProjectionAssumptions {
            horizon: 0,
            ..Default::default()
        };
        assert!(matches!(a.validate(), Err(ModelError::InvalidHorizon(0))));
    }

    #[test]
    fn test_validate_rejects_non_finite_growth() {
        let a = ProjectionAssumptions {
            growth_rate: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            a.validate(),
            Err(ModelError::NonFiniteAssumption("growth_rate"))
        ));
    }

    #[test]
    fn test_validate_accepts_negative_growth() {
        let a = ProjectionAssumptions {
            growth_rate: -0.15,
            ..Default::default()
        };
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_set_field_rejects_unknown_key() {
        let mut a = ProjectionAssumptions::default();
        assert!(matches!(
            a.set_field("terminal_growth", 0.5),
            Err(ModelError::UnknownKey(_))
        ));
    }
}

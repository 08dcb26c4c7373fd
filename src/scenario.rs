//! Scenario runner for batch projections
//!
//! Holds one base assumption set and derives growth-rate variants from it,
//! so a sweep never re-reads override files and every variant is computed
//! from its own fresh assumption copy.

use crate::assumptions::ProjectionAssumptions;
use crate::projection::{FinancialPeriod, ProjectionEngine};

/// Pessimistic/base/optimistic projection spread
#[derive(Debug, Clone)]
pub struct GrowthSpread {
    pub pessimistic: Vec<FinancialPeriod>,
    pub base: Vec<FinancialPeriod>,
    pub optimistic: Vec<FinancialPeriod>,
}

/// Pre-loaded runner for projections over assumption variants
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: ProjectionAssumptions,
}

impl ScenarioRunner {
    /// Create a runner with the default assumption set
    pub fn new() -> Self {
        Self {
            base_assumptions: ProjectionAssumptions::default(),
        }
    }

    /// Create a runner with pre-built assumptions
    pub fn with_assumptions(assumptions: ProjectionAssumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.base_assumptions
    }

    pub fn assumptions_mut(&mut self) -> &mut ProjectionAssumptions {
        &mut self.base_assumptions
    }

    /// Run the base-case projection
    pub fn run(&self) -> Vec<FinancialPeriod> {
        ProjectionEngine::new(self.base_assumptions.clone()).generate()
    }

    /// Run a variant with the growth rate replaced
    pub fn run_with_growth(&self, growth_rate: f64) -> Vec<FinancialPeriod> {
        let assumptions = ProjectionAssumptions {
            growth_rate,
            ..self.base_assumptions.clone()
        };
        ProjectionEngine::new(assumptions).generate()
    }

    /// Run one projection per growth rate
    pub fn run_growth_scenarios(&self, growth_rates: &[f64]) -> Vec<Vec<FinancialPeriod>> {
        growth_rates
            .iter()
            .map(|&rate| self.run_with_growth(rate))
            .collect()
    }

    /// Build the standard three-way spread by shifting the base growth
    /// rate down and up by `delta`
    pub fn growth_spread(&self, delta: f64) -> GrowthSpread {
        let base_rate = self.base_assumptions.growth_rate;
        GrowthSpread {
            pessimistic: self.run_with_growth(base_rate - delta),
            base: self.run(),
            optimistic: self.run_with_growth(base_rate + delta),
        }
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

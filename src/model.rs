//! Full model pipeline: projection, ratios, and valuation in one pass
//!
//! The bundled result is what the rendering and analysis collaborators
//! consume; the snapshot is its JSON form.

use serde::{Deserialize, Serialize};

use crate::assumptions::ProjectionAssumptions;
use crate::error::ModelError;
use crate::projection::{self, FinancialPeriod, ProjectionEngine, ProjectionSummary};
use crate::ratios::{RatioEngine, RatioProxies};
use crate::valuation::{self, ValuationSummary};

/// Valuation inputs applied to the operating cash flow sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// Annual discount rate (decimal)
    pub discount_rate: f64,

    /// Upfront outflow the operating cash flows are valued against
    pub initial_investment: f64,
}

impl Default for ValuationInputs {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            initial_investment: 0.0,
        }
    }
}

/// One complete model run: assumptions in, annotated periods and a
/// valuation summary out.
///
/// Built fresh on every call; holds no reference to any previous run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialModel {
    pub assumptions: ProjectionAssumptions,
    pub valuation_inputs: ValuationInputs,
    /// Projected periods with ratios populated
    pub periods: Vec<FinancialPeriod>,
    /// DCF/IRR summary over the operating cash flow sequence
    pub valuation: ValuationSummary,
}

impl FinancialModel {
    /// Build a model with the default ratio proxies
    pub fn build(
        assumptions: ProjectionAssumptions,
        valuation_inputs: ValuationInputs,
    ) -> Result<Self, ModelError> {
        Self::build_with_proxies(assumptions, valuation_inputs, RatioProxies::default())
    }

    /// Build a model: validate, project, annotate ratios, value
    pub fn build_with_proxies(
        assumptions: ProjectionAssumptions,
        valuation_inputs: ValuationInputs,
        proxies: RatioProxies,
    ) -> Result<Self, ModelError> {
        assumptions.validate()?;

        let mut periods = ProjectionEngine::new(assumptions.clone()).generate();
        RatioEngine::new(proxies).annotate(&mut periods);

        let operating: Vec<f64> = periods.iter().map(|p| p.cash_flow.operating).collect();
        let valuation = valuation::summarize(
            valuation_inputs.initial_investment,
            &operating,
            valuation_inputs.discount_rate,
        );

        Ok(Self {
            assumptions,
            valuation_inputs,
            periods,
            valuation,
        })
    }

    /// Aggregate totals over the projected sequence
    pub fn summary(&self) -> ProjectionSummary {
        projection::summarize(&self.periods)
    }

    /// Serialized snapshot for the external analysis collaborator.
    ///
    /// The collaborator receives this string as its sole input; nothing
    /// here depends on what it returns.
    pub fn snapshot(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }
}

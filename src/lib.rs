//! Financial Model - Multi-year projection and DCF valuation engine
//!
//! This library provides:
//! - Deterministic income-statement, balance-sheet, and cash-flow
//!   projections from a small set of growth assumptions
//! - Profitability, liquidity, leverage, and efficiency ratios per period
//! - DCF valuation: present value, NPV, and a Newton-Raphson IRR solver
//! - Scenario spreads and a serializable model snapshot

pub mod assumptions;
pub mod error;
pub mod model;
pub mod projection;
pub mod ratios;
pub mod scenario;
pub mod valuation;

// Re-export commonly used types
pub use assumptions::ProjectionAssumptions;
pub use error::ModelError;
pub use model::{FinancialModel, ValuationInputs};
pub use projection::{FinancialPeriod, ProjectionEngine, ProjectionSummary};
pub use ratios::{RatioEngine, RatioGroups, RatioProxies};
pub use scenario::ScenarioRunner;
pub use valuation::{internal_rate_of_return, IrrResult, ValuationSummary};

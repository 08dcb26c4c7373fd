//! Sweep growth-rate scenarios and value each resulting projection
//!
//! Supports JSON output for API integration via --json flag
//! Accepts config via environment variables:
//!   PROJECTION_YEARS, GROWTH_RATES (comma-separated decimals),
//!   DISCOUNT_RATE, INITIAL_INVESTMENT

use std::env;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use financial_model::{FinancialModel, ModelError, ProjectionAssumptions, ValuationInputs};

#[derive(Serialize)]
struct SweepResponse {
    projection_years: u32,
    discount_rate: f64,
    initial_investment: f64,
    scenarios: Vec<ScenarioRow>,
    execution_time_ms: u64,
}

#[derive(Serialize)]
struct ScenarioRow {
    growth_rate: f64,
    final_revenue: f64,
    total_net_income: f64,
    cumulative_net_cash_flow: f64,
    present_value: f64,
    net_present_value: f64,
    internal_rate_of_return: f64,
    converged: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    // Read config from environment or use defaults
    let projection_years: u32 = env::var("PROJECTION_YEARS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    let discount_rate: f64 = env::var("DISCOUNT_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.10);

    let initial_investment: f64 = env::var("INITIAL_INVESTMENT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000_000.0);

    let growth_rates: Vec<f64> = env::var("GROWTH_RATES")
        .ok()
        .map(|s| {
            s.split(',')
                .filter_map(|r| r.trim().parse().ok())
                .collect()
        })
        .unwrap_or_else(|| vec![-0.05, 0.0, 0.05, 0.10, 0.15]);

    let base = ProjectionAssumptions {
        horizon: projection_years,
        ..Default::default()
    };
    base.validate()?;

    if !json_output {
        println!(
            "Sweeping {} growth scenarios over {} years...",
            growth_rates.len(),
            projection_years
        );
    }

    // One independent model per growth rate, valued in parallel
    let scenarios: Vec<ScenarioRow> = growth_rates
        .par_iter()
        .map(|&growth_rate| {
            let assumptions = ProjectionAssumptions {
                growth_rate,
                ..base.clone()
            };
            let inputs = ValuationInputs {
                discount_rate,
                initial_investment,
            };
            let model = FinancialModel::build(assumptions, inputs)?;
            let summary = model.summary();

            Ok(ScenarioRow {
                growth_rate,
                final_revenue: model
                    .periods
                    .last()
                    .map(|p| p.revenue.total)
                    .unwrap_or(0.0),
                total_net_income: summary.total_net_income,
                cumulative_net_cash_flow: summary.cumulative_net_cash_flow,
                present_value: model.valuation.present_value,
                net_present_value: model.valuation.net_present_value,
                internal_rate_of_return: model.valuation.internal_rate_of_return,
                converged: model.valuation.converged,
            })
        })
        .collect::<Result<Vec<_>, ModelError>>()?;

    let execution_time_ms = start.elapsed().as_millis() as u64;

    if json_output {
        let response = SweepResponse {
            projection_years,
            discount_rate,
            initial_investment,
            scenarios,
            execution_time_ms,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!(
            "\n{:>8} {:>16} {:>16} {:>16} {:>12} {:>10}",
            "Growth", "Final Revenue", "NPV", "Net Income", "IRR", "Converged"
        );
        println!("{}", "-".repeat(84));

        for row in &scenarios {
            println!(
                "{:>7.1}% {:>16.2} {:>16.2} {:>16.2} {:>11.4}% {:>10}",
                row.growth_rate * 100.0,
                row.final_revenue,
                row.net_present_value,
                row.total_net_income,
                row.internal_rate_of_return * 100.0,
                row.converged,
            );
        }

        println!("\nTotal time: {:?}", start.elapsed());
    }

    Ok(())
}

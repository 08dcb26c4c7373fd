//! Financial Model CLI
//!
//! Command-line interface for running financial projections and DCF
//! valuations

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use clap::Parser;

use financial_model::assumptions::loader;
use financial_model::{FinancialModel, ProjectionAssumptions, ValuationInputs};

#[derive(Parser)]
#[command(
    name = "financial_model",
    about = "Multi-year financial projection and DCF valuation"
)]
struct Args {
    /// Years to project (overrides the assumption set)
    #[arg(long)]
    horizon: Option<u32>,

    /// Annual revenue growth rate as a decimal (overrides the assumption set)
    #[arg(long)]
    growth_rate: Option<f64>,

    /// First projected fiscal year (defaults to the current calendar year)
    #[arg(long)]
    base_year: Option<i32>,

    /// Annual discount rate for the DCF summary
    #[arg(long, default_value_t = 0.10)]
    discount_rate: f64,

    /// Upfront investment the operating cash flows are valued against
    #[arg(long, default_value_t = 1_000_000.0)]
    initial_investment: f64,

    /// Assumption override file (key,value CSV)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Write the projected periods to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Emit the full model snapshot as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Precedence: built-in defaults, then override file, then CLI flags
    let mut assumptions = match &args.assumptions {
        Some(path) => loader::load_from(path)?,
        None => {
            let mut a = ProjectionAssumptions::default();
            a.base_year = Utc::now().year();
            a
        }
    };

    if let Some(horizon) = args.horizon {
        assumptions.horizon = horizon;
    }
    if let Some(growth_rate) = args.growth_rate {
        assumptions.growth_rate = growth_rate;
    }
    if let Some(base_year) = args.base_year {
        assumptions.base_year = base_year;
    }

    let inputs = ValuationInputs {
        discount_rate: args.discount_rate,
        initial_investment: args.initial_investment,
    };

    let model = FinancialModel::build(assumptions, inputs)?;

    if args.json {
        println!("{}", model.snapshot()?);
        return Ok(());
    }

    println!("Financial Model v0.1.0");
    println!("======================\n");
    println!(
        "Projecting {} years from {} at {:.1}% growth",
        model.assumptions.horizon,
        model.assumptions.base_year,
        model.assumptions.growth_rate * 100.0
    );
    println!();

    println!(
        "{:>6} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Revenue", "EBITDA", "Net Income", "Oper CF", "Net CF", "Equity"
    );
    println!("{}", "-".repeat(96));

    for period in &model.periods {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            period.year,
            period.revenue.total,
            period.profitability.ebitda,
            period.profitability.net_income,
            period.cash_flow.operating,
            period.cash_flow.net,
            period.balance_sheet.equity.total,
        );
    }

    if let Some(path) = &args.csv {
        write_periods_csv(&model, path)?;
        println!("\nFull results written to: {}", path.display());
    }

    let summary = model.summary();
    println!("\nSummary:");
    println!("  Total Revenue:      ${:.2}", summary.total_revenue);
    println!("  Total Net Income:   ${:.2}", summary.total_net_income);
    println!(
        "  Cumulative Net CF:  ${:.2}",
        summary.cumulative_net_cash_flow
    );
    println!("  Final Equity:       ${:.2}", summary.final_equity);

    println!("\n========================================");
    println!(
        "  PRESENT VALUE:  ${:.2}",
        model.valuation.present_value
    );
    println!(
        "  NPV:            ${:.2}",
        model.valuation.net_present_value
    );
    if model.valuation.converged {
        println!(
            "  IRR:            {:.4}%",
            model.valuation.internal_rate_of_return * 100.0
        );
    } else {
        println!(
            "  IRR:            {:.4}% (did not converge)",
            model.valuation.internal_rate_of_return * 100.0
        );
    }
    println!("========================================");

    Ok(())
}

/// Write one CSV row per projected period
fn write_periods_csv(model: &FinancialModel, path: &Path) -> anyhow::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Year,Sales,Services,Other,TotalRevenue,COGS,Opex,Depreciation,Amortization,TotalCosts,GrossProfit,EBITDA,EBIT,NetIncome,CurrentAssets,FixedAssets,TotalAssets,CurrentLiabilities,LongTermDebt,TotalLiabilities,RetainedEarnings,TotalEquity,OperatingCF,InvestingCF,FinancingCF,NetCF")?;

    for p in &model.periods {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            p.year,
            p.revenue.sales,
            p.revenue.services,
            p.revenue.other,
            p.revenue.total,
            p.costs.cost_of_goods_sold,
            p.costs.operating_expenses,
            p.costs.depreciation,
            p.costs.amortization,
            p.costs.total,
            p.profitability.gross_profit,
            p.profitability.ebitda,
            p.profitability.ebit,
            p.profitability.net_income,
            p.balance_sheet.assets.current,
            p.balance_sheet.assets.fixed,
            p.balance_sheet.assets.total,
            p.balance_sheet.liabilities.current,
            p.balance_sheet.liabilities.long_term_debt,
            p.balance_sheet.liabilities.total,
            p.balance_sheet.equity.retained_earnings,
            p.balance_sheet.equity.total,
            p.cash_flow.operating,
            p.cash_flow.investing,
            p.cash_flow.financing,
            p.cash_flow.net,
        )?;
    }

    Ok(())
}

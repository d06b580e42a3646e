//! Tabular and JSON reports of a price curve.

use anyhow::{Context, Result};
use bcurve_domain::curve::{BondingCurve, QuadraticCurve};
use bcurve_domain::value_objects::Amount;
use bcurve_simulation::price_curve::{CurveSummary, PriceCurve};
use bcurve_simulation::sweep::SweepConfig;
use prettytable::{Table, row};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Builds a table with every `every`-th point of the curve. The last point is
/// always included.
pub fn curve_table(curve: &PriceCurve, every: usize) -> Table {
    let every = every.max(1);
    let last = curve.len().saturating_sub(1);

    let mut table = Table::new();
    table.set_titles(row!["Step", "Supply", "Price", "Price (raw)"]);

    for (step, point) in curve.points().iter().enumerate() {
        if step % every != 0 && step != last {
            continue;
        }
        table.add_row(row![
            r->step,
            r->format!("{:.0}", point.supply),
            r->format!("{:.12}", point.price),
            r->point.raw_price.raw
        ]);
    }

    table
}

/// Builds a two-column table of the curve summary.
pub fn summary_table(summary: &CurveSummary) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Points", r->summary.points]);
    table.add_row(row![
        "First",
        r->format!("{:.0} -> {:.12}", summary.first.supply, summary.first.price)
    ]);
    table.add_row(row![
        "Last",
        r->format!("{:.0} -> {:.12}", summary.last.supply, summary.last.price)
    ]);
    table.add_row(row!["Min price", r->format!("{:.12}", summary.min_price)]);
    table.add_row(row!["Max price", r->format!("{:.12}", summary.max_price)]);
    table.add_row(row!["Non-decreasing", r->summary.non_decreasing]);
    table
}

/// A single priced trade against the curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub formula: String,
    pub supply_tokens: u64,
    pub amount_tokens: u64,
    pub sell: bool,
    /// Cost of the purchase, or proceeds of the sale.
    pub price: Amount,
    pub spot: Amount,
}

/// Prices buying (or selling, with `sell`) `amount_tokens` at `supply_tokens`.
///
/// # Errors
/// Returns an error if the curve rejects the trade, e.g. selling more than the supply.
pub fn quote(
    curve_model: &QuadraticCurve,
    supply_tokens: u64,
    amount_tokens: u64,
    sell: bool,
) -> Result<Quote> {
    let supply = Amount::from_tokens(supply_tokens)?;
    let amount = Amount::from_tokens(amount_tokens)?;

    let price = if sell {
        curve_model.get_sell_price(supply, amount)?
    } else {
        curve_model.get_price(supply, amount)?
    };

    Ok(Quote {
        formula: curve_model.formula(),
        supply_tokens,
        amount_tokens,
        sell,
        price,
        spot: curve_model.spot_price(supply)?,
    })
}

/// Formats a quote as the CLI prints it.
pub fn render_quote(quote: &Quote) -> String {
    let label = if quote.sell { "Proceeds:" } else { "Cost:" };
    let rule = "════════════════════════════════════";

    let mut out = String::new();
    let _ = writeln!(out, "\n💱 Quote ({})", quote.formula);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Supply:       {}", quote.supply_tokens);
    let _ = writeln!(out, "Amount:       {}", quote.amount_tokens);
    let _ = writeln!(out, "{:<13} {} ETH", label, quote.price);
    let _ = writeln!(out, "Raw:          {}", quote.price.raw);
    let _ = writeln!(out, "Spot price:   {} ETH", quote.spot);
    let _ = writeln!(out, "{rule}");
    out
}

#[derive(Debug, Serialize)]
struct CurveExport<'a> {
    formula: String,
    divisor: String,
    steps: usize,
    step_size: String,
    amount: String,
    summary: Option<CurveSummary>,
    supply: Vec<f64>,
    price: Vec<f64>,
    points: &'a PriceCurve,
}

/// Writes the curve and the parameters that produced it as pretty JSON.
///
/// # Errors
/// Returns an error if the file cannot be created or serialization fails.
pub fn export_json(
    path: &Path,
    curve_model: &QuadraticCurve,
    config: &SweepConfig,
    curve: &PriceCurve,
) -> Result<()> {
    let document = CurveExport {
        formula: curve_model.formula(),
        divisor: curve_model.divisor().to_string(),
        steps: config.steps,
        step_size: config.step_size.to_string(),
        amount: config.amount.to_string(),
        summary: curve.summary(),
        supply: curve.supplies(),
        price: curve.prices(),
        points: curve,
    };

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &document)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

//! Chart rendering of a price curve.

use anyhow::{Context, Result};
use bcurve_domain::curve::QuadraticCurve;
use bcurve_simulation::price_curve::PriceCurve;
use plotly::common::{Mode, Title};
use plotly::layout::themes::PLOTLY_DARK;
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};
use std::path::PathBuf;
use tracing::info;

/// Static display metadata of a curve chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend entry of the curve trace.
    pub legend: String,
    /// Render with the `plotly_dark` template.
    pub dark_theme: bool,
}

impl ChartSpec {
    /// Dark `Supply` vs `Price (ETH)` chart labelled with the curve's formula.
    pub fn for_curve(curve: &QuadraticCurve) -> Self {
        Self {
            title: format!(
                "Supply vs Price Quadratic Bonding Curve ({})",
                curve.formula_grouped()
            ),
            x_label: "Supply".to_string(),
            y_label: "Price (ETH)".to_string(),
            legend: format!("Quadratic Bonding Curve ({})", curve.formula()),
            dark_theme: true,
        }
    }
}

/// Where a rendered chart goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutput {
    /// Open the interactive chart in the default browser.
    Show,
    /// Write a standalone HTML page.
    Html(PathBuf),
}

/// Builds a `lines+markers` plot of the curve.
pub fn build_plot(curve: &PriceCurve, spec: &ChartSpec) -> Plot {
    let trace = Scatter::new(curve.supplies(), curve.prices())
        .mode(Mode::LinesMarkers)
        .name(spec.legend.as_str());

    let mut layout = Layout::new()
        .title(Title::with_text(spec.title.as_str()))
        .x_axis(Axis::new().title(Title::with_text(spec.x_label.as_str())))
        .y_axis(Axis::new().title(Title::with_text(spec.y_label.as_str())));
    if spec.dark_theme {
        layout = layout.template(&*PLOTLY_DARK);
    }

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Renders the curve to `output`.
///
/// # Errors
/// Returns an error if the HTML page cannot be written.
pub fn render(curve: &PriceCurve, spec: &ChartSpec, output: &ChartOutput) -> Result<()> {
    let plot = build_plot(curve, spec);

    match output {
        ChartOutput::Show => {
            info!(points = curve.len(), "opening chart");
            plot.show();
        }
        ChartOutput::Html(path) => {
            std::fs::write(path, plot.to_html())
                .with_context(|| format!("failed to write chart to {}", path.display()))?;
            info!(points = curve.len(), path = %path.display(), "chart written");
        }
    }

    Ok(())
}

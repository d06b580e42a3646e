//! Command Line Interface for the quadratic bonding curve simulator.
use anyhow::{Context, Result};
use bcurve_domain::constants::{
    DEFAULT_PRICE_DIVISOR, DEFAULT_PURCHASE_TOKENS, DEFAULT_QUOTE_TOKENS, DEFAULT_STEP_TOKENS,
    DEFAULT_SWEEP_STEPS,
};
use bcurve_domain::curve::QuadraticCurve;
use bcurve_domain::value_objects::Amount;
use bcurve_simulation::price_curve::{PriceCurve, evaluate_curve, evaluate_quotes};
use bcurve_simulation::sweep::{LinearSupplySweep, SupplySweep, SweepConfig};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{info, warn};

mod chart;
mod report;

use chart::{ChartOutput, ChartSpec};

#[derive(Parser)]
#[command(name = "bcurve")]
#[command(about = "Quadratic bonding curve price simulator", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    plot: PlotArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot supply against price (default)
    Plot(PlotArgs),
    /// Price a single purchase or sale
    Quote {
        /// Current supply in whole tokens
        #[arg(short, long)]
        supply_tokens: u64,

        /// Trade size in whole tokens
        #[arg(short, long, default_value_t = 1)]
        amount_tokens: u64,

        /// Quote the proceeds of a sale instead of the cost of a purchase
        #[arg(long)]
        sell: bool,

        /// Curve steepness divisor
        #[arg(long, env = "BCURVE_DIVISOR", default_value_t = DEFAULT_PRICE_DIVISOR)]
        divisor: u64,
    },
    /// Print the sweep as a table
    Table {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Print every Nth point
        #[arg(short, long, default_value_t = 100)]
        every: usize,
    },
    /// Write the sweep as JSON
    Export {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Output file
        #[arg(short, long, default_value = "bonding_curve.json")]
        output: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct PlotArgs {
    #[command(flatten)]
    sweep: SweepArgs,

    /// Write the chart to an HTML file instead of opening it
    #[arg(long)]
    html: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct SweepArgs {
    /// Number of supply points
    #[arg(long, env = "BCURVE_STEPS", default_value_t = DEFAULT_SWEEP_STEPS)]
    steps: usize,

    /// Whole tokens between consecutive supply points
    #[arg(long, env = "BCURVE_STEP_TOKENS", default_value_t = DEFAULT_STEP_TOKENS)]
    step_tokens: u64,

    /// Whole tokens carried as the purchase of every supply point
    #[arg(long, env = "BCURVE_AMOUNT_TOKENS", default_value_t = DEFAULT_PURCHASE_TOKENS)]
    amount_tokens: u64,

    /// Whole tokens priced at every supply point
    #[arg(long, env = "BCURVE_QUOTE_TOKENS", default_value_t = DEFAULT_QUOTE_TOKENS)]
    quote_tokens: u64,

    /// Price each point's full purchase amount instead of the quote size
    #[arg(long)]
    full_amount: bool,

    /// Curve steepness divisor
    #[arg(long, env = "BCURVE_DIVISOR", default_value_t = DEFAULT_PRICE_DIVISOR)]
    divisor: u64,
}

impl SweepArgs {
    fn curve(&self) -> Result<QuadraticCurve> {
        QuadraticCurve::new(self.divisor).context("invalid curve divisor")
    }

    fn config(&self) -> Result<SweepConfig> {
        Ok(SweepConfig::default()
            .with_steps(self.steps)
            .with_step_size(Amount::from_tokens(self.step_tokens)?)
            .with_amount(Amount::from_tokens(self.amount_tokens)?))
    }

    fn run(&self) -> Result<(QuadraticCurve, SweepConfig, PriceCurve)> {
        let curve_model = self.curve()?;
        let config = self.config()?;

        info!(
            steps = config.steps,
            step = %config.step_size,
            amount = %config.amount,
            formula = %curve_model.formula(),
            "running sweep"
        );

        let inputs = LinearSupplySweep::new(config).generate()?;
        let curve = if self.full_amount {
            evaluate_curve(&curve_model, &inputs)?
        } else {
            evaluate_quotes(&curve_model, &inputs, Amount::from_tokens(self.quote_tokens)?)?
        };

        if curve.is_empty() {
            warn!("sweep produced no points");
        }

        Ok((curve_model, config, curve))
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Plot(cli.plot));

    match command {
        Commands::Plot(PlotArgs { sweep, html }) => {
            let (curve_model, _, curve) = sweep.run()?;

            let spec = ChartSpec::for_curve(&curve_model);
            let output = html.map_or(ChartOutput::Show, ChartOutput::Html);

            println!("📈 Rendering {} points...", curve.len());
            chart::render(&curve, &spec, &output)?;

            if let ChartOutput::Html(path) = &output {
                println!("✅ Chart written to {}", path.display());
            }
        }
        Commands::Quote {
            supply_tokens,
            amount_tokens,
            sell,
            divisor,
        } => {
            let curve_model = QuadraticCurve::new(divisor).context("invalid curve divisor")?;
            let quote = report::quote(&curve_model, supply_tokens, amount_tokens, sell)?;
            print!("{}", report::render_quote(&quote));
        }
        Commands::Table { sweep, every } => {
            let (curve_model, _, curve) = sweep.run()?;

            println!("\n📊 {}", curve_model.formula());
            report::curve_table(&curve, every).printstd();

            if let Some(summary) = curve.summary() {
                println!();
                report::summary_table(&summary).printstd();
            }
        }
        Commands::Export { sweep, output } => {
            let (curve_model, config, curve) = sweep.run()?;

            report::export_json(&output, &curve_model, &config, &curve)?;
            println!("✅ Wrote {} points to {}", curve.len(), output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_plot() {
        let cli = Cli::try_parse_from(["bcurve"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.plot.sweep.steps, 1000);
        assert_eq!(cli.plot.sweep.step_tokens, 1000);
        assert_eq!(cli.plot.sweep.amount_tokens, 1000);
        assert_eq!(cli.plot.sweep.divisor, 9_600_000_000_000);
        assert_eq!(cli.plot.sweep.quote_tokens, 1);
        assert!(!cli.plot.sweep.full_amount);
        assert!(cli.plot.html.is_none());
    }

    #[test]
    fn test_default_plot_prices_one_token() {
        let cli = Cli::try_parse_from(["bcurve"]).unwrap();
        let (_, config, curve) = cli.plot.sweep.run().unwrap();

        assert_eq!(config.amount, Amount::from_tokens(1000u64).unwrap());
        assert_eq!(curve.len(), 1000);
        let last = curve.points()[999];
        assert_eq!(last.supply, 999_000.0);
        assert_eq!(last.raw_price.raw.low_u64(), 103_958_437_500_000_000);
        assert!((last.price - 0.1039584375).abs() < 1e-15);
    }

    #[test]
    fn test_full_amount_prices_each_purchase() {
        let cli = Cli::try_parse_from(["bcurve", "plot", "--full-amount"]).unwrap();
        let Some(Commands::Plot(PlotArgs { sweep, .. })) = cli.command else {
            panic!("expected plot");
        };
        let (_, _, curve) = sweep.run().unwrap();
        // Σ_{k=999000}^{999999} k^2 * 1e18 / 9.6e12
        assert!((curve.points()[999].price - 104.06243060765625).abs() < 1e-9);
    }

    #[test]
    fn test_quote_args() {
        let cli = Cli::try_parse_from(["bcurve", "quote", "--supply-tokens", "1000", "--sell"])
            .unwrap();
        match cli.command {
            Some(Commands::Quote {
                supply_tokens,
                amount_tokens,
                sell,
                ..
            }) => {
                assert_eq!(supply_tokens, 1000);
                assert_eq!(amount_tokens, 1);
                assert!(sell);
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_sweep_args_run() {
        let cli = Cli::try_parse_from([
            "bcurve",
            "table",
            "--steps",
            "4",
            "--full-amount",
            "--amount-tokens",
            "1",
        ])
        .unwrap();
        let Some(Commands::Table { sweep, .. }) = cli.command else {
            panic!("expected table");
        };

        let (_, config, curve) = sweep.run().unwrap();
        assert_eq!(config.steps, 4);
        assert_eq!(curve.supplies(), vec![0.0, 1000.0, 2000.0, 3000.0]);
        // 1000^2 / 9.6e12 for the single token bought at supply 1000
        assert_eq!(curve.points()[1].raw_price.raw.low_u64(), 104_166_666_666);
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let cli = Cli::try_parse_from(["bcurve", "table", "--divisor", "0"]).unwrap();
        let Some(Commands::Table { sweep, .. }) = cli.command else {
            panic!("expected table");
        };
        assert!(sweep.run().is_err());
    }
}

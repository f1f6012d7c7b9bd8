//! isotopia — Command-line front end for decay and tracer curves.
//!
//! Evaluates a model over an evenly spaced time grid, prints the series,
//! and optionally writes it as JSON or renders it as a chart.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use isotopia_core::traits::DecayCurve;
use isotopia_core::types::{linspace, TimeSeries};
use isotopia_decay::{DecayModel, TracerModel};
use isotopia_plot::{CurvePlotter, PlotConfig};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;

/// Closed-form radioactive decay and tracer dilution curves.
#[derive(Parser, Debug)]
#[command(name = "isotopia", version, about = "Radioactive decay and tracer dilution curves")]
struct Cli {
    /// Config file (default: ./isotopia.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json")
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remaining quantity of a single decaying isotope.
    Decay(DecayArgs),
    /// Concentration of a tracer under decay and dilution.
    Tracer(TracerArgs),
}

#[derive(Args, Debug)]
struct DecayArgs {
    /// Decay constant (lambda), in inverse time units.
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    decay_constant: f64,

    /// Initial quantity of the isotope.
    #[arg(short, long, allow_negative_numbers = true)]
    initial: f64,

    #[command(flatten)]
    grid: GridArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct TracerArgs {
    /// Decay constant (lambda), in inverse time units.
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    decay_constant: f64,

    /// Dilution rate, in inverse time units.
    #[arg(short, long, allow_negative_numbers = true)]
    dilution_rate: f64,

    /// Initial tracer concentration.
    #[arg(short, long, allow_negative_numbers = true)]
    initial: f64,

    #[command(flatten)]
    grid: GridArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct GridArgs {
    /// First time point.
    #[arg(long, allow_negative_numbers = true)]
    t_start: Option<f64>,

    /// Last time point.
    #[arg(long, allow_negative_numbers = true)]
    t_end: Option<f64>,

    /// Number of time points.
    #[arg(long)]
    points: Option<usize>,
}

impl GridArgs {
    fn time(&self, cfg: &CliConfig) -> Vec<f64> {
        linspace(
            self.t_start.unwrap_or(cfg.t_start),
            self.t_end.unwrap_or(cfg.t_end),
            self.points.unwrap_or(cfg.points),
        )
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Render the curve to this file (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Chart title.
    #[arg(long)]
    title: Option<String>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Reject decay constants and dilution rates that are not > 0.
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize)]
struct Report<'a, M: Serialize> {
    model: &'a M,
    half_life: f64,
    series: &'a TimeSeries,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = CliConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        cfg.log_level = level;
    }
    if let Some(format) = cli.log_format {
        cfg.log_format = format;
    }

    init_logging(&cfg.log_level, &cfg.log_format);
    info!("isotopia v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Decay(args) => run_decay(args, &cfg),
        Commands::Tracer(args) => run_tracer(args, &cfg),
    }
}

fn run_decay(args: DecayArgs, cfg: &CliConfig) -> Result<()> {
    let model = if args.output.strict {
        DecayModel::validated(args.decay_constant).context("invalid isotope model")?
    } else {
        DecayModel::new(args.decay_constant)
    };

    let time = args.grid.time(cfg);
    debug!(initial = args.initial, points = time.len(), "remaining quantity");
    let series = model.series(args.initial, &time);
    info!(
        half_life = model.half_life(),
        points = series.len(),
        "isotope curve computed"
    );

    emit(&model, &series, &args.output, "Isotope decay", cfg)
}

fn run_tracer(args: TracerArgs, cfg: &CliConfig) -> Result<()> {
    let model = if args.output.strict {
        TracerModel::validated(args.decay_constant, args.dilution_rate)
            .context("invalid tracer model")?
    } else {
        TracerModel::new(args.decay_constant, args.dilution_rate)
    };

    let time = args.grid.time(cfg);
    debug!(initial = args.initial, points = time.len(), "concentration over time");
    let series = model.series(args.initial, &time);
    info!(
        effective_decay = model.effective_decay(),
        points = series.len(),
        "tracer curve computed"
    );

    emit(&model, &series, &args.output, "Tracer concentration", cfg)
}

/// Print the series, then render it if a plot path was given.
fn emit<M>(
    model: &M,
    series: &TimeSeries,
    output: &OutputArgs,
    default_title: &str,
    cfg: &CliConfig,
) -> Result<()>
where
    M: DecayCurve + Serialize,
{
    if output.json {
        let report = Report {
            model,
            half_life: model.half_life(),
            series,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("half-life: {:.6}", model.half_life());
        println!("{:>14}  {:>14}", "time", "value");
        for (t, v) in series.points() {
            println!("{t:>14.6}  {v:>14.6}");
        }
    }

    if let Some(path) = &output.plot {
        let title = output.title.as_deref().unwrap_or(default_title);
        render(path, series, title, cfg)?;
    }
    Ok(())
}

fn render(path: &Path, series: &TimeSeries, title: &str, cfg: &CliConfig) -> Result<()> {
    let plotter = CurvePlotter::new(PlotConfig {
        output: path.to_path_buf(),
        width: cfg.plot_width,
        height: cfg.plot_height,
    });
    plotter
        .plot_series(series, title)
        .with_context(|| format!("failed to render chart to {}", path.display()))
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// `RUST_LOG` takes precedence over `level_str`. Logs go to stderr so the
/// printed series on stdout stays machine-readable.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

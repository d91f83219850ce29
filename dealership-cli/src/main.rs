mod demo;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use demo::{DemoPlan, run_demo};
use report::{render_report, write_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored, human-readable summary
    Console,
    /// Pretty-printed JSON document
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "dealership-cli", version)]
#[command(about = "Walk through the dealership model: build vehicles, start them, list them")]
struct Args {
    /// Height for the demo SUV (values below 1 fall back to 10)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    suv_height: i32,

    /// Height for the demo sedan
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    sedan_height: i32,

    /// Top speed for the demo sedan
    #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
    max_speed: i32,

    /// How many times to start the SUV
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    starts: i32,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    const fn plan(&self) -> DemoPlan {
        DemoPlan {
            suv_height: self.suv_height,
            sedan_height: self.sedan_height,
            max_speed: self.max_speed,
            starts: self.starts,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = run_demo(&args.plan());
    log::debug!("demo finished with {} signals", outcome.signals.len());

    if args.output.is_some() {
        colored::control::set_override(false);
    }
    let rendered = render_report(&outcome, args.report).context("rendering demo report")?;
    write_report(&rendered, args.output.as_deref()).context("writing demo report")?;
    Ok(())
}

use colored::Colorize;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ReportFormat;
use crate::demo::DemoOutcome;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to format console report")]
    Format(#[from] std::fmt::Error),
    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report to {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report to stdout")]
    Stdout(#[source] std::io::Error),
}

pub fn render_report(outcome: &DemoOutcome, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Console => render_console(outcome),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(outcome)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_console(outcome: &DemoOutcome) -> Result<String, ReportError> {
    let mut out = String::new();
    writeln!(out, "{}", "🚗 Dealership Demo".bright_cyan().bold())?;
    writeln!(out, "{}", "==================".cyan())?;
    writeln!(out, "SUV height: {}", outcome.suv_height)?;
    writeln!(
        out,
        "Sedan: {} {} (height {}, max speed {})",
        outcome.sedan.color, outcome.sedan.fuel_type, outcome.sedan.height, outcome.sedan.max_speed
    )?;
    writeln!(out)?;

    for signal in &outcome.signals {
        writeln!(out, "  {}", signal.message().yellow())?;
    }
    writeln!(out)?;

    let inventory = &outcome.inventory;
    writeln!(
        out,
        "For sale: {}  Off-road: {}  New customer discount: {}%",
        inventory.for_sale.len().to_string().green(),
        inventory.off_road_count.to_string().green(),
        inventory.discount_percent
    )?;
    for line in &inventory.for_sale {
        let off_road = match line.off_road {
            Some(true) => "off-road ready".green(),
            Some(false) => "off-road capable".normal(),
            None => "road only".dimmed(),
        };
        writeln!(
            out,
            "  - {} {} {} (height {}) {}",
            line.kind, line.color, line.fuel_type, line.height, off_road
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Vehicles built: {}", outcome.counters.vehicles)?;
    writeln!(out, "SUVs built: {}", outcome.counters.suvs)?;
    Ok(out)
}

pub fn write_report(rendered: &str, output: Option<&Path>) -> Result<(), ReportError> {
    match output {
        Some(path) => std::fs::write(path, rendered).map_err(|source| ReportError::WriteFile {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(ReportError::Stdout)
        }
    }
}

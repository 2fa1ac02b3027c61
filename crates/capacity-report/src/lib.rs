// File: crates/capacity-report/src/lib.rs
// Summary: Quota capacity report; computes operation/cost series and renders the analysis figures.

pub mod config;
pub mod error;
pub mod export;
pub mod figures;
pub mod model;
pub mod scenarios;
pub mod summary;

use std::path::PathBuf;

pub use config::{OperationModel, ReportConfig};
pub use error::{ReportError, Result};
pub use summary::{print_summary, write_summary};
pub use model::{cost_series, multi_bus_series, single_bus_series, CostSeries, PlanCost, ReportSeries};

/// Files written by one run.
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub figures: [PathBuf; 2],
    pub csv: Option<PathBuf>,
}

/// Compute the series, render both figures and optionally export CSV.
/// Stops at the first failure; the caller prints the summary only after this succeeds.
pub fn generate(config: &ReportConfig) -> Result<ReportOutput> {
    config.validate()?;
    let series = ReportSeries::compute(config);

    let first = figures::render_figure_one(config, &series)?;
    let second = figures::render_figure_two(config)?;
    let csv = if config.export_csv {
        Some(export::write_series_csv(&config.output_dir, &series)?)
    } else {
        None
    };
    Ok(ReportOutput { figures: [first, second], csv })
}

// File: crates/capacity-report/src/main.rs
// Summary: CLI entry point; no arguments reproduces the default report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;

use capacity_report::ReportConfig;

fn cli() -> Command {
    Command::new("capacity-report")
        .version(clap::crate_version!())
        .about("Render bus-tracking backend quota and cost charts")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON config file; missing fields keep their defaults")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Directory the PNG files are written to [default: target/out]")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("dpi")
                .long("dpi")
                .help("Raster resolution in dots per inch [default: 300]")
                .value_parser(clap::value_parser!(f32)),
        )
        .arg(
            Arg::new("export_csv")
                .long("export-csv")
                .help("Also write the derived series to capacity_series.csv")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_labels")
                .long("no-labels")
                .help("Skip all text in the figures")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("CAPACITY_REPORT_LOG", "warn,capacity_report=info"))
        .init();

    let matches = cli().get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ReportConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config file: {:?}", path))?,
        None => ReportConfig::default(),
    };

    // Apply CLI overrides
    if let Some(dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = dir.clone();
    }
    if let Some(dpi) = matches.get_one::<f32>("dpi") {
        config.dpi = *dpi;
    }
    if matches.get_flag("export_csv") {
        config.export_csv = true;
    }
    if matches.get_flag("no_labels") {
        config.draw_labels = false;
    }
    log::debug!("config: {:?}", config);

    let output = capacity_report::generate(&config)
        .with_context(|| format!("report generation into {} failed", config.output_dir.display()))?;
    for path in output.figures.iter().chain(output.csv.iter()) {
        log::info!("output: {}", path.display());
    }
    capacity_report::print_summary()?;
    Ok(())
}

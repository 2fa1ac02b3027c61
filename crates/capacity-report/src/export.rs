// File: crates/capacity-report/src/export.rs
// Summary: Long-format CSV export of the derived series (series, x, y).

use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::model::ReportSeries;

pub const CSV_FILE: &str = "capacity_series.csv";

pub fn write_series_csv(output_dir: &Path, series: &ReportSeries) -> Result<PathBuf> {
    let path = output_dir.join(CSV_FILE);
    let csv_err = |source| ReportError::Csv { path: path.clone(), source };
    std::fs::create_dir_all(output_dir)
        .map_err(|source| ReportError::Io { path: output_dir.to_path_buf(), source })?;

    let mut wtr = csv::Writer::from_path(&path).map_err(csv_err)?;
    wtr.write_record(["series", "x", "y"]).map_err(csv_err)?;

    let xy = [
        ("single_bus_ops", &series.users, &series.single_bus),
        ("multi_bus_ops", &series.buses, &series.multi_bus),
        ("blaze_cost", &series.operations_range, &series.costs.blaze),
    ];
    for (name, xs, ys) in xy {
        for (x, y) in xs.iter().zip(ys.iter()) {
            let (x, y) = (x.to_string(), y.to_string());
            wtr.write_record([name, x.as_str(), y.as_str()]).map_err(csv_err)?;
        }
    }
    for (x, cost) in series.operations_range.iter().zip(&series.costs.spark) {
        let (x, cost) = (x.to_string(), cost.to_string());
        wtr.write_record(["spark_cost", x.as_str(), cost.as_str()]).map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| ReportError::Io { path: path.clone(), source })?;
    log::info!("wrote series export {}", path.display());
    Ok(path)
}

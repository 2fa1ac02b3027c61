// File: crates/capacity-report/src/config.rs
// Summary: Report configuration: quota constants, output location, raster resolution.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReportError, Result};

/// Daily operations generated by one bus and its riders.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OperationModel {
    pub bus_location_updates: f64,
    pub reads_per_user: f64,
    pub admin_reads: f64,
}

impl Default for OperationModel {
    fn default() -> Self {
        Self { bus_location_updates: 800.0, reads_per_user: 50.0, admin_reads: 200.0 }
    }
}

impl OperationModel {
    /// Operations that do not depend on the rider count (1000 with the defaults).
    pub fn fixed_ops(&self) -> f64 {
        self.bus_location_updates + self.admin_reads
    }

    pub fn daily_ops(&self, users: u32) -> f64 {
        self.fixed_ops() + users as f64 * self.reads_per_user
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub dpi: f32,
    /// Free-tier daily operation limit shared by every chart.
    pub spark_limit: f64,
    /// Pay-as-you-go price in dollars per 100K operations.
    pub blaze_rate_per_100k: f64,
    pub users_per_bus: u32,
    pub operations: OperationModel,
    pub draw_labels: bool,
    pub export_csv: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output_dir: PathBuf::from("target/out"),
            dpi: 300.0,
            spark_limit: 50_000.0,
            blaze_rate_per_100k: 0.06,
            users_per_bus: 500,
            operations: OperationModel::default(),
            draw_labels: true,
            export_csv: false,
        }
    }
}

impl ReportConfig {
    /// Load a JSON config. Missing or ill-typed fields keep their defaults with a warning.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ReportError::Io { path: path.to_path_buf(), source })?;
        let partial: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|source| ReportError::Config { path: path.to_path_buf(), source })?;
        let mut config = ReportConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::debug!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(output_dir);
        load_or_default!(dpi);
        load_or_default!(spark_limit);
        load_or_default!(blaze_rate_per_100k);
        load_or_default!(users_per_bus);
        load_or_default!(operations);
        load_or_default!(draw_labels);
        load_or_default!(export_csv);

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.dpi.is_finite() && self.dpi > 0.0 && self.dpi <= 1200.0) {
            return Err(ReportError::InvalidConfig(format!("dpi must be in (0, 1200], got {}", self.dpi)));
        }
        non_negative("spark_limit", self.spark_limit)?;
        non_negative("blaze_rate_per_100k", self.blaze_rate_per_100k)?;
        if self.users_per_bus == 0 {
            return Err(ReportError::InvalidConfig("users_per_bus must be at least 1".into()));
        }
        let ops = &self.operations;
        non_negative("operations.bus_location_updates", ops.bus_location_updates)?;
        non_negative("operations.reads_per_user", ops.reads_per_user)?;
        non_negative("operations.admin_reads", ops.admin_reads)?;
        Ok(())
    }
}

fn non_negative(field: &str, v: f64) -> Result<()> {
    if !(v.is_finite() && v >= 0.0) {
        return Err(ReportError::InvalidConfig(format!("{field} must be a finite value >= 0, got {v}")));
    }
    Ok(())
}

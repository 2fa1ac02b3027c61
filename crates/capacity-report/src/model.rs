// File: crates/capacity-report/src/model.rs
// Summary: Derived quota and cost series.

use std::fmt;

use crate::config::{OperationModel, ReportConfig};
use crate::scenarios::{BUSES, OPERATIONS_RANGE, USERS};

/// Operations per pricing unit of the pay-as-you-go plan.
pub const BLAZE_UNIT: f64 = 100_000.0;

/// Daily cost on a plan; `Unbounded` means the plan cannot serve the load at any price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanCost {
    Finite(f64),
    Unbounded,
}

impl PlanCost {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, PlanCost::Unbounded)
    }

    /// Value handed to the renderer; infinity is never drawn.
    pub fn as_plot_value(&self) -> f64 {
        match self {
            PlanCost::Finite(v) => *v,
            PlanCost::Unbounded => f64::INFINITY,
        }
    }
}

impl fmt::Display for PlanCost {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlanCost::Finite(v) => write!(f, "{v}"),
            PlanCost::Unbounded => write!(f, "inf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostSeries {
    pub spark: Vec<PlanCost>,
    pub blaze: Vec<f64>,
}

/// Daily operations of one bus for each rider count.
pub fn single_bus_series(model: &OperationModel, users: &[u32]) -> Vec<f64> {
    users.iter().map(|&u| model.daily_ops(u)).collect()
}

/// Daily operations of each fleet size with `users_per_bus` riders per bus.
pub fn multi_bus_series(model: &OperationModel, buses: &[u32], users_per_bus: u32) -> Vec<f64> {
    let per_bus = model.daily_ops(users_per_bus);
    buses.iter().map(|&b| b as f64 * per_bus).collect()
}

/// Spark is free up to and including `free_threshold`, unbounded above it.
/// Blaze bills only the excess over the threshold at `rate_per_100k`.
pub fn cost_series(operations_range: &[f64], free_threshold: f64, rate_per_100k: f64) -> CostSeries {
    let spark = operations_range
        .iter()
        .map(|&ops| if ops <= free_threshold { PlanCost::Finite(0.0) } else { PlanCost::Unbounded })
        .collect();
    let blaze = operations_range
        .iter()
        .map(|&ops| ((ops - free_threshold) * rate_per_100k / BLAZE_UNIT).max(0.0))
        .collect();
    CostSeries { spark, blaze }
}

/// Every derived series of one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSeries {
    pub users: Vec<f64>,
    pub single_bus: Vec<f64>,
    pub buses: Vec<f64>,
    pub multi_bus: Vec<f64>,
    pub operations_range: Vec<f64>,
    pub costs: CostSeries,
}

impl ReportSeries {
    pub fn compute(config: &ReportConfig) -> Self {
        let series = Self {
            users: USERS.iter().map(|&u| u as f64).collect(),
            single_bus: single_bus_series(&config.operations, &USERS),
            buses: BUSES.iter().map(|&b| b as f64).collect(),
            multi_bus: multi_bus_series(&config.operations, &BUSES, config.users_per_bus),
            operations_range: OPERATIONS_RANGE.to_vec(),
            costs: cost_series(&OPERATIONS_RANGE, config.spark_limit, config.blaze_rate_per_100k),
        };
        log::debug!("computed series: {:?}", series);
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_cost_display() {
        assert_eq!(PlanCost::Finite(0.0).to_string(), "0");
        assert_eq!(PlanCost::Unbounded.to_string(), "inf");
        assert!(PlanCost::Unbounded.as_plot_value().is_infinite());
    }

    #[test]
    fn zero_rate_is_free() {
        let c = cost_series(&[100_000.0], 50_000.0, 0.0);
        assert_eq!(c.blaze, vec![0.0]);
    }
}

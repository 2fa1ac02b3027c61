// File: crates/capacity-report/tests/series.rs
// Purpose: Quota and cost formulas, boundaries, and determinism of the derived series.

use capacity_report::{cost_series, multi_bus_series, single_bus_series, OperationModel, PlanCost, ReportConfig, ReportSeries};

const LIMIT: f64 = 50_000.0;
const RATE: f64 = 0.06;

#[test]
fn single_bus_is_fifty_reads_per_user_plus_fixed() {
    let model = OperationModel::default();
    assert_eq!(single_bus_series(&model, &[0, 100, 1000]), vec![1000.0, 6000.0, 51000.0]);

    let users: Vec<u32> = (0..=2000).step_by(37).collect();
    for (u, ops) in users.iter().zip(single_bus_series(&model, &users)) {
        assert_eq!(ops, *u as f64 * 50.0 + 1000.0);
    }
}

#[test]
fn multi_bus_scales_per_bus_load() {
    let model = OperationModel::default();
    assert_eq!(multi_bus_series(&model, &[1, 2, 5], 500), vec![26000.0, 52000.0, 130000.0]);
    for (b, ops) in (1..=8).zip(multi_bus_series(&model, &[1, 2, 3, 4, 5, 6, 7, 8], 500)) {
        assert_eq!(ops, b as f64 * 26000.0);
    }
}

#[test]
fn cost_example_points() {
    let c = cost_series(&[10_000.0, 100_000.0], LIMIT, RATE);
    assert_eq!(c.spark, vec![PlanCost::Finite(0.0), PlanCost::Unbounded]);
    assert_eq!(c.blaze[0], 0.0);
    assert!((c.blaze[1] - 0.03).abs() < 1e-12, "blaze = {}", c.blaze[1]);
}

#[test]
fn spark_threshold_is_inclusive() {
    let c = cost_series(&[LIMIT, LIMIT + 1.0], LIMIT, RATE);
    assert_eq!(c.spark[0], PlanCost::Finite(0.0));
    assert!(c.spark[1].is_unbounded());
    assert_eq!(c.blaze[0], 0.0);
}

#[test]
fn spark_unbounded_exactly_above_limit() {
    let ops: Vec<f64> = (0..=60).map(|i| i as f64 * 10_000.0).collect();
    let c = cost_series(&ops, LIMIT, RATE);
    for (o, s) in ops.iter().zip(&c.spark) {
        assert_eq!(s.is_unbounded(), *o > LIMIT, "ops = {o}");
    }
}

#[test]
fn blaze_monotone_and_non_negative() {
    let ops: Vec<f64> = (0..=100).map(|i| i as f64 * 7_500.0).collect();
    let c = cost_series(&ops, LIMIT, RATE);
    assert!(c.blaze.iter().all(|v| *v >= 0.0));
    assert!(c.blaze.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn documented_constants_produce_expected_series() {
    let s = ReportSeries::compute(&ReportConfig::default());
    assert_eq!(s.single_bus, vec![1000.0, 6000.0, 11000.0, 26000.0, 41000.0, 51000.0, 76000.0, 101000.0]);
    assert_eq!(s.multi_bus.last(), Some(&208_000.0));
    assert_eq!(s.costs.spark.iter().filter(|c| c.is_unbounded()).count(), 3);
    assert!((s.costs.blaze[5] - 0.27).abs() < 1e-12);
}

#[test]
fn series_are_deterministic() {
    let cfg = ReportConfig::default();
    assert_eq!(ReportSeries::compute(&cfg), ReportSeries::compute(&cfg));
}

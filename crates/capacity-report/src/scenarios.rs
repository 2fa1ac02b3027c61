// File: crates/capacity-report/src/scenarios.rs
// Summary: Hand-authored inputs charted by the report.

/// Rider counts on a single bus (Graph 1).
pub const USERS: [u32; 8] = [0, 100, 200, 500, 800, 1000, 1500, 2000];

/// Fleet sizes (Graph 2).
pub const BUSES: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Daily operation volumes priced in Graph 3.
pub const OPERATIONS_RANGE: [f64; 6] = [10_000.0, 25_000.0, 50_000.0, 100_000.0, 200_000.0, 500_000.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Safe,
    Warning,
    Critical,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Safe => "Safe",
            LoadStatus::Warning => "Warning",
            LoadStatus::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            LoadStatus::Safe => "green",
            LoadStatus::Warning => "orange",
            LoadStatus::Critical => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadScenario {
    pub label: &'static str,
    pub operations: f64,
    pub status: LoadStatus,
}

/// Fleet/rider mixes with an editorial status each (Graph 4).
pub const LOAD_SCENARIOS: [LoadScenario; 6] = [
    LoadScenario { label: "1B+100U", operations: 6_000.0, status: LoadStatus::Safe },
    LoadScenario { label: "1B+500U", operations: 26_000.0, status: LoadStatus::Safe },
    LoadScenario { label: "1B+1000U", operations: 51_000.0, status: LoadStatus::Warning },
    LoadScenario { label: "2B+500U", operations: 27_000.0, status: LoadStatus::Safe },
    LoadScenario { label: "3B+1000U", operations: 53_000.0, status: LoadStatus::Critical },
    LoadScenario { label: "5B+2000U", operations: 105_000.0, status: LoadStatus::Critical },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationShare {
    pub label: &'static str,
    pub operations: f64,
    pub color: &'static str,
}

/// Daily operations by type for 1 bus + 1000 users (Graph 5).
pub const OPERATION_BREAKDOWN: [OperationShare; 5] = [
    OperationShare { label: "Bus Location\nUpdates", operations: 800.0, color: "#FF6B6B" },
    OperationShare { label: "Stop\nChecks", operations: 400.0, color: "#4ECDC4" },
    OperationShare { label: "User App\nReads", operations: 50_000.0, color: "#45B7D1" },
    OperationShare { label: "Admin\nReads", operations: 200.0, color: "#96CEB4" },
    OperationShare { label: "Cache\nRefresh", operations: 144.0, color: "#FFEAA7" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationScenario {
    pub label: &'static str,
    pub operations: f64,
    pub color: &'static str,
}

/// Estimated daily operations before/after caching work (Graph 6).
pub const OPTIMIZATION_SCENARIOS: [OptimizationScenario; 3] = [
    OptimizationScenario { label: "No Optimization", operations: 150_000.0, color: "red" },
    OptimizationScenario { label: "Current Optimization", operations: 51_544.0, color: "orange" },
    OptimizationScenario { label: "Full Optimization", operations: 25_000.0, color: "green" },
];

// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, and optional category names.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// When non-empty the axis is categorical: category `i` sits at `x = i`.
    pub categories: Vec<String>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, categories: Vec::new() }
    }

    /// Categorical axis spanning half a slot either side of the first/last category.
    pub fn categorical<S: Into<String>>(label: impl Into<String>, categories: impl IntoIterator<Item = S>) -> Self {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let n = categories.len().max(1) as f64;
        Self { label: label.into(), min: -0.6, max: n - 0.4, categories }
    }

    pub fn is_categorical(&self) -> bool {
        !self.categories.is_empty()
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }
}

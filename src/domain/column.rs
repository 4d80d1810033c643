//! Named numeric column.
//!
//! Reads never fail: an out-of-bounds position reads as `0.0` and slice
//! bounds are clamped to the column's length.

use crate::domain::stats;
use crate::domain::window::{self, WindowKind};
use std::ops::{Bound, Range, RangeBounds};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// A single-element column holding `value`.
    pub fn scalar(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, vec![value])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `0.0` past the end.
    pub fn get(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Column {
        let range = clamp_range(self.values.len(), range);
        Column::new(self.name.clone(), self.values[range].to_vec())
    }

    pub fn head(&self, n: usize) -> Column {
        self.slice(..n)
    }

    pub fn tail(&self, n: usize) -> Column {
        self.slice(self.values.len().saturating_sub(n)..)
    }

    pub fn rolling(&self, window: usize, kind: WindowKind) -> Column {
        Column::new(
            self.name.clone(),
            window::rolling(&self.values, window, kind),
        )
    }

    pub fn rolling_min(&self, window: usize) -> Column {
        self.rolling(window, WindowKind::Min)
    }

    pub fn rolling_max(&self, window: usize) -> Column {
        self.rolling(window, WindowKind::Max)
    }

    pub fn rolling_mean(&self, window: usize) -> Column {
        self.rolling(window, WindowKind::Mean)
    }

    /// Drops missing values, keeping the order of the rest.
    pub fn drop_missing(&self) -> Column {
        let values = self
            .values
            .iter()
            .copied()
            .filter(|v| !stats::is_missing(*v))
            .collect();
        Column::new(self.name.clone(), values)
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| stats::is_missing(**v)).count()
    }

    pub fn to_list(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn mean(&self) -> f64 {
        stats::mean(&self.values)
    }

    pub fn min(&self) -> f64 {
        stats::min(&self.values)
    }

    pub fn max(&self) -> f64 {
        stats::max(&self.values)
    }

    pub fn variance(&self) -> f64 {
        stats::variance(&self.values)
    }
}

/// Resolves `range` against a sequence of length `len`, clamping both ends.
/// An inverted range resolves to an empty one.
fn clamp_range<R: RangeBounds<usize>>(len: usize, range: R) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    let end = end.min(len);
    let start = start.min(end);
    start..end
}

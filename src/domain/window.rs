//! Trailing-window aggregation.
//!
//! The aggregate at position `i` covers `[max(0, i - window + 1), i]`. The
//! first `window - 1` outputs are computed over the truncated prefix instead
//! of being padded, so the output always has the input's length. Missing
//! values inside a window are skipped.

use crate::domain::stats;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Min,
    Max,
    Mean,
}

impl WindowKind {
    /// Aggregates the present values of `window`; a window holding only
    /// missing values aggregates to `0.0`.
    fn aggregate(self, window: &[f64]) -> f64 {
        let present = window.iter().copied().filter(|v| !stats::is_missing(*v));
        match self {
            WindowKind::Min => present.reduce(f64::min).unwrap_or(0.0),
            WindowKind::Max => present.reduce(f64::max).unwrap_or(0.0),
            WindowKind::Mean => {
                let (sum, count) = present.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
                if count == 0 { 0.0 } else { sum / count as f64 }
            }
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKind::Min => write!(f, "min"),
            WindowKind::Max => write!(f, "max"),
            WindowKind::Mean => write!(f, "mean"),
        }
    }
}

impl FromStr for WindowKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" => Ok(WindowKind::Min),
            "max" => Ok(WindowKind::Max),
            "mean" | "avg" => Ok(WindowKind::Mean),
            other => Err(format!("unknown window kind: {other}")),
        }
    }
}

/// Rolling aggregate of `values` over a trailing window of `window` samples.
///
/// A window of 0 is treated as 1.
pub fn rolling(values: &[f64], window: usize, kind: WindowKind) -> Vec<f64> {
    let window = window.max(1);
    let mut out = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        out.push(kind.aggregate(&values[start..=i]));
    }

    out
}

pub fn rolling_min(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, WindowKind::Min)
}

pub fn rolling_max(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, WindowKind::Max)
}

pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, WindowKind::Mean)
}

//! OHLCV bar view over a table.

use crate::domain::stats;
use crate::domain::table::{Row, Table};

pub const OPEN: &str = "open";
pub const HIGH: &str = "high";
pub const LOW: &str = "low";
pub const CLOSE: &str = "close";
pub const VOLUME: &str = "volume";

/// Column names of an OHLCV table, in output order.
pub const COLUMNS: [&str; 5] = [OPEN, HIGH, LOW, CLOSE, VOLUME];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhlcvBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl OhlcvBar {
    /// Reads a bar out of a row. Absent fields read as `0.0`.
    pub fn from_row(row: &Row) -> Self {
        Self {
            open: row.get(OPEN),
            high: row.get(HIGH),
            low: row.get(LOW),
            close: row.get(CLOSE),
            volume: row.get(VOLUME),
        }
    }

    /// Mean of high, low and close.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// High-low span, widened to cover a gap from the previous close when
    /// there is one.
    pub fn true_range(&self, prev_close: Option<f64>) -> f64 {
        let span = self.high - self.low;
        match prev_close {
            Some(prev) => span
                .max((self.high - prev).abs())
                .max((self.low - prev).abs()),
            None => span,
        }
    }
}

/// Price-range statistics over every bar of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSummary {
    pub bars: usize,
    pub mean_typical_price: f64,
    pub mean_true_range: f64,
}

/// `None` unless the table has high, low and close columns. The first bar's
/// true range is its high-low span.
pub fn range_summary(table: &Table) -> Option<RangeSummary> {
    if ![HIGH, LOW, CLOSE].iter().all(|c| table.has_column(c)) {
        return None;
    }
    let bars = bars(table);
    let typical: Vec<f64> = bars.iter().map(OhlcvBar::typical_price).collect();
    let prev_closes = std::iter::once(None).chain(bars.iter().map(|b| Some(b.close)));
    let ranges: Vec<f64> = bars
        .iter()
        .zip(prev_closes)
        .map(|(bar, prev)| bar.true_range(prev))
        .collect();
    Some(RangeSummary {
        bars: bars.len(),
        mean_typical_price: stats::mean(&typical),
        mean_true_range: stats::mean(&ranges),
    })
}

/// Every row of `table` as a bar.
pub fn bars(table: &Table) -> Vec<OhlcvBar> {
    (0..table.length())
        .map(|i| OhlcvBar::from_row(&table.row_at(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bar() -> OhlcvBar {
        OhlcvBar {
            open: 20.0,
            high: 24.0,
            low: 18.0,
            close: 23.0,
            volume: 1_500.0,
        }
    }

    #[test]
    fn typical_price_of_bar() {
        assert_relative_eq!(bar().typical_price(), 65.0 / 3.0);
    }

    #[test]
    fn true_range_without_previous_close_is_span() {
        assert_relative_eq!(bar().true_range(None), 6.0);
    }

    #[test]
    fn true_range_inside_span() {
        assert_relative_eq!(bar().true_range(Some(21.0)), 6.0);
    }

    #[test]
    fn true_range_covers_gaps() {
        assert_relative_eq!(bar().true_range(Some(12.0)), 12.0);
        assert_relative_eq!(bar().true_range(Some(30.0)), 12.0);
    }

    #[test]
    fn range_summary_over_table() {
        let table = Table::from_columns([
            (OPEN, vec![1.0, 5.5]),
            (HIGH, vec![3.0, 6.0]),
            (LOW, vec![0.0, 5.0]),
            (CLOSE, vec![2.0, 5.5]),
        ]);
        let summary = range_summary(&table).unwrap();
        assert_eq!(summary.bars, 2);
        assert_relative_eq!(summary.mean_typical_price, 43.0 / 12.0);
        assert_relative_eq!(summary.mean_true_range, 3.5);
    }

    #[test]
    fn range_summary_needs_price_columns() {
        assert!(range_summary(&Table::from_columns([(CLOSE, vec![1.0])])).is_none());
        let empty = Table::from_columns([(HIGH, vec![]), (LOW, vec![]), (CLOSE, vec![])]);
        let summary = range_summary(&empty).unwrap();
        assert_eq!(summary.bars, 0);
        assert_eq!(summary.mean_true_range, 0.0);
    }

    #[test]
    fn bars_from_table() {
        let table = Table::from_columns([
            (OPEN, vec![1.0, 2.0]),
            (HIGH, vec![1.5, 2.5]),
            (LOW, vec![0.5, 1.5]),
            (CLOSE, vec![1.2, 2.2]),
            (VOLUME, vec![1000.0, 2000.0]),
        ]);
        let bars = bars(&table);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].open, 2.0);
        assert_eq!(bars[1].volume, 2000.0);
    }

    #[test]
    fn from_row_defaults_missing_fields() {
        let table = Table::from_columns([(CLOSE, vec![3.0])]);
        let bar = OhlcvBar::from_row(&table.row_at(0));
        assert_eq!(bar.close, 3.0);
        assert_eq!(bar.open, 0.0);
        assert_eq!(bar.volume, 0.0);
    }
}

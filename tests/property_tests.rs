//! Property-based tests for windowing and table access.
//!
//! These tests verify invariants that must hold for all inputs.

use barframe::domain::column::Column;
use barframe::domain::generator::{self, GeneratorConfig};
use barframe::domain::ohlcv;
use barframe::domain::stats;
use barframe::domain::table::Table;
use barframe::domain::window::{rolling, WindowKind};
use proptest::prelude::*;

fn finite_value() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

fn values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(finite_value(), 0..=max_len)
}

/// A table whose columns all share one length.
fn even_table() -> impl Strategy<Value = Table> {
    (0usize..40).prop_flat_map(|len| {
        prop::collection::vec(prop::collection::vec(finite_value(), len), 1..5).prop_map(
            |cols| {
                Table::from_columns(
                    cols.into_iter()
                        .enumerate()
                        .map(|(i, v)| (format!("c{i}"), v)),
                )
            },
        )
    })
}

proptest! {
    #[test]
    fn rolling_max_never_below_rolling_min(s in values(60), window in 1usize..20) {
        let hi = rolling(&s, window, WindowKind::Max);
        let lo = rolling(&s, window, WindowKind::Min);
        prop_assert_eq!(hi.len(), s.len());
        for i in 0..s.len() {
            prop_assert!(hi[i] >= lo[i]);
        }
    }

    #[test]
    fn rolling_mean_lies_between_min_and_max(s in values(60), window in 1usize..20) {
        let hi = rolling(&s, window, WindowKind::Max);
        let lo = rolling(&s, window, WindowKind::Min);
        let mean = rolling(&s, window, WindowKind::Mean);
        for i in 0..s.len() {
            let tol = 1e-9 * hi[i].abs().max(lo[i].abs()).max(1.0);
            prop_assert!(mean[i] <= hi[i] + tol);
            prop_assert!(mean[i] >= lo[i] - tol);
        }
    }

    #[test]
    fn unit_window_mean_is_identity(s in prop::collection::vec(finite_value(), 1..60)) {
        prop_assert_eq!(rolling(&s, 1, WindowKind::Mean), s);
    }

    #[test]
    fn singleton_variance_is_zero(x in finite_value()) {
        prop_assert_eq!(stats::variance(&[x]), 0.0);
    }

    #[test]
    fn head_and_tail_are_capped(table in even_table(), n in 0usize..60) {
        let len = table.length();
        prop_assert_eq!(table.head(n).length(), n.min(len));
        prop_assert_eq!(table.tail(n).length(), n.min(len));
    }

    #[test]
    fn rows_past_the_end_are_zero(table in even_table(), extra in 0usize..10) {
        let row = table.row_at(table.length() + extra);
        for name in table.column_names() {
            prop_assert_eq!(row.get(name), 0.0);
        }
    }

    #[test]
    fn slice_rows_match_source_rows(table in even_table(), a in 0usize..40, b in 0usize..40) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let sliced = table.rows_in_range(start..end);
        for i in 0..sliced.length() {
            prop_assert_eq!(sliced.row_at(i), table.row_at(start + i));
        }
    }

    #[test]
    fn drop_missing_removes_exactly_the_missing(
        raw in prop::collection::vec(prop::option::of(finite_value()), 0..50)
    ) {
        let values: Vec<f64> = raw.iter().map(|v| v.unwrap_or(stats::MISSING)).collect();
        let expected: Vec<f64> = raw.iter().flatten().copied().collect();
        let col = Column::new("x", values);
        let clean = col.drop_missing();
        prop_assert_eq!(clean.len(), col.len() - col.missing_count());
        prop_assert_eq!(clean.to_list(), expected.as_slice());
    }

    #[test]
    fn generated_bars_stay_in_envelope(seed in any::<u64>(), rows in 0usize..100) {
        let table = generator::generate_seeded("EURUSD", "1h", rows, &GeneratorConfig::default(), seed);
        prop_assert_eq!(table.length(), rows);
        for bar in ohlcv::bars(&table) {
            prop_assert!(bar.high >= bar.open.max(bar.close));
            prop_assert!(bar.low <= bar.open.min(bar.close));
            prop_assert!((1000.0..=10_000.0).contains(&bar.volume));
        }
    }
}

//! Scalar statistics over ordered sequences.
//!
//! Empty input aggregates to `0.0` rather than an error or NaN. Consumers of
//! the table layer rely on these never failing, so the zero is part of the
//! contract.

/// Marker stored in a column for "no data at this position".
pub const MISSING: f64 = f64::NAN;

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by N); `0.0` for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values
        .iter()
        .map(|v| {
            let diff = v - m;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64
}

/// Smallest value; `0.0` for an empty slice.
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Largest value; `0.0` for an empty slice.
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

pub fn arctan(x: f64) -> f64 {
    x.atan()
}

pub fn pi() -> f64 {
    std::f64::consts::PI
}

pub fn is_nan(x: f64) -> bool {
    x.is_nan()
}

/// True for positive or negative infinity only.
pub fn is_infinite(x: f64) -> bool {
    x.is_infinite()
}

/// True when `x` is the missing marker. Any NaN counts.
pub fn is_missing(x: f64) -> bool {
    x.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_aggregates_are_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(variance(&[]), 0.0);
        assert_eq!(min(&[]), 0.0);
        assert_eq!(max(&[]), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn variance_is_population() {
        // mean 5, squared deviations sum to 32, N = 8
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&values), 4.0);
    }

    #[test]
    fn variance_of_single_value_is_zero() {
        assert_eq!(variance(&[42.5]), 0.0);
    }

    #[test]
    fn min_max_basic() {
        let values = [3.0, -1.5, 8.25, 0.0];
        assert_eq!(min(&values), -1.5);
        assert_eq!(max(&values), 8.25);
    }

    #[test]
    fn min_max_skip_nan_when_other_values_present() {
        let values = [MISSING, 2.0, 1.0];
        assert_eq!(min(&values), 1.0);
        assert_eq!(max(&values), 2.0);
    }

    #[test]
    fn trig_helpers() {
        assert_relative_eq!(arctan(1.0), pi() / 4.0, epsilon = 1e-12);
        assert_eq!(arctan(0.0), 0.0);
    }

    #[test]
    fn classification_helpers() {
        assert!(is_nan(f64::NAN));
        assert!(!is_nan(1.0));
        assert!(is_infinite(f64::INFINITY));
        assert!(is_infinite(f64::NEG_INFINITY));
        assert!(!is_infinite(f64::MAX));
        assert!(is_missing(MISSING));
        assert!(!is_missing(0.0));
    }
}

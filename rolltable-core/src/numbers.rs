//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a usize count to f64, returning 0.0 when the cast fails.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Convert a u64 sum to f64 while allowing precision loss in one place.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Floor a f64 and clamp it to the i64 range, returning 0 for non-finite
/// values.
#[must_use]
pub fn floor_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).floor();
    cast::<f64, i64>(clamped).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_casts_are_exact_for_small_values() {
        assert!((usize_to_f64(5) - 5.0).abs() < f64::EPSILON);
        assert!((u64_to_f64(46_656) - 46_656.0).abs() < f64::EPSILON);
    }

    #[test]
    fn floor_clamps_and_handles_nan() {
        assert_eq!(floor_f64_to_i64(3.9), 3);
        assert_eq!(floor_f64_to_i64(-0.5), -1);
        assert_eq!(floor_f64_to_i64(f64::NAN), 0);
    }
}

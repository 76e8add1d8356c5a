//! Time-driven value interpolation for JS-style progress bars and counters.
//!
//! Everything here is a pure function of its arguments. The frame loop that
//! samples these functions lives with the caller (see [`crate::timeline`]).

use std::time::Duration;

/// Quadratic ease-in-out: `2r²` below the midpoint, `1 - (-2r + 2)² / 2` above.
///
/// Input is clamped to `[0, 1]`; the curve is continuous at `0.5` and
/// non-decreasing over the whole range.
pub fn ease_in_out(r: f64) -> f64 {
    let r = r.clamp(0.0, 1.0);
    if r < 0.5 {
        2.0 * r * r
    } else {
        let inv = -2.0 * r + 2.0;
        1.0 - inv * inv / 2.0
    }
}

/// Linear progress `elapsed / duration`, clamped to `[0, 1]`.
///
/// A zero duration is already finished.
pub fn progress_ratio(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Eased value between `start` and `end` after `elapsed` of `duration`.
pub fn interpolate(elapsed: Duration, duration: Duration, start: f64, end: f64) -> f64 {
    start + (end - start) * ease_in_out(progress_ratio(elapsed, duration))
}

/// Floor an interpolated value for display.
pub fn floor_for_display(value: f64) -> i64 {
    value.floor() as i64
}

/// Format an integer with comma thousands separators: `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_ease_boundaries() {
        assert!(ease_in_out(0.0).abs() < EPS);
        assert!((ease_in_out(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_ease_quarter_points() {
        assert!((ease_in_out(0.25) - 0.125).abs() < EPS);
        assert!((ease_in_out(0.75) - 0.875).abs() < EPS);
    }

    #[test]
    fn test_ease_monotonic() {
        let samples: Vec<f64> = (0..=1000).map(|i| ease_in_out(i as f64 / 1000.0)).collect();
        for pair in samples.windows(2) {
            assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn test_progress_ratio() {
        let duration = Duration::from_millis(5000);
        assert_eq!(progress_ratio(Duration::ZERO, duration), 0.0);
        assert!((progress_ratio(Duration::from_millis(1250), duration) - 0.25).abs() < EPS);
        assert_eq!(progress_ratio(Duration::from_millis(9000), duration), 1.0);
        assert_eq!(progress_ratio(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let duration = Duration::from_millis(1500);
        assert_eq!(interpolate(Duration::ZERO, duration, 0.0, 1000.0), 0.0);
        assert!((interpolate(Duration::from_millis(750), duration, 0.0, 1000.0) - 500.0).abs() < 1e-9);
        assert_eq!(interpolate(duration, duration, 0.0, 1000.0), 1000.0);
        assert_eq!(interpolate(Duration::from_secs(60), duration, 0.0, 1000.0), 1000.0);
    }

    #[test]
    fn test_interpolate_descending_range() {
        let duration = Duration::from_millis(100);
        assert_eq!(interpolate(Duration::ZERO, duration, 80.0, 20.0), 80.0);
        assert_eq!(interpolate(duration, duration, 80.0, 20.0), 20.0);
    }

    #[test]
    fn test_floor_for_display() {
        assert_eq!(floor_for_display(84.99), 84);
        assert_eq!(floor_for_display(-0.5), -1);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
    }
}

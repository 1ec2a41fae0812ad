/// Linearly maps `x` from `[x1, x2]` onto `[y1, y2]`.
///
/// A zero-width source range (`x1 == x2`) yields the midpoint of the target
/// range. With `clamp` the result is bounded by the target range, whichever
/// way round `y1` and `y2` are given.
pub fn map_range(x: f64, x1: f64, x2: f64, y1: f64, y2: f64, clamp: bool) -> f64 {
    if x1 == x2 {
        return (y1 + y2) / 2.0;
    }
    // Weighted form so that x1 -> y1 and x2 -> y2 hold bit-for-bit.
    let t = (x - x1) / (x2 - x1);
    let result = y1 * (1.0 - t) + y2 * t;
    if clamp {
        result.clamp(y1.min(y2), y1.max(y2))
    } else {
        result
    }
}

/// Rounds `x` to the nearest multiple of `multiple`, ties to even.
///
/// `round_to_multiple(12.5, 25.0) == 0.0`, `round_to_multiple(37.5, 25.0) == 50.0`.
pub fn round_to_multiple(x: f64, multiple: f64) -> f64 {
    multiple * (x / multiple).round_ties_even()
}

/// Rounds to one decimal place, ties to even.
///
/// Dividing by ten (instead of multiplying by 0.1) lands on the same double
/// as the literal, so `round_to_tenth(0.68) == 0.7` holds exactly.
pub fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

/// Median of an arbitrary list; the mean of the two middle values for even
/// lengths. `None` when empty.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints_exact() {
        assert_eq!(map_range(1.0, 1.0, 5.0, 0.0, 1.0, false), 0.0);
        assert_eq!(map_range(5.0, 1.0, 5.0, 0.0, 1.0, false), 1.0);
        assert_eq!(map_range(-5.0, -5.0, 5.0, 0.0, 100.0, false), 0.0);
        assert_eq!(map_range(5.0, -5.0, 5.0, 0.0, 100.0, false), 100.0);
    }

    #[test]
    fn test_map_range_degenerate_returns_midpoint() {
        assert_eq!(map_range(42.0, 3.0, 3.0, 0.0, 1.0, false), 0.5);
        assert_eq!(map_range(42.0, 3.0, 3.0, 10.0, 20.0, true), 15.0);
    }

    #[test]
    fn test_map_range_clamp_reversed_target() {
        assert_eq!(map_range(2.0, 0.0, 1.0, 1.0, 0.0, true), 0.0);
        assert_eq!(map_range(-1.0, 0.0, 1.0, 1.0, 0.0, true), 1.0);
    }

    #[test]
    fn test_median_even_and_empty() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[0.9, 0.1, 0.5]), Some(0.5));
    }

    #[test]
    fn test_rounding_ties_to_even() {
        assert_eq!(round_to_multiple(12.5, 25.0), 0.0);
        assert_eq!(round_to_multiple(37.5, 25.0), 50.0);
        assert_eq!(round_to_multiple(60.0, 25.0), 50.0);
        assert_eq!(round_to_tenth(0.25), 0.2);
        assert_eq!(round_to_tenth(0.75), 0.8);
    }
}

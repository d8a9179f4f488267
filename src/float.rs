//! Epsilon comparisons for floating point coordinates.

/// Tolerance of three decimal places.
pub const THREE_DECIMAL_PLACES: f64 = 0.001;

/// Tolerance of twelve decimal places.
pub const TWELVE_DECIMAL_PLACES: f64 = 0.000000000001;

/// `true` if `first` and `second` differ by strictly less than `epsilon`.
#[inline]
pub fn is_equal_float(first: f64, second: f64, epsilon: f64) -> bool {
    (first - second).abs() < epsilon
}

/// `true` if both components of the pairs differ by strictly less than `epsilon`.
#[inline]
pub fn is_equal_float_pair(p1_x: f64, p1_y: f64, p2_x: f64, p2_y: f64, epsilon: f64) -> bool {
    is_equal_float(p1_x, p2_x, epsilon) && is_equal_float(p1_y, p2_y, epsilon)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strict_epsilon() {
        assert!(is_equal_float(1.0, 1.0005, THREE_DECIMAL_PLACES));
        assert!(!is_equal_float(1.0, 1.5, THREE_DECIMAL_PLACES));
        assert!(!is_equal_float(0.0, 0.5, 0.5));
        assert!(!is_equal_float(f64::NAN, f64::NAN, THREE_DECIMAL_PLACES));
    }

    #[test]
    fn pairs() {
        assert!(is_equal_float_pair(
            1.0,
            2.0,
            1.0 + 1e-13,
            2.0 - 1e-13,
            TWELVE_DECIMAL_PLACES
        ));
        assert!(!is_equal_float_pair(
            1.0,
            2.0,
            1.0,
            2.1,
            TWELVE_DECIMAL_PLACES
        ));
    }
}

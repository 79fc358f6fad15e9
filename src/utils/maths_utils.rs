/// Round half away from zero to `decimals` places.
///
/// round_to(123.456, 2) -> 123.46
/// round_to(68.55, 1)   -> 68.6 (modulo binary representation)
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Integer step for a unit sample `u` in `[0, 1)`, scaled by `magnitude`
/// and floored. With `magnitude = 2.0` the step is `-1` or `0`.
#[inline]
pub fn unit_jitter_int(unit: f64, magnitude: f64) -> i64 {
    ((unit - 0.5) * magnitude).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_precision() {
        assert_eq!(round_to(123.456, 2), 123.46);
        assert_eq!(round_to(123.454, 2), 123.45);
        assert_eq!(round_to(-1.25, 0), -1.0);
        assert_eq!(round_to(42.0, 1), 42.0);
    }

    #[test]
    fn integer_jitter_floors_to_minus_one_or_zero() {
        assert_eq!(unit_jitter_int(0.0, 2.0), -1);
        assert_eq!(unit_jitter_int(0.49, 2.0), -1);
        assert_eq!(unit_jitter_int(0.5, 2.0), 0);
        assert_eq!(unit_jitter_int(0.76, 2.0), 0);
        assert_eq!(unit_jitter_int(0.999, 2.0), 0);
    }
}

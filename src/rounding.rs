//! Money rounding helpers
//!
//! Published rate tables are rounded half-up at each calculation step, so
//! every intermediate amount must use the same rounding function. Rust's
//! `f64::round` rounds half away from zero, which matches half-up for the
//! non-negative dollar amounts this engine works with.

/// Round to two decimal places, half-up.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to the nearest whole number, half-up.
///
/// Matches the worksheet convention used for the derived rate constants.
pub fn round0(value: f64) -> f64 {
    value.round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(1.125), 1.13);
        assert_eq!(round2(251.9375), 251.94);
    }

    #[test]
    fn test_round2_not_bankers() {
        // Banker's rounding would give 0.12 here; half-up gives 0.13
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.135), 0.14);
    }

    #[test]
    fn test_round2_exact_values_unchanged() {
        assert_eq!(round2(648.67), 648.67);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round0() {
        // 648.67 / 4 + 0.5 rounds to 163, the single-rate offset seed
        assert_eq!(round0(648.67 / 4.0 + 0.5), 163.0);
        assert_eq!(round0(648.67 / 3.0 + 0.5), 217.0);
    }
}

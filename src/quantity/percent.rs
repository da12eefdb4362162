quantity!(
    /// Utilization percentage, nominally `0.0..=100.0`.
    Percent, via: f64, suffix: "%", precision: 1
);

impl Percent {
    pub const HUNDRED: Self = Self(100.0);

    /// Clamp into the nominal range, backend reports occasionally overshoot.
    pub fn clamp_nominal(self) -> Self {
        if self.0.is_nan() { Self::ZERO } else { Self(self.0.clamp(Self::ZERO.0, Self::HUNDRED.0)) }
    }

    /// Ratio of the two counts as a percentage, zero when the denominator is zero.
    #[expect(clippy::cast_precision_loss)]
    pub fn of_counts(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            Self::ZERO
        } else {
            Self(numerator as f64 * 100.0 / denominator as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_of_counts() {
        assert_abs_diff_eq!(Percent::of_counts(3, 4).0, 75.0);
        assert_eq!(Percent::of_counts(3, 0), Percent::ZERO);
    }

    #[test]
    fn test_clamp_nominal() {
        assert_eq!(Percent(120.0).clamp_nominal(), Percent::HUNDRED);
        assert_eq!(Percent(-1.0).clamp_nominal(), Percent::ZERO);
        assert_eq!(Percent(f64::NAN).clamp_nominal(), Percent::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Percent(42.34).to_string(), "42.3 %");
    }
}

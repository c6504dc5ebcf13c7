use statrs::function::erf::erf;
use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution, Φ(z).
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn cdf_at_zero_is_exactly_half() {
        assert_eq!(normal_cdf(0.0), 0.5);
        assert_eq!(normal_cdf(-0.0), 0.5);
    }

    #[test]
    fn cdf_matches_reference_quantiles() {
        assert_close(normal_cdf(1.0), 0.841_344_746_068_542_9);
        assert_close(normal_cdf(-1.96), 0.024_997_895_148_220_43);
        assert_close(normal_cdf(-1.0), 1.0 - 0.841_344_746_068_542_9);
    }

    #[test]
    fn cdf_saturates_in_the_tails() {
        assert_close(normal_cdf(40.0), 1.0);
        assert_close(normal_cdf(-40.0), 0.0);
    }
}

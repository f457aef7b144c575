pub mod bs;
pub mod types;

/// Common traits used by all pricers
pub mod traits {
    use crate::error::PricingError;
    use crate::models::types::MarketParameters;

    /// Anything that maps a full parameter set to a single option price.
    ///
    /// Sweeps and renderers hold a pricer through this trait so the call and put
    /// legs (or a caller-supplied closure) are interchangeable.
    pub trait OptionPricer {
        /// Short label used in captions and file names (e.g. "call")
        fn label(&self) -> &str;

        fn price(&self, params: &MarketParameters) -> Result<f64, PricingError>;
    }

    impl<F> OptionPricer for (&str, F)
    where
        F: Fn(&MarketParameters) -> Result<f64, PricingError>,
    {
        fn label(&self) -> &str {
            self.0
        }

        fn price(&self, params: &MarketParameters) -> Result<f64, PricingError> {
            (self.1)(params)
        }
    }
}

/// Numeric helpers shared by the pricing formulas
pub mod utils {
    use statrs::function::erf::erfc;
    use std::f64::consts::FRAC_1_SQRT_2;

    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Evaluated as `0.5 * erfc(-x / √2)`, which keeps full relative precision in
    /// the lower tail where `1 + erf` would cancel.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x * FRAC_1_SQRT_2)
    }

    /// Continuously compounded discount factor e^(-rT)
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }

    /// `max(x, 0)` that lets NaN through instead of swallowing it like `f64::max`.
    pub fn floor_at_zero(x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_reference_points() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        // statrs erfc is good to roughly 1e-11 in the body of the distribution
        assert_abs_diff_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-1.96), 0.024_997_895_148_220_4, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(1.0) + norm_cdf(-1.0), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert!(norm_cdf(-40.0) >= 0.0);
        assert!(norm_cdf(-10.0) > 0.0);
        assert_eq!(norm_cdf(40.0), 1.0);
    }

    #[test]
    fn test_floor_at_zero_keeps_nan() {
        assert_eq!(floor_at_zero(-1e-17), 0.0);
        assert_eq!(floor_at_zero(3.5), 3.5);
        assert!(floor_at_zero(f64::NAN).is_nan());
    }

    #[test]
    fn test_discount_factor() {
        assert_eq!(discount_factor(0.05, 0.0), 1.0);
        assert_abs_diff_eq!(discount_factor(0.07, 1.0), (-0.07f64).exp(), epsilon = 1e-15);
    }
}

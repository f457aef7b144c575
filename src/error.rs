//! Error type for the pricing core.
//!
//! Pricing has exactly one failure mode: an input outside the domain of the
//! Black-Scholes formulas. Everything above the core (configuration, sweeps,
//! rendering) reports through `anyhow`, which `PricingError` converts into.

use thiserror::Error;

/// Failure raised by [`crate::price_call`] and [`crate::price_put`].
///
/// # Examples
/// ```
/// use vanilla_lib::PricingError;
///
/// let err = PricingError::InvalidParameter { name: "volatility", value: -0.1 };
/// assert_eq!(err.to_string(), "invalid parameter: volatility = -0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PricingError {
    /// A market or contract parameter lies outside the accepted domain.
    #[error("invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name (`time_to_expiry`, `volatility`, `spot` or `strike`)
        name: &'static str,
        /// Offending value as supplied by the caller
        value: f64,
    },
}

impl PricingError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    /// Name of the rejected parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

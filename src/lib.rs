//! # Vanilla-Lib: Black-Scholes Pricing of European Vanilla Options
//!
//! `vanilla-lib` prices European calls and puts on a non-dividend-paying
//! underlying under the Black-Scholes model, and sweeps those prices across a
//! range of spot values for charting.
//!
//! ## Core Features
//!
//! - **Call pricing**: closed-form Black-Scholes with exact handling of the
//!   zero-volatility, at-expiry and zero-strike limits
//! - **Put pricing**: derived from the call through put-call parity, so both
//!   legs validate and fail identically
//! - **Spot sweeps**: price-vs-spot curves over an evenly spaced grid
//! - **Rendering**: SVG charts (plotters) or CSV tables of a sweep
//!
//! ## Quick Start
//!
//! ```rust
//! use vanilla_lib::{price_call, price_put, PricingError};
//!
//! let call = price_call(110.0, 100.0, 0.07, 1.0, 0.32)?;
//! let put = price_put(110.0, 100.0, 0.07, 1.0, 0.32)?;
//! println!("Call price: {:.4}", call);
//! println!("Put price: {:.4}", put);
//! # Ok::<(), PricingError>(())
//! ```
//!
//! ## Sweeping Spot
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vanilla_lib::{
//!     sweep_prices, MarketParameters, OptionType, SvgRenderer, SweepConfig, SweepRenderer,
//! };
//!
//! let base = MarketParameters::default();
//! let sweep = sweep_prices(&OptionType::Call, &base, &SweepConfig::default())?;
//! SvgRenderer::default().render(&sweep, Path::new("call_price.svg"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{DemoConfig, OutputConfig};
pub use error::PricingError;
pub use models::bs::{moment_terms, MomentTerms};
pub use models::traits::OptionPricer;
pub use models::types::{MarketParameters, OptionType};
pub use render::{renderer_for, CsvRenderer, OutputFormat, SvgRenderer, SweepRenderer};
pub use sweep::{spot_grid, sweep_prices, SpotSweep, SweepConfig};

use models::bs::{bs_call_price, bs_put_price};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured demo settings.
///
/// All presets price the illustrative contract (S=110, K=100, r=0.07, T=1,
/// σ=0.32) and differ only in sweep resolution.
///
/// - [`demo()`]: 1000 points over spot 0.01..400
/// - [`coarse()`]: 100 points, for quick previews
/// - [`fine()`]: 5000 points, for smooth publication charts
pub mod default_configs {
    use crate::config::DemoConfig;

    /// The standard demo run.
    ///
    /// ```rust
    /// use vanilla_lib::default_configs;
    ///
    /// let config = default_configs::demo();
    /// assert_eq!(config.sweep.points, 1000);
    /// ```
    pub fn demo() -> DemoConfig {
        DemoConfig::default()
    }

    /// 100-point sweep.
    pub fn coarse() -> DemoConfig {
        DemoConfig::coarse()
    }

    /// 5000-point sweep.
    pub fn fine() -> DemoConfig {
        DemoConfig::fine()
    }
}

// ================================================================================================
// PRICING API
// ================================================================================================

/// Price a European call option under Black-Scholes.
///
/// # Arguments
///
/// * `s` - Spot price of the underlying, must be > 0
/// * `k` - Strike, must be >= 0
/// * `r` - Continuously compounded risk-free rate
/// * `t` - Time to maturity in years, must be >= 0
/// * `sigma` - Volatility, must be >= 0
///
/// # Degenerate inputs
///
/// Evaluated in order once validation passes:
/// - `sigma == 0`: `max(s - k·e^(-rt), 0)`
/// - `t == 0`: `max(s - k, 0)`
/// - `k == 0`: `s`
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] when `t < 0`, `sigma < 0`, `s <= 0` or
/// `k < 0`, checked in that order. NaN and infinite inputs are not rejected;
/// they propagate through the arithmetic.
///
/// # Example
///
/// ```rust
/// use vanilla_lib::price_call;
///
/// // At expiry the call is worth its intrinsic value
/// assert_eq!(price_call(70.0, 60.0, 0.05, 0.0, 0.2)?, 10.0);
/// assert_eq!(price_call(50.0, 60.0, 0.05, 0.0, 0.2)?, 0.0);
/// # Ok::<(), vanilla_lib::PricingError>(())
/// ```
pub fn price_call(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    bs_call_price(s, k, r, t, sigma)
}

/// Price a European put option via put-call parity.
///
/// Returns `price_call(s, k, r, t, sigma) - s + k·e^(-rt)`. Validation is
/// inherited from [`price_call`], so the put fails on exactly the same inputs
/// with exactly the same error.
///
/// # Example
///
/// ```rust
/// use vanilla_lib::{price_call, price_put};
///
/// let (s, k, r, t, sigma): (f64, f64, f64, f64, f64) = (110.0, 100.0, 0.07, 1.0, 0.32);
/// let parity = price_call(s, k, r, t, sigma)? - s + k * (-r * t).exp();
/// assert_eq!(price_put(s, k, r, t, sigma)?, parity);
/// # Ok::<(), vanilla_lib::PricingError>(())
/// ```
pub fn price_put(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> Result<f64, PricingError> {
    bs_put_price(s, k, r, t, sigma)
}

/// Price either leg from a parameter set.
pub fn price_option(
    option_type: OptionType,
    params: &MarketParameters,
) -> Result<f64, PricingError> {
    option_type.price(params)
}

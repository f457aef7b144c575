// Black-Scholes pricing of European vanilla options on a non-dividend-paying
// underlying. The call is priced directly; the put is obtained from put-call
// parity so both legs share one validation path.

use crate::error::PricingError;
use crate::models::utils::{discount_factor, floor_at_zero, norm_cdf};

/// The two risk-adjusted probability arguments of the Black-Scholes formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentTerms {
    pub d1: f64,
    pub d2: f64,
}

/// Compute d1 and d2.
///
/// ```text
/// d1 = [ln(S/K) + (r + σ²/2)·T] / (σ·√T)
/// d2 = d1 − σ·√T
/// ```
///
/// No validation happens here. Requires S > 0, K > 0, σ > 0 and T > 0; callers
/// must route degenerate inputs around this function.
#[allow(non_snake_case)]
pub fn moment_terms(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> MomentTerms {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / vol_sqrt_t;
    MomentTerms {
        d1,
        d2: d1 - vol_sqrt_t,
    }
}

/// Reject inputs outside the pricing domain.
///
/// Checks run in a fixed order and the first failure is reported: negative
/// maturity, negative volatility, non-positive spot, negative strike. A spot of
/// exactly zero is rejected as well.
#[allow(non_snake_case)]
pub fn validate_inputs(S: f64, K: f64, T: f64, sigma: f64) -> Result<(), PricingError> {
    if T < 0.0 {
        return Err(PricingError::invalid("time_to_expiry", T));
    }
    if sigma < 0.0 {
        return Err(PricingError::invalid("volatility", sigma));
    }
    if S <= 0.0 {
        return Err(PricingError::invalid("spot", S));
    }
    if K < 0.0 {
        return Err(PricingError::invalid("strike", K));
    }
    Ok(())
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// Degenerate inputs are priced by their closed-form limits instead of the
/// general formula, checked in this order:
/// - σ = 0: `max(S − K·e^(−rT), 0)`
/// - T = 0: `max(S − K, 0)`
/// - K = 0: `S`
///
/// Otherwise `S·Φ(d1) − K·e^(−rT)·Φ(d2)`, floored at zero to absorb rounding in
/// the far out-of-the-money tail. NaN inputs are not rejected and propagate.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> Result<f64, PricingError> {
    validate_inputs(S, K, T, sigma)?;

    if sigma == 0.0 {
        return Ok(floor_at_zero(S - K * discount_factor(r, T)));
    }
    if T == 0.0 {
        return Ok(floor_at_zero(S - K));
    }
    if K == 0.0 {
        return Ok(S);
    }

    let MomentTerms { d1, d2 } = moment_terms(S, K, r, T, sigma);
    Ok(floor_at_zero(S * norm_cdf(d1) - K * discount_factor(r, T) * norm_cdf(d2)))
}

/// Price of a European put option via put-call parity: `C − S + K·e^(−rT)`.
///
/// Fails exactly when [`bs_call_price`] fails, with the same error.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> Result<f64, PricingError> {
    let call = bs_call_price(S, K, r, T, sigma)?;
    Ok(call - S + K * discount_factor(r, T))
}

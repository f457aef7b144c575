use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;
use crate::models::bs::{bs_call_price, bs_put_price, validate_inputs};
use crate::models::traits::OptionPricer;

/// Market and contract inputs for a single pricing call.
///
/// Missing fields deserialise to the [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketParameters {
    /// Spot price of the underlying (S > 0)
    pub spot: f64,
    /// Strike price (K >= 0)
    pub strike: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Time to maturity in years (T >= 0)
    pub time_to_expiry: f64,
    /// Annualised volatility as a decimal (σ >= 0)
    pub volatility: f64,
}

impl MarketParameters {
    pub fn new(spot: f64, strike: f64, rate: f64, time_to_expiry: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            time_to_expiry,
            volatility,
        }
    }

    /// Same contract and market, different spot.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Run the pricing-domain checks without pricing anything.
    pub fn validate(&self) -> Result<(), PricingError> {
        validate_inputs(self.spot, self.strike, self.time_to_expiry, self.volatility)
    }

    pub fn call_price(&self) -> Result<f64, PricingError> {
        bs_call_price(
            self.spot,
            self.strike,
            self.rate,
            self.time_to_expiry,
            self.volatility,
        )
    }

    pub fn put_price(&self) -> Result<f64, PricingError> {
        bs_put_price(
            self.spot,
            self.strike,
            self.rate,
            self.time_to_expiry,
            self.volatility,
        )
    }
}

impl Default for MarketParameters {
    /// The illustrative parameter set used by the demo.
    fn default() -> Self {
        Self::new(110.0, 100.0, 0.07, 1.0, 0.32)
    }
}

/// Option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    pub fn price(&self, params: &MarketParameters) -> Result<f64, PricingError> {
        match self {
            OptionType::Call => params.call_price(),
            OptionType::Put => params.put_price(),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(anyhow::anyhow!("Invalid option type: {}", s)),
        }
    }
}

impl OptionPricer for OptionType {
    fn label(&self) -> &str {
        self.as_str()
    }

    fn price(&self, params: &MarketParameters) -> Result<f64, PricingError> {
        OptionType::price(self, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_with_spot_keeps_other_fields() {
        let base = MarketParameters::default();
        let moved = base.with_spot(42.0);
        assert_eq!(moved.spot, 42.0);
        assert_eq!(moved.strike, base.strike);
        assert_eq!(moved.rate, base.rate);
        assert_eq!(moved.time_to_expiry, base.time_to_expiry);
        assert_eq!(moved.volatility, base.volatility);
    }

    #[test]
    fn test_dispatch_matches_free_functions() {
        let p = MarketParameters::default();
        assert_eq!(OptionType::Call.price(&p), bs_call_price(110.0, 100.0, 0.07, 1.0, 0.32));
        assert_eq!(OptionType::Put.price(&p), bs_put_price(110.0, 100.0, 0.07, 1.0, 0.32));
    }

    #[test]
    fn test_validate_rejects_zero_spot() {
        let err = MarketParameters::default().with_spot(0.0).validate().unwrap_err();
        assert_eq!(err.parameter(), "spot");
    }
}

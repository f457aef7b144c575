//! Spot sweep module
//!
//! Maps a pricer over an evenly spaced grid of spot values while holding strike,
//! rate, maturity and volatility fixed. The resulting [`SpotSweep`] is what the
//! renderers in [`crate::render`] consume.

pub mod grid;
pub mod types;

pub use grid::*;
pub use types::*;

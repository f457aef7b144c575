use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Spot range and resolution for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First spot value in the grid (must be > 0)
    #[serde(default = "default_spot_min")]
    pub spot_min: f64,
    /// Last spot value in the grid (must be > spot_min)
    #[serde(default = "default_spot_max")]
    pub spot_max: f64,
    /// Number of grid points, endpoints included (must be >= 2)
    #[serde(default = "default_points")]
    pub points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            points: default_points(),
        }
    }
}

impl SweepConfig {
    pub fn new(spot_min: f64, spot_max: f64, points: usize) -> Self {
        Self {
            spot_min,
            spot_max,
            points,
        }
    }

    /// Check that the grid is well formed: finite, strictly positive and
    /// increasing, with at least two points.
    pub fn validate(&self) -> Result<()> {
        if !self.spot_min.is_finite() || !self.spot_max.is_finite() {
            bail!(
                "SweepConfig validation: spot range [{}, {}] must be finite",
                self.spot_min,
                self.spot_max
            );
        }
        if self.spot_min <= 0.0 {
            bail!(
                "SweepConfig validation: spot_min (spot_min={}) must be > 0",
                self.spot_min
            );
        }
        if self.spot_max <= self.spot_min {
            bail!(
                "SweepConfig validation: spot_max ({}) must exceed spot_min ({})",
                self.spot_max,
                self.spot_min
            );
        }
        if self.points < 2 {
            bail!(
                "SweepConfig validation: points ({}) must be at least 2",
                self.points
            );
        }
        Ok(())
    }
}

fn default_spot_min() -> f64 {
    0.01
}

fn default_spot_max() -> f64 {
    400.0
}

fn default_points() -> usize {
    1000
}

/// Prices of one option leg across a spot grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotSweep {
    /// Pricer label, e.g. "call" or "put"
    pub label: String,
    /// Strictly increasing spot values
    pub spots: Vec<f64>,
    /// Price at each spot, same length as `spots`
    pub prices: Vec<f64>,
}

impl SpotSweep {
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// (spot, price) pairs in grid order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.spots.iter().copied().zip(self.prices.iter().copied())
    }

    /// Smallest and largest finite price, or None if there are none.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.prices
            .iter()
            .copied()
            .filter(|p| p.is_finite())
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }
}

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::*;
use crate::models::traits::OptionPricer;
use crate::models::types::MarketParameters;

/// Evenly spaced spot grid from `spot_min` to `spot_max`, both endpoints exact.
pub fn spot_grid(config: &SweepConfig) -> Result<Vec<f64>> {
    config.validate()?;

    let n = config.points;
    let step = (config.spot_max - config.spot_min) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n)
        .map(|i| config.spot_min + step * i as f64)
        .collect();
    // Pin the last node so rounding in `step * (n - 1)` cannot overshoot
    grid[n - 1] = config.spot_max;
    Ok(grid)
}

/// Price `pricer` at every spot of the grid, holding the rest of `base` fixed.
///
/// The spot in `base` is ignored. The first pricing failure aborts the sweep and
/// no partial result is returned.
pub fn sweep_prices<P: OptionPricer + ?Sized>(
    pricer: &P,
    base: &MarketParameters,
    config: &SweepConfig,
) -> Result<SpotSweep> {
    let spots = spot_grid(config)?;
    debug!(
        label = pricer.label(),
        points = spots.len(),
        spot_min = config.spot_min,
        spot_max = config.spot_max,
        "sweeping spot"
    );

    let prices = spots
        .iter()
        .map(|&spot| {
            pricer
                .price(&base.with_spot(spot))
                .with_context(|| format!("{} price failed at spot {}", pricer.label(), spot))
        })
        .collect::<Result<Vec<f64>>>()?;

    let non_finite = prices.iter().filter(|p| !p.is_finite()).count();
    if non_finite > 0 {
        warn!(
            label = pricer.label(),
            non_finite, "sweep produced non-finite prices"
        );
    }

    Ok(SpotSweep {
        label: pricer.label().to_string(),
        spots,
        prices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::OptionType;

    #[test]
    fn test_grid_endpoints_and_spacing() {
        let grid = spot_grid(&SweepConfig::new(0.01, 400.0, 1000)).unwrap();
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], 0.01);
        assert_eq!(grid[999], 400.0);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_two_point_grid() {
        let grid = spot_grid(&SweepConfig::new(1.0, 2.0, 2)).unwrap();
        assert_eq!(grid, vec![1.0, 2.0]);
    }

    #[test]
    fn test_invalid_grid_is_rejected() {
        assert!(spot_grid(&SweepConfig::new(0.0, 2.0, 5)).is_err());
    }

    #[test]
    fn test_sweep_ignores_base_spot() {
        let base = MarketParameters::default().with_spot(-1.0);
        let config = SweepConfig::new(50.0, 150.0, 3);
        let sweep = sweep_prices(&OptionType::Call, &base, &config).unwrap();
        assert_eq!(sweep.label, "call");
        assert_eq!(sweep.spots, vec![50.0, 100.0, 150.0]);
        assert_eq!(sweep.prices[1], base.with_spot(100.0).call_price().unwrap());
    }

    #[test]
    fn test_sweep_aborts_on_pricing_error() {
        let mut base = MarketParameters::default();
        base.volatility = -0.2;
        let config = SweepConfig::new(1.0, 2.0, 4);
        let err = sweep_prices(&OptionType::Put, &base, &config).unwrap_err();
        assert!(err.to_string().contains("put price failed"));
    }
}

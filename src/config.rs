//! Demo configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) reproduces
//! the illustrative run: S=110, K=100, r=0.07, T=1, σ=0.32 swept over spot
//! 0.01..400 with 1000 points.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::types::MarketParameters;
use crate::render::OutputFormat;
use crate::sweep::SweepConfig;

/// Where and how sweep charts are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub format: OutputFormat,

    /// Chart width in pixels (SVG only)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Chart height in pixels (SVG only)
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            format: OutputFormat::default(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Main configuration struct for the demo run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub market: MarketParameters,

    #[serde(default)]
    pub sweep: SweepConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl DemoConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(s).context("invalid demo configuration")?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), "loaded demo configuration");
        Ok(config)
    }

    /// Market parameters must be priceable and the sweep grid well formed.
    pub fn validate(&self) -> Result<()> {
        self.market.validate().context("DemoConfig validation: [market]")?;
        self.sweep.validate().context("DemoConfig validation: [sweep]")?;
        if self.output.width == 0 || self.output.height == 0 {
            anyhow::bail!(
                "DemoConfig validation: output size {}x{} must be non-zero",
                self.output.width,
                self.output.height
            );
        }
        Ok(())
    }

    /// The demo parameter set with a coarse 100-point sweep
    pub fn coarse() -> Self {
        Self {
            sweep: SweepConfig {
                points: 100,
                ..SweepConfig::default()
            },
            ..Self::default()
        }
    }

    /// The demo parameter set with a fine 5000-point sweep
    pub fn fine() -> Self {
        Self {
            sweep: SweepConfig {
                points: 5000,
                ..SweepConfig::default()
            },
            ..Self::default()
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    768
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_demo_defaults() {
        let cfg = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, DemoConfig::default());
        assert_eq!(cfg.market, MarketParameters::new(110.0, 100.0, 0.07, 1.0, 0.32));
        assert_eq!(cfg.output.format, OutputFormat::Svg);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let cfg = DemoConfig::from_toml_str(
            r#"
            [market]
            spot = 95.0
            strike = 100.0
            rate = 0.01
            time_to_expiry = 0.5
            volatility = 0.2

            [sweep]
            points = 50

            [output]
            format = "csv"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.market.spot, 95.0);
        assert_eq!(cfg.sweep.points, 50);
        assert_eq!(cfg.sweep.spot_max, 400.0);
        assert_eq!(cfg.output.format, OutputFormat::Csv);
        assert_eq!(cfg.output.width, 1280);
    }

    #[test]
    fn test_validate_reports_bad_market() {
        let cfg = DemoConfig::from_toml_str(
            r#"
            [market]
            spot = 0.0
            strike = 100.0
            "#,
        )
        .unwrap();
        let err = cfg.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("spot"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(DemoConfig::from_toml_str("[output]\nformat = \"png\"\n").is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(DemoConfig::coarse().sweep.points, 100);
        assert_eq!(DemoConfig::fine().sweep.points, 5000);
        assert_eq!(DemoConfig::fine().market, MarketParameters::default());
    }
}

//! Output backends for spot sweeps.
//!
//! A renderer turns a [`SpotSweep`] into a file. `SvgRenderer` draws the
//! price-vs-spot curve with plotters; `CsvRenderer` writes the raw table.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::sweep::SpotSweep;

/// Consumer of a computed sweep.
pub trait SweepRenderer {
    /// File extension written by this renderer, without the dot
    fn extension(&self) -> &str;

    fn render(&self, sweep: &SpotSweep, path: &Path) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Csv,
    /// Print prices only, write nothing
    None,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "csv" => Ok(OutputFormat::Csv),
            "none" => Ok(OutputFormat::None),
            _ => Err(anyhow!("Unknown output format: {}", s)),
        }
    }
}

/// Line chart of price against spot, written as SVG.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 768,
        }
    }
}

/// Capitalised caption for a sweep label, e.g. "Call price vs spot".
fn caption(label: &str) -> String {
    let mut chars = label.chars();
    let head = match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
        None => String::from("Option"),
    };
    format!("{} price vs spot", head)
}

impl SweepRenderer for SvgRenderer {
    fn extension(&self) -> &str {
        "svg"
    }

    fn render(&self, sweep: &SpotSweep, path: &Path) -> Result<()> {
        let (min_price, max_price) = sweep
            .price_range()
            .ok_or_else(|| anyhow!("sweep '{}' has no finite prices to plot", sweep.label))?;
        let (Some(&x_min), Some(&x_max)) = (sweep.spots.first(), sweep.spots.last()) else {
            return Err(anyhow!("sweep '{}' is empty", sweep.label));
        };

        // 5% padding, and a unit band when the curve is flat
        let span = max_price - min_price;
        let padding = if span > 0.0 { span * 0.05 } else { 0.5 };
        let y_min = (min_price - padding).min(0.0);
        let y_max = max_price + padding;

        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(caption(&sweep.label), ("sans-serif", 30))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| anyhow!("{:?}", e))?;

        chart
            .configure_mesh()
            .x_desc("Spot")
            .y_desc("Option price")
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;

        let curve: Vec<(f64, f64)> = sweep.points().filter(|(_, p)| p.is_finite()).collect();
        chart
            .draw_series(vec![PathElement::new(curve, BLUE.stroke_width(2))])
            .map_err(|e| anyhow!("{:?}", e))?;

        root.present()
            .map_err(|e| anyhow!("{:?}", e))
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!(path = %path.display(), points = sweep.len(), "wrote sweep chart");
        Ok(())
    }
}

/// Two-column `spot,price` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl SweepRenderer for CsvRenderer {
    fn extension(&self) -> &str {
        "csv"
    }

    fn render(&self, sweep: &SpotSweep, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        writer.write_record(["spot", "price"])?;
        for (spot, price) in sweep.points() {
            writer.serialize((spot, price))?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = sweep.len(), "wrote sweep table");
        Ok(())
    }
}

/// Renderer for a format, or None when nothing should be written.
pub fn renderer_for(
    format: OutputFormat,
    width: u32,
    height: u32,
) -> Option<Box<dyn SweepRenderer>> {
    match format {
        OutputFormat::Svg => Some(Box::new(SvgRenderer { width, height })),
        OutputFormat::Csv => Some(Box::new(CsvRenderer)),
        OutputFormat::None => None,
    }
}

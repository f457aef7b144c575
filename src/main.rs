use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use vanilla_lib::{price_option, renderer_for, sweep_prices, DemoConfig, OptionType, OutputFormat};

/// Price the illustrative European call and put, then chart both against spot.
#[derive(Parser)]
#[command(name = "vanilla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file; built-in demo settings when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the rendered sweeps (overrides the config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format: svg, csv or none (overrides the config)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Number of spot grid points (overrides the config)
    #[arg(short, long)]
    points: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };
    if let Some(dir) = &cli.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(points) = cli.points {
        config.sweep.points = points;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let market = config.market;

    println!("Call price: {:.4}", price_option(OptionType::Call, &market)?);
    println!("Put price: {:.4}", price_option(OptionType::Put, &market)?);

    let output = &config.output;
    let Some(renderer) = renderer_for(output.format, output.width, output.height) else {
        return Ok(());
    };

    std::fs::create_dir_all(&output.dir)
        .with_context(|| format!("failed to create output dir {}", output.dir.display()))?;

    for option_type in OptionType::ALL {
        let sweep = sweep_prices(&option_type, &market, &config.sweep)?;
        let path = output.dir.join(format!("{}_price.{}", option_type, renderer.extension()));
        renderer.render(&sweep, &path)?;
    }

    info!(dir = %output.dir.display(), "sweeps rendered");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lison_engine::coords::{Scaler, Viewport};
use lison_engine::device::PixmapSurface;
use lison_engine::logging::{init_logging, LoggingConfig};
use lison_engine::scene::CallList;
use lison_engine::{render, RenderConfig};
use lison_format::Image;

/// Converts a LISON image to PNG.
#[derive(Debug, Parser)]
#[command(name = "lison-to-png", version, about, long_about = None)]
struct Args {
    /// LISON file to convert
    input: PathBuf,

    /// Output file name [default: <input>.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Resolution in pixels per inch
    #[arg(short, long, default_value_t = RenderConfig::DEFAULT_RESOLUTION)]
    resolution: f64,

    /// Scale ratio
    #[arg(short, long, default_value_t = 1.0)]
    scale: f64,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Log every drawing call at debug level
    #[arg(long)]
    trace: bool,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let mut name = self.input.clone().into_os_string();
            name.push(".png");
            name.into()
        })
    }

    fn render_config(&self) -> Result<RenderConfig> {
        let config = RenderConfig::new(self.resolution, self.scale);
        anyhow::ensure!(
            config.is_valid(),
            "resolution and scale must be positive (got {} and {})",
            self.resolution,
            self.scale
        );
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    let config = args.render_config()?;
    let output = args.output_path();

    let source = fs::read(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;
    let image = lison_format::decode_slice(&source)
        .with_context(|| format!("failed to parse '{}'", args.input.display()))?;

    if args.trace {
        trace_calls(&image, config);
    }

    let surface = rasterize(&image, config)?;
    surface.save_png(&output)?;

    log::info!(
        "wrote {} ({}x{})",
        output.display(),
        surface.width(),
        surface.height()
    );
    Ok(())
}

/// Renders `image` into a new pixmap sized to its scaled extent.
fn rasterize(image: &Image, config: RenderConfig) -> Result<PixmapSurface> {
    let viewport = Viewport::for_image(image, &Scaler::for_image(image, &config));
    let (width, height) = viewport
        .pixel_size()
        .with_context(|| format!("bad image dimension ({} x {} px)", viewport.width, viewport.height))?;

    let mut surface = PixmapSurface::new(width, height)?;
    render(&mut surface, image, config);
    Ok(surface)
}

fn trace_calls(image: &Image, config: RenderConfig) {
    let mut calls = CallList::new();
    render(&mut calls, image, config);
    for (i, call) in calls.calls().iter().enumerate() {
        log::debug!("[{i:>5}] {call:?}");
    }
}

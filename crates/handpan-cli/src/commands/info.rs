use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use handpan_core::frame::Shape;
use handpan_core::io::image_io::load_image;
use handpan_core::ViewportController;

use crate::settings::Settings;

#[derive(Args)]
pub struct InfoArgs {
    /// Source image file
    pub file: PathBuf,

    /// Viewport output size as HEIGHTxWIDTH (e.g. 540x960)
    #[arg(long)]
    pub output_size: Option<Shape>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let settings = Settings::resolve(args.config.as_deref(), args.output_size)?;
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:          {}", args.file.display());
    println!("Dimensions:    {}", frame.shape());
    println!("Channels:      {}", frame.channels());

    let controller = ViewportController::new(frame, settings.viewport.clone())?;
    println!("Output:        {}", controller.output_shape());
    println!("Aspect ratio:  {:.4}", controller.aspect_ratio());
    println!("Initial ROI:   {}", controller.roi());
    println!("Min height:    {}", settings.viewport.min_height);

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use handpan_core::frame::Shape;
use handpan_core::io::image_io::{load_image, save_image};
use handpan_core::ViewportController;
use tracing::warn;

use crate::settings::Settings;

#[derive(Args)]
pub struct KeysArgs {
    /// Source image file
    pub file: PathBuf,

    /// Key presses to apply in order (default layout: e/r zoom, w/a/s/d pan)
    #[arg(short, long)]
    pub keys: String,

    /// TOML config file (viewport settings and key bindings)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Viewport output size as HEIGHTxWIDTH
    #[arg(long)]
    pub output_size: Option<Shape>,

    /// Output file for the final viewport
    #[arg(short, long, default_value = "viewport.png")]
    pub output: PathBuf,

    /// Also write the overview (source with ROI outline) to this file
    #[arg(long)]
    pub overview_output: Option<PathBuf>,

    /// Overview size as HEIGHTxWIDTH
    #[arg(long, default_value = "324x576")]
    pub overview_size: Shape,
}

pub fn run(args: &KeysArgs) -> Result<()> {
    let settings = Settings::resolve(args.config.as_deref(), args.output_size)?;
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let mut controller = ViewportController::new(frame, settings.viewport)?;

    let (commands, unknown) = settings.keys.parse_keys(&args.keys);
    for key in &unknown {
        warn!(key = %key, "No binding for key, skipped");
    }
    if !unknown.is_empty() {
        println!("Skipped unbound keys: {}", unknown.iter().collect::<String>());
    }

    for command in commands {
        controller.execute(command)?;
    }
    println!("Final ROI: {}", controller.roi());

    save_image(controller.viewport(), &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Viewport saved to {}", args.output.display());

    if let Some(ref path) = args.overview_output {
        let overview = controller.render_overview(args.overview_size)?;
        save_image(&overview, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Overview saved to {}", path.display());
    }

    Ok(())
}

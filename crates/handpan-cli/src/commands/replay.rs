use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use handpan_core::frame::Shape;
use handpan_core::gesture::GestureLabel;
use handpan_core::io::image_io::{load_image, save_image};
use handpan_core::ViewportController;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::settings::Settings;
use crate::summary::{print_replay_summary, ReplaySummary};
use crate::trace::GestureTrace;

#[derive(Args)]
pub struct ReplayArgs {
    /// Source image file
    pub file: PathBuf,

    /// Gesture trace (TOML with [[observations]] entries)
    #[arg(short, long)]
    pub trace: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Viewport output size as HEIGHTxWIDTH
    #[arg(long)]
    pub output_size: Option<Shape>,

    /// Directory for rendered frames
    #[arg(short, long, default_value = "frames")]
    pub output_dir: PathBuf,

    /// Write every Nth viewport frame (the last frame is always written)
    #[arg(long, default_value = "1")]
    pub every: usize,

    /// Also write overview frames at this size (HEIGHTxWIDTH)
    #[arg(long)]
    pub overview: Option<Shape>,

    /// Output image extension (png or tiff)
    #[arg(long, default_value = "png")]
    pub format: String,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let settings = Settings::resolve(args.config.as_deref(), args.output_size)?;
    let trace = GestureTrace::load(&args.trace)?;
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let source_shape = frame.shape();
    let mut controller = ViewportController::new(frame, settings.viewport)?;

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    let total = trace.observations.len();
    let every = args.every.max(1);
    let mut summary = ReplaySummary {
        source: args.file.clone(),
        source_shape,
        output_shape: controller.output_shape(),
        output_dir: args.output_dir.clone(),
        observations: total,
        moves: 0,
        zooms: 0,
        idle: 0,
        rejected: 0,
        frames_written: 0,
        final_roi: controller.roi(),
    };

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Replaying [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    for (index, observation) in trace.observations.iter().enumerate() {
        match observation.effective_gesture().label() {
            GestureLabel::Move => summary.moves += 1,
            GestureLabel::Zoom => summary.zooms += 1,
            GestureLabel::None => summary.idle += 1,
        }
        if let Err(err) = controller.observe(observation) {
            // A misbehaving classifier result is dropped; the session continues.
            warn!(index, error = %err, "Observation rejected");
            summary.rejected += 1;
        }

        if index % every == 0 || index + 1 == total {
            write_frames(&controller, args, index)?;
            summary.frames_written += 1;
        }
        pb.set_position(index as u64 + 1);
    }
    pb.finish();

    summary.final_roi = controller.roi();
    print_replay_summary(&summary);
    Ok(())
}

fn write_frames(controller: &ViewportController, args: &ReplayArgs, index: usize) -> Result<()> {
    let path = frame_path(&args.output_dir, "frame", index, &args.format);
    save_image(controller.viewport(), &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if let Some(shape) = args.overview {
        let overview = controller.render_overview(shape)?;
        let path = frame_path(&args.output_dir, "overview", index, &args.format);
        save_image(&overview, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

fn frame_path(dir: &Path, prefix: &str, index: usize, ext: &str) -> PathBuf {
    dir.join(format!("{prefix}_{index:05}.{ext}"))
}

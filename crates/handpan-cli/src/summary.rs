use std::path::PathBuf;

use console::Style;
use handpan_core::frame::Shape;
use handpan_core::gesture::GestureLabel;
use handpan_core::roi::Roi;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warning: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Outcome of a trace replay.
pub struct ReplaySummary {
    pub source: PathBuf,
    pub source_shape: Shape,
    pub output_shape: Shape,
    pub output_dir: PathBuf,
    pub observations: usize,
    pub moves: usize,
    pub zooms: usize,
    pub idle: usize,
    pub rejected: usize,
    pub frames_written: usize,
    pub final_roi: Roi,
}

pub fn print_replay_summary(summary: &ReplaySummary) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Replay Summary"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!(
        "  {:<14}{} ({})",
        s.label.apply_to("Source"),
        s.path.apply_to(summary.source.display()),
        s.value.apply_to(summary.source_shape)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.value.apply_to(summary.output_shape)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Observations"),
        s.value.apply_to(summary.observations)
    );
    println!(
        "  {:<14}{} {}, {} {}, {} {}",
        s.label.apply_to("Gestures"),
        s.value.apply_to(summary.moves),
        GestureLabel::Move,
        s.value.apply_to(summary.zooms),
        GestureLabel::Zoom,
        s.value.apply_to(summary.idle),
        GestureLabel::None
    );
    if summary.rejected > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Rejected"),
            s.warning.apply_to(summary.rejected)
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Final ROI"),
        s.value.apply_to(summary.final_roi)
    );
    println!(
        "  {:<14}{} in {}",
        s.label.apply_to("Frames"),
        s.value.apply_to(summary.frames_written),
        s.path.apply_to(summary.output_dir.display())
    );
    println!();
}

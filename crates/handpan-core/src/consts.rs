/// Minimum pixel count (h*w) of an output buffer to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Smallest ROI height (pixels) reachable by zooming in.
pub const DEFAULT_MIN_HEIGHT: usize = 50;

/// Default viewport output height.
pub const DEFAULT_OUTPUT_HEIGHT: usize = 480;

/// Default viewport output width.
pub const DEFAULT_OUTPUT_WIDTH: usize = 640;

/// Default thickness (pixels, in source coordinates) of the ROI outline on the overview.
pub const DEFAULT_OVERLAY_THICKNESS: usize = 10;

/// Default ROI outline colour (RGB, red).
pub const DEFAULT_OVERLAY_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Pixel step of the default manual move bindings.
pub const DEFAULT_STEP_SIZE: i64 = 15;

/// Factor of the default manual zoom-in binding.
pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 0.95;

/// Factor of the default manual zoom-out binding.
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 1.05;

/// Number of channels in an RGB frame.
pub const COLOR_CHANNEL_COUNT: usize = 3;

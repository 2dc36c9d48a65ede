pub const DEFAULT_DOCUMENT_PATH: &str = "test.pdf";
pub const DEFAULT_RENDER_SCALE: f32 = 1.5;

pub const MIN_RENDER_SCALE: f32 = 0.1;
pub const MAX_RENDER_SCALE: f32 = 8.0;

/// Hard cap on either side of a rasterized page, in pixels.
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

pub const FIRST_PAGE: usize = 1;

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
pub const LOADING_LABEL: &str = "Loading...";

pub const CONTROLS_SPACING: f32 = 16.0;
pub const PAGE_INDICATOR_MIN_WIDTH: f32 = 100.0;

pub const PENDING_REPAINT_MS: u64 = 16;

pub const WINDOW_TITLE: &str = "PDF Display";

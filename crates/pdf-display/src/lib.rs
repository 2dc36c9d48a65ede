pub mod app;
pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod ui;
pub mod viewer;
pub mod widget;

pub use config::DisplayConfig;
pub use error::{PdfError, Result};
pub use viewer::display::PdfDisplay;
pub use viewer::surface::{DrawingSurface, RasterSurface};
pub use widget::PdfDisplayWidget;

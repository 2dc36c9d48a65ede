//! Seam between the viewer and the library that parses and rasterizes PDFs.
//!
//! The render worker owns the backend and every document opened through it,
//! so none of these traits need to be `Send`.

pub mod pdfium;

use crate::constants::MAX_SURFACE_DIMENSION;
use crate::error::Result;
use image::RgbaImage;
use std::path::Path;

pub use pdfium::PdfiumBackend;

/// Natural page size in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pixel rectangle a page is rasterized into at a given scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRegion {
    pub scale: f32,
    pub width: u32,
    pub height: u32,
}

impl ViewRegion {
    pub fn for_page(size: PageSize, scale: f32) -> Self {
        Self {
            scale,
            width: scaled_dimension(size.width, scale),
            height: scaled_dimension(size.height, scale),
        }
    }
}

fn scaled_dimension(points: f32, scale: f32) -> u32 {
    let pixels = (points * scale).floor();
    if !pixels.is_finite() || pixels < 1.0 {
        return 1;
    }
    (pixels as u32).min(MAX_SURFACE_DIMENSION)
}

pub trait PdfBackend {
    fn open_document(&self, path: &Path) -> Result<Box<dyn PdfDocument + '_>>;
}

pub trait PdfDocument {
    fn page_count(&self) -> usize;

    /// Fetches a page by its 1-based number.
    fn page(&self, number: usize) -> Result<Box<dyn PdfPage + '_>>;
}

pub trait PdfPage {
    fn size(&self) -> PageSize;

    fn view_region(&self, scale: f32) -> ViewRegion {
        ViewRegion::for_page(self.size(), scale)
    }

    /// Rasterizes the page into an image exactly `region.width` x `region.height`.
    fn render(&self, region: &ViewRegion) -> Result<RgbaImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_region_scales_letter_page() {
        let region = ViewRegion::for_page(PageSize::new(612.0, 792.0), 1.5);
        assert_eq!(region.width, 918);
        assert_eq!(region.height, 1188);
        assert_eq!(region.scale, 1.5);
    }

    #[test]
    fn test_view_region_truncates_fractional_pixels() {
        let region = ViewRegion::for_page(PageSize::new(100.5, 50.3), 1.0);
        assert_eq!(region.width, 100);
        assert_eq!(region.height, 50);
    }

    #[test]
    fn test_view_region_never_empty() {
        let region = ViewRegion::for_page(PageSize::new(0.0, f32::NAN), 1.5);
        assert_eq!(region.width, 1);
        assert_eq!(region.height, 1);
    }

    #[test]
    fn test_view_region_capped() {
        let region = ViewRegion::for_page(PageSize::new(100_000.0, 10.0), 1.5);
        assert_eq!(region.width, MAX_SURFACE_DIMENSION);
        assert_eq!(region.height, 15);
    }
}

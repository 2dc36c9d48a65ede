use crossbeam::channel::Receiver;
use image::{Rgba, RgbaImage};
use pdf_display::backend::{PageSize, PdfBackend, PdfDocument, PdfPage, ViewRegion};
use pdf_display::{DrawingSurface, PdfError, Result};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const LETTER: PageSize = PageSize {
    width: 612.0,
    height: 792.0,
};

/// Scripted stand-in for PDFium. Each rendered page is filled with a red
/// channel equal to its page number.
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub pages: Vec<PageSize>,
    pub open_error: Option<PdfError>,
    pub failing_pages: Vec<usize>,
    /// When set, every render waits for one message before it proceeds.
    pub gate: Option<Receiver<()>>,
    pub rendered: Arc<Mutex<Vec<usize>>>,
    pub opened: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub fn with_pages(pages: Vec<PageSize>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }
}

impl PdfBackend for FakeBackend {
    fn open_document(&self, _path: &Path) -> Result<Box<dyn PdfDocument + '_>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.open_error {
            return Err(error.clone());
        }
        Ok(Box::new(FakeDocument { backend: self }))
    }
}

struct FakeDocument<'a> {
    backend: &'a FakeBackend,
}

impl PdfDocument for FakeDocument<'_> {
    fn page_count(&self) -> usize {
        self.backend.pages.len()
    }

    fn page(&self, number: usize) -> Result<Box<dyn PdfPage + '_>> {
        let size = number
            .checked_sub(1)
            .and_then(|index| self.backend.pages.get(index))
            .copied()
            .ok_or(PdfError::PageOutOfRange {
                page: number,
                page_count: self.backend.pages.len(),
            })?;

        Ok(Box::new(FakePage {
            backend: self.backend,
            number,
            size,
        }))
    }
}

struct FakePage<'a> {
    backend: &'a FakeBackend,
    number: usize,
    size: PageSize,
}

impl PdfPage for FakePage<'_> {
    fn size(&self) -> PageSize {
        self.size
    }

    fn render(&self, region: &ViewRegion) -> Result<RgbaImage> {
        if let Some(gate) = &self.backend.gate {
            let _ = gate.recv();
        }

        self.backend
            .rendered
            .lock()
            .expect("render log poisoned")
            .push(self.number);

        if self.backend.failing_pages.contains(&self.number) {
            return Err(PdfError::RenderFailed(format!(
                "page {} is corrupt",
                self.number
            )));
        }

        Ok(RgbaImage::from_pixel(
            region.width,
            region.height,
            Rgba([self.number as u8, 0, 0, 255]),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Resize(u32, u32),
    Clear,
    Draw { page: u8, width: u32, height: u32 },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn draws(&self) -> Vec<SurfaceOp> {
        self.ops
            .iter()
            .copied()
            .filter(|op| matches!(op, SurfaceOp::Draw { .. }))
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(SurfaceOp::Resize(width, height));
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn draw(&mut self, image: &RgbaImage) {
        let page = image.get_pixel(0, 0).0[0];
        self.ops.push(SurfaceOp::Draw {
            page,
            width: image.width(),
            height: image.height(),
        });
    }
}

use super::{PageSize, PdfBackend, PdfDocument, PdfPage, ViewRegion};
use crate::error::{PdfError, Result};
use image::RgbaImage;
use pdfium_render::prelude::{PdfBitmap, PdfBitmapFormat, Pdfium};
use std::path::{Path, PathBuf};

/// PDFium bindings, bound once before the first document is opened.
pub struct PdfiumBackend {
    pdfium: Pdfium,
}

impl std::fmt::Debug for PdfiumBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfiumBackend").finish_non_exhaustive()
    }
}

impl PdfiumBackend {
    /// Binds to the platform PDFium library. Looks in `library_dir` first,
    /// then next to the executable, then on the system library path.
    pub fn bind(library_dir: Option<&Path>) -> Result<Self> {
        let mut candidates = Vec::new();
        if let Some(dir) = library_dir {
            candidates.push(dir.join(Pdfium::pdfium_platform_library_name()));
        }
        if let Some(path) = library_next_to_executable() {
            candidates.push(path);
        }

        for path in candidates.iter().filter(|p| p.exists()) {
            match Pdfium::bind_to_library(path) {
                Ok(bindings) => {
                    log::info!("Bound PDFium from {}", path.display());
                    return Ok(Self {
                        pdfium: Pdfium::new(bindings),
                    });
                }
                Err(e) => log::warn!("Failed to bind PDFium at {}: {}", path.display(), e),
            }
        }

        let bindings = Pdfium::bind_to_system_library().map_err(|e| {
            let searched: Vec<String> = candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            PdfError::LibraryNotFound(format!(
                "searched [{}] and the system library path: {}",
                searched.join(", "),
                e
            ))
        })?;
        log::info!("Bound PDFium from the system library path");

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

fn library_next_to_executable() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;
    Some(exe_dir.join(Pdfium::pdfium_platform_library_name()))
}

impl PdfBackend for PdfiumBackend {
    fn open_document(&self, path: &Path) -> Result<Box<dyn PdfDocument + '_>> {
        if !path.exists() {
            return Err(PdfError::FileNotFound(path.to_path_buf()));
        }

        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| PdfError::InvalidPdf(format!("Failed to load PDF: {}", e)))?;
        let page_count = document.pages().len() as usize;

        Ok(Box::new(PdfiumDocument {
            pdfium: &self.pdfium,
            document,
            page_count,
        }))
    }
}

struct PdfiumDocument<'a> {
    pdfium: &'a Pdfium,
    document: pdfium_render::prelude::PdfDocument<'a>,
    page_count: usize,
}

impl PdfDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page(&self, number: usize) -> Result<Box<dyn PdfPage + '_>> {
        if number == 0 || number > self.page_count {
            return Err(PdfError::PageOutOfRange {
                page: number,
                page_count: self.page_count,
            });
        }

        let index = u16::try_from(number - 1).map_err(|_| PdfError::PageOutOfRange {
            page: number,
            page_count: self.page_count,
        })?;

        let page = self
            .document
            .pages()
            .get(index)
            .map_err(|e| PdfError::RenderFailed(format!("Failed to get page {}: {}", number, e)))?;

        let size = PageSize::new(page.width().value, page.height().value);

        Ok(Box::new(PdfiumPage {
            pdfium: self.pdfium,
            page,
            size,
        }))
    }
}

struct PdfiumPage<'a> {
    pdfium: &'a Pdfium,
    page: pdfium_render::prelude::PdfPage<'a>,
    size: PageSize,
}

impl PdfPage for PdfiumPage<'_> {
    fn size(&self) -> PageSize {
        self.size
    }

    fn render(&self, region: &ViewRegion) -> Result<RgbaImage> {
        let width = region.width as i32;
        let height = region.height as i32;

        let mut bitmap = PdfBitmap::empty(
            width,
            height,
            PdfBitmapFormat::BGRx,
            self.pdfium.bindings(),
        )
        .map_err(|e| PdfError::RenderFailed(format!("Failed to create bitmap: {:?}", e)))?;

        self.page
            .render_into_bitmap(&mut bitmap, width, height, None)
            .map_err(|e| PdfError::RenderFailed(format!("Failed to render bitmap: {:?}", e)))?;

        bgrx_to_rgba(&bitmap.as_raw_bytes(), region.width, region.height)
    }
}

fn bgrx_to_rgba(pixels: &[u8], width: u32, height: u32) -> Result<RgbaImage> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() < expected {
        return Err(PdfError::RenderFailed(format!(
            "Bitmap holds {} bytes, expected {} for {}x{}",
            pixels.len(),
            expected,
            width,
            height
        )));
    }

    let mut image = RgbaImage::new(width, height);
    for (target, chunk) in image.pixels_mut().zip(pixels.chunks_exact(4)) {
        *target = image::Rgba([chunk[2], chunk[1], chunk[0], 255]);
    }

    Ok(image)
}

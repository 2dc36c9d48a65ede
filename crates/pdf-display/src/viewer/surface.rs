use image::{Rgba, RgbaImage};

/// Raster target the renderer draws finished pages into.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Resizing discards whatever was drawn before.
    fn resize(&mut self, width: u32, height: u32);

    fn clear(&mut self);

    /// Copies `image` onto the surface with its top-left corner at the origin.
    fn draw(&mut self, image: &RgbaImage);
}

/// In-memory surface the egui view uploads as a texture.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: RgbaImage,
    revision: u64,
}

impl RasterSurface {
    pub fn new() -> Self {
        Self {
            pixels: RgbaImage::new(0, 0),
            revision: 0,
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Bumped on every mutation so the view knows when to re-upload.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.width() == 0 || self.pixels.height() == 0
    }
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for RasterSurface {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
        self.revision += 1;
    }

    fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
        self.revision += 1;
    }

    fn draw(&mut self, image: &RgbaImage) {
        image::imageops::replace(&mut self.pixels, image, 0, 0);
        self.revision += 1;
    }
}

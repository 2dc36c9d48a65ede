use crate::viewer::surface::RasterSurface;

/// GPU copy of the raster surface, refreshed when the surface revision moves.
#[derive(Default)]
pub struct SurfaceTexture {
    handle: Option<egui::TextureHandle>,
    revision: Option<u64>,
}

impl SurfaceTexture {
    fn sync(&mut self, ctx: &egui::Context, surface: &RasterSurface) -> Option<&egui::TextureHandle> {
        if surface.is_empty() {
            self.handle = None;
            self.revision = None;
            return None;
        }

        if self.revision != Some(surface.revision()) {
            let pixels = surface.pixels();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [pixels.width() as usize, pixels.height() as usize],
                pixels.as_raw(),
            );

            if let Some(handle) = self.handle.as_mut() {
                handle.set(color_image, egui::TextureOptions::default());
            } else {
                self.handle = Some(ctx.load_texture(
                    "pdf_display_surface",
                    color_image,
                    egui::TextureOptions::default(),
                ));
            }
            self.revision = Some(surface.revision());
        }

        self.handle.as_ref()
    }
}

pub fn show_canvas(ui: &mut egui::Ui, surface: Option<&RasterSurface>, texture: &mut SurfaceTexture) {
    let Some(surface) = surface else {
        return;
    };

    let Some(handle) = texture.sync(ui.ctx(), surface) else {
        return;
    };

    let size = egui::vec2(surface.pixels().width() as f32, surface.pixels().height() as f32);

    egui::ScrollArea::both().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(egui::Image::new(handle).fit_to_exact_size(size));
        });
    });
}

use crate::config::DisplayConfig;
use crate::constants::PENDING_REPAINT_MS;
use crate::ui::canvas::{self, SurfaceTexture};
use crate::ui::controls;
use crate::viewer::display::PdfDisplay;
use crate::viewer::surface::RasterSurface;
use std::time::Duration;

pub struct PdfDisplayWidget {
    display: PdfDisplay<RasterSurface>,
    texture: SurfaceTexture,
}

impl PdfDisplayWidget {
    pub fn new(config: DisplayConfig) -> Self {
        let mut display = PdfDisplay::open(config);
        display.attach_surface(RasterSurface::new());

        Self {
            display,
            texture: SurfaceTexture::default(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.display.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                controls::show_controls(ui, &mut self.display);
            });
            controls::show_status(ui, &self.display);
            ui.separator();

            canvas::show_canvas(ui, self.display.surface(), &mut self.texture);
        });

        if self.display.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(PENDING_REPAINT_MS));
        }
    }
}

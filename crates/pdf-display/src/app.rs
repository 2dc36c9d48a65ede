use crate::config::DisplayConfig;
use crate::widget::PdfDisplayWidget;
use eframe::egui;

pub struct PdfDisplayApp {
    widget: PdfDisplayWidget,
}

impl PdfDisplayApp {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            widget: PdfDisplayWidget::new(config),
        }
    }
}

impl eframe::App for PdfDisplayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.widget.show(ctx);
    }
}

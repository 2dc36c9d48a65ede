use crate::constants::*;
use crate::viewer::display::PdfDisplay;
use crate::viewer::surface::DrawingSurface;

pub fn show_controls<S: DrawingSurface>(ui: &mut egui::Ui, display: &mut PdfDisplay<S>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = CONTROLS_SPACING;

        if ui
            .add_enabled(
                !display.previous_disabled(),
                egui::Button::new(PREVIOUS_LABEL),
            )
            .clicked()
        {
            display.go_to_previous_page();
        }

        let indicator_size = egui::vec2(PAGE_INDICATOR_MIN_WIDTH, ui.spacing().interact_size.y);
        ui.add_sized(indicator_size, egui::Label::new(display.page_indicator()));

        if ui
            .add_enabled(!display.next_disabled(), egui::Button::new(NEXT_LABEL))
            .clicked()
        {
            display.go_to_next_page();
        }
    });
}

pub fn show_status<S: DrawingSurface>(ui: &mut egui::Ui, display: &PdfDisplay<S>) {
    if display.is_rendering() {
        ui.vertical_centered(|ui| {
            ui.label(LOADING_LABEL);
        });
    }

    if let Some(error) = display.last_error() {
        let color = ui.visuals().error_fg_color;
        ui.vertical_centered(|ui| {
            ui.colored_label(color, error.to_string());
        });
    }
}

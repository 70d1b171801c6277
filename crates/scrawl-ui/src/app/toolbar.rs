//! The styling and history toolbar.

use eframe::egui;
use egui::RichText;

use scrawl_config::toolbar_palette;

use super::{color32, App};

/// Side length of a color swatch button.
const SWATCH_SIZE: f32 = 18.0;

impl App {
    /// Shows the toolbar row: style toggles, color swatches, size steppers,
    /// undo/redo.
    pub(crate) fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui
                .selectable_label(self.style.bold, RichText::new("B").strong())
                .on_hover_text("Bold (Ctrl+B)")
                .clicked()
            {
                self.style.toggle_bold();
            }
            if ui
                .selectable_label(self.style.italic, RichText::new("I").italics())
                .on_hover_text("Italic (Ctrl+I)")
                .clicked()
            {
                self.style.toggle_italic();
            }

            ui.separator();

            for swatch in toolbar_palette() {
                let selected = self.style.color == swatch.color;
                let button = egui::Button::new("")
                    .fill(color32(swatch.color))
                    .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE))
                    .stroke(if selected {
                        ui.visuals().widgets.active.fg_stroke
                    } else {
                        ui.visuals().widgets.inactive.bg_stroke
                    });
                if ui.add(button).on_hover_text(swatch.name).clicked() {
                    self.style.set_color(swatch.color);
                }
            }

            ui.separator();

            if ui
                .button("A+")
                .on_hover_text("Increase font size")
                .clicked()
            {
                self.style.increase_size();
            }
            if ui
                .button("A-")
                .on_hover_text("Decrease font size")
                .clicked()
            {
                self.style.decrease_size();
            }
            ui.label(format!("{:.0} pt", self.style.font_size()));

            ui.separator();

            // Enabling is a UI affordance only; the handlers are safe to run
            // with exhausted history.
            if ui
                .add_enabled(self.note.can_undo(), egui::Button::new("Undo"))
                .on_hover_text("Undo (Ctrl+Z)")
                .clicked()
            {
                self.note.undo();
            }
            if ui
                .add_enabled(self.note.can_redo(), egui::Button::new("Redo"))
                .on_hover_text("Redo (Ctrl+Y)")
                .clicked()
            {
                self.note.redo();
            }

            ui.separator();

            if ui
                .button("Clear")
                .on_hover_text("Empty the note and its history")
                .clicked()
            {
                self.note.clear();
            }
        });
    }
}

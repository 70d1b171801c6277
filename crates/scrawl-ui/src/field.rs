//! The draggable note field.
//!
//! A free-floating `Area` over the canvas holding one multiline text edit.
//! A small handle strip drags the field; the grab offset between handle and
//! pointer is kept so the field tracks the pointer without jumping.

use eframe::egui;
use egui::text::CCursor;
use egui::text_selection::CCursorRange;
use egui::{FontId, RichText, Sense};

use crate::app::{color32, App};

const FIELD_WIDTH: f32 = 360.0;
const FIELD_ROWS: usize = 8;

impl App {
    /// Shows the note field at its current placement.
    pub(crate) fn show_note_field(&mut self, ctx: &egui::Context) {
        // Canvas left over below the toolbar; placement is relative to it.
        let bounds = ctx.available_rect();

        let response = egui::Area::new(egui::Id::new("note-field"))
            .order(egui::Order::Middle)
            .current_pos(bounds.min + egui::vec2(self.placement.x, self.placement.y))
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    self.show_drag_handle(ui, bounds);
                    self.show_text_edit(ui);
                });
            });
        self.field_size = response.response.rect.size();
    }

    fn show_drag_handle(&mut self, ui: &mut egui::Ui, bounds: egui::Rect) {
        let handle = ui
            .add(egui::Label::new(RichText::new("⠿ drag").weak().small()).sense(Sense::drag()))
            .on_hover_cursor(egui::CursorIcon::Grab);

        if let Some(pointer) = handle.interact_pointer_pos() {
            let (px, py) = (pointer.x - bounds.min.x, pointer.y - bounds.min.y);
            if handle.drag_started() {
                self.placement.begin_drag(px, py);
            } else if handle.dragged() {
                self.placement.drag_to(
                    px,
                    py,
                    (bounds.width(), bounds.height()),
                    (self.field_size.x, self.field_size.y),
                );
            }
        }
        if handle.drag_stopped() {
            self.placement.end_drag();
        }
    }

    fn show_text_edit(&mut self, ui: &mut egui::Ui) {
        let font_id = FontId::new(
            self.style.font_size(),
            self.style_families
                .family_for(self.style.bold, self.style.italic),
        );

        // The note owns the text; the widget edits a per-frame copy and the
        // observed result is reported back, which is where history recording
        // happens.
        let mut buffer = self.note.text().to_owned();
        let output = egui::TextEdit::multiline(&mut buffer)
            .id_salt("note-text")
            .font(font_id)
            .text_color(color32(self.style.color))
            .desired_width(FIELD_WIDTH)
            .desired_rows(FIELD_ROWS)
            .hint_text("Type here…")
            .show(ui);

        let caret = output
            .state
            .cursor
            .char_range()
            .map(|range| range.primary.index)
            .unwrap_or_else(|| buffer.chars().count());
        self.note.sync_from_widget(&buffer, caret);

        // After undo/redo the caret moves to end-of-text; push that into the
        // widget's own editing state.
        if self.note.take_caret_sync() {
            let mut state = output.state;
            state
                .cursor
                .set_char_range(Some(CCursorRange::one(CCursor::new(self.note.caret()))));
            state.store(ui.ctx(), output.response.id);
            output.response.request_focus();
        }
    }
}

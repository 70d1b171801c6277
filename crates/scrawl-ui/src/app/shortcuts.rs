//! Global keyboard shortcut handling.
//!
//! Shortcuts are consumed from the input queue before the text edit widget
//! runs, so the field's built-in bindings never race the history manager.

use eframe::egui;
use egui::{Key, KeyboardShortcut, Modifiers};

use super::App;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const BOLD: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::B);
const ITALIC: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::I);

impl App {
    /// Handles global keyboard shortcuts.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        // Shift+Ctrl+Z first: consume_shortcut ignores extra modifiers on
        // the plain Ctrl+Z check otherwise.
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHIFT) || i.consume_shortcut(&REDO)) {
            self.note.redo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO)) {
            self.note.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&BOLD)) {
            self.style.toggle_bold();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&ITALIC)) {
            self.style.toggle_italic();
        }
    }
}

/// Integration tests for the scrawl App using egui_kittest.
///
/// These tests exercise the full `eframe::App::update` loop through AccessKit queries.
mod common;

use egui::{Key, Modifiers};
use egui_kittest::kittest::Queryable;
use scrawl_ui::StartupArgs;

use common::{create_harness, harness_with_args};

// ── A. App initialization ──────────────────────────────────────────────────

#[test]
fn test_app_initial_state() {
    let harness = create_harness();
    let app = harness.state();
    assert_eq!(app.note.text(), "");
    assert!(!app.note.can_undo());
    assert!(!app.note.can_redo());
    assert!(!app.style.bold);
    assert!(!app.style.italic);
}

#[test]
fn test_app_starts_with_initial_text() {
    let harness = harness_with_args(StartupArgs {
        initial_text: Some("prefilled".to_string()),
    });
    let app = harness.state();
    assert_eq!(app.note.text(), "prefilled");
    // The prefill is a recorded edit, so it can be undone back to empty.
    assert!(app.note.can_undo());
}

// ── B. Toolbar ─────────────────────────────────────────────────────────────

#[test]
fn test_toolbar_buttons_present() {
    let harness = create_harness();
    harness.get_by_label("B");
    harness.get_by_label("I");
    harness.get_by_label("A+");
    harness.get_by_label("A-");
    harness.get_by_label("Undo");
    harness.get_by_label("Redo");
    harness.get_by_label("Clear");
}

#[test]
fn test_bold_toggle_click() {
    let mut harness = create_harness();
    harness.get_by_label("B").click();
    harness.run();
    assert!(harness.state().style.bold);

    harness.get_by_label("B").click();
    harness.run();
    assert!(!harness.state().style.bold);
}

#[test]
fn test_italic_toggle_click() {
    let mut harness = create_harness();
    harness.get_by_label("I").click();
    harness.run();
    assert!(harness.state().style.italic);
}

#[test]
fn test_font_size_steppers() {
    let mut harness = create_harness();
    let start = harness.state().style.font_size();

    harness.get_by_label("A+").click();
    harness.run();
    assert_eq!(harness.state().style.font_size(), start + 2.0);

    harness.get_by_label("A-").click();
    harness.run();
    harness.get_by_label("A-").click();
    harness.run();
    assert_eq!(harness.state().style.font_size(), start - 2.0);
}

// ── C. Undo/redo through the UI ────────────────────────────────────────────

#[test]
fn test_undo_button_restores_previous_text() {
    let mut harness = create_harness();
    harness.state_mut().note.sync_from_widget("hello", 5);
    harness.run();

    harness.get_by_label("Undo").click();
    harness.run();
    assert_eq!(harness.state().note.text(), "");
    assert!(harness.state().note.can_redo());
}

#[test]
fn test_redo_button_after_undo() {
    let mut harness = create_harness();
    harness.state_mut().note.sync_from_widget("hello", 5);
    harness.run();

    harness.get_by_label("Undo").click();
    harness.run();
    harness.get_by_label("Redo").click();
    harness.run();
    assert_eq!(harness.state().note.text(), "hello");
    assert!(!harness.state().note.can_redo());
}

#[test]
fn test_undo_shortcut() {
    let mut harness = create_harness();
    harness.state_mut().note.sync_from_widget("abc", 3);
    harness.run();

    harness.key_press_modifiers(Modifiers::COMMAND, Key::Z);
    harness.run();
    assert_eq!(harness.state().note.text(), "");

    harness.key_press_modifiers(Modifiers::COMMAND, Key::Y);
    harness.run();
    assert_eq!(harness.state().note.text(), "abc");
}

#[test]
fn test_style_shortcuts() {
    let mut harness = create_harness();
    harness.key_press_modifiers(Modifiers::COMMAND, Key::B);
    harness.run();
    harness.key_press_modifiers(Modifiers::COMMAND, Key::I);
    harness.run();

    assert!(harness.state().style.bold);
    assert!(harness.state().style.italic);
}

#[test]
fn test_clear_button_discards_history() {
    let mut harness = create_harness();
    harness.state_mut().note.sync_from_widget("hello", 5);
    harness.run();

    harness.get_by_label("Clear").click();
    harness.run();
    let app = harness.state();
    assert_eq!(app.note.text(), "");
    assert!(!app.note.can_undo());
    assert!(!app.note.can_redo());
}

// ── D. Stability ───────────────────────────────────────────────────────────

#[test]
fn test_undo_click_on_empty_history_is_harmless() {
    let mut harness = create_harness();
    // The button is disabled, but the shortcut path is always live.
    harness.key_press_modifiers(Modifiers::COMMAND, Key::Z);
    harness.run();
    harness.key_press_modifiers(Modifiers::COMMAND, Key::Y);
    harness.run();
    assert_eq!(harness.state().note.text(), "");
}

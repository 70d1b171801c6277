//! The note field's model: text, caret, and history wiring.

use scrawl_mod_history::{HistoryConfig, HistoryManager};

/// The single editable note and its undo/redo history.
///
/// The UI widget owns rendering and input; it reports observed text changes
/// through [`sync_from_widget`](Self::sync_from_widget) and asks for
/// [`undo`](Self::undo)/[`redo`](Self::redo) from the toolbar. Restored
/// snapshots are applied while history recording is paused, so a restoration
/// is never misread as a fresh edit.
pub struct Note {
    text: String,
    /// Caret position as a char offset into `text`.
    caret: usize,
    history: HistoryManager,
    /// Set after a programmatic text replacement; the widget consumes it and
    /// pushes the caret into its own editing state.
    caret_sync_needed: bool,
}

impl std::fmt::Debug for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Note")
            .field("len", &self.text.chars().count())
            .field("caret", &self.caret)
            .field("history", &self.history)
            .finish()
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl Note {
    /// Creates an empty note.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            text: String::new(),
            caret: 0,
            history: HistoryManager::new(config),
            caret_sync_needed: false,
        }
    }

    /// Creates a note pre-filled with `text`.
    ///
    /// The prefill is recorded as the first edit, so a single undo returns
    /// to the empty initial state.
    pub fn with_text(text: &str) -> Self {
        let mut note = Self::default();
        if !text.is_empty() {
            note.text = text.to_owned();
            note.caret = note.text.chars().count();
            note.history.record_change(text);
            note.caret_sync_needed = true;
        }
        note
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether undo would change the field.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would change the field.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Adopts the text and caret the widget currently shows.
    ///
    /// Called every frame; only an actual content difference is recorded,
    /// so repeated notifications with identical text are free.
    pub fn sync_from_widget(&mut self, text: &str, caret: usize) {
        if text != self.text {
            self.text = text.to_owned();
            self.history.record_change(text);
        }
        self.caret = caret.min(self.char_count());
    }

    /// Undoes the last edit. Returns whether the field changed.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        tracing::debug!(chars = snapshot.chars().count(), "applying undo snapshot");
        {
            let _pause = self.history.pause_recording();
            self.text = snapshot;
        }
        self.place_caret_at_end();
        true
    }

    /// Redoes the last undone edit. Returns whether the field changed.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        tracing::debug!(chars = snapshot.chars().count(), "applying redo snapshot");
        {
            let _pause = self.history.pause_recording();
            self.text = snapshot;
        }
        self.place_caret_at_end();
        true
    }

    /// Empties the field and discards all history.
    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
        self.history.clear();
        self.caret_sync_needed = true;
    }

    /// Consumes the pending caret-sync request, if any.
    ///
    /// Returns true when the widget should move its caret to [`caret`](Self::caret).
    pub fn take_caret_sync(&mut self) -> bool {
        std::mem::take(&mut self.caret_sync_needed)
    }

    // Display policy after a restore: caret goes to end-of-text.
    fn place_caret_at_end(&mut self) {
        self.caret = self.char_count();
        self.caret_sync_needed = true;
    }
}

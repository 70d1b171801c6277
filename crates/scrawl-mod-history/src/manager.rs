/// Core undo/redo manager.
///
/// Keeps two stacks of full-text snapshots. Every externally observed edit
/// pushes the new text onto the undo stack and invalidates the redo stack.
/// Undo/redo pop between the stacks and hand the caller the text to display.
use crate::config::HistoryConfig;

/// Manages linear undo/redo history for one text field.
///
/// The bottom of the undo stack is a permanent empty-string sentinel
/// representing the initial state, so the stack is never empty and undoing
/// past the first edit lands on empty text rather than failing.
///
/// Recording must be suspended while a restored snapshot is applied back to
/// the field, otherwise the restoration is observed as a fresh edit and
/// corrupts the history. [`HistoryManager::pause_recording`] returns an RAII
/// guard so the suspension cannot leak past its scope.
pub struct HistoryManager {
    /// Snapshot stack, oldest first. `undo_stack[0]` is the sentinel.
    undo_stack: Vec<String>,
    /// Undone snapshots, most-recently-undone on top.
    redo_stack: Vec<String>,
    /// Whether recording is suspended (true only during restoration).
    suspended: bool,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl std::fmt::Debug for HistoryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("undo_len", &self.undo_stack.len())
            .field("redo_len", &self.redo_stack.len())
            .field("suspended", &self.suspended)
            .finish()
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl HistoryManager {
    /// Creates a manager holding only the empty initial state.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            undo_stack: vec![String::new()],
            redo_stack: Vec::new(),
            suspended: false,
            config,
        }
    }

    /// Records a new snapshot of the field's full text.
    ///
    /// Call once per externally observed text change. No-op while recording
    /// is suspended. Any pending redo history is invalidated.
    pub fn record_change(&mut self, text: &str) {
        if self.suspended {
            tracing::trace!("change during restoration ignored");
            return;
        }

        self.undo_stack.push(text.to_owned());
        self.redo_stack.clear();

        // Evict the oldest snapshots above the sentinel when over capacity.
        let depth = self.undo_stack.len() - 1;
        if depth > self.config.max_depth {
            let excess = depth - self.config.max_depth;
            self.undo_stack.drain(1..1 + excess);
            tracing::debug!(evicted = excess, "history depth cap reached");
        }

        debug_assert!(!self.undo_stack.is_empty());
    }

    /// Undoes the most recent edit.
    ///
    /// Returns the previous snapshot to display, or `None` when only the
    /// initial state remains. The caller must apply the returned text under
    /// a [`pause_recording`](Self::pause_recording) scope.
    pub fn undo(&mut self) -> Option<String> {
        // The bottom sentinel never comes off the stack.
        if self.undo_stack.len() <= 1 {
            return None;
        }

        let current = self.undo_stack.pop()?;
        self.redo_stack.push(current);

        debug_assert!(!self.undo_stack.is_empty());
        self.undo_stack.last().cloned()
    }

    /// Redoes the most recently undone edit.
    ///
    /// Returns the snapshot to display, or `None` when there is nothing to
    /// redo. Same caller obligation to suspend recording as [`undo`](Self::undo).
    pub fn redo(&mut self) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(next.clone());
        Some(next)
    }

    /// Whether undo would have a visible effect.
    ///
    /// A UI affordance only; `undo` is safe to call unconditionally.
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Whether redo would have a visible effect.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Whether changes are currently being recorded.
    pub fn is_recording(&self) -> bool {
        !self.suspended
    }

    /// Suspends recording until the returned guard is dropped.
    ///
    /// Hold the guard while applying a restored snapshot back to the field.
    /// The suspension is released on every exit path, including panics.
    pub fn pause_recording(&mut self) -> RecordingPause<'_> {
        self.suspended = true;
        RecordingPause { manager: self }
    }

    /// Discards all history, returning to the freshly constructed state.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.undo_stack.push(String::new());
        self.redo_stack.clear();
        self.suspended = false;
    }
}

/// RAII guard that keeps recording suspended while alive.
///
/// Returned by [`HistoryManager::pause_recording`]. Holding the guard
/// mutably borrows the manager, so no recording call can slip in while a
/// restoration is in progress.
#[must_use = "recording resumes as soon as the guard is dropped"]
pub struct RecordingPause<'a> {
    manager: &'a mut HistoryManager,
}

impl Drop for RecordingPause<'_> {
    fn drop(&mut self) {
        self.manager.suspended = false;
    }
}

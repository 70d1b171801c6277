//! Drag positioning for the note field.
//!
//! On pointer-down the offset between the field origin and the pointer is
//! captured; while dragging, the field is moved so that offset is preserved
//! and the pointer appears to carry the field.

/// Screen position of the note field, with in-progress drag state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPlacement {
    pub x: f32,
    pub y: f32,
    /// Field-origin-minus-pointer offset captured at drag start.
    grab: Option<(f32, f32)>,
}

impl FieldPlacement {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, grab: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Starts a drag with the pointer at `(px, py)`.
    pub fn begin_drag(&mut self, px: f32, py: f32) {
        self.grab = Some((self.x - px, self.y - py));
    }

    /// Moves the field to follow the pointer at `(px, py)`.
    ///
    /// `screen` is the available area and `field` the field's current size;
    /// the position is clamped so the field stays fully on screen. No-op
    /// when no drag is in progress.
    pub fn drag_to(&mut self, px: f32, py: f32, screen: (f32, f32), field: (f32, f32)) {
        let Some((dx, dy)) = self.grab else {
            return;
        };
        self.x = (px + dx).clamp(0.0, (screen.0 - field.0).max(0.0));
        self.y = (py + dy).clamp(0.0, (screen.1 - field.1).max(0.0));
    }

    /// Ends the drag, keeping the current position.
    pub fn end_drag(&mut self) {
        self.grab = None;
    }
}

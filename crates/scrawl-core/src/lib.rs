//! Editor state for the single note field.
//!
//! A [`Note`](note::Note) ties the field's text and caret to its undo/redo
//! history; [`TextStyle`](style::TextStyle) holds the whole-field styling
//! toggles, and [`FieldPlacement`](placement::FieldPlacement) the drag
//! position. All of it is plain synchronous state driven by the UI loop.

pub mod note;
pub mod placement;
pub mod style;

pub use note::Note;
pub use placement::FieldPlacement;
pub use style::TextStyle;

/// Linear undo/redo history for a single text field.
///
/// Provides a `HistoryManager` that records full-text snapshots on every
/// edit and replays them on demand. History is in-memory only and lives
/// for the duration of the editing session.
pub mod config;
pub mod manager;

pub use config::HistoryConfig;
pub use manager::{HistoryManager, RecordingPause};

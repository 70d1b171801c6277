/// Configuration for the history system.

/// Maximum number of snapshots kept above the initial-state sentinel.
/// Oldest snapshots are evicted when this limit is exceeded.
const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Configuration for the history system.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Max snapshots kept above the sentinel before the oldest are evicted.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

//! Linear undo/redo over full-collection snapshots

use std::collections::HashSet;

use shared::{BlobId, HistorySnapshot};

/// Default number of snapshots kept (matches the settings default)
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Ordered snapshots plus a cursor pointing at the live state.
///
/// Invariant: `0 <= cursor < snapshots.len()`, and the snapshot at the cursor
/// equals the store content whenever the editor is at rest.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    snapshots: Vec<HistorySnapshot>,
    cursor: usize,
    /// Maximum snapshots retained; oldest are evicted first
    limit: Option<usize>,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HistoryManager {
    /// Unbounded history starting from `initial`
    pub fn new(initial: HistorySnapshot) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// History keeping at most `limit` snapshots (at least one)
    pub fn with_limit(initial: HistorySnapshot, limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|l| l.max(1)),
            ..Self::new(initial)
        }
    }

    /// Push a new state. Anything after the cursor (the redo branch) is discarded.
    pub fn record(&mut self, snapshot: HistorySnapshot) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);

        if let Some(limit) = self.limit {
            if self.snapshots.len() > limit {
                let excess = self.snapshots.len() - limit;
                self.snapshots.drain(..excess);
                tracing::debug!("History limit {limit} reached, evicted {excess} snapshot(s)");
            }
        }

        self.cursor = self.snapshots.len() - 1;
        tracing::debug!(
            cursor = self.cursor,
            len = self.snapshots.len(),
            discarded,
            "Recorded history snapshot"
        );
    }

    /// Step back. At the oldest snapshot this is a no-op returning it unchanged.
    pub fn undo(&mut self) -> &HistorySnapshot {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward. At the newest snapshot this is a no-op.
    pub fn redo(&mut self) -> &HistorySnapshot {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> &HistorySnapshot {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: history always holds at least the initial snapshot
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[HistorySnapshot] {
        &self.snapshots
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Every model blob referenced by any retained snapshot
    pub fn referenced_blobs(&self) -> HashSet<&BlobId> {
        self.snapshots
            .iter()
            .flatten()
            .filter_map(|o| o.model().and_then(|m| m.blob_id()))
            .collect()
    }
}

//! Per-piece statistics and the running efficiency metric

use serde::Serialize;

/// Counters updated by moves and at lock time
///
/// `moves`, `rotations` and `drop_count` describe the piece currently falling
/// and are zeroed after every lock. `dropped_lines` is the lifetime total,
/// `current_dropped_lines` the count cleared by the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Stats {
    pub moves: i32,
    pub rotations: i32,
    pub drop_count: i32,
    pub efficiency: i32,
    pub dropped_lines: i32,
    pub current_dropped_lines: i32,
}

impl Stats {
    /// Record the rows cleared by a lock
    pub fn record_lines(&mut self, cleared: i32) {
        self.current_dropped_lines = cleared;
        self.dropped_lines += cleared;
    }

    /// Rotation term of the efficiency update: `min(4 - rotations, 0)`
    pub fn clamped_rotations(&self) -> i32 {
        (4 - self.rotations).min(0)
    }

    /// Fold the finished piece into the efficiency average
    ///
    /// `normalized_x` is the piece's distance from the spawn column. The halving
    /// is an arithmetic shift, so odd negative sums round towards negative
    /// infinity.
    pub fn update_efficiency(&mut self, normalized_x: i32) {
        self.efficiency +=
            self.drop_count + self.clamped_rotations() + (normalized_x - self.moves);
        self.efficiency >>= 1;
    }

    /// Zero the per-piece counters
    pub fn reset_piece(&mut self) {
        self.moves = 0;
        self.rotations = 0;
        self.drop_count = 0;
    }
}

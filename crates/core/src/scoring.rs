//! Scoring module - pluggable score policy and the classic rules
//!
//! The engine knows nothing about points: at every lock it hands the current
//! [`Stats`] to a [`ScorePolicy`] and adds whatever delta comes back. Any
//! `FnMut(&Stats) -> i32` closure is a policy, and [`TintScoring`] implements
//! the classic level-scaled rules.

use std::time::Duration;

use crate::stats::Stats;

/// Lowest selectable level
pub const MIN_LEVEL: u32 = 1;

/// Highest selectable level
pub const MAX_LEVEL: u32 = 9;

/// Raw scores are kept multiplied by this to avoid losing precision
pub const SCORE_FACTOR: i32 = 2;

/// Computes the score earned by a lock
pub trait ScorePolicy {
    /// Points to add, given the stats of the piece that just locked
    fn score_delta(&mut self, stats: &Stats) -> i32;
}

impl<F> ScorePolicy for F
where
    F: FnMut(&Stats) -> i32,
{
    fn score_delta(&mut self, stats: &Stats) -> i32 {
        self(stats)
    }
}

/// Policy that never awards points
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScoring;

impl ScorePolicy for NoScoring {
    fn score_delta(&mut self, _stats: &Stats) -> i32 {
        0
    }
}

/// Classic level-scaled scoring
///
/// A lock earns `level * (drop_count + 1)` plus
/// `(level + 10) * current_dropped_lines²`, both scaled by [`SCORE_FACTOR`].
/// Showing the next piece halves the award, as do dotted guide lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintScoring {
    pub level: u32,
    pub show_next: bool,
    pub dotted_lines: bool,
}

impl TintScoring {
    pub fn new(level: u32) -> Self {
        Self {
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
            show_next: false,
            dotted_lines: false,
        }
    }

    /// Raise the level by one once every ten cleared lines outpace it
    ///
    /// Returns true if the level changed.
    pub fn advance_level(&mut self, dropped_lines: i32) -> bool {
        if self.level < MAX_LEVEL && dropped_lines / 10 > self.level as i32 {
            self.level += 1;
            return true;
        }
        false
    }

    /// Manual speed-up, capped at [`MAX_LEVEL`]
    pub fn level_up(&mut self) -> bool {
        if self.level < MAX_LEVEL {
            self.level += 1;
            return true;
        }
        false
    }

    /// Gravity delay for the current level
    pub fn gravity_delay(&self) -> Duration {
        gravity_delay(self.level)
    }
}

impl Default for TintScoring {
    fn default() -> Self {
        Self::new(MIN_LEVEL)
    }
}

impl ScorePolicy for TintScoring {
    fn score_delta(&mut self, stats: &Stats) -> i32 {
        let level = self.level as i32;
        let lines = stats.current_dropped_lines;
        let mut score = SCORE_FACTOR * level * (stats.drop_count + 1);
        score += SCORE_FACTOR * (level + 10) * lines * lines;

        if self.show_next {
            score /= 2;
        }
        if self.dotted_lines {
            score /= 2;
        }
        score
    }
}

/// Time a piece may hang before gravity pulls it down one row
pub fn gravity_delay(level: u32) -> Duration {
    Duration::from_micros(1_000_000 / (level as u64 + 2))
}

/// Score as shown to the player
pub fn displayed_score(raw: i32) -> i32 {
    raw / SCORE_FACTOR
}

/// Displayed score per spawned piece; zero before any piece spawned
pub fn score_ratio(displayed: i32, pieces: u32) -> i32 {
    if pieces == 0 {
        return 0;
    }
    displayed / pieces as i32
}

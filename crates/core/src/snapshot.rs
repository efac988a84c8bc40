use serde::Serialize;

use crate::shapes::{ShapeBlocks, ShapeKind};
use crate::stats::Stats;
use crate::types::{ShapeColor, BOARD_COLS, BOARD_ROWS, NUM_SHAPES, SPAWN_X, SPAWN_Y};

/// Everything a renderer needs for one frame, as plain data
///
/// `board` holds numeric cell codes (see [`crate::types::Cell::code`]) with the
/// active piece and its shadow already drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EngineSnapshot {
    pub board: [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub current: ShapeKind,
    pub next: ShapeKind,
    pub color: ShapeColor,
    pub blocks: ShapeBlocks,
    pub position: (i8, i8),
    pub shadow: Option<(i8, i8)>,
    pub score: i32,
    pub stats: Stats,
    pub spawn_counts: [u32; NUM_SHAPES],
    pub game_over: bool,
}

impl EngineSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Board row `y` as cell codes
    pub fn row(&self, y: usize) -> Option<&[u8; BOARD_COLS as usize]> {
        self.board.get(y)
    }
}

impl Default for EngineSnapshot {
    fn default() -> Self {
        let shape = ShapeKind::Z.definition();
        Self {
            board: [[0u8; BOARD_COLS as usize]; BOARD_ROWS as usize],
            current: shape.kind,
            next: shape.kind,
            color: shape.color,
            blocks: shape.blocks,
            position: (SPAWN_X, SPAWN_Y),
            shadow: None,
            score: 0,
            stats: Stats::default(),
            spawn_counts: [0; NUM_SHAPES],
            game_over: false,
        }
    }
}

//! Piece module - the active piece and the operations that move it
//!
//! The active piece is always drawn on the board between calls. Every
//! operation lifts it (and its shadow) off the board, tests the candidate
//! position, commits it if legal and stamps the piece back, so a rejected move
//! leaves the board exactly as it was.

use tracing::trace;

use crate::board::Board;
use crate::shapes::{Shape, ShapeKind};
use crate::types::{Cell, SPAWN_X, SPAWN_Y};

/// The falling piece, its pivot and its landing projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    shape: Shape,
    x: i8,
    y: i8,
    x_shadow: i8,
    y_shadow: i8,
    shadow: bool,
}

impl ActivePiece {
    /// A piece at the spawn pivot; nothing is drawn yet
    pub fn new(kind: ShapeKind, shadow: bool) -> Self {
        Self {
            shape: Shape::new(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
            x_shadow: SPAWN_X,
            y_shadow: SPAWN_Y,
            shadow,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn shadow_enabled(&self) -> bool {
        self.shadow
    }

    /// Shadow pivot, when shadow mode is on
    pub fn shadow_position(&self) -> Option<(i8, i8)> {
        self.shadow.then_some((self.x_shadow, self.y_shadow))
    }

    /// Place a fresh piece of `kind` at the spawn pivot and draw it
    ///
    /// Returns false, drawing nothing, if the spawn cells are occupied.
    pub fn spawn(&mut self, board: &mut Board, kind: ShapeKind) -> bool {
        *self = Self::new(kind, self.shadow);
        if !board.allowed(&self.shape, self.x, self.y) {
            return false;
        }
        self.place_shadow_to_bottom(board);
        self.stamp(board);
        true
    }

    fn lift(&self, board: &mut Board) {
        board.erase(&self.shape, self.x, self.y);
        if self.shadow {
            board.erase(&self.shape, self.x_shadow, self.y_shadow);
        }
    }

    fn stamp(&self, board: &mut Board) {
        if self.shadow {
            board.draw_shadow(&self.shape, self.x_shadow, self.y_shadow);
        }
        board.draw(&self.shape, self.x, self.y);
    }

    /// Lift, try, commit if legal, restamp
    ///
    /// `attempt` sees the board without the piece and returns the candidate
    /// state only if it is legal.
    fn transact<F>(&mut self, board: &mut Board, attempt: F) -> bool
    where
        F: FnOnce(&Self, &Board) -> Option<(Shape, i8, i8)>,
    {
        self.lift(board);
        let committed = match attempt(self, board) {
            Some((shape, x, y)) => {
                self.shape = shape;
                self.x = x;
                self.y = y;
                self.place_shadow_to_bottom(board);
                true
            }
            None => false,
        };
        self.stamp(board);
        committed
    }

    fn shift(&mut self, board: &mut Board, dx: i8, dy: i8) -> bool {
        let moved = self.transact(board, |p, b| {
            let (x, y) = (p.x + dx, p.y + dy);
            b.allowed(&p.shape, x, y).then_some((p.shape, x, y))
        });
        if !moved {
            trace!(dx, dy, kind = ?self.shape.kind, "move rejected");
        }
        moved
    }

    pub fn left(&mut self, board: &mut Board) -> bool {
        self.shift(board, -1, 0)
    }

    pub fn right(&mut self, board: &mut Board) -> bool {
        self.shift(board, 1, 0)
    }

    pub fn down(&mut self, board: &mut Board) -> bool {
        self.shift(board, 0, 1)
    }

    /// Rotate in place; there is no wall kick, a blocked rotation just fails
    pub fn rotate(&mut self, board: &mut Board, clockwise: bool) -> bool {
        let rotated = self.transact(board, |p, b| {
            let mut test = p.shape;
            test.fake_rotate(clockwise);
            b.allowed(&test, p.x, p.y).then_some((test, p.x, p.y))
        });
        if !rotated {
            trace!(clockwise, kind = ?self.shape.kind, "rotation rejected");
        }
        rotated
    }

    /// Drop straight down to the resting row; returns the rows descended
    pub fn hard_drop(&mut self, board: &mut Board) -> u32 {
        self.lift(board);
        let start = self.y;
        if self.shadow {
            self.y = self.y_shadow;
        } else {
            while board.allowed(&self.shape, self.x, self.y + 1) {
                self.y += 1;
            }
        }
        self.stamp(board);
        (self.y - start) as u32
    }

    /// Recompute the deepest legal row for the shadow at the piece's column
    ///
    /// Expects the piece to be lifted off the board.
    fn place_shadow_to_bottom(&mut self, board: &Board) {
        if !self.shadow {
            return;
        }
        self.x_shadow = self.x;
        self.y_shadow = self.y;
        while board.allowed(&self.shape, self.x_shadow, self.y_shadow + 1) {
            self.y_shadow += 1;
        }
    }

    /// Whether (x, y) is free apart from this piece's own footprint and shadow
    fn fits_cell(&self, board: &Board, x: i8, y: i8) -> bool {
        match board.get(x, y) {
            Some(Cell::Empty) | Some(Cell::Shadow) => true,
            Some(_) => self.shape.cells(self.x, self.y).any(|c| c == (x, y)),
            None => false,
        }
    }

    /// True iff moving down one row would be illegal
    pub fn at_bottom(&self, board: &Board) -> bool {
        !self
            .shape
            .cells(self.x, self.y + 1)
            .all(|(x, y)| self.fits_cell(board, x, y))
    }

    /// Turn the shadow on or off, redrawing as needed
    pub fn set_shadow(&mut self, board: &mut Board, enabled: bool) {
        self.lift(board);
        self.shadow = enabled;
        self.place_shadow_to_bottom(board);
        self.stamp(board);
    }

    /// Leave only the piece's own blocks on the board, ready to lock
    pub fn settle(&self, board: &mut Board) {
        self.lift(board);
        board.draw(&self.shape, self.x, self.y);
    }

    /// Horizontal distance from the spawn column, for both pivots
    ///
    /// Returns `(|x - SPAWN_X|, |x_shadow - SPAWN_X|)`.
    pub fn recentered(&self) -> (i8, i8) {
        ((self.x - SPAWN_X).abs(), (self.x_shadow - SPAWN_X).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeColor;

    fn spawned(kind: ShapeKind, shadow: bool) -> (Board, ActivePiece) {
        let mut board = Board::new();
        let mut piece = ActivePiece::new(kind, shadow);
        assert!(piece.spawn(&mut board, kind));
        (board, piece)
    }

    #[test]
    fn test_spawn_draws_piece_and_shadow() {
        let (board, piece) = spawned(ShapeKind::I, true);
        assert_eq!(piece.position(), (SPAWN_X, SPAWN_Y));
        assert_eq!(board.get(4, 1), Some(Cell::Block(ShapeColor::Red)));
        assert_eq!(piece.shadow_position(), Some((5, 20)));
        assert_eq!(board.get(4, 20), Some(Cell::Shadow));
    }

    #[test]
    fn test_spawn_blocked() {
        let mut board = Board::new();
        board.set(5, 1, Cell::Block(ShapeColor::Blue));
        let before = board.clone();
        let mut piece = ActivePiece::new(ShapeKind::T, true);
        assert!(!piece.spawn(&mut board, ShapeKind::T));
        assert_eq!(board, before);
    }

    #[test]
    fn test_left_until_wall() {
        let (mut board, mut piece) = spawned(ShapeKind::O, false);
        // O occupies x-1..=x, so the pivot stops at column 2.
        let mut moves = 0;
        while piece.left(&mut board) {
            moves += 1;
        }
        assert_eq!(moves, 3);
        assert_eq!(piece.x(), 2);
        assert_eq!(board.get(1, 1), Some(Cell::Block(ShapeColor::Blue)));
    }

    #[test]
    fn test_rejected_move_keeps_board() {
        let (mut board, mut piece) = spawned(ShapeKind::I, true);
        while piece.right(&mut board) {}
        let before = board.clone();
        assert!(!piece.right(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_rotate_blocked_has_no_kick() {
        let (mut board, mut piece) = spawned(ShapeKind::I, false);
        // The vertical I would reach row 3 below the pivot.
        board.set(5, 3, Cell::Block(ShapeColor::Green));
        assert!(!piece.rotate(&mut board, true));
        assert_eq!(piece.shape(), &Shape::new(ShapeKind::I));
    }

    #[test]
    fn test_rotate_commits_and_moves_shadow() {
        let (mut board, mut piece) = spawned(ShapeKind::I, true);
        assert!(piece.rotate(&mut board, true));
        assert!(piece.shape().flipped);
        // Vertical I spans y-1..=y+2, so it rests with the pivot on row 18.
        assert_eq!(piece.shadow_position(), Some((5, 18)));
    }

    #[test]
    fn test_drop_with_shadow_jumps_to_shadow_row() {
        let (mut board, mut piece) = spawned(ShapeKind::T, true);
        let (_, shadow_y) = piece.shadow_position().unwrap();
        let expected = (shadow_y - piece.y()) as u32;
        assert_eq!(piece.hard_drop(&mut board), expected);
        assert_eq!(piece.y(), shadow_y);
        assert!(piece.at_bottom(&board));
    }

    #[test]
    fn test_drop_without_shadow_probes() {
        let (mut board, mut piece) = spawned(ShapeKind::T, false);
        // T reaches one row below its pivot.
        assert_eq!(piece.hard_drop(&mut board), 18);
        assert_eq!(piece.y(), 19);
        assert_eq!(piece.hard_drop(&mut board), 0);
    }

    #[test]
    fn test_at_bottom_ignores_own_shadow() {
        let (mut board, mut piece) = spawned(ShapeKind::O, true);
        for _ in 0..17 {
            assert!(piece.down(&mut board));
        }
        // Pivot on row 18 with the shadow directly underneath.
        assert_eq!(piece.y(), 18);
        assert_eq!(piece.shadow_position(), Some((5, 20)));
        assert!(!piece.at_bottom(&board));
        assert!(piece.down(&mut board));
        assert!(piece.down(&mut board));
        assert!(piece.at_bottom(&board));
    }

    #[test]
    fn test_set_shadow_toggles_cells() {
        let (mut board, mut piece) = spawned(ShapeKind::O, false);
        assert!(!board.cells().contains(&Cell::Shadow));
        piece.set_shadow(&mut board, true);
        assert_eq!(board.cells().iter().filter(|c| **c == Cell::Shadow).count(), 4);
        piece.set_shadow(&mut board, false);
        assert!(!board.cells().contains(&Cell::Shadow));
    }

    #[test]
    fn test_recentered_is_absolute() {
        let (mut board, mut piece) = spawned(ShapeKind::O, true);
        piece.left(&mut board);
        piece.left(&mut board);
        assert_eq!(piece.recentered(), (2, 2));
    }
}

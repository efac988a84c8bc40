//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the engine and by anything
//! that reads from it (renderers, recorders, scripted drivers). All types are
//! plain data with no game logic.
//!
//! # Board Dimensions
//!
//! The grid is 13 columns by 23 rows. Column 0 and the last two columns are
//! permanent walls, as are the last two rows. That leaves a playable area of
//! 10 columns (x = 1..=10) by 21 rows (y = 0..=20).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_COLS` | 13 | Total columns, walls included |
//! | `BOARD_ROWS` | 23 | Total rows, walls included |
//! | `PLAYABLE_COLS` | 10 | Columns a row must fill to clear |
//! | `SPAWN_X`, `SPAWN_Y` | 5, 1 | Pivot of a freshly spawned piece |
//!
//! # Examples
//!
//! ```
//! use tint_types::{Action, Evaluation, BOARD_COLS, BOARD_ROWS};
//!
//! let action = Action::from_str("rotateCw").unwrap();
//! assert_eq!(action, Action::RotateClockwise);
//!
//! assert_eq!(Evaluation::GameOver.code(), -1);
//! assert_eq!((BOARD_COLS, BOARD_ROWS), (13, 23));
//! ```

use serde::Serialize;

/// Total board width in cells, wall columns included
pub const BOARD_COLS: u8 = 13;

/// Total board height in cells, wall rows included
pub const BOARD_ROWS: u8 = 23;

/// Number of columns a row needs filled to count as full
pub const PLAYABLE_COLS: u8 = BOARD_COLS - 3;

/// Lowest playable row (the two rows below it are walls)
pub const BOTTOM_PLAYABLE_ROW: i8 = BOARD_ROWS as i8 - 3;

/// Spawn pivot column
pub const SPAWN_X: i8 = 5;

/// Spawn pivot row
pub const SPAWN_Y: i8 = 1;

/// Number of shapes in the game
pub const NUM_SHAPES: usize = 7;

/// Number of blocks in each shape
pub const NUM_BLOCKS: usize = 4;

/// Numeric tag used for wall cells in snapshots
pub const WALL_CODE: u8 = 16;

/// Numeric tag used for shadow cells in snapshots
pub const SHADOW_CODE: u8 = 8;

/// Block colors, one per shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeColor {
    Cyan,
    Green,
    Yellow,
    Blue,
    Magenta,
    White,
    Red,
}

impl ShapeColor {
    /// Numeric tag (1..=7) used in snapshots
    pub fn code(&self) -> u8 {
        match self {
            ShapeColor::Cyan => 1,
            ShapeColor::Green => 2,
            ShapeColor::Yellow => 3,
            ShapeColor::Blue => 4,
            ShapeColor::Magenta => 5,
            ShapeColor::White => 6,
            ShapeColor::Red => 7,
        }
    }
}

/// A cell on the game board
///
/// - `Empty`: free space
/// - `Wall`: permanent border sentinel
/// - `Block`: a block of the given color (locked, or the active piece)
/// - `Shadow`: projection of where the active piece would land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Block(ShapeColor),
    Shadow,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric tag: 0 empty, 1..=7 block colors, 8 shadow, 16 wall
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Wall => WALL_CODE,
            Cell::Block(color) => color.code(),
            Cell::Shadow => SHADOW_CODE,
        }
    }
}

/// Player actions accepted by the engine
///
/// Declaration order matches the numeric codes accepted by [`Action::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Move piece one column left
    Left,
    /// Rotate piece clockwise
    RotateClockwise,
    /// Rotate piece counter-clockwise
    RotateCounterclockwise,
    /// Move piece one column right
    Right,
    /// Drop piece straight to its resting row
    Drop,
    /// Move piece one row down
    Down,
}

impl Action {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tint_types::Action;
    ///
    /// assert_eq!(Action::from_str("left"), Some(Action::Left));
    /// assert_eq!(Action::from_str("ROTATECCW"), Some(Action::RotateCounterclockwise));
    /// assert_eq!(Action::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Action::Left),
            "rotatecw" | "rotateclockwise" => Some(Action::RotateClockwise),
            "rotateccw" | "rotatecounterclockwise" => Some(Action::RotateCounterclockwise),
            "right" => Some(Action::Right),
            "drop" => Some(Action::Drop),
            "down" => Some(Action::Down),
            _ => None,
        }
    }

    /// Parse action from its numeric code; unknown codes are `None`
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Action::Left),
            1 => Some(Action::RotateClockwise),
            2 => Some(Action::RotateCounterclockwise),
            3 => Some(Action::Right),
            4 => Some(Action::Drop),
            5 => Some(Action::Down),
            _ => None,
        }
    }

    /// Parse a single-key script character
    ///
    /// `h`/`l` move, `k` rotates clockwise, `u` counter-clockwise,
    /// `j` moves down and space drops.
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            'h' => Some(Action::Left),
            'l' => Some(Action::Right),
            'k' => Some(Action::RotateClockwise),
            'u' => Some(Action::RotateCounterclockwise),
            'j' => Some(Action::Down),
            ' ' => Some(Action::Drop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::RotateClockwise => "rotateCw",
            Action::RotateCounterclockwise => "rotateCcw",
            Action::Right => "right",
            Action::Drop => "drop",
            Action::Down => "down",
        }
    }
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Evaluation {
    /// The piece moved down one row
    Descended,
    /// The piece locked and the next one was released
    Locked,
    /// The freshly spawned piece does not fit (terminal)
    GameOver,
}

impl Evaluation {
    /// Tri-state code: 1 descended, 0 locked, -1 game over
    pub fn code(&self) -> i8 {
        match self {
            Evaluation::Descended => 1,
            Evaluation::Locked => 0,
            Evaluation::GameOver => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_geometry_defaults() {
        assert_eq!(PLAYABLE_COLS, 10);
        assert_eq!(BOTTOM_PLAYABLE_ROW, 20);
        assert_eq!((SPAWN_X, SPAWN_Y), (5, 1));
    }

    #[test]
    fn action_codes_follow_declaration_order() {
        let all = [
            Action::Left,
            Action::RotateClockwise,
            Action::RotateCounterclockwise,
            Action::Right,
            Action::Drop,
            Action::Down,
        ];
        for (code, action) in all.iter().enumerate() {
            assert_eq!(Action::from_code(code as i32), Some(*action));
            assert_eq!(Action::from_str(action.as_str()), Some(*action));
        }
        assert_eq!(Action::from_code(6), None);
        assert_eq!(Action::from_code(-1), None);
    }

    #[test]
    fn cell_codes_are_distinct() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Wall.code(), WALL_CODE);
        assert_eq!(Cell::Shadow.code(), SHADOW_CODE);
        assert_eq!(Cell::Block(ShapeColor::Red).code(), 7);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn evaluation_codes() {
        assert_eq!(Evaluation::Descended.code(), 1);
        assert_eq!(Evaluation::Locked.code(), 0);
        assert_eq!(Evaluation::GameOver.code(), -1);
    }
}

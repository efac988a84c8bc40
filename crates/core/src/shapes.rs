//! Shapes module - the seven piece definitions and their rotation rules
//!
//! Block offsets are relative to the piece pivot, with y growing downwards.
//! Rotation is "visually correct, not mathematically correct": each shape
//! carries a [`RotationStrategy`] that decides how a rotation request is
//! applied to its offsets.

use serde::Serialize;

use crate::types::{ShapeColor, NUM_BLOCKS, NUM_SHAPES};

/// Offset of a single block relative to the piece pivot
pub type BlockOffset = (i8, i8);

/// The four block offsets of a shape
pub type ShapeBlocks = [BlockOffset; NUM_BLOCKS];

/// The seven shapes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Z,
    S,
    T,
    O,
    L,
    J,
    I,
}

impl ShapeKind {
    /// All shapes in catalog order
    pub const ALL: [ShapeKind; NUM_SHAPES] = [
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::I,
    ];

    /// Catalog index (0..=6), which is also the rotation-family identifier
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::Z => 0,
            ShapeKind::S => 1,
            ShapeKind::T => 2,
            ShapeKind::O => 3,
            ShapeKind::L => 4,
            ShapeKind::J => 5,
            ShapeKind::I => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn definition(&self) -> &'static ShapeDefinition {
        &SHAPES[self.index()]
    }
}

/// How a shape answers a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RotationStrategy {
    /// Two states: rotates clockwise when flipped, counter-clockwise otherwise.
    /// The requested direction is ignored.
    AlternatingA,
    /// Two states: rotates counter-clockwise when flipped, clockwise otherwise.
    /// The requested direction is ignored.
    AlternatingB,
    /// True 90° rotation in the requested direction
    Direct,
    /// Never rotates
    Fixed,
}

/// Immutable per-shape data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: ShapeKind,
    pub color: ShapeColor,
    pub rotation: RotationStrategy,
    pub blocks: ShapeBlocks,
}

/// The shape catalog
pub const SHAPES: [ShapeDefinition; NUM_SHAPES] = [
    ShapeDefinition {
        kind: ShapeKind::Z,
        color: ShapeColor::Cyan,
        rotation: RotationStrategy::AlternatingA,
        blocks: [(1, 0), (0, 0), (0, -1), (-1, -1)],
    },
    ShapeDefinition {
        kind: ShapeKind::S,
        color: ShapeColor::Green,
        rotation: RotationStrategy::AlternatingB,
        blocks: [(1, -1), (0, -1), (0, 0), (-1, 0)],
    },
    ShapeDefinition {
        kind: ShapeKind::T,
        color: ShapeColor::Yellow,
        rotation: RotationStrategy::Direct,
        blocks: [(-1, 0), (0, 0), (1, 0), (0, 1)],
    },
    ShapeDefinition {
        kind: ShapeKind::O,
        color: ShapeColor::Blue,
        rotation: RotationStrategy::Fixed,
        blocks: [(-1, -1), (0, -1), (-1, 0), (0, 0)],
    },
    ShapeDefinition {
        kind: ShapeKind::L,
        color: ShapeColor::Magenta,
        rotation: RotationStrategy::Direct,
        blocks: [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    },
    ShapeDefinition {
        kind: ShapeKind::J,
        color: ShapeColor::White,
        rotation: RotationStrategy::Direct,
        blocks: [(1, 1), (1, 0), (0, 0), (-1, 0)],
    },
    ShapeDefinition {
        kind: ShapeKind::I,
        color: ShapeColor::Red,
        rotation: RotationStrategy::AlternatingB,
        blocks: [(-1, 0), (0, 0), (1, 0), (2, 0)],
    },
];

/// Working copy of a shape whose offsets rotate in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: ShapeColor,
    pub rotation: RotationStrategy,
    pub flipped: bool,
    pub blocks: ShapeBlocks,
}

impl Shape {
    /// Fresh, unrotated copy of the catalog entry
    pub fn new(kind: ShapeKind) -> Self {
        let def = kind.definition();
        Self {
            kind,
            color: def.color,
            rotation: def.rotation,
            flipped: false,
            blocks: def.blocks,
        }
    }

    /// Rotate every offset by exactly 90° about the pivot
    pub fn real_rotate(&mut self, clockwise: bool) {
        for block in &mut self.blocks {
            let (x, y) = *block;
            *block = if clockwise { (-y, x) } else { (y, -x) };
        }
    }

    /// Rotate the way this shape's strategy prescribes
    pub fn fake_rotate(&mut self, clockwise: bool) {
        match self.rotation {
            RotationStrategy::AlternatingA => {
                self.real_rotate(self.flipped);
                self.flipped = !self.flipped;
            }
            RotationStrategy::AlternatingB => {
                self.real_rotate(!self.flipped);
                self.flipped = !self.flipped;
            }
            RotationStrategy::Direct => self.real_rotate(clockwise),
            RotationStrategy::Fixed => {}
        }
    }

    /// Board coordinates covered by this shape with its pivot at (x, y)
    pub fn cells(&self, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.blocks.iter().map(move |&(dx, dy)| (x + dx, y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_index() {
        for (i, def) in SHAPES.iter().enumerate() {
            assert_eq!(def.kind.index(), i);
            assert_eq!(ShapeKind::from_index(i), Some(def.kind));
        }
        assert_eq!(ShapeKind::from_index(NUM_SHAPES), None);
    }

    #[test]
    fn real_rotate_four_times_is_identity() {
        for kind in ShapeKind::ALL {
            let mut shape = Shape::new(kind);
            for _ in 0..4 {
                shape.real_rotate(true);
            }
            assert_eq!(shape.blocks, kind.definition().blocks);
        }
    }

    #[test]
    fn real_rotate_clockwise_then_back() {
        let mut shape = Shape::new(ShapeKind::L);
        shape.real_rotate(true);
        assert_eq!(shape.blocks, [(-1, -1), (0, -1), (0, 0), (0, 1)]);
        shape.real_rotate(false);
        assert_eq!(shape.blocks, ShapeKind::L.definition().blocks);
    }

    #[test]
    fn alternating_strategies_ignore_direction() {
        let mut a = Shape::new(ShapeKind::Z);
        let mut b = Shape::new(ShapeKind::Z);
        a.fake_rotate(true);
        b.fake_rotate(false);
        assert_eq!(a, b);
        assert!(a.flipped);

        // Z starts unflipped and therefore turns counter-clockwise first.
        let mut expected = Shape::new(ShapeKind::Z);
        expected.real_rotate(false);
        assert_eq!(a.blocks, expected.blocks);
    }

    #[test]
    fn alternating_b_turns_clockwise_first() {
        for kind in [ShapeKind::S, ShapeKind::I] {
            let mut shape = Shape::new(kind);
            let mut expected = Shape::new(kind);
            expected.real_rotate(true);
            shape.fake_rotate(false);
            assert_eq!(shape.blocks, expected.blocks);
        }
    }

    #[test]
    fn fixed_strategy_never_moves() {
        let mut shape = Shape::new(ShapeKind::O);
        shape.fake_rotate(true);
        shape.fake_rotate(false);
        assert_eq!(shape, Shape::new(ShapeKind::O));
    }

    #[test]
    fn cells_are_offset_from_pivot() {
        let shape = Shape::new(ShapeKind::I);
        let cells: Vec<_> = shape.cells(5, 1).collect();
        assert_eq!(cells, vec![(4, 1), (5, 1), (6, 1), (7, 1)]);
    }
}

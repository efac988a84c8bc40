//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block engine: the grid, the piece catalog
//! and its rotation rules, the 7-bag randomizer, the active-piece controller,
//! per-piece statistics and the pluggable score policy. It performs no I/O and
//! has no notion of time.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven shapes and their rotation strategies
//! - [`board`]: 13x23 grid with wall sentinels, collision tests and row compaction
//! - [`rng`]: seedable random source and the 7-bag randomizer
//! - [`piece`]: the active piece, its moves and its shadow projection
//! - [`stats`]: per-piece counters and the efficiency metric
//! - [`scoring`]: the [`ScorePolicy`] seam and the classic level-scaled rules
//! - [`engine`]: the game state machine tying everything together
//! - [`snapshot`]: a plain-data view of the engine for renderers
//!
//! # Example
//!
//! ```
//! use tint_core::{Engine, TintScoring};
//! use tint_core::types::{Action, Evaluation};
//!
//! let mut engine = Engine::new(12345, TintScoring::new(1));
//! engine.set_shadow(true);
//!
//! engine.apply_action(Action::Left);
//! engine.apply_action(Action::Drop);
//!
//! // The dropped piece locks on the next gravity tick.
//! assert_eq!(engine.evaluate(), Evaluation::Locked);
//! assert!(engine.score() > 0);
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod stats;

pub use tint_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::Engine;
pub use piece::ActivePiece;
pub use rng::{Bag, RandomSource, SimpleRng};
pub use scoring::{NoScoring, ScorePolicy, TintScoring};
pub use shapes::{RotationStrategy, Shape, ShapeKind};
pub use snapshot::EngineSnapshot;
pub use stats::Stats;

//! Engine module - owns the whole game and is its only mutation entry point
//!
//! Callers drive the engine with two calls: [`Engine::apply_action`] for every
//! player input and [`Engine::evaluate`] once per gravity tick. The engine has
//! no notion of time; pacing belongs to the caller.
//!
//! A piece is `Falling` until `evaluate` finds it cannot descend. It then
//! locks: full rows are compacted, the score policy runs, the per-piece stats
//! fold into the efficiency average, and the next piece spawns. If the spawn
//! cells are taken the game is over and every later call is a no-op.

use tracing::{debug, info};

use crate::board::{Board, ClearedRows};
use crate::piece::ActivePiece;
use crate::rng::{Bag, RandomSource, SimpleRng};
use crate::scoring::{ScorePolicy, TintScoring};
use crate::shapes::ShapeKind;
use crate::snapshot::EngineSnapshot;
use crate::stats::Stats;
use crate::types::{Action, Evaluation, NUM_SHAPES};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine<P: ScorePolicy = TintScoring, R: RandomSource = SimpleRng> {
    board: Board,
    piece: ActivePiece,
    next: ShapeKind,
    bag: Bag<R>,
    stats: Stats,
    score: i32,
    policy: P,
    /// How often each shape became the current piece
    spawn_counts: [u32; NUM_SHAPES],
    last_cleared: ClearedRows,
    game_over: bool,
}

impl<P: ScorePolicy> Engine<P, SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32, policy: P) -> Self {
        Self::with_rng(SimpleRng::new(seed), policy)
    }
}

impl<P: ScorePolicy, R: RandomSource> Engine<P, R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(rng: R, policy: P) -> Self {
        let mut bag = Bag::new(rng);
        let current = bag.next();
        let next = bag.next();

        let mut engine = Self {
            board: Board::new(),
            piece: ActivePiece::new(current, false),
            next,
            bag,
            stats: Stats::default(),
            score: 0,
            policy,
            spawn_counts: [0; NUM_SHAPES],
            last_cleared: ClearedRows::new(),
            game_over: false,
        };
        engine.spawn(current);
        engine
    }

    /// Start over: empty board, fresh bag, zeroed stats and score
    ///
    /// The policy, the random source and the shadow setting are kept.
    pub fn init(&mut self) {
        self.board.clear();
        self.bag.reset();
        let current = self.bag.next();
        self.next = self.bag.next();
        self.stats = Stats::default();
        self.score = 0;
        self.spawn_counts = [0; NUM_SHAPES];
        self.last_cleared.clear();
        self.game_over = false;
        self.spawn(current);
    }

    /// Spawn onto a board that has room; only used at start-up
    fn spawn(&mut self, kind: ShapeKind) {
        let spawned = self.piece.spawn(&mut self.board, kind);
        debug_assert!(spawned, "spawn cells are free on an empty board");
        self.spawn_counts[kind.index()] += 1;
    }

    /// Apply a player action
    ///
    /// Returns true if the piece moved. Rejected actions change nothing.
    pub fn apply_action(&mut self, action: Action) -> bool {
        if self.game_over {
            return false;
        }

        let board = &mut self.board;
        match action {
            Action::Left | Action::Right => {
                let moved = if action == Action::Left {
                    self.piece.left(board)
                } else {
                    self.piece.right(board)
                };
                if moved {
                    self.stats.moves += 1;
                }
                moved
            }
            Action::RotateClockwise | Action::RotateCounterclockwise => {
                let rotated = self
                    .piece
                    .rotate(board, action == Action::RotateClockwise);
                if rotated {
                    self.stats.rotations += 1;
                }
                rotated
            }
            Action::Drop => {
                let rows = self.piece.hard_drop(board);
                self.stats.drop_count += rows as i32;
                rows > 0
            }
            Action::Down => {
                let moved = self.piece.down(board);
                if moved {
                    self.stats.drop_count += 1;
                }
                moved
            }
        }
    }

    /// Advance one gravity tick
    pub fn evaluate(&mut self) -> Evaluation {
        if self.game_over {
            return Evaluation::GameOver;
        }

        if !self.piece.at_bottom(&self.board) {
            self.piece.down(&mut self.board);
            return Evaluation::Descended;
        }

        self.lock();

        let kind = self.next;
        self.next = self.bag.next();
        if !self.piece.spawn(&mut self.board, kind) {
            self.game_over = true;
            info!(
                score = self.score,
                lines = self.stats.dropped_lines,
                efficiency = self.stats.efficiency,
                "game over"
            );
            return Evaluation::GameOver;
        }
        self.spawn_counts[kind.index()] += 1;
        Evaluation::Locked
    }

    fn lock(&mut self) {
        self.piece.settle(&mut self.board);
        let cleared = self.board.clear_full_rows();
        self.stats.record_lines(cleared.len() as i32);

        let delta = self.policy.score_delta(&self.stats);
        self.score += delta;

        let (normalized_x, _) = self.piece.recentered();
        self.stats.update_efficiency(normalized_x as i32);
        self.stats.reset_piece();

        debug!(
            kind = ?self.piece.kind(),
            cleared = cleared.len(),
            delta,
            efficiency = self.stats.efficiency,
            "piece locked"
        );
        self.last_cleared = cleared;
    }

    /// Turn the shadow projection on or off
    pub fn set_shadow(&mut self, enabled: bool) {
        if self.game_over {
            return;
        }
        self.piece.set_shadow(&mut self.board, enabled);
    }

    pub fn shadow(&self) -> bool {
        self.piece.shadow_enabled()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &ActivePiece {
        &self.piece
    }

    pub fn current(&self) -> ShapeKind {
        self.piece.kind()
    }

    pub fn next(&self) -> ShapeKind {
        self.next
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn spawn_counts(&self) -> &[u32; NUM_SHAPES] {
        &self.spawn_counts
    }

    /// Total number of pieces spawned this game
    pub fn pieces_spawned(&self) -> u32 {
        self.spawn_counts.iter().sum()
    }

    /// Rows removed by the most recent lock, bottom to top
    pub fn last_cleared_rows(&self) -> &[i8] {
        &self.last_cleared
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    pub fn snapshot_into(&self, out: &mut EngineSnapshot) {
        let shape = self.piece.shape();
        self.board.write_code_grid(&mut out.board);
        out.current = shape.kind;
        out.next = self.next;
        out.color = shape.color;
        out.blocks = shape.blocks;
        out.position = self.piece.position();
        out.shadow = self.piece.shadow_position();
        out.score = self.score;
        out.stats = self.stats;
        out.spawn_counts = self.spawn_counts;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let mut s = EngineSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1, TintScoring::default())
    }
}

//! RNG module - 7-bag random piece generation
//!
//! The bag holds a permutation of the seven shapes and hands them out in
//! order. Once the cursor has walked past the last slot the bag is shuffled
//! again, so every run of seven draws starting at a multiple of seven is a
//! permutation of all shapes.
//!
//! Randomness comes through [`RandomSource`], so tests can supply fixed
//! sequences. [`SimpleRng`] is the seeded default.

use tracing::debug;

use crate::shapes::ShapeKind;
use crate::types::NUM_SHAPES;

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Value in `[0, bound)`; `bound` must be non-zero
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current generator state (re-seeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        // The low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % bound
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag<R: RandomSource = SimpleRng> {
    /// Current permutation of the shapes
    bag: [ShapeKind; NUM_SHAPES],
    /// Number of pieces drawn so far
    cursor: usize,
    rng: R,
}

impl<R: RandomSource> Bag<R> {
    /// Create a freshly shuffled bag
    pub fn new(rng: R) -> Self {
        let mut bag = Self {
            bag: ShapeKind::ALL,
            cursor: 0,
            rng,
        };
        bag.shuffle();
        bag
    }

    /// Fisher-Yates: for each slot i pick j uniformly from [i, n) and swap
    fn shuffle(&mut self) {
        let n = self.bag.len();
        for i in 0..n - 1 {
            let j = i + self.rng.next_below((n - i) as u32) as usize;
            self.bag.swap(i, j);
        }
        debug!(bag = ?self.bag, "bag shuffled");
    }

    /// Refill with a fresh permutation and restart the cursor
    pub fn reset(&mut self) {
        self.bag = ShapeKind::ALL;
        self.cursor = 0;
        self.shuffle();
    }

    /// Draw the next piece, reshuffling once the bag has been used up
    pub fn next(&mut self) -> ShapeKind {
        let piece = self.bag[self.cursor % NUM_SHAPES];
        self.cursor += 1;
        if self.cursor % NUM_SHAPES == 0 {
            self.shuffle();
        }
        piece
    }

    /// The piece the next call to [`Bag::next`] will return
    pub fn peek(&self) -> ShapeKind {
        self.bag[self.cursor % NUM_SHAPES]
    }

    /// Total number of draws
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current permutation
    pub fn contents(&self) -> &[ShapeKind; NUM_SHAPES] {
        &self.bag
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl Default for Bag<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::new(1))
    }
}

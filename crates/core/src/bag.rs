//! Bag module - 7-bag random piece generation
//!
//! Each bag holds one of each piece (I, O, T, L, J, S, Z) in a Fisher-Yates
//! shuffled order. Pieces are drawn front to back; a fresh bag is shuffled only
//! once the current one is empty, so every 7-draw cycle contains each kind once.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Position, BOARD_WIDTH};

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// The high bits are used; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    /// Remaining pieces of the current cycle, stored back to front so the
    /// next draw is a `pop`.
    remaining: ArrayVec<PieceKind, 7>,
    rng: SimpleRng,
}

impl Bag {
    /// Create an empty bag; the first draw shuffles a full set.
    pub fn new(seed: u32) -> Self {
        Self {
            remaining: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Populate the bag with a shuffled full set, only if it is empty.
    ///
    /// Returns true when a refill happened.
    pub fn refill_if_empty(&mut self) -> bool {
        if !self.remaining.is_empty() {
            return false;
        }
        let mut order = PieceKind::ALL;
        self.rng.shuffle(&mut order);
        // Reverse so `pop` yields the shuffled order front to back.
        self.remaining.extend(order.into_iter().rev());
        true
    }

    /// Draw the next piece, refilling first if the cycle is exhausted.
    pub fn draw_next(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.remaining.pop() {
                return kind;
            }
            self.refill_if_empty();
        }
    }

    /// Pieces left in the current cycle, in draw order.
    pub fn remaining(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.remaining.iter().rev().copied()
    }

    /// Number of pieces left in the current cycle.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Spawn origin for a freshly drawn piece.
///
/// The table centers each bounding box over the board. J sits one column right
/// of center. y is always 0.
pub fn spawn_position(kind: PieceKind) -> Position {
    let width = BOARD_WIDTH as i8;
    let x = match kind {
        PieceKind::O => (width - 2) / 2,
        PieceKind::I => (width - 4) / 2,
        PieceKind::J => (width - 3) / 2 + 1,
        PieceKind::L | PieceKind::T | PieceKind::S | PieceKind::Z => (width - 3) / 2,
    };
    Position::new(x, 0)
}

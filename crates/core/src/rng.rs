//! RNG module - piece generators
//!
//! The rules engine only asks a [`PieceGenerator`] for the next kind; the
//! distribution is the generator's business. Two generators ship here:
//!
//! - [`RandomGenerator`]: uniform over the seven kinds, driven by a seeded LCG
//! - [`SequenceGenerator`]: cycles a fixed list, for tests and replays

use crate::types::{PieceKind, Rotation};

/// Source of upcoming piece kinds.
pub trait PieceGenerator {
    fn next_piece(&mut self) -> PieceKind;
}

impl<G: PieceGenerator + ?Sized> PieceGenerator for Box<G> {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Uniform rotation index
    pub fn next_rotation(&mut self) -> Rotation {
        Rotation::from_index(self.next_range(4) as i32)
    }

    /// Current internal state (restarting from it replays the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform piece generator.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: SimpleRng,
}

impl RandomGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceGenerator for RandomGenerator {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.next_range(PieceKind::ALL.len() as u32) as usize)
    }
}

/// Generator that repeats a fixed list of kinds forever.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl SequenceGenerator {
    /// Build from a list; an empty list yields `I` forever.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::I);
        }
        Self { kinds, cursor: 0 }
    }

    /// Always the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceGenerator for SequenceGenerator {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }
}

//! RNG module - seeded randomness for piece spawning
//!
//! A small LCG keeps spawn sequences deterministic under a fixed seed without
//! pulling a randomness dependency into the pure core. Each spawn picks one
//! of the seven kinds uniformly; there is deliberately no bag guarantee, so
//! long droughts and repeats are possible.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SpawnRng {
    state: u32,
}

impl SpawnRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform choice over the seven piece kinds.
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Current internal state (usable as a seed to continue the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::new(1)
    }
}

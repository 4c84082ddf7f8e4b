//! RNG module - injectable random sources for piece spawning
//!
//! The engine draws two independent uniform values per spawn: a catalogue
//! index for the shape and a palette index for the color. Anything that can
//! produce a uniform value below a bound can drive it:
//!
//! - [`StdRandom`]: `rand`'s standard generator, from OS entropy or a seed
//! - [`SimpleRng`]: a tiny LCG, handy for reproducible benches
//! - [`ScriptedRandom`]: replays a fixed sequence so tests can pin exact spawns

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Random source backed by `rand::rngs::StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
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

    /// Current state, usable as a seed to replay from this point.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % bound
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted random source needs at least one value");
        Self { values, pos: 0 }
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}

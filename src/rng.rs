//! Small deterministic PRNG
//!
//! Everything random in a star's life (drop drift, placement hints, spawn
//! pose in the jar) draws from one of these, so a fixed seed replays the
//! same session exactly.

/// Xorshift64 generator
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a generator from a seed (zero is remapped, xorshift would stick at 0)
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Seed from the wall clock
    pub fn from_clock() -> Self {
        let micros = (macroquad::miniquad::date::now() * 1_000_000.0) as u64;
        Self::new(micros)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit an f32 mantissa exactly
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        let v = min + self.next_f32() * (max - min);
        // Rounding can land exactly on max for draws just under 1.0
        if v < max { v } else { min }
    }

    /// Uniform float in [-half, half)
    pub fn spread(&mut self, half: f32) -> f32 {
        self.range(-half, half)
    }
}

//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible match replay. The generator is a
//! plain xorshift64* exposed through [`rand::RngCore`], so strategies only
//! ever see the `rand` traits and the engine decides where the bits come
//! from.

use rand::{Rng, RngCore};

use crate::strategy::Move;

/// Seeded random number generator
///
/// Deterministic: same seed + index = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and match index
    pub fn new(seed: &[u8; 32], match_index: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        state ^= (match_index as u64).wrapping_mul(0x517cc1b727220a95);

        // xorshift never leaves the all-zero state
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        let mut rng = Self { state };
        for _ in 0..8 {
            rng.step();
        }

        rng
    }

    /// Derive an independent stream for one round (or one player within a round)
    pub fn for_round(&self, round: u32) -> Self {
        let mut state = self.state ^ (round as u64).wrapping_mul(0x9e3779b97f4a7c15);
        if state == 0 {
            state = 0x2545f4914f6cdd1d;
        }

        let mut rng = Self { state };
        rng.step();
        rng
    }

    fn step(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Cooperate with probability `p`, defect otherwise.
///
/// The certain cases (`p <= 0`, `p >= 1`) return without drawing, so they
/// leave the stream untouched. Otherwise a uniform `r` in `[0, 1)` is drawn
/// and the result is Cooperate iff `r < p`.
pub fn random_choice(p: f64, rng: &mut dyn RngCore) -> Move {
    if p <= 0.0 {
        return Move::Defect;
    }
    if p >= 1.0 {
        return Move::Cooperate;
    }

    let r: f64 = rng.gen();
    if r < p {
        Move::Cooperate
    } else {
        Move::Defect
    }
}

//! Seedable random source for food and obstacle placement
//!
//! The simulation never touches a global generator. Callers create a
//! [`GameRng`] once per session and pass it by exclusive reference into each
//! transition, so a fixed seed replays the exact same board.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, TryRngCore};
use rand_pcg::Pcg32;

use super::state::Position;

/// Session random source (PCG32 keyed by a 64-bit seed)
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy, falling back to a weaker process-local seed
    /// when the OS source is unavailable.
    pub fn from_entropy() -> Self {
        let mut os = OsRng;
        let seed = match os.try_next_u64() {
            Ok(seed) => seed,
            Err(err) => {
                log::warn!("OS entropy unavailable ({err}), using fallback seed");
                fallback_seed()
            }
        };
        Self::new(seed)
    }

    /// Seed this generator was created with (for replays)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `0..upper`. Returns 0 when `upper` is 0.
    pub fn below(&mut self, upper: u16) -> u16 {
        if upper == 0 {
            return 0;
        }
        self.rng.random_range(0..upper)
    }

    /// Uniform cell on an `grid_size`×`grid_size` board
    pub fn cell(&mut self, grid_size: u16) -> Position {
        let x = self.below(grid_size);
        let y = self.below(grid_size);
        Position::new(x, y)
    }

    /// Uniform index into a non-empty collection of `len` items
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Fisher-Yates shuffle in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

fn fallback_seed() -> u64 {
    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u128(clock_nanos());
    let marker = 0u8;
    hasher.write_usize(&marker as *const u8 as usize);
    hasher.finish()
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_nanos() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or(0)
}

// std::time::SystemTime panics on wasm32-unknown-unknown
#[cfg(target_arch = "wasm32")]
fn clock_nanos() -> u128 {
    0
}

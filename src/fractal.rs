//! Multi-octave ("fractal") sums of the simplex kernels.
//!
//! The first octave is always evaluated at frequency 1 and amplitude 1, so
//! `octaves` of 0 and 1 give the same result. Each further octave scales the
//! frequency by `lacunarity` and the amplitude by `persistence`, and the
//! amplitude-weighted sum is normalized by the total amplitude and shifted
//! from roughly `[-1, 1]` into roughly `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::permutation::Permutation;
use crate::simplex::{noise2, noise3};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Octaves {
    pub octaves: u32,
    /// Amplitude multiplier per octave.
    pub persistence: f64,
    /// Frequency multiplier per octave.
    pub lacunarity: f64,
}

impl Default for Octaves {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl Octaves {
    pub const fn new(octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            octaves,
            persistence,
            lacunarity,
        }
    }

    /// A single unscaled octave.
    pub const fn single() -> Self {
        Self::new(1, 0.5, 2.0)
    }

    /// Sums octaves of `kernel`, which receives the running frequency.
    #[inline]
    pub fn accumulate<F: FnMut(f64) -> f64>(self, mut kernel: F) -> f64 {
        let mut total = kernel(1.0);
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_amplitude = 1.0;
        for _ in 1..self.octaves {
            frequency *= self.lacunarity;
            amplitude *= self.persistence;
            max_amplitude += amplitude;
            total += amplitude * kernel(frequency);
        }
        (1.0 + total / max_amplitude) / 2.0
    }
}

pub fn fractal2(permutation: &Permutation, x: f64, y: f64, octaves: Octaves) -> f64 {
    octaves.accumulate(|frequency| noise2(permutation, x * frequency, y * frequency))
}

pub fn fractal3(permutation: &Permutation, x: f64, y: f64, z: f64, octaves: Octaves) -> f64 {
    octaves.accumulate(|frequency| noise3(permutation, x * frequency, y * frequency, z * frequency))
}

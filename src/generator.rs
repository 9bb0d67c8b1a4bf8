use glam::{DVec2, DVec3};

use crate::fractal::{fractal2, fractal3, Octaves};
use crate::permutation::{text_seed, Permutation};
use crate::simplex;

/// A seeded simplex noise source.
///
/// Sampling only borrows the generator, so one instance can be shared between
/// threads. Reseeding needs `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseGenerator {
    seed: u64,
    permutation: Permutation,
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::seed(0)
    }
}

impl NoiseGenerator {
    pub fn seed(seed: u64) -> Self {
        log::debug!("Seeding noise generator with {seed}");
        Self {
            seed,
            permutation: Permutation::from_seed(seed),
        }
    }

    /// Seeds from a world name. See [text_seed].
    pub fn from_text(text: &str) -> Self {
        Self::seed(text_seed(text))
    }

    pub fn reseed(&mut self, seed: u64) {
        *self = Self::seed(seed);
    }

    #[inline]
    pub fn seed_value(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    #[inline]
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        simplex::noise2(&self.permutation, x, y)
    }

    #[inline]
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        simplex::noise3(&self.permutation, x, y, z)
    }

    /// Fractal 2D noise in roughly `[0, 1]`.
    pub fn simplex2(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        self.fractal2(x, y, Octaves::new(octaves, persistence, lacunarity))
    }

    /// Fractal 3D noise in roughly `[0, 1]`.
    pub fn simplex3(&self, x: f64, y: f64, z: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        self.fractal3(x, y, z, Octaves::new(octaves, persistence, lacunarity))
    }

    #[inline]
    pub fn fractal2(&self, x: f64, y: f64, octaves: Octaves) -> f64 {
        fractal2(&self.permutation, x, y, octaves)
    }

    #[inline]
    pub fn fractal3(&self, x: f64, y: f64, z: f64, octaves: Octaves) -> f64 {
        fractal3(&self.permutation, x, y, z, octaves)
    }

    #[inline]
    pub fn noise2_at(&self, point: DVec2) -> f64 {
        self.noise2(point.x, point.y)
    }

    #[inline]
    pub fn noise3_at(&self, point: DVec3) -> f64 {
        self.noise3(point.x, point.y, point.z)
    }

    #[inline]
    pub fn fractal2_at(&self, point: DVec2, octaves: Octaves) -> f64 {
        self.fractal2(point.x, point.y, octaves)
    }

    #[inline]
    pub fn fractal3_at(&self, point: DVec3, octaves: Octaves) -> f64 {
        self.fractal3(point.x, point.y, point.z, octaves)
    }
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fractal::Octaves;
use crate::generator::NoiseGenerator;
use crate::permutation::text_seed;

/// A world seed as written in a config file: a number or a world name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Number(0)
    }
}

impl Seed {
    pub fn value(&self) -> u64 {
        match self {
            Seed::Number(seed) => *seed,
            Seed::Text(text) => text_seed(text),
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub seed: Seed,
    /// World coordinates are multiplied by this before sampling.
    pub frequency: f64,
    #[serde(flatten)]
    pub octaves: Octaves,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: Seed::default(),
            frequency: 0.01,
            octaves: Octaves::default(),
        }
    }
}

impl NoiseConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded noise config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.warn_degenerate();
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Logs parameters that are accepted but give flat or odd noise.
    fn warn_degenerate(&self) {
        if self.octaves.octaves == 0 {
            log::warn!("octaves is 0, a single octave will be sampled");
        }
        if !(self.frequency > 0.0) {
            log::warn!("frequency {} is not positive", self.frequency);
        }
        if !self.octaves.persistence.is_finite() || !self.octaves.lacunarity.is_finite() {
            log::warn!(
                "persistence {} / lacunarity {} are not finite",
                self.octaves.persistence,
                self.octaves.lacunarity,
            );
        }
    }

    #[inline]
    pub fn octaves(&self) -> Octaves {
        self.octaves
    }

    pub fn generator(&self) -> NoiseGenerator {
        NoiseGenerator::seed(self.seed.value())
    }

    /// Fractal 2D noise at world coordinates.
    #[inline]
    pub fn sample2(&self, noise: &NoiseGenerator, x: f64, y: f64) -> f64 {
        noise.fractal2(x * self.frequency, y * self.frequency, self.octaves)
    }

    /// Fractal 3D noise at world coordinates.
    #[inline]
    pub fn sample3(&self, noise: &NoiseGenerator, x: f64, y: f64, z: f64) -> f64 {
        noise.fractal3(x * self.frequency, y * self.frequency, z * self.frequency, self.octaves)
    }
}

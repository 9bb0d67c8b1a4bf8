pub mod random;
pub mod permutation;
pub mod gradient;
pub mod simplex;
pub mod fractal;
pub mod generator;
pub mod config;
pub mod preview;
pub mod error;
pub mod logger;

pub use config::{NoiseConfig, Seed};
pub use error::{Error, Result};
pub use fractal::Octaves;
pub use generator::NoiseGenerator;

//! Grayscale previews of a noise field, for checking a seed by eye.

use std::path::Path;
use std::time::Instant;

use glam::DVec2;
use image::{GrayImage, Luma};
use itertools::{Itertools, MinMaxResult};
use rayon::prelude::*;

use crate::config::NoiseConfig;
use crate::error::{Error, Result};
use crate::generator::NoiseGenerator;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    pub width: u32,
    pub height: u32,
    /// World coordinate of the top left pixel.
    pub origin: DVec2,
    pub config: NoiseConfig,
}

impl PreviewOptions {
    pub fn new(width: u32, height: u32, config: NoiseConfig) -> Self {
        Self {
            width,
            height,
            origin: DVec2::ZERO,
            config,
        }
    }

    #[inline]
    fn world_pos(&self, index: usize) -> DVec2 {
        let width = self.width as usize;
        let (x, y) = (index % width, index / width);
        // Pixel centres.
        self.origin + DVec2::new(x as f64 + 0.5, y as f64 + 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl NoiseStats {
    fn from_samples(samples: &[f64]) -> Self {
        let (min, max) = match samples.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(value) => (value, value),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let mean = if samples.is_empty() {
            0.0
        } else {
            samples.iter().sum::<f64>() / samples.len() as f64
        };
        Self { min, max, mean }
    }
}

#[derive(Debug, Clone)]
pub struct Preview {
    pub image: GrayImage,
    pub stats: NoiseStats,
}

impl Preview {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.image.save(path)?;
        log::info!("Saved {}x{} preview to {}", self.image.width(), self.image.height(), path.display());
        Ok(())
    }
}

#[inline]
fn to_gray(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

fn render<F>(options: &PreviewOptions, sample: F) -> Result<Preview>
where F: Fn(DVec2) -> f64 + Sync {
    if options.width == 0 || options.height == 0 {
        return Err(Error::EmptyPreview {
            width: options.width,
            height: options.height,
        });
    }
    let start = Instant::now();
    let count = options.width as usize * options.height as usize;
    let samples = (0..count).into_par_iter()
        .map(|i| sample(options.world_pos(i)))
        .collect::<Vec<_>>();
    let width = options.width as usize;
    let image = GrayImage::from_fn(options.width, options.height, |x, y| {
        Luma([to_gray(samples[y as usize * width + x as usize])])
    });
    let stats = NoiseStats::from_samples(&samples);
    let elapsed = start.elapsed();
    log::info!(
        "Sampled {count} points in {elapsed:.3?} (min {:.4}, max {:.4}, mean {:.4})",
        stats.min, stats.max, stats.mean,
    );
    Ok(Preview { image, stats })
}

/// Renders 2D fractal noise.
pub fn render2(noise: &NoiseGenerator, options: &PreviewOptions) -> Result<Preview> {
    render(options, |pos| options.config.sample2(noise, pos.x, pos.y))
}

/// Renders a horizontal slice of 3D fractal noise at world height `z`.
pub fn render3_slice(noise: &NoiseGenerator, options: &PreviewOptions, z: f64) -> Result<Preview> {
    render(options, |pos| options.config.sample3(noise, pos.x, pos.y, z))
}

//! Random draws used for orbital seeding, nucleon jitter and force noise
//!
//! Every stochastic step in the model pulls from a [`RandomSource`], so tests
//! can swap in a seeded or fully deterministic source.

use glam::Vec3;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Uniform and Gaussian draws.
pub trait RandomSource {
    /// Uniform real in `[low, high)`
    fn uniform(&mut self, low: f32, high: f32) -> f32;

    /// Normally distributed real
    fn gaussian(&mut self, mean: f32, std_dev: f32) -> f32;

    /// Uniform integer in `[low, high]`
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;

    /// Zero-mean isotropic Gaussian vector, drawn x, then y, then z
    fn gaussian_vec3(&mut self, std_dev: f32) -> Vec3 {
        let x = self.gaussian(0.0, std_dev);
        let y = self.gaussian(0.0, std_dev);
        let z = self.gaussian(0.0, std_dev);
        Vec3::new(x, y, z)
    }

    /// Uniform point in the axis-aligned cube `[-half_extent, half_extent)³`
    fn uniform_in_cube(&mut self, half_extent: f32) -> Vec3 {
        let x = self.uniform(-half_extent, half_extent);
        let y = self.uniform(-half_extent, half_extent);
        let z = self.uniform(-half_extent, half_extent);
        Vec3::new(x, y, z)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<ThreadRng> {
    /// Process-wide thread-local generator, never reseeded
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.0.random::<f32>()
    }

    fn gaussian(&mut self, mean: f32, std_dev: f32) -> f32 {
        let z: f32 = self.0.sample(StandardNormal);
        mean + std_dev * z
    }

    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.0.random_range(low..=high)
    }
}

/// Deterministic source that always returns the centre of the distribution:
/// the lower bound for uniform draws and the mean for Gaussian ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSource;

impl RandomSource for MeanSource {
    fn uniform(&mut self, low: f32, _high: f32) -> f32 {
        low
    }

    fn gaussian(&mut self, mean: f32, _std_dev: f32) -> f32 {
        mean
    }

    fn uniform_int(&mut self, low: u32, _high: u32) -> u32 {
        low
    }
}

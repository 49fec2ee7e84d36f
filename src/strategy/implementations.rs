// src/strategy/implementations.rs

use crate::model::product::Product;
use crate::strategy::traits::NoiseSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
#[cfg(test)]
use std::collections::BTreeMap;

// =========================================================================
// 1. Uniform Noise
// =========================================================================

/// Draws an independent integer uniformly from the range on every call.
#[derive(Debug, Clone)]
pub struct UniformNoise {
    rng: StdRng,
}

impl UniformNoise {
    /// Seeded from OS entropy; not reproducible.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for UniformNoise {
    fn draw(&mut self, _product: Product, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        Uniform::new_inclusive(min, max).sample(&mut self.rng)
    }
}

// =========================================================================
// 2. Fixed Noise
// =========================================================================

/// Returns a preset offset per product, clamped into the requested range.
/// Products without an offset get 0.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct FixedNoise {
    offsets: BTreeMap<Product, i32>,
}

#[cfg(test)]
impl FixedNoise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, product: Product, offset: i32) -> Self {
        self.offsets.insert(product, offset);
        self
    }
}

#[cfg(test)]
impl NoiseSource for FixedNoise {
    fn draw(&mut self, product: Product, min: i32, max: i32) -> i32 {
        let offset = self.offsets.get(&product).copied().unwrap_or(0);
        offset.max(min).min(max)
    }
}

// =========================================================================
// 3. Zero Noise
// =========================================================================

/// No noise at all. The forecast collapses to base demand plus adjustments.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

#[cfg(test)]
impl NoiseSource for ZeroNoise {
    fn draw(&mut self, _product: Product, _min: i32, _max: i32) -> i32 {
        0
    }
}

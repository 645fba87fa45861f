//! Deterministic jitter for scattered item points.
//!
//! Items are spread across the box's cross axis by pseudo-random offsets that
//! must be identical every time they are generated for the same element, both
//! when drawing and when hit-testing. The generator is therefore rebuilt from
//! the element's identity on every use and never shared.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Identity of an element within a chart, used only to seed jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElementKey {
    /// Index of the dataset the element belongs to.
    pub dataset_index: usize,
    /// Index of the element within its dataset.
    pub element_index: usize,
}

impl ElementKey {
    /// Create a key from dataset and element indices.
    #[inline]
    pub const fn new(dataset_index: usize, element_index: usize) -> Self {
        Self {
            dataset_index,
            element_index,
        }
    }

    /// Jitter seed: `dataset_index * 1000 + element_index`.
    #[inline]
    pub fn seed(&self) -> u64 {
        (self.dataset_index as u64)
            .wrapping_mul(1000)
            .wrapping_add(self.element_index as u64)
    }
}

/// Seeded generator of jitter fractions in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    /// Generator for an element.
    pub fn new(key: ElementKey) -> Self {
        Self::from_seed(key.seed())
    }

    /// Generator for an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next fraction in `[0, 1)`.
    #[inline]
    pub fn next_fraction(&mut self) -> f32 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Cross-axis coordinates for `count` items on a box starting at
    /// `cross_start` with size `extent`.
    ///
    /// Each coordinate is `cross_start + fraction * extent`, kept inside the
    /// half-open span `[cross_start, cross_start + extent)` when rounding
    /// would land on the far edge.
    pub fn spread(key: ElementKey, cross_start: f32, extent: f32, count: usize) -> Vec<f32> {
        let end = cross_start + extent;
        let last = end.next_down().max(cross_start);
        Self::new(key)
            .take(count)
            .map(|fraction| {
                let cross = cross_start + fraction * extent;
                if cross < end { cross } else { last }
            })
            .collect()
    }
}

impl Iterator for Jitter {
    type Item = f32;

    #[inline]
    fn next(&mut self) -> Option<f32> {
        Some(self.next_fraction())
    }
}

use crate::core::Rgba;
use crate::pipeline::Painter;
use glam::Vec4;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

const CHUNK: usize = 1024;

/// Uniform random static: every pixel gets independent RGB in `[0, 1)`, alpha 1.
///
/// Each frame draws one base seed and every 1024-pixel chunk derives its own
/// generator from it, so the output only depends on the painter's state and
/// the buffer length, not on how rayon schedules the chunks.
#[derive(Debug, Clone)]
pub struct Noise {
    rng: StdRng,
    frozen: Option<u64>,
}

impl Noise {
    /// Fresh static every frame, seeded from the OS.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            frozen: None,
        }
    }

    /// Deterministic stream of frames.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            frozen: None,
        }
    }

    /// Same frame every time.
    pub fn frozen(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            frozen: Some(seed),
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }
}

impl Default for Noise {
    fn default() -> Self {
        Self::random()
    }
}

impl Painter for Noise {
    fn paint(&mut self, pixels: &mut [Rgba]) {
        if let Some(seed) = self.frozen {
            self.rng = StdRng::seed_from_u64(seed);
        }
        let base: u64 = self.rng.gen();

        pixels
            .par_chunks_mut(CHUNK)
            .enumerate()
            .for_each(|(i, chunk)| {
                let seed = base ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                let mut rng = StdRng::seed_from_u64(seed);
                for pixel in chunk {
                    *pixel = Vec4::new(rng.gen(), rng.gen(), rng.gen(), 1.0);
                }
            });
    }
}

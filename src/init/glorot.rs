use log::debug;
use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};

use super::WeightInitializer;
use crate::math::Matrix;

/// Glorot & Bengio (2010) uniform initialization.
///
/// Each entry of a `rows × cols` matrix is drawn from `U(-v, v)` with `v = sqrt(6 / (rows + cols))`.
/// The generator is owned by the initializer, so a fixed seed reproduces the same weights.
#[derive(Debug, Clone)]
pub struct GlorotInitializer<R: Rng = StdRng> {
    rng: R,
}

impl GlorotInitializer<StdRng> {
    /// Creates a new `GlorotInitializer` seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GlorotInitializer<R> {
    /// Creates a new `GlorotInitializer` drawing from `rng`.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// The half-width of the sampling range for a `rows × cols` matrix.
    pub fn bound(rows: usize, cols: usize) -> f64 {
        (6.0 / (rows + cols).max(1) as f64).sqrt()
    }
}

impl<R: Rng> WeightInitializer for GlorotInitializer<R> {
    fn initialize(&mut self, weights: &mut [Matrix]) {
        for m in weights.iter_mut() {
            let v = Self::bound(m.rows, m.cols);
            let dist = Uniform::new_inclusive(-v, v);

            for row in m.data.iter_mut() {
                for w in row.iter_mut() {
                    *w = self.rng.sample(dist);
                }
            }

            debug!("glorot initializer filled a {}x{} matrix within ±{v:.4}", m.rows, m.cols);
        }
    }
}

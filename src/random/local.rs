use rand::Rng;

use crate::error::Result;
use crate::random::RandomSource;

/// Thread-local RNG draw, for running battles without network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRandomSource;

impl RandomSource for LocalRandomSource {
    fn get_random(&self) -> Result<f64> {
        let value: f64 = rand::thread_rng().gen_range(0.0..1.0);
        tracing::debug!(value, "local random draw");
        Ok(value)
    }
}

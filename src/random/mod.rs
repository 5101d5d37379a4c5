//! Sources of the single uniform draw each battle consumes.

mod local;
mod random_org;

pub use local::LocalRandomSource;
pub use random_org::{
    RANDOM_ORG_TIMEOUT, RANDOM_ORG_URL, RandomOrgConfig, RandomOrgSource, parse_random_response,
};

use crate::error::Result;

/// Supplies uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn get_random(&self) -> Result<f64>;
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn get_random(&self) -> Result<f64> {
        (**self).get_random()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn get_random(&self) -> Result<f64> {
        (**self).get_random()
    }
}

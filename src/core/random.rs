use super::errors::SimError;
use rand::RngCore;
use rand_distr::{Distribution, Open01};

/// Source of i.i.d. uniform(0, 1) draws consumed by the arrival generator
/// and the stage router.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

// Any rand generator works; Open01 keeps draws off both interval ends.
impl<R: RngCore + ?Sized> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        Open01.sample(self)
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    draws: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    /// Create a source replaying `draws` in order.
    ///
    /// # Panics
    /// Panics if `draws` is empty.
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "FixedSequence needs at least one draw");
        Self { draws, position: 0 }
    }

    /// Source returning the same value for every draw
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl UniformSource for FixedSequence {
    fn next_uniform(&mut self) -> f64 {
        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw
    }
}

/// Exponential variate with the given rate, by inverse CDF: `-ln(u) / rate`.
pub fn exponential<S: UniformSource + ?Sized>(source: &mut S, rate: f64) -> Result<f64, SimError> {
    let u = source.next_uniform();
    if !(u > 0.0 && u < 1.0) {
        return Err(SimError::SamplingDomain { draw: u });
    }
    Ok(-u.ln() / rate)
}

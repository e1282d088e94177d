use super::errors::SimError;
use super::random::{exponential, UniformSource};

/// Sample the arrival instants of a Poisson process with rate `rate` on
/// `[0, horizon)`.
///
/// Interarrival gaps are exponential with mean `1 / rate`; sampling stops at
/// the first cumulative time that reaches the horizon, and that overshooting
/// instant is discarded. The returned instants are strictly increasing.
pub fn poisson_arrivals<S: UniformSource + ?Sized>(
    source: &mut S,
    rate: f64,
    horizon: f64,
) -> Result<Vec<f64>, SimError> {
    let mut times = Vec::new();
    let mut t = 0.0;
    loop {
        t += exponential(source, rate)?;
        if t >= horizon {
            break;
        }
        times.push(t);
    }
    Ok(times)
}

use crate::core::arrivals::poisson_arrivals;
use crate::core::errors::SimError;
use crate::core::execution::config::SimulationConfig;
use crate::core::execution::event_clock::EventClock;
use crate::core::execution::observer::ReplicationObserver;
use crate::core::random::UniformSource;
use crate::core::results::OutcomeBuckets;
use crate::core::router::StageRouter;
use log::debug;

/// Result of one simulated day
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicationOutcome {
    pub buckets: OutcomeBuckets,
    /// Number of applicants that arrived
    pub admitted: usize,
    /// Instant of the last real arrival, if any
    pub last_arrival: Option<f64>,
    /// Instant the last applicant left the office
    pub closing_time: f64,
}

/// Run one replication to exhaustion.
///
/// The whole arrival sequence is sampled first, then each arrival is fed
/// through the event clock and routed on admission. After the last arrival
/// the end-of-day sentinel drains every station.
pub fn run_replication<S, O>(
    config: &SimulationConfig,
    source: &mut S,
    observer: &mut O,
) -> Result<ReplicationOutcome, SimError>
where
    S: UniformSource + ?Sized,
    O: ReplicationObserver + ?Sized,
{
    config.validate()?;
    replicate(config, source, observer)
}

/// Replication body without parameter validation
pub(crate) fn replicate<S, O>(
    config: &SimulationConfig,
    source: &mut S,
    observer: &mut O,
) -> Result<ReplicationOutcome, SimError>
where
    S: UniformSource + ?Sized,
    O: ReplicationObserver + ?Sized,
{
    let arrivals = poisson_arrivals(source, config.arrival_rate, config.horizon)?;
    let mut router = StageRouter::new(config.rates, config.branching);
    let mut clock = EventClock::new();
    let mut buckets = OutcomeBuckets::new();

    for &arrival in &arrivals {
        clock.advance_to(Some(arrival), &mut buckets, observer);
        let applicant = router.route(source)?;
        clock.admit(applicant, observer);
    }
    clock.advance_to(None, &mut buckets, observer);

    let last_arrival = arrivals.last().copied();
    observer.on_replication_end(clock.clock(), last_arrival, clock.is_idle());
    debug_assert!(clock.is_idle(), "sentinel drain must empty every station");

    debug!(
        "Replication done: {} admitted, {} completed, {} rejected, closed at {:.3}h",
        arrivals.len(),
        buckets.completed.len(),
        buckets.rejected.len(),
        clock.clock()
    );

    Ok(ReplicationOutcome {
        buckets,
        admitted: arrivals.len(),
        last_arrival,
        closing_time: clock.clock(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::execution::observer::NoopObserver;
    use crate::core::random::FixedSequence;

    #[test]
    fn test_no_arrivals_gives_empty_day() {
        let config = SimulationConfig::new().with_horizon(0.05);
        let mut source = FixedSequence::constant(0.5);
        let outcome = run_replication(&config, &mut source, &mut NoopObserver).unwrap();

        assert_eq!(outcome.admitted, 0);
        assert!(outcome.buckets.is_empty());
        assert_eq!(outcome.last_arrival, None);
        assert_eq!(outcome.closing_time, 0.0);
    }

    #[test]
    fn test_invalid_config_fails_before_sampling() {
        let config = SimulationConfig::new().with_arrival_rate(0.0);
        let mut source = FixedSequence::constant(0.5);
        assert!(run_replication(&config, &mut source, &mut NoopObserver).is_err());
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn test_sampling_domain_error_propagates() {
        let config = SimulationConfig::new();
        let mut source = FixedSequence::constant(0.0);
        assert_eq!(
            run_replication(&config, &mut source, &mut NoopObserver),
            Err(SimError::SamplingDomain { draw: 0.0 })
        );
    }
}

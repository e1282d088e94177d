use crate::core::errors::SimError;
use crate::core::execution::config::SimulationConfig;
use crate::core::execution::observer::{NoopObserver, ReplicationObserver};
use crate::core::execution::replication::replicate;
use crate::core::random::UniformSource;
use crate::core::results::OutcomeBuckets;
use log::{debug, info};

/// Runs K independent replications and pools their outcomes.
///
/// Replications share the random source sequentially and nothing else; each
/// one starts from a fresh clock and empty stations.
#[derive(Debug, Clone)]
pub struct Experiment {
    config: SimulationConfig,
}

impl Experiment {
    /// Validate the configuration up front so a bad parameter never yields
    /// partial results
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run with the generator described by the configuration's seed
    pub fn run_seeded(&self) -> Result<OutcomeBuckets, SimError> {
        let mut rng = self.config.rng();
        self.run(&mut rng)
    }

    pub fn run<S: UniformSource + ?Sized>(&self, source: &mut S) -> Result<OutcomeBuckets, SimError> {
        self.run_observed(source, &mut NoopObserver)
    }

    /// Run while reporting every replication's events to `observer`
    pub fn run_observed<S, O>(&self, source: &mut S, observer: &mut O) -> Result<OutcomeBuckets, SimError>
    where
        S: UniformSource + ?Sized,
        O: ReplicationObserver + ?Sized,
    {
        let mut pooled = OutcomeBuckets::new();
        let mut admitted = 0;

        for replication in 0..self.config.replications {
            debug!("=== Replication {} ===", replication + 1);
            let outcome = replicate(&self.config, source, observer)?;
            admitted += outcome.admitted;
            pooled.merge(outcome.buckets);
        }

        info!(
            "Experiment finished: {} replications, {} applicants ({} completed, {} rejected)",
            self.config.replications,
            admitted,
            pooled.completed.len(),
            pooled.rejected.len()
        );
        Ok(pooled)
    }
}

/// Run `config.replications` replications drawing from `source`.
///
/// Fails with `InvalidParameter` before any draw when the configuration is
/// out of domain.
pub fn run_replications<S: UniformSource + ?Sized>(
    config: &SimulationConfig,
    source: &mut S,
) -> Result<OutcomeBuckets, SimError> {
    Experiment::new(config.clone())?.run(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::FixedSequence;

    #[test]
    fn test_zero_replications_is_empty() {
        let config = SimulationConfig::new().with_replications(0);
        let mut source = FixedSequence::constant(0.5);
        let buckets = run_replications(&config, &mut source).unwrap();
        assert!(buckets.is_empty());
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn test_invalid_parameter_yields_no_results() {
        let config = SimulationConfig::new().with_branching(0.5, 2.0, 0.5);
        let mut source = FixedSequence::constant(0.5);
        match run_replications(&config, &mut source) {
            Err(SimError::InvalidParameter { name, .. }) => assert_eq!(name, "branching.case_approval"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_replications_are_pooled() {
        // One self-checked applicant per day at T = 0.1
        let config = SimulationConfig::new()
            .with_replications(4)
            .with_branching(1.0, 0.0, 0.0)
            .with_horizon(0.1);
        let mut source = FixedSequence::constant(0.5);
        let buckets = run_replications(&config, &mut source).unwrap();

        assert_eq!(buckets.completed.len(), 4);
        assert!(buckets.rejected.is_empty());
        for sojourn in &buckets.completed {
            assert!((sojourn - 2f64.ln() / 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = SimulationConfig::new().with_replications(5).with_seed(11);
        let experiment = Experiment::new(config).unwrap();
        assert_eq!(experiment.run_seeded().unwrap(), experiment.run_seeded().unwrap());
    }
}

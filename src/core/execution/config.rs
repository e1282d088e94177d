//! Configuration for office simulation runs
//!
//! This module holds the parameters of an experiment: how many replications
//! to run, the arrival process, the per-station service rates and the branch
//! probabilities of the routing tree. All rates are per hour and all times
//! are in hours.

use crate::core::errors::SimError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Service rate of each station (μf, μc, μw)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRates {
    pub fingerprint: f64,
    pub case_review: f64,
    pub interview: f64,
}

impl Default for ServiceRates {
    fn default() -> Self {
        Self {
            fingerprint: 6.0,
            case_review: 5.0,
            interview: 4.0,
        }
    }
}

/// Branch probabilities of the routing tree (p, q, r)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchProbabilities {
    /// Applicant used the self-check service and goes straight to Fingerprint
    pub self_check: f64,
    /// Case review approves the application
    pub case_approval: f64,
    /// Interview approves the application
    pub interview_approval: f64,
}

impl Default for BranchProbabilities {
    fn default() -> Self {
        Self {
            self_check: 0.5,
            case_approval: 0.6,
            interview_approval: 0.4,
        }
    }
}

/// Parameters of one experiment
///
/// The default describes one working day (9 to 17) repeated 500 times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of independent replications (K)
    pub replications: usize,
    /// Arrival rate of the Poisson process (λ)
    pub arrival_rate: f64,
    pub rates: ServiceRates,
    pub branching: BranchProbabilities,
    /// Length of the arrival window (T)
    pub horizon: f64,
    /// Seed for the default generator; entropy is used when absent
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            replications: 500,
            arrival_rate: 8.0,
            rates: ServiceRates::default(),
            branching: BranchProbabilities::default(),
            horizon: 8.0,
            seed: None,
        }
    }

    /// Set the number of independent replications
    ///
    /// # Arguments
    /// * `replications` - How many simulated days to run (K)
    ///
    /// # Returns
    /// A new configuration with the specified replication count
    pub fn with_replications(mut self, replications: usize) -> Self {
        self.replications = replications;
        self
    }

    /// Set the arrival rate of the Poisson process (per hour)
    pub fn with_arrival_rate(mut self, rate: f64) -> Self {
        self.arrival_rate = rate;
        self
    }

    /// Set the service rate of every station (per hour)
    ///
    /// # Arguments
    /// * `fingerprint` - Fingerprint rate (μf)
    /// * `case_review` - Case review rate (μc)
    /// * `interview` - Interview rate (μw)
    ///
    /// # Returns
    /// A new configuration with the specified service rates
    pub fn with_service_rates(mut self, fingerprint: f64, case_review: f64, interview: f64) -> Self {
        self.rates = ServiceRates {
            fingerprint,
            case_review,
            interview,
        };
        self
    }

    /// Set the branch probabilities of the routing tree
    ///
    /// # Arguments
    /// * `self_check` - Probability of going straight to Fingerprint (p)
    /// * `case_approval` - Probability that case review approves (q)
    /// * `interview_approval` - Probability that the interview approves (r)
    ///
    /// # Returns
    /// A new configuration with the specified branching
    ///
    /// # Note
    /// Values are only checked by `validate`
    pub fn with_branching(mut self, self_check: f64, case_approval: f64, interview_approval: f64) -> Self {
        self.branching = BranchProbabilities {
            self_check,
            case_approval,
            interview_approval,
        };
        self
    }

    /// Set the length of the arrival window in hours (T)
    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Fix the seed used by `rng`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter before any replication starts
    pub fn validate(&self) -> Result<(), SimError> {
        positive("arrival_rate", self.arrival_rate)?;
        positive("rates.fingerprint", self.rates.fingerprint)?;
        positive("rates.case_review", self.rates.case_review)?;
        positive("rates.interview", self.rates.interview)?;
        probability("branching.self_check", self.branching.self_check)?;
        probability("branching.case_approval", self.branching.case_approval)?;
        probability("branching.interview_approval", self.branching.interview_approval)?;
        positive("horizon", self.horizon)?;
        Ok(())
    }

    /// Generator seeded from `seed`, or from OS entropy when unset
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), SimError> {
    if !value.is_finite() {
        return Err(SimError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(SimError::invalid(name, value, "must be strictly positive"));
    }
    Ok(())
}

fn probability(name: &'static str, value: f64) -> Result<(), SimError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SimError::invalid(name, value, "must lie in [0, 1]"));
    }
    Ok(())
}

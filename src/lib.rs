pub mod core;

// Re-export commonly used types
pub use crate::core::errors::SimError;
pub use crate::core::execution::{
    run_replication, run_replications, Experiment, ReplicationObserver, ReplicationOutcome,
    SimulationConfig,
};
pub use crate::core::random::{FixedSequence, UniformSource};
pub use crate::core::results::OutcomeBuckets;
pub use crate::core::types::{Disposition, StationId};

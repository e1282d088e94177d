pub mod config;
pub mod event_clock;
pub mod experiment;
pub mod observer;
pub mod replication;

// Re-export commonly used types
pub use config::{BranchProbabilities, ServiceRates, SimulationConfig};
pub use event_clock::EventClock;
pub use experiment::{run_replications, Experiment};
pub use observer::{NoopObserver, ReplicationObserver};
pub use replication::{run_replication, ReplicationOutcome};

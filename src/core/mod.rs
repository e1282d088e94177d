pub mod applicant;
pub mod arrivals;
pub mod errors;
pub mod execution;
pub mod random;
pub mod results;
pub mod router;
pub mod station;
pub mod stats;
pub mod types;

use crate::core::applicant::Applicant;
use crate::core::types::StationId;

/// Observer trait for replication events
///
/// All methods default to no-ops so observers only implement what they need.
/// Times are simulation clock readings in hours.
pub trait ReplicationObserver {
    /// Called when an arriving applicant joins its first station
    fn on_admit(&mut self, _time: f64, _applicant: &Applicant) {}

    /// Called when the head of `station` finishes its service there, before
    /// it moves on or leaves
    fn on_stage_complete(&mut self, _time: f64, _station: StationId, _applicant: &Applicant) {}

    /// Called when an applicant has exhausted its stage plan
    fn on_departure(&mut self, _time: f64, _applicant: &Applicant) {}

    /// Called once the sentinel drain has emptied every station
    fn on_replication_end(&mut self, _closing_time: f64, _last_arrival: Option<f64>, _idle: bool) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ReplicationObserver for NoopObserver {}

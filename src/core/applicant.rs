use super::types::{Disposition, Stage, StationId};
use std::collections::VecDeque;

/// One applicant moving through the office.
///
/// The stage plan is fixed at admission. Only the remaining duration of the
/// first stage ever changes, and only while the applicant is at the head of
/// its station.
#[derive(Debug, Clone)]
pub struct Applicant {
    id: u64,
    stages: VecDeque<Stage>,
    disposition: Disposition,
    elapsed_total: f64,
    service_total: f64,
}

impl Applicant {
    /// Create a freshly admitted applicant. `stages` must not be empty.
    pub fn new(id: u64, stages: Vec<Stage>, disposition: Disposition) -> Self {
        debug_assert!(!stages.is_empty(), "stage plan must have at least one stage");
        let service_total: f64 = stages.iter().map(|stage| stage.remaining).sum();
        Self {
            id,
            stages: stages.into(),
            disposition,
            elapsed_total: 0.0,
            service_total,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Time accrued since admission, waiting included
    pub fn elapsed_total(&self) -> f64 {
        self.elapsed_total
    }

    /// Sum of all service durations in the plan as admitted
    pub fn service_total(&self) -> f64 {
        self.service_total
    }

    /// Stages not yet completed, current stage first
    pub fn stages(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// Station of the current stage, or None once the plan is exhausted
    pub fn current_station(&self) -> Option<StationId> {
        self.stages.front().map(|stage| stage.station)
    }

    /// Service time still owed at the current station
    pub fn remaining(&self) -> Option<f64> {
        self.stages.front().map(|stage| stage.remaining)
    }

    pub fn is_finished(&self) -> bool {
        self.stages.is_empty()
    }

    /// Add wall-clock time spent in the office
    pub(crate) fn accrue(&mut self, delta: f64) {
        self.elapsed_total += delta;
    }

    /// Consume service time on the current stage
    pub(crate) fn serve(&mut self, delta: f64) {
        if let Some(stage) = self.stages.front_mut() {
            stage.remaining -= delta;
        }
    }

    /// Drop the current stage and return the next station to visit, if any
    pub(crate) fn complete_stage(&mut self) -> Option<StationId> {
        self.stages.pop_front();
        self.current_station()
    }
}

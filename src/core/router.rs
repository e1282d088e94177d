use super::applicant::Applicant;
use super::errors::SimError;
use super::execution::config::{BranchProbabilities, ServiceRates};
use super::random::{exponential, UniformSource};
use super::types::{Disposition, Stage, StationId};

/// Builds the stage plan of each admitted applicant.
///
/// The routing tree has four outcomes:
///
/// * self-checked: Fingerprint, completed
/// * case review approves: CaseReview, Fingerprint, completed
/// * interview approves: CaseReview, Interview, Fingerprint, completed
/// * interview declines: CaseReview, Interview, rejected
///
/// Every visit to a station draws a fresh service time at that station's
/// rate. Draws are taken in tree order: branch draw, then the service time of
/// the stage it selects.
#[derive(Debug, Clone)]
pub struct StageRouter {
    rates: ServiceRates,
    branching: BranchProbabilities,
    next_id: u64,
}

impl StageRouter {
    pub fn new(rates: ServiceRates, branching: BranchProbabilities) -> Self {
        Self {
            rates,
            branching,
            next_id: 0,
        }
    }

    /// Route a new applicant, assigning it the next sequential id
    pub fn route<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> Result<Applicant, SimError> {
        let mut stages = Vec::with_capacity(3);
        let mut disposition = Disposition::Completed;

        if source.next_uniform() < self.branching.self_check {
            stages.push(self.stage(source, StationId::Fingerprint)?);
        } else {
            stages.push(self.stage(source, StationId::CaseReview)?);
            if source.next_uniform() < self.branching.case_approval {
                stages.push(self.stage(source, StationId::Fingerprint)?);
            } else {
                stages.push(self.stage(source, StationId::Interview)?);
                if source.next_uniform() < self.branching.interview_approval {
                    stages.push(self.stage(source, StationId::Fingerprint)?);
                } else {
                    disposition = Disposition::Rejected;
                }
            }
        }

        let id = self.next_id;
        self.next_id += 1;
        Ok(Applicant::new(id, stages, disposition))
    }

    fn stage<S: UniformSource + ?Sized>(&self, source: &mut S, station: StationId) -> Result<Stage, SimError> {
        let rate = match station {
            StationId::Fingerprint => self.rates.fingerprint,
            StationId::CaseReview => self.rates.case_review,
            StationId::Interview => self.rates.interview,
        };
        Ok(Stage::new(station, exponential(source, rate)?))
    }
}

use super::applicant::Applicant;
use super::types::StationId;
use std::collections::VecDeque;

/// FIFO of applicants assigned to one single-server station.
///
/// The head of the queue is the applicant in service; everyone behind it is
/// waiting.
#[derive(Debug, Clone)]
pub struct StationQueue {
    station: StationId,
    queue: VecDeque<Applicant>,
}

impl StationQueue {
    pub fn new(station: StationId) -> Self {
        Self {
            station,
            queue: VecDeque::new(),
        }
    }

    pub fn station(&self) -> StationId {
        self.station
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remaining service time of the head-of-line applicant
    pub fn head_remaining(&self) -> Option<f64> {
        self.queue.front().and_then(Applicant::remaining)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Applicant> {
        self.queue.iter()
    }

    /// Join the tail of the queue
    pub fn push_back(&mut self, applicant: Applicant) {
        debug_assert_eq!(applicant.current_station(), Some(self.station));
        self.queue.push_back(applicant);
    }

    /// Remove the head-of-line applicant
    pub fn pop_head(&mut self) -> Option<Applicant> {
        self.queue.pop_front()
    }

    /// Let `delta` hours pass: everyone present accrues the time, only the
    /// head receives service.
    pub fn advance(&mut self, delta: f64) {
        for (position, applicant) in self.queue.iter_mut().enumerate() {
            applicant.accrue(delta);
            if position == 0 {
                applicant.serve(delta);
            }
        }
    }
}

use crate::core::applicant::Applicant;
use crate::core::execution::observer::ReplicationObserver;
use crate::core::results::OutcomeBuckets;
use crate::core::station::StationQueue;
use crate::core::types::StationId;
use log::trace;

/// Next-event selector over the three stations of one replication.
///
/// Each station's head-of-line applicant carries its own countdown of
/// remaining service. Between two external arrivals the clock repeatedly
/// picks the smallest countdown, lets that much time pass for everyone in
/// the office, and moves the finished applicant on. With only three stations
/// plus one pending arrival this linear minimum search replaces a general
/// event heap.
#[derive(Debug, Clone)]
pub struct EventClock {
    clock: f64,
    stations: [StationQueue; 3],
}

impl EventClock {
    /// Create a clock at time zero with empty stations
    pub fn new() -> Self {
        Self {
            clock: 0.0,
            stations: StationId::ALL.map(StationQueue::new),
        }
    }

    /// Current simulation time
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn station(&self, id: StationId) -> &StationQueue {
        &self.stations[id.index()]
    }

    /// Number of applicants currently in the office
    pub fn in_flight(&self) -> usize {
        self.stations.iter().map(StationQueue::len).sum()
    }

    /// True when every station is empty
    pub fn is_idle(&self) -> bool {
        self.stations.iter().all(StationQueue::is_empty)
    }

    /// The station whose head finishes first and the time until it does.
    ///
    /// Ties go to the lowest station index.
    pub fn next_completion(&self) -> Option<(StationId, f64)> {
        let mut best: Option<(StationId, f64)> = None;
        for queue in &self.stations {
            if let Some(remaining) = queue.head_remaining() {
                if best.map_or(true, |(_, min)| remaining < min) {
                    best = Some((queue.station(), remaining));
                }
            }
        }
        best
    }

    /// Process every completion whose remaining service is strictly less
    /// than the time left before `next_arrival`, then set the clock to the
    /// arrival instant.
    ///
    /// Applicants accrue time and receive service only through drained
    /// completions; the part of the gap after the last completion is not
    /// credited to anyone.
    ///
    /// `None` is the end-of-day sentinel: the drain runs until every station
    /// is empty and the clock stops at the last departure. Returns the number
    /// of stage completions processed.
    pub fn advance_to<O: ReplicationObserver + ?Sized>(
        &mut self,
        next_arrival: Option<f64>,
        buckets: &mut OutcomeBuckets,
        observer: &mut O,
    ) -> usize {
        let mut gap = match next_arrival {
            Some(arrival) => arrival - self.clock,
            None => f64::INFINITY,
        };
        let mut completions = 0;

        while let Some((station, delta)) = self.next_completion() {
            if delta >= gap {
                break;
            }
            gap -= delta;
            self.elapse(delta);
            self.complete_head(station, buckets, observer);
            completions += 1;
        }

        // Leftover gap moves the clock only; nobody accrues it.
        if let Some(arrival) = next_arrival {
            self.clock = arrival;
        }
        completions
    }

    /// Put a newly routed applicant at the tail of its first station
    pub fn admit<O: ReplicationObserver + ?Sized>(&mut self, applicant: Applicant, observer: &mut O) {
        if let Some(station) = applicant.current_station() {
            trace!(
                "[Clock {:.4}] Applicant {} joins {} (queue length {})",
                self.clock,
                applicant.id(),
                station,
                self.stations[station.index()].len()
            );
            observer.on_admit(self.clock, &applicant);
            self.stations[station.index()].push_back(applicant);
        }
    }

    /// Let `delta` hours pass at every station
    fn elapse(&mut self, delta: f64) {
        self.clock += delta;
        for queue in self.stations.iter_mut() {
            queue.advance(delta);
        }
    }

    /// Move the head of `station` to its next station, or record it as done
    fn complete_head<O: ReplicationObserver + ?Sized>(
        &mut self,
        station: StationId,
        buckets: &mut OutcomeBuckets,
        observer: &mut O,
    ) {
        let mut applicant = match self.stations[station.index()].pop_head() {
            Some(applicant) => applicant,
            None => return,
        };
        observer.on_stage_complete(self.clock, station, &applicant);

        match applicant.complete_stage() {
            Some(next) => {
                trace!(
                    "[Clock {:.4}] Applicant {} leaves {} for {}",
                    self.clock,
                    applicant.id(),
                    station,
                    next
                );
                self.stations[next.index()].push_back(applicant);
            }
            None => {
                trace!(
                    "[Clock {:.4}] Applicant {} done at {} ({:?}, {:.4}h in office)",
                    self.clock,
                    applicant.id(),
                    station,
                    applicant.disposition(),
                    applicant.elapsed_total()
                );
                observer.on_departure(self.clock, &applicant);
                buckets.record(applicant.disposition(), applicant.elapsed_total());
            }
        }
    }
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}

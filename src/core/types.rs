use serde::{Deserialize, Serialize};

/// One of the three single-server stations in the office.
///
/// The declaration order is also the tie-break order of the next-event
/// selector: when two heads finish at the same instant, the station with the
/// lower index completes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StationId {
    Fingerprint,
    CaseReview,
    Interview,
}

impl StationId {
    /// All stations in index order
    pub const ALL: [StationId; 3] = [
        StationId::Fingerprint,
        StationId::CaseReview,
        StationId::Interview,
    ];

    /// Position of the station in fixed-size station arrays
    pub fn index(self) -> usize {
        match self {
            StationId::Fingerprint => 0,
            StationId::CaseReview => 1,
            StationId::Interview => 2,
        }
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StationId::Fingerprint => "Fingerprint",
            StationId::CaseReview => "CaseReview",
            StationId::Interview => "Interview",
        };
        write!(f, "{}", name)
    }
}

/// Terminal outcome of an applicant, decided once at admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    Completed,
    Rejected,
}

/// One step of a stage plan: the station to visit and the service time
/// still owed there (hours).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub station: StationId,
    pub remaining: f64,
}

impl Stage {
    pub fn new(station: StationId, duration: f64) -> Self {
        Self {
            station,
            remaining: duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_indices_follow_declaration_order() {
        for (i, station) in StationId::ALL.iter().enumerate() {
            assert_eq!(station.index(), i);
        }
        assert!(StationId::Fingerprint < StationId::CaseReview);
        assert!(StationId::CaseReview < StationId::Interview);
    }

    #[test]
    fn test_station_display() {
        assert_eq!(StationId::CaseReview.to_string(), "CaseReview");
    }
}

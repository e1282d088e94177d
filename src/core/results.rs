use super::types::Disposition;
use serde::{Deserialize, Serialize};

/// Sojourn-time samples split by disposition.
///
/// Sample order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeBuckets {
    pub completed: Vec<f64>,
    pub rejected: Vec<f64>,
}

impl OutcomeBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one applicant's total time in the office
    pub fn record(&mut self, disposition: Disposition, sojourn: f64) {
        match disposition {
            Disposition::Completed => self.completed.push(sojourn),
            Disposition::Rejected => self.rejected.push(sojourn),
        }
    }

    /// Append every sample of `other`
    pub fn merge(&mut self, other: OutcomeBuckets) {
        self.completed.extend(other.completed);
        self.rejected.extend(other.rejected);
    }

    /// Completed and rejected samples together
    pub fn all(&self) -> Vec<f64> {
        self.completed.iter().chain(self.rejected.iter()).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.completed.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_routes_by_disposition() {
        let mut buckets = OutcomeBuckets::new();
        buckets.record(Disposition::Completed, 1.0);
        buckets.record(Disposition::Rejected, 2.0);
        buckets.record(Disposition::Completed, 3.0);

        assert_eq!(buckets.completed, vec![1.0, 3.0]);
        assert_eq!(buckets.rejected, vec![2.0]);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.all(), vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_merge_concatenates() {
        let mut left = OutcomeBuckets::new();
        left.record(Disposition::Completed, 1.0);
        let mut right = OutcomeBuckets::new();
        right.record(Disposition::Completed, 2.0);
        right.record(Disposition::Rejected, 4.0);

        left.merge(right);
        assert_eq!(left.completed, vec![1.0, 2.0]);
        assert_eq!(left.rejected, vec![4.0]);
    }
}

//! Post-processing of pooled sojourn times: bucket means and density
//! histograms.

use super::results::OutcomeBuckets;
use serde::Serialize;

/// Arithmetic mean, or None for an empty sample
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// Density histogram over evenly spaced bin edges.
///
/// Samples outside `[lo, hi]` are ignored; every bin is half-open except the
/// last, which also holds `hi`. Densities integrate to one over the range
/// whenever at least one sample falls inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub density: Vec<f64>,
}

impl Histogram {
    /// Build a histogram with `edge_count` edges (so `edge_count - 1` bins)
    /// spanning `[lo, hi]`. Fewer than two edges, or `hi <= lo`, yields an
    /// empty histogram.
    pub fn density(samples: &[f64], lo: f64, hi: f64, edge_count: usize) -> Self {
        if edge_count < 2 || !(hi > lo) {
            return Self {
                edges: Vec::new(),
                counts: Vec::new(),
                density: Vec::new(),
            };
        }

        let bins = edge_count - 1;
        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..edge_count).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0usize; bins];

        for &sample in samples {
            if !(sample >= lo && sample <= hi) {
                continue;
            }
            let bin = (((sample - lo) / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        let inside: usize = counts.iter().sum();
        let density = counts
            .iter()
            .map(|&count| {
                if inside == 0 {
                    0.0
                } else {
                    count as f64 / (inside as f64 * width)
                }
            })
            .collect();

        Self {
            edges,
            counts,
            density,
        }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }
}

/// Count and mean of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketSummary {
    pub count: usize,
    pub mean: Option<f64>,
}

impl BucketSummary {
    pub fn of(samples: &[f64]) -> Self {
        Self {
            count: samples.len(),
            mean: mean(samples),
        }
    }
}

/// Summaries for all applicants (Ta), completed (Tc) and rejected (Tr)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExperimentReport {
    pub all: BucketSummary,
    pub completed: BucketSummary,
    pub rejected: BucketSummary,
}

impl ExperimentReport {
    pub fn from_buckets(buckets: &OutcomeBuckets) -> Self {
        Self {
            all: BucketSummary::of(&buckets.all()),
            completed: BucketSummary::of(&buckets.completed),
            rejected: BucketSummary::of(&buckets.rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Disposition;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
    }

    #[test]
    fn test_histogram_bins_and_closed_last_edge() {
        let histogram = Histogram::density(&[0.0, 0.5, 1.0, 1.5, 2.0, 5.0, -1.0], 0.0, 2.0, 5);
        assert_eq!(histogram.bins(), 4);
        assert_eq!(histogram.edges, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        // 2.0 lands in the last bin, 5.0 and -1.0 are dropped
        assert_eq!(histogram.counts, vec![1, 1, 1, 2]);

        let area: f64 = histogram.density.iter().map(|d| d * 0.5).sum();
        assert!((area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_degenerate_inputs() {
        assert_eq!(Histogram::density(&[1.0], 0.0, 1.0, 1).bins(), 0);
        assert_eq!(Histogram::density(&[1.0], 1.0, 1.0, 10).bins(), 0);

        let empty = Histogram::density(&[], 0.0, 15.0, 100);
        assert_eq!(empty.bins(), 99);
        assert!(empty.density.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_report_from_buckets() {
        let mut buckets = OutcomeBuckets::new();
        buckets.record(Disposition::Completed, 1.0);
        buckets.record(Disposition::Completed, 3.0);
        buckets.record(Disposition::Rejected, 5.0);

        let report = ExperimentReport::from_buckets(&buckets);
        assert_eq!(report.all.count, 3);
        assert_eq!(report.all.mean, Some(3.0));
        assert_eq!(report.completed.mean, Some(2.0));
        assert_eq!(report.rejected.mean, Some(5.0));
    }
}

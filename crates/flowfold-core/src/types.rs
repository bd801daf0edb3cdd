//! Point, flow and label containers produced by every sampler.

use std::fmt;

use nalgebra::MatrixXx3;

use crate::error::ManifoldError;

/// `N × 3` matrix of point coordinates, one row per point.
pub type PointSet = MatrixXx3<f64>;

/// `N × 3` matrix of tangent vectors, row `i` belongs to point `i`.
///
/// Flows are not normalized; their magnitude may encode the speed of the
/// parametrization.
pub type FlowSet = MatrixXx3<f64>;

/// Generating parameter (θ) of each point, sorted ascending.
pub type LabelSet = Vec<f64>;

// ---------------------------------------------------------------------------
// ManifoldSample
// ---------------------------------------------------------------------------

/// One draw from a directed manifold: points, their flows and their labels,
/// all of the same length and in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifoldSample {
    points: PointSet,
    flows: FlowSet,
    labels: LabelSet,
}

impl ManifoldSample {
    /// Bundle points, flows and labels.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::LengthMismatch`] unless all three have the
    /// same number of entries.
    pub fn new(points: PointSet, flows: FlowSet, labels: LabelSet) -> Result<Self, ManifoldError> {
        if points.nrows() != flows.nrows() || points.nrows() != labels.len() {
            return Err(ManifoldError::LengthMismatch {
                points: points.nrows(),
                flows: flows.nrows(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            points,
            flows,
            labels,
        })
    }

    /// Number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    #[must_use]
    pub const fn flows(&self) -> &FlowSet {
        &self.flows
    }

    #[must_use]
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Split into `(points, flows, labels)`.
    #[must_use]
    pub fn into_parts(self) -> (PointSet, FlowSet, LabelSet) {
        (self.points, self.flows, self.labels)
    }

    /// `true` if labels are non-decreasing.
    #[must_use]
    pub fn labels_sorted(&self) -> bool {
        self.labels.windows(2).all(|w| w[0] <= w[1])
    }

    /// Summary statistics of this sample.
    #[must_use]
    pub fn summary(&self) -> SampleSummary {
        SampleSummary::of(self)
    }
}

// ---------------------------------------------------------------------------
// SampleSummary
// ---------------------------------------------------------------------------

/// Compact description of a [`ManifoldSample`], used for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub count: usize,
    /// `(min, max)` label, `None` for an empty sample.
    pub label_range: Option<(f64, f64)>,
    /// Per-axis minimum of the points.
    pub min: [f64; 3],
    /// Per-axis maximum of the points.
    pub max: [f64; 3],
    /// Mean Euclidean norm of the flows.
    pub mean_flow_norm: f64,
}

impl SampleSummary {
    fn of(sample: &ManifoldSample) -> Self {
        let count = sample.len();
        let label_range = match (sample.labels.first(), sample.labels.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        };

        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for row in sample.points.row_iter() {
            for axis in 0..3 {
                min[axis] = min[axis].min(row[axis]);
                max[axis] = max[axis].max(row[axis]);
            }
        }

        let mean_flow_norm = if count == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let n = count as f64;
            sample.flows.row_iter().map(|r| r.norm()).sum::<f64>() / n
        };

        Self {
            count,
            label_range,
            min,
            max,
            mean_flow_norm,
        }
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.count)?;
        if let Some((lo, hi)) = self.label_range {
            write!(f, " labels=[{lo:.4}, {hi:.4}]")?;
        }
        write!(
            f,
            " x=[{:.4}, {:.4}] y=[{:.4}, {:.4}] z=[{:.4}, {:.4}] |flow|={:.4}",
            self.min[0],
            self.max[0],
            self.min[1],
            self.max[1],
            self.min[2],
            self.max[2],
            self.mean_flow_norm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> ManifoldSample {
        let points = PointSet::from_row_slice(&[
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            -1.0, 0.0, 2.0, //
            0.0, -1.0, -2.0,
        ]);
        let flows = FlowSet::from_row_slice(&[
            0.0, 1.0, 0.0, //
            -1.0, 0.0, 0.0, //
            0.0, -3.0, 0.0, //
            3.0, 0.0, 0.0,
        ]);
        ManifoldSample::new(points, flows, vec![0.0, 1.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = ManifoldSample::new(PointSet::zeros(3), FlowSet::zeros(3), vec![0.0; 2])
            .unwrap_err();
        assert_eq!(
            err,
            ManifoldError::LengthMismatch {
                points: 3,
                flows: 3,
                labels: 2
            }
        );
    }

    #[test]
    fn accessors_and_parts() {
        let s = square();
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert!(s.labels_sorted());
        let (p, f, l) = s.into_parts();
        assert_eq!(p.nrows(), 4);
        assert_eq!(f.nrows(), 4);
        assert_eq!(l, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn unsorted_labels_detected() {
        let s = ManifoldSample::new(PointSet::zeros(2), FlowSet::zeros(2), vec![1.0, 0.5]).unwrap();
        assert!(!s.labels_sorted());
    }

    #[test]
    fn summary_bounds_and_flow_norm() {
        let summary = square().summary();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.label_range, Some((0.0, 3.0)));
        assert_eq!(summary.min, [-1.0, -1.0, -2.0]);
        assert_eq!(summary.max, [1.0, 1.0, 2.0]);
        assert_relative_eq!(summary.mean_flow_norm, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn summary_of_empty_sample() {
        let s = ManifoldSample::new(PointSet::zeros(0), FlowSet::zeros(0), Vec::new()).unwrap();
        let summary = s.summary();
        assert!(s.is_empty());
        assert_eq!(summary.label_range, None);
        assert_eq!(summary.mean_flow_norm, 0.0);
    }

    #[test]
    fn summary_display() {
        let text = square().summary().to_string();
        assert!(text.starts_with("n=4 labels=[0.0000, 3.0000]"), "{text}");
        assert!(text.ends_with("|flow|=2.0000"), "{text}");
    }
}

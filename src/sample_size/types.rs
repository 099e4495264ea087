use serde::Serialize;

use crate::range::types::SweepAxis;

/// Required sample size(s). Single and Pair come from one evaluation,
/// Curve and CurvePair from a sweep. Pairs are (control, treatment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SampleSizeResult {
    Single(usize),
    Pair(usize, usize),
    Curve(Vec<usize>),
    CurvePair(Vec<usize>, Vec<usize>),
}

impl SampleSizeResult {
    /// Scales a treatment-equivalent size n into group sizes: the control
    /// group gets ceil(k * n), the treatment group ceil(n).
    pub fn from_treatment_unit(n: f64, k: f64) -> Self {
        if k == 1.0 {
            SampleSizeResult::Single(n.ceil() as usize)
        } else {
            SampleSizeResult::Pair((k * n).ceil() as usize, n.ceil() as usize)
        }
    }

    /// (control, treatment) for single-evaluation results
    pub fn group_sizes(&self) -> Option<(usize, usize)> {
        match self {
            SampleSizeResult::Single(n) => Some((*n, *n)),
            SampleSizeResult::Pair(control, treatment) => Some((*control, *treatment)),
            _ => None,
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            SampleSizeResult::Curve(_) | SampleSizeResult::CurvePair(_, _)
        )
    }

    /// Number of evaluated points: 1 for Single/Pair
    pub fn len(&self) -> usize {
        match self {
            SampleSizeResult::Single(_) | SampleSizeResult::Pair(_, _) => 1,
            SampleSizeResult::Curve(v) => v.len(),
            SampleSizeResult::CurvePair(control, _) => control.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of one dispatcher call: the sizes plus the axis they were swept
/// over, so callers can plot without recomputing the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSizeCalculation {
    pub axis: SweepAxis,
    pub sample_size: SampleSizeResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treatment_unit_equal_allocation() {
        assert_eq!(
            SampleSizeResult::from_treatment_unit(353.1995, 1.),
            SampleSizeResult::Single(354)
        );
    }

    #[test]
    fn treatment_unit_scales_control() {
        assert_eq!(
            SampleSizeResult::from_treatment_unit(270.786, 2.),
            SampleSizeResult::Pair(542, 271)
        );
        assert_eq!(
            SampleSizeResult::from_treatment_unit(48., 2.),
            SampleSizeResult::Pair(96, 48)
        );
    }

    #[test]
    fn group_sizes_of_curve_is_none() {
        let curve = SampleSizeResult::Curve(vec![3, 2, 1]);
        assert_eq!(curve.group_sizes(), None);
        assert!(curve.is_curve());
        assert_eq!(curve.len(), 3);
    }

    #[test]
    fn group_sizes_of_single() {
        assert_eq!(SampleSizeResult::Single(7).group_sizes(), Some((7, 7)));
        assert_eq!(SampleSizeResult::Pair(9, 7).group_sizes(), Some((9, 7)));
    }
}

//----------------------------------------
// range mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// A parameter given either as one value or as an inclusive [lo, hi]
/// range to sweep over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Numeric {
    Scalar(f64),
    Range(f64, f64),
}

impl Numeric {
    /// A range whose endpoints coincide is a scalar
    pub fn collapse(self) -> Self {
        match self {
            Numeric::Range(lo, hi) if lo == hi => Numeric::Scalar(lo),
            other => other,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Numeric::Range(_, _))
    }

    pub fn endpoints(&self) -> (f64, f64) {
        match *self {
            Numeric::Scalar(x) => (x, x),
            Numeric::Range(lo, hi) => (lo, hi),
        }
    }

    /// Whether `x` lies in the closed interval spanned by the endpoints,
    /// in either order
    pub fn spans(&self, x: f64) -> bool {
        let (a, b) = self.endpoints();
        a.min(b) <= x && x <= a.max(b)
    }

    /// Value used when the parameter is held fixed; the lower endpoint for
    /// a range
    pub fn fixed_value(&self) -> f64 {
        self.endpoints().0
    }
}

impl From<f64> for Numeric {
    fn from(x: f64) -> Self {
        Numeric::Scalar(x)
    }
}

impl From<(f64, f64)> for Numeric {
    fn from((lo, hi): (f64, f64)) -> Self {
        Numeric::Range(lo, hi)
    }
}

impl From<[f64; 2]> for Numeric {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Numeric::Range(lo, hi)
    }
}

/// The parameter a calculation was swept over, with its grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SweepAxis {
    None,
    SignificanceLevel(Vec<f64>),
    Power(Vec<f64>),
    EffectSize(Vec<f64>),
}

impl SweepAxis {
    pub fn points(&self) -> Option<&[f64]> {
        match self {
            SweepAxis::None => None,
            SweepAxis::SignificanceLevel(v) | SweepAxis::Power(v) | SweepAxis::EffectSize(v) => {
                Some(v)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_endpoints_collapse() {
        assert_eq!(Numeric::Range(0.05, 0.05).collapse(), Numeric::Scalar(0.05));
        assert_eq!(Numeric::Range(0.05, 0.1).collapse(), Numeric::Range(0.05, 0.1));
        assert_eq!(Numeric::Scalar(0.8).collapse(), Numeric::Scalar(0.8));
    }

    #[test]
    fn spans_either_order() {
        assert!(Numeric::Range(0.1, 0.0).spans(0.0));
        assert!(Numeric::Range(-0.1, 0.1).spans(0.0));
        assert!(!Numeric::Range(0.01, 0.1).spans(0.0));
        assert!(Numeric::Scalar(1.0).spans(1.0));
    }

    #[test]
    fn conversions() {
        assert_eq!(Numeric::from(0.3), Numeric::Scalar(0.3));
        assert_eq!(Numeric::from((0.3, 0.4)), Numeric::Range(0.3, 0.4));
        assert_eq!(Numeric::from([0.3, 0.4]), Numeric::Range(0.3, 0.4));
    }
}

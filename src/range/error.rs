//----------------------------------------
// range dispatch errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RangeErr {
    #[error("range can be submitted only for one of {0}")]
    InvalidRangeConfiguration(&'static str),
    #[error("{parameter} range can't contain {bound}; got [{lo}, {hi}]")]
    DegenerateRangeBound {
        parameter: &'static str,
        bound: f64,
        lo: f64,
        hi: f64,
    },
    #[error("{parameter} should be in (0, 1); got {value}")]
    ParameterOutOfBounds { parameter: &'static str, value: f64 },
    #[error("proportion {parameter} should be in [0, 1]; got {value}")]
    ProportionOutOfBounds { parameter: &'static str, value: f64 },
    #[error("effect size should be finite; got {0}")]
    NonFiniteEffectSize(f64),
    #[error("allocation ratio k should be positive and finite; got {0}")]
    InvalidAllocationRatio(f64),
}

impl From<RangeErr> for AbcomputeErr {
    fn from(e: RangeErr) -> Self {
        AbcomputeErr::Range(e)
    }
}

//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistributionErr {
    #[error("arguments to quantile function should be in [0, 1]; got {0}")]
    QuantileOutOfBounds(f64),
    #[error("invalid {name} for distribution: {value}")]
    InvalidDistributionParameter { name: &'static str, value: f64 },
}

impl From<DistributionErr> for AbcomputeErr {
    fn from(e: DistributionErr) -> Self {
        AbcomputeErr::Distribution(e)
    }
}

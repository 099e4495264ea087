//----------------------------------------
// power errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerComputeErr {
    #[error(
        "sample size {n} with allocation ratio {k} gives non-positive degrees of freedom ({df})"
    )]
    InvalidDegreesOfFreedom { n: usize, k: f64, df: f64 },
}

impl From<PowerComputeErr> for AbcomputeErr {
    fn from(e: PowerComputeErr) -> Self {
        AbcomputeErr::PowerCompute(e)
    }
}

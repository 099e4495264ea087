//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::config::ConfigErr;
pub use crate::distributions::error::DistributionErr;
pub use crate::power::error::PowerComputeErr;
pub use crate::range::error::RangeErr;
pub use crate::sample_size::error::SampleSizeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbcomputeErr {
    #[error("while evaluating distribution: {0}")]
    Distribution(DistributionErr),
    #[error("while computing power: {0}")]
    PowerCompute(PowerComputeErr),
    #[error("while computing sample size: {0}")]
    SampleSize(SampleSizeErr),
    #[error("while dispatching sample size computation: {0}")]
    Range(RangeErr),
    #[error("while loading configuration: {0}")]
    Config(ConfigErr),
}

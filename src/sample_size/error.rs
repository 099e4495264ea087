//----------------------------------------
// sample size errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleSizeErr {
    #[error(
        "no sample size in [{min_candidate_n}, {max_candidate_n}) reaches power {power} \
        (alpha: {alpha}, effect size: {effect_size}, k: {k})"
    )]
    SearchExhausted {
        alpha: f64,
        power: f64,
        effect_size: f64,
        k: f64,
        min_candidate_n: usize,
        max_candidate_n: usize,
    },
    #[error("proportions must differ to have a non-zero effect size; got {pi1} and {pi2}")]
    DegenerateEffectSize { pi1: f64, pi2: f64 },
    #[error("{parameter} should be in (0, 1); got {value}")]
    ProbabilityOutOfBounds { parameter: &'static str, value: f64 },
}

impl From<SampleSizeErr> for AbcomputeErr {
    fn from(e: SampleSizeErr) -> Self {
        AbcomputeErr::SampleSize(e)
    }
}

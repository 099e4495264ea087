use crate::config::SearchConfig;
use crate::error::AbcomputeErr;
use crate::power::t_power::{power_one_sided, power_two_sided};
use crate::sample_size::error::SampleSizeErr;
use crate::sidedness::Sidedness;

/// Smallest treatment-equivalent group size n whose t-test power strictly
/// exceeds `power`, scanning n upward through the configured window.
/// Power is assumed to increase with n; this is not checked.
pub fn sample_size_t(
    alpha: f64,
    power: f64,
    k: f64,
    effect_size: f64,
    sidedness: Sidedness,
    search: &SearchConfig,
) -> Result<usize, AbcomputeErr> {
    for n in search.min_candidate_n..search.max_candidate_n {
        let achieved = match sidedness {
            Sidedness::OneSided => power_one_sided(alpha, n, k, effect_size)?,
            Sidedness::TwoSided => power_two_sided(alpha, n, k, effect_size)?,
        };
        if achieved > power {
            return Ok(n);
        }
    }
    Err(SampleSizeErr::SearchExhausted {
        alpha,
        power,
        effect_size,
        k,
        min_candidate_n: search.min_candidate_n,
        max_candidate_n: search.max_candidate_n,
    }
    .into())
}

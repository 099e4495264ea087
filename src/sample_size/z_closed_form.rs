use crate::distributions::std_normal::std_normal_quantile;
use crate::error::AbcomputeErr;
use crate::sample_size::{error::SampleSizeErr, types::SampleSizeResult};
use crate::sidedness::Sidedness;

/// Sample size for comparing two proportions with a z-test, from the
/// normal approximation. `pi1` is the control proportion, `pi2` the
/// treatment proportion, `k` the control : treatment ratio.
///
/// Returns `Single` when k = 1, otherwise `Pair(control, treatment)`.
/// The formula is applied as is: zero variance (`pi1` = 0, `pi2` = 1) or
/// power at or below the working alpha gives a size of 0.
pub fn sample_size_z(
    pi1: f64,
    pi2: f64,
    alpha: f64,
    power: f64,
    k: f64,
    sidedness: Sidedness,
) -> Result<SampleSizeResult, AbcomputeErr> {
    let n = treatment_unit_z(pi1, pi2, alpha, power, k, sidedness)?;
    Ok(SampleSizeResult::from_treatment_unit(n, k))
}

/// Unrounded treatment group size behind `sample_size_z`
pub fn treatment_unit_z(
    pi1: f64,
    pi2: f64,
    alpha: f64,
    power: f64,
    k: f64,
    sidedness: Sidedness,
) -> Result<f64, AbcomputeErr> {
    let effect_size = (pi2 - pi1).abs();
    if effect_size == 0.0 {
        return Err(SampleSizeErr::DegenerateEffectSize { pi1, pi2 }.into());
    }
    for (parameter, value) in [("significance level", alpha), ("power", power)] {
        if !(value > 0.0 && value < 1.0) {
            return Err(SampleSizeErr::ProbabilityOutOfBounds { parameter, value }.into());
        }
    }

    let working_alpha = match sidedness {
        Sidedness::OneSided => alpha,
        Sidedness::TwoSided => alpha / 2.,
    };
    // Quantile of alpha itself, not 1 - alpha: the sign goes away when
    // squared below
    let z_diff = std_normal_quantile(working_alpha)? - std_normal_quantile(power)?;
    let variance = pi1 * (1. - pi1) / k + pi2 * (1. - pi2);
    Ok((z_diff / effect_size).powi(2) * variance)
}

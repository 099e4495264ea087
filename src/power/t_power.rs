use crate::distributions::{noncentral_t::noncentral_t_cdf, students_t::students_t_quantile};
use crate::error::AbcomputeErr;
use crate::power::error::PowerComputeErr;

// Degrees of freedom and noncentrality of the two-sample t statistic when
// the groups have n and k * n subjects
struct TStatistic {
    df: f64,
    noncentrality: f64,
}

fn t_statistic(n: usize, k: f64, effect_size: f64) -> Result<TStatistic, AbcomputeErr> {
    let n_f = n as f64;
    let df = (1. + k) * n_f - 2.;
    if df.is_nan() || df <= 0.0 {
        return Err(PowerComputeErr::InvalidDegreesOfFreedom { n, k, df }.into());
    }
    let noncentrality = effect_size * (1. / (1. / n_f + 1. / (n_f * k))).sqrt();
    Ok(TStatistic { df, noncentrality })
}

/// Power of a two-sided two-sample t-test with n treatment-equivalent and
/// k * n control subjects, for a standardized effect size
pub fn power_two_sided(alpha: f64, n: usize, k: f64, effect_size: f64) -> Result<f64, AbcomputeErr> {
    let TStatistic { df, noncentrality } = t_statistic(n, k, effect_size)?;
    let critical = students_t_quantile(1. - alpha / 2., df)?;
    let upper = noncentral_t_cdf(critical, df, noncentrality)?;
    let lower = noncentral_t_cdf(-critical, df, noncentrality)?;
    Ok((1. - (upper - lower)).clamp(0.0, 1.0))
}

/// Power of a one-sided (upper tail) two-sample t-test
pub fn power_one_sided(alpha: f64, n: usize, k: f64, effect_size: f64) -> Result<f64, AbcomputeErr> {
    let TStatistic { df, noncentrality } = t_statistic(n, k, effect_size)?;
    let critical = students_t_quantile(1. - alpha, df)?;
    Ok((1. - noncentral_t_cdf(critical, df, noncentrality)?).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sided_d1_n10() {
        assert!((power_two_sided(0.05, 10, 1., 1.).unwrap() - 0.5620066).abs() < 1e-5)
    }

    #[test]
    fn two_sided_reference_table() {
        // d = 0.5, alpha = 0.05: 64 per group is the textbook answer for 80% power
        let at_64 = power_two_sided(0.05, 64, 1., 0.5).unwrap();
        let at_63 = power_two_sided(0.05, 63, 1., 0.5).unwrap();
        assert!((at_64 - 0.8014596).abs() < 1e-5);
        assert!((at_63 - 0.7951683).abs() < 1e-5);
    }

    #[test]
    fn one_sided_reference_table() {
        let at_51 = power_one_sided(0.05, 51, 1., 0.5).unwrap();
        let at_50 = power_one_sided(0.05, 50, 1., 0.5).unwrap();
        assert!((at_51 - 0.8058986).abs() < 1e-5);
        assert!((at_50 - 0.7989362).abs() < 1e-5);
    }

    #[test]
    fn one_sided_unequal_allocation() {
        assert!((power_one_sided(0.01, 20, 1.5, 0.7).unwrap() - 0.5120216).abs() < 1e-5)
    }

    #[test]
    fn two_sided_negative_effect() {
        let neg = power_two_sided(0.1, 30, 0.5, -0.4).unwrap();
        let pos = power_two_sided(0.1, 30, 0.5, 0.4).unwrap();
        assert!((neg - 0.3465590).abs() < 1e-5);
        assert!((neg - pos).abs() < 1e-9);
    }

    #[test]
    fn smallest_sample_sizes() {
        assert!((power_two_sided(0.05, 2, 1., 0.5).unwrap() - 0.0615079).abs() < 1e-5);
        assert!((power_one_sided(0.05, 2, 1., 0.5).unwrap() - 0.0994117).abs() < 1e-5);
    }

    #[test]
    fn zero_effect_gives_alpha() {
        assert!((power_two_sided(0.05, 40, 1., 0.).unwrap() - 0.05).abs() < 1e-7);
        assert!((power_one_sided(0.1, 40, 2., 0.).unwrap() - 0.1).abs() < 1e-7);
    }

    #[test]
    fn power_increases_with_n() {
        let mut prev = 0.0;
        for n in 2..100 {
            let cur = power_two_sided(0.05, n, 1., 0.3).unwrap();
            assert!(cur > prev);
            prev = cur;
        }
    }

    #[test]
    fn one_sided_beats_two_sided() {
        let one = power_one_sided(0.05, 25, 1., 0.6).unwrap();
        let two = power_two_sided(0.05, 25, 1., 0.6).unwrap();
        assert!(one > two);
    }

    #[test]
    fn invalid_degrees_of_freedom() {
        if let Err(e) = power_two_sided(0.05, 1, 1., 0.5) {
            assert_eq!(
                String::from(
                    "while computing power: sample size 1 with allocation ratio 1 \
                    gives non-positive degrees of freedom (0)"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
        assert!(matches!(
            power_one_sided(0.05, 0, 2., 0.5),
            Err(AbcomputeErr::PowerCompute(
                PowerComputeErr::InvalidDegreesOfFreedom { .. }
            ))
        ));
    }
}

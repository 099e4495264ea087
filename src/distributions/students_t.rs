use crate::distributions::error::DistributionErr;
use crate::error::AbcomputeErr;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Quantile of the central t distribution with `df` degrees of freedom.
/// `df` need not be an integer.
pub fn students_t_quantile(p: f64, df: f64) -> Result<f64, AbcomputeErr> {
    if !(0.0..=1.0).contains(&p) {
        return Err(DistributionErr::QuantileOutOfBounds(p).into());
    }
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|_| {
        DistributionErr::InvalidDistributionParameter {
            name: "degrees of freedom",
            value: df,
        }
    })?;
    Ok(dist.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_quantile_10_df() {
        assert!((students_t_quantile(0.975, 10.).unwrap() - 2.228139).abs() < 0.00001)
    }

    #[test]
    fn t_quantile_fractional_df() {
        assert!((students_t_quantile(0.95, 2.2).unwrap() - 2.746770).abs() < 0.0001)
    }

    #[test]
    fn t_quantile_symmetric() {
        let upper = students_t_quantile(0.95, 7.).unwrap();
        let lower = students_t_quantile(0.05, 7.).unwrap();
        assert!((upper + lower).abs() < 1e-9)
    }

    #[test]
    fn t_quantile_bad_df() {
        if let Err(e) = students_t_quantile(0.975, 0.0) {
            assert_eq!(
                String::from(
                    "while evaluating distribution: invalid degrees of freedom \
                    for distribution: 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn t_quantile_out_of_bounds() {
        assert!(students_t_quantile(-0.1, 5.).is_err());
    }
}

use crate::distributions::error::DistributionErr;
use crate::error::AbcomputeErr;
use statrs::distribution::{ContinuousCDF, Normal};

pub fn std_normal_cdf(z: f64) -> f64 {
    Normal::standard().cdf(z)
}

/// Inverse of the standard normal CDF. p = 0 and p = 1 map to -inf and inf.
pub fn std_normal_quantile(p: f64) -> Result<f64, AbcomputeErr> {
    if !(0.0..=1.0).contains(&p) {
        return Err(DistributionErr::QuantileOutOfBounds(p).into());
    }
    Ok(Normal::standard().inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_normal_quantile_err() {
        if let Err(e) = std_normal_quantile(1.1) {
            assert_eq!(
                String::from(
                    "while evaluating distribution: arguments to \
                    quantile function should be in [0, 1]; got 1.1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn std_normal_quantile_nan_err() {
        assert!(std_normal_quantile(f64::NAN).is_err());
    }

    #[test]
    fn std_normal_quantile_value() {
        assert!((std_normal_quantile(0.975).unwrap() - 1.959964).abs() < 0.000001)
    }

    #[test]
    fn std_normal_quantile_value_2() {
        assert!((std_normal_quantile(0.8).unwrap() - 0.8416212).abs() < 0.000001)
    }

    #[test]
    fn std_normal_quantile_symmetric() {
        let upper = std_normal_quantile(0.975).unwrap();
        let lower = std_normal_quantile(0.025).unwrap();
        assert!((upper + lower).abs() < 1e-12)
    }

    #[test]
    fn std_normal_quantile_endpoints() {
        assert_eq!(std_normal_quantile(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(std_normal_quantile(1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn std_normal_cdf_inverts_quantile() {
        for p in [0.005, 0.025, 0.3, 0.5, 0.8, 0.99] {
            let z = std_normal_quantile(p).unwrap();
            assert!((std_normal_cdf(z) - p).abs() < 1e-10);
        }
    }
}

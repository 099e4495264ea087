//----------------------------------------
// compute mod types
//----------------------------------------
use crate::range::types::Numeric;
use crate::sidedness::Sidedness;

/// Which comparison is being sized, with its effect parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestFamily {
    /// z-test on two proportions; pi1 is control, pi2 treatment
    Proportions { pi1: f64, pi2: f64 },
    /// t-test on two means with a standardized effect size
    Means { effect_size: Numeric },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestParameters {
    pub significance_level: Numeric,
    pub power: Numeric,
    pub family: TestFamily,
    /// Control group size over treatment group size
    pub k: f64,
    pub sidedness: Sidedness,
}

impl TestParameters {
    pub fn proportions(pi1: f64, pi2: f64) -> Self {
        Self::with_family(TestFamily::Proportions { pi1, pi2 })
    }

    pub fn means(effect_size: impl Into<Numeric>) -> Self {
        Self::with_family(TestFamily::Means {
            effect_size: effect_size.into(),
        })
    }

    // alpha = 0.05, power = 0.8, equal groups, two-sided
    fn with_family(family: TestFamily) -> Self {
        TestParameters {
            significance_level: Numeric::Scalar(0.05),
            power: Numeric::Scalar(0.8),
            family,
            k: 1.,
            sidedness: Sidedness::TwoSided,
        }
    }

    pub fn significance_level(mut self, alpha: impl Into<Numeric>) -> Self {
        self.significance_level = alpha.into();
        self
    }

    pub fn power(mut self, power: impl Into<Numeric>) -> Self {
        self.power = power.into();
        self
    }

    pub fn allocation_ratio(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn sidedness(mut self, sidedness: Sidedness) -> Self {
        self.sidedness = sidedness;
        self
    }
}

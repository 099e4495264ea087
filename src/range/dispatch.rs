use crate::compute::types::{TestFamily, TestParameters};
use crate::config::CalculatorConfig;
use crate::error::AbcomputeErr;
use crate::range::{
    error::RangeErr,
    grid::linspace,
    types::{Numeric, SweepAxis},
};
use crate::sample_size::{
    error::SampleSizeErr,
    t_search::sample_size_t,
    types::{SampleSizeCalculation, SampleSizeResult},
    z_closed_form::sample_size_z,
};
use crate::sidedness::Sidedness;

const ALPHA_OR_POWER: &str = "power or significance level";
const ALPHA_POWER_OR_EFFECT: &str = "power, significance level or effect size";

// Which parameter (if any) is swept, with its bounds
#[derive(Debug, Clone, Copy, PartialEq)]
enum Sweep {
    Fixed,
    SignificanceLevel(f64, f64),
    Power(f64, f64),
    EffectSize(f64, f64),
}

// One evaluation point of the underlying formula/search
#[derive(Debug, Clone, Copy)]
struct Point {
    alpha: f64,
    power: f64,
    effect_size: f64,
}

/// Computes sample size(s) for either test family. Dispatches to
/// `sample_size_proportions` or `sample_size_means`.
pub fn compute_sample_size(
    params: &TestParameters,
    config: &CalculatorConfig,
) -> Result<SampleSizeCalculation, AbcomputeErr> {
    match params.family {
        TestFamily::Proportions { pi1, pi2 } => sample_size_proportions(
            pi1,
            pi2,
            params.significance_level,
            params.power,
            params.k,
            params.sidedness,
            config,
        ),
        TestFamily::Means { effect_size } => sample_size_means(
            effect_size,
            params.significance_level,
            params.power,
            params.k,
            params.sidedness,
            config,
        ),
    }
}

/// Sample size for a comparison of proportions (z-test). At most one of
/// `significance_level` and `power` may be a range; a range is expanded
/// into `config.curve_points` evenly spaced values and yields a curve.
pub fn sample_size_proportions(
    pi1: f64,
    pi2: f64,
    significance_level: Numeric,
    power: Numeric,
    k: f64,
    sidedness: Sidedness,
    config: &CalculatorConfig,
) -> Result<SampleSizeCalculation, AbcomputeErr> {
    let significance_level = significance_level.collapse();
    let power = power.collapse();
    let sweep = resolve_sweep(significance_level, power, None)?;

    //----------------------------------------
    // Check arguments
    if pi1 == pi2 {
        return Err(SampleSizeErr::DegenerateEffectSize { pi1, pi2 }.into());
    }
    check_proportion("pi1", pi1)?;
    check_proportion("pi2", pi2)?;
    check_probability_bounds(significance_level, power)?;
    check_allocation_ratio(k)?;
    config.validate()?;

    //----------------------------------------
    // Evaluate
    let fixed = Point {
        alpha: significance_level.fixed_value(),
        power: power.fixed_value(),
        effect_size: (pi2 - pi1).abs(),
    };
    run_sweep(sweep, fixed, config.curve_points, k, |p| {
        sample_size_z(pi1, pi2, p.alpha, p.power, k, sidedness)
    })
}

/// Sample size for a comparison of means (t-test) by searching the
/// noncentral-t power function. Exactly one of `effect_size`,
/// `significance_level` and `power` may be a range. If any point of a
/// sweep exhausts the search the whole call fails.
pub fn sample_size_means(
    effect_size: Numeric,
    significance_level: Numeric,
    power: Numeric,
    k: f64,
    sidedness: Sidedness,
    config: &CalculatorConfig,
) -> Result<SampleSizeCalculation, AbcomputeErr> {
    let effect_size = effect_size.collapse();
    let significance_level = significance_level.collapse();
    let power = power.collapse();
    let sweep = resolve_sweep(significance_level, power, Some(effect_size))?;

    //----------------------------------------
    // Check arguments
    let (effect_lo, effect_hi) = effect_size.endpoints();
    for value in [effect_lo, effect_hi] {
        if !value.is_finite() {
            return Err(RangeErr::NonFiniteEffectSize(value).into());
        }
    }
    check_probability_bounds(significance_level, power)?;
    check_allocation_ratio(k)?;
    config.validate()?;

    //----------------------------------------
    // Evaluate
    let fixed = Point {
        alpha: significance_level.fixed_value(),
        power: power.fixed_value(),
        effect_size: effect_size.fixed_value(),
    };
    run_sweep(sweep, fixed, config.curve_points, k, |p| {
        let n = sample_size_t(p.alpha, p.power, k, p.effect_size, sidedness, &config.search)?;
        Ok(SampleSizeResult::from_treatment_unit(n as f64, k))
    })
}

fn resolve_sweep(
    significance_level: Numeric,
    power: Numeric,
    effect_size: Option<Numeric>,
) -> Result<Sweep, RangeErr> {
    use Numeric::Range;
    match (significance_level, power, effect_size) {
        (Range(..), Range(..), _) => Err(RangeErr::InvalidRangeConfiguration(ALPHA_OR_POWER)),
        (Range(..), _, Some(Range(..))) | (_, Range(..), Some(Range(..))) => Err(
            RangeErr::InvalidRangeConfiguration(ALPHA_POWER_OR_EFFECT),
        ),
        (Range(lo, hi), _, _) => Ok(Sweep::SignificanceLevel(lo, hi)),
        (_, Range(lo, hi), _) => Ok(Sweep::Power(lo, hi)),
        (_, _, Some(Range(lo, hi))) => Ok(Sweep::EffectSize(lo, hi)),
        _ => Ok(Sweep::Fixed),
    }
}

// A zero significance level or a power of one makes the inversion
// degenerate, so ranges may not touch them
fn check_probability_bounds(significance_level: Numeric, power: Numeric) -> Result<(), RangeErr> {
    if let Numeric::Range(lo, hi) = significance_level
        && significance_level.spans(0.0)
    {
        return Err(RangeErr::DegenerateRangeBound {
            parameter: "significance level",
            bound: 0.0,
            lo,
            hi,
        });
    }
    if let Numeric::Range(lo, hi) = power
        && power.spans(1.0)
    {
        return Err(RangeErr::DegenerateRangeBound {
            parameter: "power",
            bound: 1.0,
            lo,
            hi,
        });
    }
    for (parameter, value) in [
        ("significance level", significance_level),
        ("power", power),
    ] {
        let (lo, hi) = value.endpoints();
        for endpoint in [lo, hi] {
            if !(endpoint > 0.0 && endpoint < 1.0) {
                return Err(RangeErr::ParameterOutOfBounds {
                    parameter,
                    value: endpoint,
                });
            }
        }
    }
    Ok(())
}

fn check_proportion(parameter: &'static str, value: f64) -> Result<(), RangeErr> {
    if !(0.0..=1.0).contains(&value) {
        return Err(RangeErr::ProportionOutOfBounds { parameter, value });
    }
    Ok(())
}

fn check_allocation_ratio(k: f64) -> Result<(), RangeErr> {
    if !(k.is_finite() && k > 0.0) {
        return Err(RangeErr::InvalidAllocationRatio(k));
    }
    Ok(())
}

fn run_sweep<F>(
    sweep: Sweep,
    fixed: Point,
    curve_points: usize,
    k: f64,
    eval: F,
) -> Result<SampleSizeCalculation, AbcomputeErr>
where
    F: Fn(Point) -> Result<SampleSizeResult, AbcomputeErr>,
{
    let (axis, points): (SweepAxis, Vec<Point>) = match sweep {
        Sweep::Fixed => {
            return Ok(SampleSizeCalculation {
                axis: SweepAxis::None,
                sample_size: eval(fixed)?,
            });
        }
        Sweep::SignificanceLevel(lo, hi) => {
            let grid = linspace(lo, hi, curve_points);
            let points = grid.iter().map(|&alpha| Point { alpha, ..fixed }).collect();
            (SweepAxis::SignificanceLevel(grid), points)
        }
        Sweep::Power(lo, hi) => {
            let grid = linspace(lo, hi, curve_points);
            let points = grid.iter().map(|&power| Point { power, ..fixed }).collect();
            (SweepAxis::Power(grid), points)
        }
        Sweep::EffectSize(lo, hi) => {
            let grid = linspace(lo, hi, curve_points);
            let points = grid
                .iter()
                .map(|&effect_size| Point {
                    effect_size,
                    ..fixed
                })
                .collect();
            (SweepAxis::EffectSize(grid), points)
        }
    };

    let evaluated = points
        .into_iter()
        .map(eval)
        .collect::<Result<Vec<SampleSizeResult>, AbcomputeErr>>()?;
    Ok(SampleSizeCalculation {
        axis,
        sample_size: assemble_curve(&evaluated, k),
    })
}

fn assemble_curve(evaluated: &[SampleSizeResult], k: f64) -> SampleSizeResult {
    let (control, treatment): (Vec<usize>, Vec<usize>) = evaluated
        .iter()
        .filter_map(SampleSizeResult::group_sizes)
        .unzip();
    if k == 1.0 {
        SampleSizeResult::Curve(treatment)
    } else {
        SampleSizeResult::CurvePair(control, treatment)
    }
}

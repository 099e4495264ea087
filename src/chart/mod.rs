//----------------------------------------
// chart mod
//----------------------------------------
//! Maps a sample size calculation onto plot-ready series and a title.
//! Nothing here renders; callers hand the data to whatever draws charts.
pub mod types;

use itertools::Itertools;
use tracing::debug;

use crate::compute::types::{TestFamily, TestParameters};
use crate::range::types::{Numeric, SweepAxis};
use crate::sample_size::types::{SampleSizeCalculation, SampleSizeResult};
pub use types::{ChartData, Series};

pub const CONTROL_LABEL: &str = "Control(n1)";
pub const TREATMENT_LABEL: &str = "Treatment(n2)";

impl ChartData {
    pub fn from_calculation(calc: &SampleSizeCalculation, params: &TestParameters) -> Self {
        let x = match calc.axis.points() {
            Some(points) => points.to_vec(),
            None => vec![params.significance_level.fixed_value()],
        };

        let series = match &calc.sample_size {
            SampleSizeResult::Single(n) => vec![Series::unnamed(x, vec![*n])],
            SampleSizeResult::Curve(v) => vec![Series::unnamed(x, v.clone())],
            SampleSizeResult::Pair(control, treatment) => vec![
                Series::named(CONTROL_LABEL, x.clone(), vec![*control]),
                Series::named(TREATMENT_LABEL, x, vec![*treatment]),
            ],
            SampleSizeResult::CurvePair(control, treatment) => vec![
                Series::named(CONTROL_LABEL, x.clone(), control.clone()),
                Series::named(TREATMENT_LABEL, x, treatment.clone()),
            ],
        };

        let title = title(&calc.axis, params);
        debug!(
            title = %title,
            series = series.len(),
            curve = calc.sample_size.is_curve(),
            "assembled chart data"
        );
        ChartData { title, series }
    }

    /// Plain-text table: x column, then one column per series
    pub fn to_table(&self) -> String {
        let mut out = format!("{}\n", self.title);
        let Some(first) = self.series.first() else {
            return out;
        };

        let names = self
            .series
            .iter()
            .map(|s| s.name.as_deref().unwrap_or("n"))
            .join("\t");
        out.push_str(&format!("x\t{names}\n"));

        for (i, x) in first.x.iter().enumerate() {
            let row = self
                .series
                .iter()
                .map(|s| s.y.get(i).map_or_else(String::new, ToString::to_string))
                .join("\t");
            out.push_str(&format!("{x}\t{row}\n"));
        }
        out
    }
}

fn title(axis: &SweepAxis, params: &TestParameters) -> String {
    let alpha = params.significance_level.fixed_value();
    let power = params.power.fixed_value();
    let delta_clause = match params.family {
        TestFamily::Means { effect_size } => match effect_size.collapse() {
            Numeric::Scalar(d) => format!(" and δ = {d}"),
            Numeric::Range(..) => String::new(),
        },
        TestFamily::Proportions { .. } => String::new(),
    };
    match axis {
        SweepAxis::SignificanceLevel(_) => {
            format!("Sample Size vs α with Power(1-β) = {power}{delta_clause}")
        }
        SweepAxis::Power(_) => {
            format!("Sample Size vs Power(1-β) with α = {alpha}{delta_clause}")
        }
        SweepAxis::EffectSize(_) => {
            format!("Sample Size vs δ with α = {alpha} and Power(1-β) = {power}")
        }
        SweepAxis::None => {
            format!("Sample Size with α = {alpha} and Power(1-β) = {power}{delta_clause}")
        }
    }
}

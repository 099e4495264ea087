//! CLI argument definitions and conversion into calculator parameters.

use abcompute::compute::{Numeric, Sidedness, TestParameters};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Sample size calculator for two-group A/B tests.
#[derive(Debug, Parser)]
#[command(name = "abcompute")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// TOML file with search and sweep settings
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated table
    Table,
    /// Chart data as JSON
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Comparison of proportions (z-test)
    Proportions(ProportionsArgs),
    /// Comparison of means (t-test)
    Means(MeansArgs),
}

/// Settings shared by both test families.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Significance level (α)
    #[arg(long, default_value_t = 0.05, conflicts_with = "alpha_range")]
    pub alpha: f64,

    /// Sweep the significance level from LO to HI
    #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
    pub alpha_range: Option<Vec<f64>>,

    /// Power (1-β)
    #[arg(long, default_value_t = 0.8, conflicts_with = "power_range")]
    pub power: f64,

    /// Sweep the power from LO to HI
    #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
    pub power_range: Option<Vec<f64>>,

    /// Control group size over treatment group size
    #[arg(short, long, default_value_t = 1.0)]
    pub k: f64,

    /// Use a one-sided test
    #[arg(long)]
    pub one_sided: bool,
}

#[derive(Debug, Args)]
pub struct ProportionsArgs {
    /// Proportion of successes in the control group
    #[arg(long)]
    pub pi1: f64,

    /// Proportion of successes in the treatment group
    #[arg(long)]
    pub pi2: f64,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MeansArgs {
    /// Standardized effect size (δ = mean difference / standard deviation)
    #[arg(short, long, default_value_t = 0.5, conflicts_with = "effect_size_range")]
    pub effect_size: f64,

    /// Sweep the effect size from LO to HI
    #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
    pub effect_size_range: Option<Vec<f64>>,

    #[command(flatten)]
    pub common: CommonArgs,
}

fn numeric(scalar: f64, range: Option<&[f64]>) -> Numeric {
    match range {
        Some([lo, hi]) => Numeric::Range(*lo, *hi),
        _ => Numeric::Scalar(scalar),
    }
}

impl CommonArgs {
    fn apply(&self, params: TestParameters) -> TestParameters {
        params
            .significance_level(numeric(self.alpha, self.alpha_range.as_deref()))
            .power(numeric(self.power, self.power_range.as_deref()))
            .allocation_ratio(self.k)
            .sidedness(Sidedness::from_one_sided(self.one_sided))
    }
}

impl Command {
    pub fn test_parameters(&self) -> TestParameters {
        match self {
            Command::Proportions(args) => {
                args.common.apply(TestParameters::proportions(args.pi1, args.pi2))
            }
            Command::Means(args) => args.common.apply(TestParameters::means(numeric(
                args.effect_size,
                args.effect_size_range.as_deref(),
            ))),
        }
    }
}

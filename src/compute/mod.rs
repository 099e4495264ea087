//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::config::{CalculatorConfig, SearchConfig};
pub use crate::distributions::noncentral_t::noncentral_t_cdf;
pub use crate::power::t_power::{power_one_sided, power_two_sided};
pub use crate::range::dispatch::{compute_sample_size, sample_size_means, sample_size_proportions};
pub use crate::range::types::{Numeric, SweepAxis};
pub use crate::sample_size::t_search::sample_size_t;
pub use crate::sample_size::types::{SampleSizeCalculation, SampleSizeResult};
pub use crate::sample_size::z_closed_form::sample_size_z;
pub use crate::sidedness::Sidedness;
pub use types::{TestFamily, TestParameters};

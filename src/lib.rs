//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide sample size and power
//! calculations for two-group A/B tests: comparisons of proportions
//! (z-test, closed form) and of means (t-test, searched through the
//! noncentral t power function). Significance level, power or effect size
//! can be swept over a range to produce a sample size curve.

/// Plot-ready series and titles for a calculation
pub mod chart;
/// This module houses the public API for computing power and sample sizes
pub mod compute;
pub mod config;
/// This module contains error types
pub mod error;
mod distributions;
mod power;
mod range;
mod sample_size;
mod sidedness;

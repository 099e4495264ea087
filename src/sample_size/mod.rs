//----------------------------------------
// sample size mod
//----------------------------------------
pub mod error;
pub mod t_search;
pub mod types;
pub mod z_closed_form;

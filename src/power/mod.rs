//----------------------------------------
// power mod
//----------------------------------------
pub mod error;
pub mod t_power;

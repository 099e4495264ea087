//----------------------------------------
// distributions mod
//----------------------------------------
pub mod error;
pub mod noncentral_t;
pub mod std_normal;
pub mod students_t;

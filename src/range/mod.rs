//----------------------------------------
// range mod
//----------------------------------------
pub mod dispatch;
pub mod error;
pub(crate) mod grid;
pub mod types;

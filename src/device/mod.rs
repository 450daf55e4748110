pub mod constants;
pub mod simulation;
pub mod types;

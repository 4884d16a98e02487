pub mod lifecycle;
pub mod simulation;
pub mod time;

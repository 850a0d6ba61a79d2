pub mod pacing;
pub mod stereogram;

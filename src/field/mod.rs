pub mod dot_field;
pub mod random;

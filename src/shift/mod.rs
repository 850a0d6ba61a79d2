pub mod disparity;
pub mod region;

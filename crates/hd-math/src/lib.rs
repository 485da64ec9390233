//! Heredity math utilities.

pub mod math;

pub use math::normalize::*;
pub use math::subsets::*;

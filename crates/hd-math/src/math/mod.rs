//! Core math modules.

pub mod normalize;
pub mod subsets;

//! Heredity core: exact inference of gene and trait posteriors over a pedigree.
//!
//! The pipeline is: load a [`pedigree::Pedigree`] from a
//! [`pedigree::PedigreeSource`], run an [`inference::InferenceEngine`] over it,
//! wrap the result in an [`output::InferenceReport`] and hand it to a
//! [`output::ResultSink`].

pub mod exit_codes;
pub mod inference;
pub mod logging;
pub mod output;
pub mod pedigree;

pub use inference::{InferenceConfig, InferenceEngine, InferenceResult};
pub use pedigree::{Individual, Pedigree, PedigreeSource};

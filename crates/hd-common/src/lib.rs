//! Heredity common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the heredity crates:
//! - Person and run identity types
//! - Gene copy counts
//! - Report schema versioning
//! - Common error types
//! - Output formats

pub mod error;
pub mod genotype;
pub mod id;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use genotype::GeneCount;
pub use id::{PersonId, RunId};
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;

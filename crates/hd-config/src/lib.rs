//! Heredity probability model loading and validation.
//!
//! This crate provides:
//! - The typed gene/trait/mutation model and its built-in defaults
//! - Model resolution (CLI → env → user config dir → defaults)
//! - Semantic validation of model files
//! - Model fingerprints for reports

pub mod model;
pub mod resolve;
pub mod validate;

pub use model::{GeneModel, GeneTable};
pub use resolve::{resolve_model, ConfigPaths, ModelSource, ResolvedModel, MODEL_ENV_VAR};
pub use validate::{ValidationError, ValidationResult};

/// Schema version written into model files.
pub const CONFIG_SCHEMA_VERSION: &str = hd_common::SCHEMA_VERSION;

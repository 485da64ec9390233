//! Model resolution.
//!
//! The model is taken from the first of these that applies:
//! 1. an explicit path given on the command line;
//! 2. the `HEREDITY_MODEL` environment variable;
//! 3. `model.json` in the user config directory, if it exists;
//! 4. the built-in default model.
//!
//! Explicit paths (1 and 2) must exist. The user file (3) is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::GeneModel;
use crate::validate::{ValidationError, ValidationResult};

/// Environment variable naming a model file.
pub const MODEL_ENV_VAR: &str = "HEREDITY_MODEL";

/// File name looked up in the user config directory.
pub const USER_MODEL_FILE: &str = "model.json";

/// Candidate locations for the model file.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub cli_model: Option<PathBuf>,
    pub env_model: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
}

impl ConfigPaths {
    /// Build the search paths from the process environment.
    pub fn from_env(cli_model: Option<PathBuf>) -> Self {
        Self {
            cli_model,
            env_model: std::env::var_os(MODEL_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            config_dir: dirs::config_dir().map(|d| d.join("heredity")),
        }
    }

    /// Path of the optional per-user model file.
    pub fn user_model_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|d| d.join(USER_MODEL_FILE))
    }
}

/// Where the resolved model came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ModelSource {
    Cli(PathBuf),
    Env(PathBuf),
    User(PathBuf),
    Builtin,
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelSource::Cli(p) => write!(f, "cli:{}", p.display()),
            ModelSource::Env(p) => write!(f, "env:{}", p.display()),
            ModelSource::User(p) => write!(f, "user:{}", p.display()),
            ModelSource::Builtin => write!(f, "builtin"),
        }
    }
}

/// A validated model together with its origin.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub model: GeneModel,
    pub source: ModelSource,
}

/// Resolve and validate the model to use.
pub fn resolve_model(paths: &ConfigPaths) -> ValidationResult<ResolvedModel> {
    if let Some(path) = &paths.cli_model {
        return load_required(path).map(|model| ResolvedModel {
            model,
            source: ModelSource::Cli(path.clone()),
        });
    }

    if let Some(path) = &paths.env_model {
        return load_required(path).map(|model| ResolvedModel {
            model,
            source: ModelSource::Env(path.clone()),
        });
    }

    if let Some(path) = paths.user_model_path() {
        if path.is_file() {
            let model = GeneModel::from_file(&path)?;
            return Ok(ResolvedModel {
                model,
                source: ModelSource::User(path),
            });
        }
    }

    Ok(ResolvedModel {
        model: GeneModel::default(),
        source: ModelSource::Builtin,
    })
}

fn load_required(path: &Path) -> ValidationResult<GeneModel> {
    if !path.exists() {
        return Err(ValidationError::IoError(format!(
            "model file not found: {}",
            path.display()
        )));
    }
    GeneModel::from_file(path)
}

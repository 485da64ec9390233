//! Gene inheritance and trait expression model.
//!
//! The model has three parts:
//! - an unconditional prior over gene copies, used for founders;
//! - the probability of showing the trait given the number of copies;
//! - the probability that a copy flips while passed from parent to child.
//!
//! [`GeneModel::default`] is the standard model. A model file uses the same
//! shape as the serialized struct:
//!
//! ```json
//! {
//!   "schema_version": "1.0.0",
//!   "gene_prior": { "0": 0.96, "1": 0.03, "2": 0.01 },
//!   "trait_given_gene": { "0": 0.01, "1": 0.56, "2": 0.65 },
//!   "mutation_rate": 0.01
//! }
//! ```

use hd_common::GeneCount;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::validate::{ValidationError, ValidationResult};

/// One probability per gene copy count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneTable {
    #[serde(rename = "0")]
    pub zero: f64,
    #[serde(rename = "1")]
    pub one: f64,
    #[serde(rename = "2")]
    pub two: f64,
}

impl GeneTable {
    pub fn new(zero: f64, one: f64, two: f64) -> Self {
        Self { zero, one, two }
    }

    pub fn get(&self, genes: GeneCount) -> f64 {
        match genes {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.zero, self.one, self.two]
    }
}

/// Complete probability model for a single gene and its trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneModel {
    pub schema_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// P(genes) for individuals without recorded parents.
    pub gene_prior: GeneTable,

    /// P(trait | genes).
    pub trait_given_gene: GeneTable,

    /// Probability that a transmitted copy mutates.
    pub mutation_rate: f64,
}

impl Default for GeneModel {
    fn default() -> Self {
        Self {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            description: None,
            gene_prior: GeneTable::new(0.96, 0.03, 0.01),
            trait_given_gene: GeneTable::new(0.01, 0.56, 0.65),
            mutation_rate: 0.01,
        }
    }
}

impl GeneModel {
    /// Load a model from a JSON file and validate it.
    pub fn from_file(path: &std::path::Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let model = Self::parse_json(&content)?;
        model.validate()?;
        Ok(model)
    }

    /// Parse a model from a JSON string without validating it.
    pub fn parse_json(json: &str) -> ValidationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Unconditional probability of `genes` copies.
    pub fn gene_prior(&self, genes: GeneCount) -> f64 {
        self.gene_prior.get(genes)
    }

    /// Probability of the given trait status for someone with `genes` copies.
    pub fn trait_probability(&self, genes: GeneCount, has_trait: bool) -> f64 {
        let p = self.trait_given_gene.get(genes);
        if has_trait {
            p
        } else {
            1.0 - p
        }
    }

    /// Probability that a parent with `parent_genes` copies passes the
    /// variant on to a child.
    ///
    /// A parent with one copy passes either copy with equal chance; mutation
    /// is not applied on top of that.
    pub fn transmission_probability(&self, parent_genes: GeneCount) -> f64 {
        match parent_genes {
            GeneCount::Two => 1.0 - self.mutation_rate,
            GeneCount::One => 0.5,
            GeneCount::Zero => self.mutation_rate,
        }
    }

    /// SHA-256 of the canonical JSON encoding, as lowercase hex.
    pub fn fingerprint(&self) -> String {
        // Struct fields serialize in declaration order, so the encoding is stable.
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(Sha256::digest(&canonical))
    }
}

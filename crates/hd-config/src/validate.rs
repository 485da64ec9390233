//! Semantic validation of gene models.

use thiserror::Error;

use crate::model::{GeneModel, GeneTable};

/// Tolerance for the gene prior summing to one.
pub const PRIOR_SUM_TOLERANCE: f64 = 1e-9;

/// Result alias for model loading and validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised while loading or validating a model.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0}")]
    IoError(String),

    #[error("{0}")]
    ParseError(String),

    #[error("unsupported schema version {found} (expected {expected})")]
    SchemaVersion { found: String, expected: String },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<ValidationError> for hd_common::Error {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IoError(msg) => hd_common::Error::Config(msg),
            other => hd_common::Error::InvalidModel(other.to_string()),
        }
    }
}

impl GeneModel {
    /// Check that every probability is usable and the prior is a distribution.
    pub fn validate(&self) -> ValidationResult<()> {
        if !hd_common::schema::is_compatible(&self.schema_version) {
            return Err(ValidationError::SchemaVersion {
                found: self.schema_version.clone(),
                expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            });
        }

        check_table("gene_prior", &self.gene_prior)?;
        check_table("trait_given_gene", &self.trait_given_gene)?;
        check_probability("mutation_rate", self.mutation_rate)?;

        let total: f64 = self.gene_prior.as_array().iter().sum();
        if (total - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(ValidationError::InvalidValue {
                field: "gene_prior".to_string(),
                message: format!("probabilities must sum to 1, got {total}"),
            });
        }
        Ok(())
    }
}

fn check_table(name: &str, table: &GeneTable) -> ValidationResult<()> {
    for (copies, value) in table.as_array().into_iter().enumerate() {
        check_probability(&format!("{name}.{copies}"), value)?;
    }
    Ok(())
}

fn check_probability(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("must be a probability in [0, 1], got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_valid() {
        GeneModel::default().validate().unwrap();
    }

    #[test]
    fn prior_must_sum_to_one() {
        let mut model = GeneModel::default();
        model.gene_prior.zero = 0.5;
        let err = model.validate().unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "gene_prior")
        );
    }

    #[test]
    fn trait_probabilities_must_be_in_range() {
        let mut model = GeneModel::default();
        model.trait_given_gene.one = 1.2;
        let err = model.validate().unwrap_err();
        assert!(err.to_string().contains("trait_given_gene.1"));
    }

    #[test]
    fn mutation_rate_rejects_nan() {
        let model = GeneModel {
            mutation_rate: f64::NAN,
            ..GeneModel::default()
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn incompatible_schema_version() {
        let model = GeneModel {
            schema_version: "2.0.0".to_string(),
            ..GeneModel::default()
        };
        assert!(matches!(
            model.validate(),
            Err(ValidationError::SchemaVersion { .. })
        ));
    }

    #[test]
    fn converts_into_common_error() {
        let err: hd_common::Error = ValidationError::IoError("missing".into()).into();
        assert_eq!(err.code(), 10);
        let err: hd_common::Error = ValidationError::ParseError("bad".into()).into();
        assert_eq!(err.code(), 11);
    }
}

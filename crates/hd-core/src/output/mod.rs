//! Result reporting.
//!
//! An [`InferenceReport`] bundles the normalized table with run metadata.
//! A [`ResultSink`] renders it somewhere: [`TextSink`] for people,
//! [`JsonSink`] for machines.

pub mod json;
pub mod text;

use chrono::{DateTime, Utc};
use hd_common::{OutputFormat, Result, RunId, SCHEMA_VERSION};
use hd_config::ModelSource;
use serde::{Deserialize, Serialize};

use crate::inference::{InferenceResult, InferenceStats, PersonPosterior};

pub use json::JsonSink;
pub use text::TextSink;

/// Final result of one run, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceReport {
    pub schema_version: String,
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub model_fingerprint: String,
    pub model_source: ModelSource,
    #[serde(flatten)]
    pub stats: InferenceStats,
    pub people: Vec<PersonPosterior>,
}

impl InferenceReport {
    pub fn new(result: InferenceResult, model_fingerprint: String, model_source: ModelSource) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            run_id: result.run_id,
            generated_at: Utc::now(),
            model_fingerprint,
            model_source,
            stats: result.stats,
            people: result.table.into_entries(),
        }
    }
}

/// Destination for finished reports.
pub trait ResultSink {
    fn write_report(&mut self, report: &InferenceReport) -> Result<()>;
}

/// Sink writing to `out` in the requested format.
pub fn sink_for<'w, W: std::io::Write + 'w>(
    format: OutputFormat,
    out: W,
    precision: usize,
) -> Box<dyn ResultSink + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(out).with_precision(precision)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    }
}

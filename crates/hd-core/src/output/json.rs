//! Machine-readable report.

use std::io::Write;

use hd_common::Result;

use super::{InferenceReport, ResultSink};

/// Writes the report as pretty-printed JSON followed by a newline.
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn write_report(&mut self, report: &InferenceReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_report;
    use serde_json::Value;

    #[test]
    fn writes_parseable_report() {
        let mut sink = JsonSink::new(Vec::new());
        sink.write_report(&sample_report()).unwrap();
        let bytes = sink.into_inner();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["schema_version"], "1.0.0");
        assert_eq!(json["run_id"], "run-20260115-143022-abc123");
        assert_eq!(json["model_source"]["kind"], "builtin");
        assert_eq!(json["worlds_evaluated"], 3);
        assert_eq!(json["people"][0]["name"], "Harry");
        assert_eq!(json["people"][0]["gene"]["1"], 0.4557);
        assert_eq!(json["people"][0]["trait"]["false"], 0.7335);
    }

    #[test]
    fn report_roundtrips() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: InferenceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.people, report.people);
        assert_eq!(back.stats, report.stats);
        assert_eq!(back.generated_at, report.generated_at);
    }
}

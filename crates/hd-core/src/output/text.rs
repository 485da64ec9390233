//! Human-readable listing.

use std::io::Write;

use hd_common::{GeneCount, Result};

use super::{InferenceReport, ResultSink};

/// Default number of decimal places.
pub const DEFAULT_PRECISION: usize = 4;

/// Writes one block per individual:
///
/// ```text
/// Harry:
///   Gene:
///     2: 0.0092
///     1: 0.4557
///     0: 0.5351
///   Trait:
///     True: 0.2665
///     False: 0.7335
/// ```
pub struct TextSink<W> {
    out: W,
    precision: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn write_report(&mut self, report: &InferenceReport) -> Result<()> {
        let prec = self.precision;
        for person in &report.people {
            writeln!(self.out, "{}:", person.name)?;
            writeln!(self.out, "  Gene:")?;
            for genes in GeneCount::DESCENDING {
                writeln!(self.out, "    {}: {:.prec$}", genes, person.gene.get(genes))?;
            }
            writeln!(self.out, "  Trait:")?;
            writeln!(self.out, "    True: {:.prec$}", person.expression.present)?;
            writeln!(self.out, "    False: {:.prec$}", person.expression.absent)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

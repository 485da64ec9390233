//! Pedigree loaders.
//!
//! Two on-disk layouts are supported:
//!
//! - CSV with a header naming the columns `name`, `mother`, `father` and
//!   `trait` (any order). Blank parents mark a founder; `trait` is `1`, `0`
//!   or blank for unknown. Fields may be double-quoted and short rows are
//!   padded with blanks.
//! - JSON: an array of `{"name", "mother", "father", "trait"}` records where
//!   the parents and trait may be null or omitted.

use std::path::{Path, PathBuf};

use hd_common::{Error, PersonId, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Individual, Pedigree};

const REQUIRED_COLUMNS: [&str; 4] = ["name", "mother", "father", "trait"];

/// Anything that can produce a pedigree.
pub trait PedigreeSource {
    fn load(&self) -> Result<Pedigree>;
}

impl PedigreeSource for Pedigree {
    fn load(&self) -> Result<Pedigree> {
        Ok(self.clone())
    }
}

/// Reads a pedigree from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvPedigreeSource {
    path: PathBuf,
}

impl CsvPedigreeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PedigreeSource for CsvPedigreeSource {
    fn load(&self) -> Result<Pedigree> {
        let content = std::fs::read_to_string(&self.path)?;
        let pedigree = parse_csv(&content)?;
        debug!(path = %self.path.display(), individuals = pedigree.len(), "pedigree loaded");
        Ok(pedigree)
    }
}

/// Reads a pedigree from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonPedigreeSource {
    path: PathBuf,
}

impl JsonPedigreeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PedigreeSource for JsonPedigreeSource {
    fn load(&self) -> Result<Pedigree> {
        let content = std::fs::read_to_string(&self.path)?;
        let pedigree = parse_json(&content)?;
        debug!(path = %self.path.display(), individuals = pedigree.len(), "pedigree loaded");
        Ok(pedigree)
    }
}

/// Serialized form of one individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualRecord {
    pub name: String,
    #[serde(default)]
    pub mother: Option<String>,
    #[serde(default)]
    pub father: Option<String>,
    #[serde(default, rename = "trait")]
    pub observed_trait: Option<bool>,
}

impl IndividualRecord {
    /// Convert to an [`Individual`]; blank parent names count as absent.
    ///
    /// `line` locates the record in its source for error messages.
    pub fn into_individual(self, line: usize) -> Result<Individual> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidRecord {
                line,
                message: "name is empty".to_string(),
            });
        }
        let mother = non_blank(self.mother);
        let father = non_blank(self.father);
        match (mother, father) {
            (Some(mother), Some(father)) => Ok(Individual::child(
                name,
                PersonId::new(mother),
                PersonId::new(father),
                self.observed_trait,
            )),
            (None, None) => Ok(Individual::founder(name, self.observed_trait)),
            _ => Err(Error::IncompleteParents {
                name: name.to_string(),
            }),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a pedigree from CSV text.
///
/// Fields may be double-quoted, with `""` standing for a literal quote, so
/// names can contain commas or line breaks. Rows shorter than the header are
/// padded with blank fields; rows longer than the header are rejected.
pub fn parse_csv(content: &str) -> Result<Pedigree> {
    let mut records = split_records(content.trim_start_matches('\u{feff}'))?.into_iter();

    let Some(header) = records.next() else {
        return Err(Error::MissingColumn {
            column: REQUIRED_COLUMNS[0].to_string(),
        });
    };
    let header: Vec<&str> = header.fields.iter().map(|h| h.trim()).collect();

    let mut positions = [0usize; 4];
    for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = header
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| Error::MissingColumn {
                column: column.to_string(),
            })?;
    }
    let [name_col, mother_col, father_col, trait_col] = positions;

    let mut individuals = Vec::new();
    for record in records {
        if record.fields.len() > header.len() {
            return Err(Error::InvalidRecord {
                line: record.line,
                message: format!(
                    "expected at most {} fields, found {}",
                    header.len(),
                    record.fields.len()
                ),
            });
        }

        let field = |col: usize| record.fields.get(col).map_or("", |f| f.trim());
        let name = field(name_col);
        let row = IndividualRecord {
            name: name.to_string(),
            mother: Some(field(mother_col).to_string()),
            father: Some(field(father_col).to_string()),
            observed_trait: parse_trait_cell(field(trait_col), name, record.line),
        };
        individuals.push(row.into_individual(record.line)?);
    }

    Pedigree::new(individuals)
}

/// One CSV row and the line it starts on.
#[derive(Debug)]
struct RawRecord {
    line: usize,
    fields: Vec<String>,
}

/// Split CSV text into rows of fields, skipping blank lines.
fn split_records(content: &str) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut line = 1;
    let mut record_line = 1;
    let mut in_quotes = false;
    let mut quoted = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if !quoted && field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
                quoted = true;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                end_record(&mut records, &mut fields, &mut field, record_line);
                quoted = false;
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::InvalidRecord {
            line: record_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    end_record(&mut records, &mut fields, &mut field, record_line);
    Ok(records)
}

fn end_record(
    records: &mut Vec<RawRecord>,
    fields: &mut Vec<String>,
    field: &mut String,
    line: usize,
) {
    let last = std::mem::take(field);
    if fields.is_empty() && last.trim().is_empty() {
        return;
    }
    fields.push(last);
    records.push(RawRecord {
        line,
        fields: std::mem::take(fields),
    });
}

fn parse_trait_cell(cell: &str, name: &str, line: usize) -> Option<bool> {
    match cell {
        "1" => Some(true),
        "0" => Some(false),
        "" => None,
        other => {
            warn!(line, name, value = other, "unrecognized trait value, treating as unknown");
            None
        }
    }
}

/// Parse a pedigree from a JSON array of records.
pub fn parse_json(content: &str) -> Result<Pedigree> {
    let records: Vec<IndividualRecord> =
        serde_json::from_str(content).map_err(|e| Error::InvalidRecord {
            line: e.line(),
            message: e.to_string(),
        })?;
    let individuals = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| record.into_individual(i + 1))
        .collect::<Result<Vec<_>>>()?;
    Pedigree::new(individuals)
}

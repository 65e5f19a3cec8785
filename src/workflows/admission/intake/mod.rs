mod parser;

use crate::workflows::admission::domain::Applicant;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Failures while reading applicants or the seat limit.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read applicant data: {0}")]
    Io(#[from] std::io::Error),
    #[error("applicant record on line {line} is missing the {field} field")]
    MissingField { line: u64, field: &'static str },
    #[error("capacity must be a non-negative integer, got '{value}'")]
    InvalidCapacity { value: String },
    #[error("no capacity value was supplied")]
    MissingCapacity,
}

pub struct ApplicantImporter;

impl ApplicantImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Applicant>, IntakeError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let applicants = Self::from_reader(file)?;
        debug!(path = %path.display(), count = applicants.len(), "applicants loaded");
        Ok(applicants)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Applicant>, IntakeError> {
        parser::parse_records(BufReader::new(reader))
    }
}

pub fn parse_capacity(raw: &str) -> Result<usize, IntakeError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| IntakeError::InvalidCapacity {
            value: trimmed.to_string(),
        })
}

/// Reads the seat limit from the first whitespace-delimited token of `reader`.
pub fn read_capacity<R: BufRead>(reader: R) -> Result<usize, IntakeError> {
    for line in reader.lines() {
        let line = line?;
        if let Some(token) = line.split_whitespace().next() {
            return parse_capacity(token);
        }
    }

    Err(IntakeError::MissingCapacity)
}

/// Picks the seat limit: an explicit value wins, then the configured raw value,
/// and only then is `stdin` read. Sources after the first present one are never
/// parsed, so a bad configured value cannot block an explicit override.
pub fn resolve_capacity<R: BufRead>(
    explicit: Option<usize>,
    configured: Option<&str>,
    stdin: R,
) -> Result<usize, IntakeError> {
    if let Some(capacity) = explicit {
        return Ok(capacity);
    }
    if let Some(raw) = configured {
        return parse_capacity(raw);
    }
    read_capacity(stdin)
}

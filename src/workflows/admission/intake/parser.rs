use crate::workflows::admission::domain::{Applicant, Department, ExamScores, Preferences};
use std::borrow::Cow;
use std::io::BufRead;
use tracing::debug;

use super::IntakeError;

const FIELDS: [&str; 10] = [
    "first name",
    "last name",
    "physics",
    "chemistry",
    "math",
    "computer science",
    "special",
    "first preference",
    "second preference",
    "third preference",
];

/// One applicant per line, fields separated by any run of whitespace. Bytes
/// that are not valid UTF-8 are replaced rather than failing the whole file.
pub(crate) fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Applicant>, IntakeError> {
    let mut applicants = Vec::new();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line = index as u64 + 1;
        let text = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = text {
            debug!(line, "replaced invalid UTF-8 in applicant record");
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let applicant = applicant_from_tokens(&tokens, line)?;
        for preference in applicant.preferences.iter() {
            if Department::from_name(preference).is_none() {
                debug!(
                    line,
                    applicant = %applicant.name_key(),
                    preference,
                    "preference names no known department"
                );
            }
        }
        applicants.push(applicant);
    }

    Ok(applicants)
}

fn applicant_from_tokens(tokens: &[&str], line: u64) -> Result<Applicant, IntakeError> {
    if tokens.len() < FIELDS.len() {
        return Err(IntakeError::MissingField {
            line,
            field: FIELDS[tokens.len()],
        });
    }

    Ok(Applicant {
        first_name: tokens[0].to_string(),
        last_name: tokens[1].to_string(),
        scores: ExamScores {
            physics: score_or_zero(tokens[2]),
            chemistry: score_or_zero(tokens[3]),
            math: score_or_zero(tokens[4]),
            computer_science: score_or_zero(tokens[5]),
            special: score_or_zero(tokens[6]),
        },
        preferences: Preferences::new(tokens[7], tokens[8], tokens[9]),
    })
}

/// Unparseable exam tokens count as zero rather than rejecting the record.
fn score_or_zero(token: &str) -> u32 {
    token.parse().unwrap_or(0)
}

use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Department, Student};
use super::engine::AdmissionOutcome;

/// JSON view of a finished run: admissions per department and who went unplaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionSummary<'a> {
    pub capacity: usize,
    pub admitted: usize,
    pub departments: &'a BTreeMap<Department, Vec<Student>>,
    pub unmatched: Vec<String>,
}

impl AdmissionOutcome {
    pub fn summary(&self, capacity: usize) -> AdmissionSummary<'_> {
        AdmissionSummary {
            capacity,
            admitted: self.admitted_total(),
            departments: &self.departments,
            unmatched: self
                .unmatched
                .iter()
                .map(|applicant| format!("{} {}", applicant.first_name, applicant.last_name))
                .collect(),
        }
    }
}

use super::domain::{Applicant, Department};

/// Applicants not yet admitted anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantPool {
    applicants: Vec<Applicant>,
}

impl ApplicantPool {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        Self { applicants }
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Applicant> {
        self.applicants.iter()
    }

    pub fn into_applicants(self) -> Vec<Applicant> {
        self.applicants
    }

    /// Applicants whose choice at `rank` names `department`, in pool order.
    pub fn filter_by_preference(&self, rank: usize, department: Department) -> Vec<Applicant> {
        self.applicants
            .iter()
            .filter(|applicant| applicant.preference(rank) == Some(department.name()))
            .cloned()
            .collect()
    }

    /// Drops the first structurally equal entry for each applicant given. The
    /// vacated slot is filled by the last applicant, so pool order is not kept.
    /// Applicants that are no longer present are ignored.
    pub fn remove_all(&mut self, admitted: &[Applicant]) {
        for applicant in admitted {
            if let Some(position) = self.applicants.iter().position(|entry| entry == applicant) {
                self.applicants.swap_remove(position);
            }
        }
    }
}


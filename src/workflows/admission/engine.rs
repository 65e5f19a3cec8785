use std::collections::BTreeMap;

use tracing::{debug, info};

use super::domain::{Applicant, Department, Student};
use super::ordering::{rank_candidates, sort_students, to_student};
use super::pool::ApplicantPool;

/// Number of preference ranks swept, first choice to third.
pub const ROUNDS: usize = 3;

/// Working state of an allocation: admitted students per department plus the
/// applicants still waiting for a seat.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionState {
    pub admitted: BTreeMap<Department, Vec<Student>>,
    pub pool: ApplicantPool,
}

impl AdmissionState {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        let admitted = Department::ALL
            .into_iter()
            .map(|department| (department, Vec::new()))
            .collect();

        Self {
            admitted,
            pool: ApplicantPool::new(applicants),
        }
    }

    pub fn admitted_count(&self, department: Department) -> usize {
        self.admitted.get(&department).map_or(0, Vec::len)
    }
}

/// Result of a completed allocation, ready for output.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionOutcome {
    pub departments: BTreeMap<Department, Vec<Student>>,
    pub unmatched: Vec<Applicant>,
}

impl AdmissionOutcome {
    pub fn students(&self, department: Department) -> &[Student] {
        self.departments
            .get(&department)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn admitted_total(&self) -> usize {
        self.departments.values().map(Vec::len).sum()
    }
}

/// Greedy, preference-ordered allocation under a seat limit shared by every department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationEngine {
    capacity: usize,
}

impl AllocationEngine {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Runs all rounds over `applicants` and returns the sorted admissions.
    pub fn allocate(&self, applicants: Vec<Applicant>) -> AdmissionOutcome {
        let total = applicants.len();
        let mut state = AdmissionState::new(applicants);

        for rank in 0..ROUNDS {
            if state.pool.is_empty() {
                break;
            }
            for department in Department::ALL {
                state = self.step(state, rank, department);
            }
        }

        let outcome = Self::finalize(state);
        info!(
            applicants = total,
            admitted = outcome.admitted_total(),
            unmatched = outcome.unmatched.len(),
            capacity = self.capacity,
            "allocation complete"
        );
        outcome
    }

    /// Fills the remaining seats of `department` from applicants whose choice at
    /// `rank` names it, strongest first, and takes them out of the pool.
    pub fn step(&self, mut state: AdmissionState, rank: usize, department: Department) -> AdmissionState {
        let available = self
            .capacity
            .saturating_sub(state.admitted_count(department));
        if available == 0 {
            return state;
        }

        let candidates = state.pool.filter_by_preference(rank, department);
        if candidates.is_empty() {
            return state;
        }

        let mut accepted = rank_candidates(candidates, department);
        accepted.truncate(available);

        debug!(
            %department,
            rank,
            accepted = accepted.len(),
            available,
            "admitting candidates"
        );

        state
            .admitted
            .entry(department)
            .or_default()
            .extend(accepted.iter().map(|applicant| to_student(applicant, department)));
        state.pool.remove_all(&accepted);
        state
    }

    /// Sorts every department's admissions and hands back whoever was left over.
    pub fn finalize(state: AdmissionState) -> AdmissionOutcome {
        let AdmissionState { mut admitted, pool } = state;
        for students in admitted.values_mut() {
            sort_students(students);
        }

        AdmissionOutcome {
            departments: admitted,
            unmatched: pool.into_applicants(),
        }
    }
}

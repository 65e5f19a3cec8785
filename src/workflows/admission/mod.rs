//! Department admission: scoring, the applicant pool, the round-based
//! allocation engine, and the file collaborators around it.

pub mod domain;
pub mod engine;
pub mod intake;
pub mod ordering;
pub mod pool;
pub mod publish;
pub mod scoring;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{Applicant, Department, ExamScores, Preferences, Student};
pub use engine::{AdmissionOutcome, AdmissionState, AllocationEngine, ROUNDS};
pub use intake::{
    parse_capacity, read_capacity, resolve_capacity, ApplicantImporter, IntakeError,
};
pub use ordering::{rank_candidates, sort_students, to_student};
pub use pool::ApplicantPool;
pub use publish::{DepartmentPublisher, PublishError, PublishFailure, PublishReport};
pub use scoring::{base_score, exam_score};
pub use summary::AdmissionSummary;

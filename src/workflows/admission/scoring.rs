use super::domain::{Applicant, Department};

/// Department-specific average of the raw exams, before the special exam is considered.
pub fn base_score(applicant: &Applicant, department: Department) -> f64 {
    let scores = &applicant.scores;
    let physics = f64::from(scores.physics);
    let chemistry = f64::from(scores.chemistry);
    let math = f64::from(scores.math);
    let computer_science = f64::from(scores.computer_science);

    match department {
        Department::Physics => (physics + math) / 2.0,
        Department::Chemistry => chemistry,
        Department::Mathematics => math,
        Department::Biotech => (chemistry + physics) / 2.0,
        Department::Engineering => (computer_science + math) / 2.0,
    }
}

/// Admission score used both for ranking candidates and for the admitted record.
/// The special exam can only raise the result.
pub fn exam_score(applicant: &Applicant, department: Department) -> f64 {
    base_score(applicant, department).max(f64::from(applicant.scores.special))
}

use std::cmp::Ordering;

use super::domain::{Applicant, Department, Student};
use super::scoring::exam_score;

/// Higher score first; equal scores fall back to the concatenated name, ascending.
fn by_score_then_name(left_score: f64, left_key: &str, right_score: f64, right_key: &str) -> Ordering {
    right_score
        .total_cmp(&left_score)
        .then_with(|| left_key.cmp(right_key))
}

/// Orders candidates for `department` from strongest to weakest.
pub fn rank_candidates(candidates: Vec<Applicant>, department: Department) -> Vec<Applicant> {
    let mut keyed: Vec<(f64, String, Applicant)> = candidates
        .into_iter()
        .map(|applicant| {
            let score = exam_score(&applicant, department);
            let key = applicant.name_key();
            (score, key, applicant)
        })
        .collect();

    keyed.sort_by(|(left_score, left_key, _), (right_score, right_key, _)| {
        by_score_then_name(*left_score, left_key, *right_score, right_key)
    });

    keyed.into_iter().map(|(_, _, applicant)| applicant).collect()
}

/// Final per-department order. Applying it to an already sorted list is a no-op.
pub fn sort_students(students: &mut [Student]) {
    students.sort_by(|left, right| {
        by_score_then_name(left.exam, &left.name_key(), right.exam, &right.name_key())
    });
}

/// Admitted record for `applicant`, scored for the admitting department.
pub fn to_student(applicant: &Applicant, department: Department) -> Student {
    Student {
        first_name: applicant.first_name.clone(),
        last_name: applicant.last_name.clone(),
        exam: exam_score(applicant, department),
    }
}

use crate::workflows::admission::domain::{Applicant, ExamScores, Preferences, Student};

pub(super) fn applicant(first: &str, last: &str, scores: [u32; 5], preferences: [&str; 3]) -> Applicant {
    let [physics, chemistry, math, computer_science, special] = scores;
    Applicant {
        first_name: first.to_string(),
        last_name: last.to_string(),
        scores: ExamScores {
            physics,
            chemistry,
            math,
            computer_science,
            special,
        },
        preferences: Preferences::new(preferences[0], preferences[1], preferences[2]),
    }
}

pub(super) fn student(first: &str, last: &str, exam: f64) -> Student {
    Student {
        first_name: first.to_string(),
        last_name: last.to_string(),
        exam,
    }
}

/// The two-applicant scenario: both want Physics first, one seat per department.
pub(super) fn physics_rivals() -> Vec<Applicant> {
    vec![
        applicant(
            "Alice",
            "A",
            [90, 80, 70, 60, 50],
            ["Physics", "Chemistry", "Mathematics"],
        ),
        applicant(
            "Bob",
            "B",
            [95, 80, 70, 60, 50],
            ["Physics", "Chemistry", "Mathematics"],
        ),
    ]
}

pub(super) fn names(students: &[Student]) -> Vec<String> {
    students
        .iter()
        .map(|student| format!("{} {}", student.first_name, student.last_name))
        .collect()
}

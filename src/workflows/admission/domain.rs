use std::fmt;

use serde::Serialize;

/// Departments accepting applicants. Variants are declared alphabetically so the
/// derived ordering matches the order departments are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Department {
    Biotech,
    Chemistry,
    Engineering,
    Mathematics,
    Physics,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Biotech,
        Department::Chemistry,
        Department::Engineering,
        Department::Mathematics,
        Department::Physics,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Department::Biotech => "Biotech",
            Department::Chemistry => "Chemistry",
            Department::Engineering => "Engineering",
            Department::Mathematics => "Mathematics",
            Department::Physics => "Physics",
        }
    }

    /// Lowercased name used for the department's output destination.
    pub fn file_stem(self) -> String {
        self.name().to_ascii_lowercase()
    }

    /// Exact, case-sensitive lookup by the name applicants list in their preferences.
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|department| department.name() == value)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw exam results as read from the applicant file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExamScores {
    pub physics: u32,
    pub chemistry: u32,
    pub math: u32,
    pub computer_science: u32,
    pub special: u32,
}

/// Ranked department choices. Names are kept verbatim so that unknown or
/// repeated departments simply never match a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Preferences {
    pub first: String,
    pub second: String,
    pub third: String,
}

impl Preferences {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            third: third.into(),
        }
    }

    /// Choice at `rank` (0 = first choice). Ranks past the third choice have no entry.
    pub fn at(&self, rank: usize) -> Option<&str> {
        match rank {
            0 => Some(&self.first),
            1 => Some(&self.second),
            2 => Some(&self.third),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.first.as_str(),
            self.second.as_str(),
            self.third.as_str(),
        ]
        .into_iter()
    }
}

/// Candidate record loaded from input. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Applicant {
    pub first_name: String,
    pub last_name: String,
    pub scores: ExamScores,
    pub preferences: Preferences,
}

impl Applicant {
    pub fn preference(&self, rank: usize) -> Option<&str> {
        self.preferences.at(rank)
    }

    /// Tie-break key: first and last name concatenated with no separator.
    pub fn name_key(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

/// Admitted applicant with the exam score of the admitting department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub exam: f64,
}

impl Student {
    pub fn name_key(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }

    /// `first last score` with the score rendered to one decimal digit.
    pub fn render_line(&self) -> String {
        format!("{} {} {:.1}", self.first_name, self.last_name, self.exam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn departments_are_listed_alphabetically() {
        let mut names: Vec<&str> = Department::ALL.iter().map(|d| d.name()).collect();
        let listed = names.clone();
        names.sort_unstable();
        assert_eq!(names, listed);

        let mut ordered = Department::ALL.to_vec();
        ordered.sort();
        assert_eq!(ordered, Department::ALL.to_vec());
    }

    #[test]
    fn from_name_is_exact() {
        assert_eq!(Department::from_name("Physics"), Some(Department::Physics));
        assert_eq!(Department::from_name("physics"), None);
        assert_eq!(Department::from_name(""), None);
        assert_eq!(Department::Engineering.file_stem(), "engineering");
    }

    #[test]
    fn preference_ranks_beyond_third_are_empty() {
        let preferences = Preferences::new("Physics", "Chemistry", "Biotech");
        assert_eq!(preferences.at(0), Some("Physics"));
        assert_eq!(preferences.at(2), Some("Biotech"));
        assert_eq!(preferences.at(3), None);
    }

    #[test]
    fn student_line_uses_one_decimal() {
        let student = Student {
            first_name: "Bob".to_string(),
            last_name: "B".to_string(),
            exam: 82.5,
        };
        assert_eq!(student.render_line(), "Bob B 82.5");

        let rounded = Student {
            exam: 80.0,
            ..student
        };
        assert_eq!(rounded.render_line(), "Bob B 80.0");
    }
}

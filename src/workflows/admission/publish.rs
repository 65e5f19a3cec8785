use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use super::domain::{Department, Student};
use super::engine::AdmissionOutcome;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Department whose list could not be written.
#[derive(Debug)]
pub struct PublishFailure {
    pub department: Department,
    pub error: PublishError,
}

/// What happened to each department's list. Departments are attempted
/// independently, so a failure never undoes an earlier write.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub written: Vec<(Department, PathBuf)>,
    pub failures: Vec<PublishFailure>,
}

impl PublishReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_departments(&self) -> Vec<Department> {
        self.failures
            .iter()
            .map(|failure| failure.department)
            .collect()
    }
}

/// Writes one `<department>.txt` file per department into a directory.
pub struct DepartmentPublisher {
    output_dir: PathBuf,
}

impl DepartmentPublisher {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn path_for(&self, department: Department) -> PathBuf {
        self.output_dir
            .join(format!("{}.txt", department.file_stem()))
    }

    /// Writes every department in alphabetical order, calling `on_department`
    /// before each one.
    pub fn publish_with<F>(&self, outcome: &AdmissionOutcome, mut on_department: F) -> PublishReport
    where
        F: FnMut(Department),
    {
        let mut report = PublishReport::default();

        for department in Department::ALL {
            on_department(department);
            let path = self.path_for(department);
            match write_students(&path, outcome.students(department)) {
                Ok(()) => {
                    debug!(%department, path = %path.display(), "department list written");
                    report.written.push((department, path));
                }
                Err(source) => {
                    let err = PublishError::Write { path, source };
                    error!(%department, error = %err, "department list not written");
                    report.failures.push(PublishFailure {
                        department,
                        error: err,
                    });
                }
            }
        }

        report
    }

    pub fn publish(&self, outcome: &AdmissionOutcome) -> PublishReport {
        self.publish_with(outcome, |_| {})
    }
}

fn write_students(path: &Path, students: &[Student]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for student in students {
        writeln!(writer, "{}", student.render_line())?;
    }
    writer.flush()
}

use clap::{Args, Parser, Subcommand};
use department_admission::config::AppConfig;
use department_admission::error::AppError;
use department_admission::telemetry;
use department_admission::workflows::admission::{
    resolve_capacity, AdmissionOutcome, AllocationEngine, ApplicantImporter, DepartmentPublisher,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "admission",
    about = "Allocate applicants to departments by preference and exam score",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Allocate seats and write one result file per department (default command)
    Run(RunArgs),
    /// Allocate seats and print the outcome as JSON without writing files
    Summary(RunArgs),
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Applicant file, one whitespace-separated record per line
    #[arg(long)]
    input: Option<PathBuf>,
    /// Directory receiving the department result files
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Seats per department; read from stdin when neither this nor ADMISSION_CAPACITY is set
    #[arg(long)]
    capacity: Option<usize>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => {
            let run = allocate(args)?;
            publish(&run.output_dir, &run.outcome)
        }
        Command::Summary(args) => {
            let run = allocate(args)?;
            let summary = run.outcome.summary(run.capacity);
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}

struct Allocation {
    capacity: usize,
    output_dir: PathBuf,
    outcome: AdmissionOutcome,
}

fn allocate(args: RunArgs) -> Result<Allocation, AppError> {
    let RunArgs {
        input,
        output_dir,
        capacity,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(input) = input {
        config.admission.input = input;
    }
    if let Some(output_dir) = output_dir {
        config.admission.output_dir = output_dir;
    }

    telemetry::init(&config.telemetry)?;

    let capacity = resolve_capacity(
        capacity,
        config.admission.capacity.as_deref(),
        std::io::stdin().lock(),
    )?;

    let applicants = ApplicantImporter::from_path(&config.admission.input)?;
    info!(
        ?config.environment,
        input = %config.admission.input.display(),
        applicants = applicants.len(),
        capacity,
        "starting allocation"
    );

    let outcome = AllocationEngine::new(capacity).allocate(applicants);
    Ok(Allocation {
        capacity,
        output_dir: config.admission.output_dir,
        outcome,
    })
}

fn publish(output_dir: &Path, outcome: &AdmissionOutcome) -> Result<(), AppError> {
    let publisher = DepartmentPublisher::new(output_dir);
    let report = publisher.publish_with(outcome, |department| println!("{department}\n"));

    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::Publish {
            failed: report.failed_departments(),
        })
    }
}


use anyhow::Result;
use clap::Parser;
use console::Style;

use provost::actions::JobActions;
use provost::cli::{Cli, Command};
use provost::config::ProvostConfig;
use provost::error::ProvostError;
use provost::lifecycle::{Job, RandomIds};
use provost::ui::Report;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err}", Style::new().red().bold().apply_to("error:"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ProvostConfig::load()?;
    let report = Report::new();

    match cli.command {
        Command::New { machine, task, stage, index } => {
            let mut job = Job::new(&RandomIds, machine, &task, &stage, index);
            job.workflow = config.workflow;
            job.context = config.context;
            job.fill();
            job.validate();
            if !job.validation.is_valid() {
                report.validation(&job);
                return Err(ProvostError::InvalidJob(job.validation.errors().len()).into());
            }
            report.job_record(&job);
        }
        Command::Validate { file } => {
            let mut job = load_job(&file)?;
            job.fill();
            job.validate();
            report.validation(&job);
            if !job.validation.is_valid() {
                return Err(ProvostError::InvalidJob(job.validation.errors().len()).into());
            }
        }
        Command::Actions { file, os } => {
            let contents = std::fs::read_to_string(&file).map_err(ProvostError::Io)?;
            let all: JobActions = serde_json::from_str(&contents).map_err(ProvostError::Json)?;
            let target = os.unwrap_or(config.default_os);
            let kept = all.filter_os(&target);
            report.actions(&all, &kept, &target);
        }
        Command::Show { file } => {
            let mut job = load_job(&file)?;
            job.fill();
            report.job_record(&job);
        }
    }

    Ok(())
}

fn load_job(path: &str) -> Result<Job, ProvostError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

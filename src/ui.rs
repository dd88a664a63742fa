//! Terminal reporting — colored output via `console`.
//!
//! [`Report`] prints validation results, filtered action lists and job
//! records. Green for a clean job, red for violations, yellow for steps
//! the OS filter dropped.

use console::Style;

use crate::actions::JobActions;
use crate::lifecycle::Job;

/// Styled terminal reporter for the provost subcommands.
pub struct Report {
    green: Style,
    red: Style,
    yellow: Style,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the outcome of validating a job: a green check when the error
    /// set is empty, otherwise each violation on its own red-tagged line.
    pub fn validation(&self, job: &Job) {
        if job.validation.is_valid() {
            println!("{} Job {} is valid", self.green.apply_to("✓"), job.uuid);
            return;
        }
        println!("{} Job {} is invalid:", self.red.apply_to("✗"), job.uuid);
        for violation in job.validation.errors() {
            println!("  {} {violation}", self.red.apply_to("-"));
        }
    }

    /// Print the surviving action list after OS filtering, plus a note for
    /// how many steps were dropped.
    pub fn actions(&self, all: &JobActions, kept: &JobActions, target: &str) {
        for action in kept.iter() {
            let kind = if action.path.is_empty() {
                "run".to_string()
            } else {
                format!("write {}", action.path)
            };
            println!("{} {} ({kind})", self.green.apply_to("→"), action.name);
        }
        let dropped = all.len() - kept.len();
        if dropped > 0 {
            println!(
                "{}",
                self.yellow
                    .apply_to(format!("{dropped} step(s) not valid for `{target}`"))
            );
        }
    }

    /// Pretty-print the persisted representation of a job record.
    pub fn job_record(&self, job: &Job) {
        println!(
            "{}",
            serde_json::to_string_pretty(job).unwrap_or_default()
        );
    }
}

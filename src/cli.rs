//! Command-line interface, clap-based.
//!
//! Defines the [`Cli`] struct with the [`Command`] subcommands
//! (new, validate, actions, show).

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// provost — provisioning job lifecycle tracker.
#[derive(Debug, Parser)]
#[command(name = "provost", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a fresh job record and print it.
    New {
        /// UUID of the machine the job runs against.
        #[arg(long)]
        machine: Uuid,

        /// Task that produced the job, as `<name>:<stage>`.
        #[arg(long)]
        task: String,

        /// Stage the task was created in.
        #[arg(long)]
        stage: String,

        /// Position in the machine's task sequence.
        #[arg(long, default_value_t = 0)]
        index: usize,
    },

    /// Validate a job record from a JSON file.
    Validate {
        /// Path to the job record.
        file: String,
    },

    /// Filter a JSON action list for a target OS and print the survivors.
    Actions {
        /// Path to the action list.
        file: String,

        /// Target operating system; defaults to the configured one.
        #[arg(long)]
        os: Option<String>,
    },

    /// Round-trip a job record and pretty-print its persisted form.
    Show {
        /// Path to the job record.
        file: String,
    },
}

mod job;
mod state;
mod validation;

pub use job::{Claim, IdSource, Job, Meta, RandomIds};
pub use state::{ExitState, InvalidExitState, InvalidState, JobState};
pub use validation::{Validation, valid_name};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The five states of the job lifecycle.
///
/// A job flows: created → running → finished | failed, with an
/// interruption detour running → incomplete → running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Created,
    Running,
    Failed,
    Finished,
    Incomplete,
}

/// Raised when a string does not name a legal job state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid State `{0}`")]
pub struct InvalidState(pub String);

impl JobState {
    /// Terminal states can never be left.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Failed | JobState::Finished)
    }

    /// The legal-transition table. Triggers come from the agent or the
    /// scheduler; this core only answers whether the edge exists.
    pub fn can_transition_to(self, next: JobState) -> bool {
        matches!(
            (self, next),
            (JobState::Created, JobState::Running)
                | (JobState::Running, JobState::Finished)
                | (JobState::Running, JobState::Failed)
                | (JobState::Running, JobState::Incomplete)
                | (JobState::Incomplete, JobState::Running)
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobState::Created => "created",
            JobState::Running => "running",
            JobState::Failed => "failed",
            JobState::Finished => "finished",
            JobState::Incomplete => "incomplete",
        };
        write!(f, "{s}")
    }
}

impl FromStr for JobState {
    type Err = InvalidState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(JobState::Created),
            "running" => Ok(JobState::Running),
            "failed" => Ok(JobState::Failed),
            "finished" => Ok(JobState::Finished),
            "incomplete" => Ok(JobState::Incomplete),
            other => Err(InvalidState(other.to_string())),
        }
    }
}

/// The final disposition of a job, reported by the agent once the job
/// reaches a terminal state. The empty string (no disposition yet) is
/// handled by callers before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitState {
    Reboot,
    Poweroff,
    Stop,
    Complete,
    Failed,
}

/// Raised when a non-empty string does not name a legal exit state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid ExitState `{0}`")]
pub struct InvalidExitState(pub String);

impl fmt::Display for ExitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExitState::Reboot => "reboot",
            ExitState::Poweroff => "poweroff",
            ExitState::Stop => "stop",
            ExitState::Complete => "complete",
            ExitState::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ExitState {
    type Err = InvalidExitState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reboot" => Ok(ExitState::Reboot),
            "poweroff" => Ok(ExitState::Poweroff),
            "stop" => Ok(ExitState::Stop),
            "complete" => Ok(ExitState::Complete),
            "failed" => Ok(ExitState::Failed),
            other => Err(InvalidExitState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_roundtrips_through_strings() {
        for s in ["created", "running", "failed", "finished", "incomplete"] {
            assert_eq!(s.parse::<JobState>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn unknown_state_carries_offending_string() {
        let err = "paused".parse::<JobState>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid State `paused`");
    }

    #[test]
    fn terminal_states() {
        assert!(JobState::Failed.is_terminal());
        assert!(JobState::Finished.is_terminal());
        assert!(!JobState::Created.is_terminal());
        assert!(!JobState::Running.is_terminal());
        assert!(!JobState::Incomplete.is_terminal());
    }

    #[test]
    fn legal_transitions() {
        assert!(JobState::Created.can_transition_to(JobState::Running));
        assert!(JobState::Running.can_transition_to(JobState::Finished));
        assert!(JobState::Running.can_transition_to(JobState::Failed));
        assert!(JobState::Running.can_transition_to(JobState::Incomplete));
        assert!(JobState::Incomplete.can_transition_to(JobState::Running));
    }

    #[test]
    fn terminal_states_never_leave() {
        for next in [
            JobState::Created,
            JobState::Running,
            JobState::Failed,
            JobState::Finished,
            JobState::Incomplete,
        ] {
            assert!(!JobState::Failed.can_transition_to(next));
            assert!(!JobState::Finished.can_transition_to(next));
        }
    }

    #[test]
    fn created_cannot_skip_to_terminal() {
        assert!(!JobState::Created.can_transition_to(JobState::Finished));
        assert!(!JobState::Created.can_transition_to(JobState::Failed));
        assert!(!JobState::Created.can_transition_to(JobState::Incomplete));
    }

    #[test]
    fn exit_state_parsing() {
        for s in ["reboot", "poweroff", "stop", "complete", "failed"] {
            assert_eq!(s.parse::<ExitState>().unwrap().to_string(), s);
        }
        let err = "halt".parse::<ExitState>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid ExitState `halt`");
    }
}

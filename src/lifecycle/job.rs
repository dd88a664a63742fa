use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::{ExitState, JobState};
use super::validation::{Validation, valid_name};
use crate::store::{AuthScoped, Keyed, MetaBearing};

/// String key/value metadata copied from the originating template or set
/// through the generic metadata tooling.
pub type Meta = BTreeMap<String, String>;

/// Source of fresh job identifiers. Injected at creation time so tests can
/// supply deterministic IDs.
pub trait IdSource {
    fn next_id(&self) -> Uuid;
}

/// Production identifier source backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// One authorization claim granted to the agent for the duration of a job,
/// expanded from the task's configuration at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Claim {
    pub scope: String,
    pub action: String,
    pub specific: String,
}

/// One tracked execution of a Task/Stage pair against a Machine.
///
/// A job is created once by the scheduler and then only mutated through
/// state transitions until it reaches a terminal state. The serialized form
/// is a flat PascalCase field record; `ExtraClaims` and `Token` are omitted
/// entirely when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    /// Accumulated validation violations; never persisted.
    #[serde(skip)]
    pub validation: Validation,
    /// Primary key, immutable after creation.
    pub uuid: Uuid,
    /// The job that ran immediately before this one on the same machine.
    /// Audit chain only; the referenced job may no longer exist.
    #[serde(default)]
    pub previous: Option<Uuid>,
    /// The machine this job runs against. Also the authorization scope.
    pub machine: Uuid,
    /// `<name>:<stage>` of the task that produced this job.
    pub task: String,
    pub stage: String,
    #[serde(default)]
    pub context: String,
    /// One of `created`, `running`, `failed`, `finished`, `incomplete`.
    pub state: String,
    /// Final disposition: empty, `reboot`, `poweroff`, `stop`, `complete`
    /// or `failed`.
    #[serde(default)]
    pub exit_state: String,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    /// Set only once the job reaches a terminal state.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// One-way flag; once set, the job's execution log is gone for good.
    #[serde(default)]
    pub archived: bool,
    /// Whether this is the active job for its machine. At most one current
    /// job per machine, enforced by the scheduler.
    #[serde(default)]
    pub current: bool,
    /// Position in the machine's task sequence that produced this job.
    #[serde(default)]
    pub current_index: usize,
    /// Position that should run once this job finishes.
    #[serde(default)]
    pub next_index: usize,
    #[serde(default)]
    pub workflow: String,
    #[serde(default)]
    pub boot_env: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_claims: Vec<Claim>,
    /// Single-use token scoped to this job; absent means the agent's
    /// ambient credential applies.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl Job {
    /// Build a fresh job in the `created` state with the default linear
    /// index advance (`next_index = current_index + 1`). Exit-state-driven
    /// branching of the indexes belongs to the scheduler.
    pub fn new(ids: &dyn IdSource, machine: Uuid, task: &str, stage: &str, current_index: usize) -> Self {
        Self {
            validation: Validation::default(),
            uuid: ids.next_id(),
            previous: None,
            machine,
            task: task.to_string(),
            stage: stage.to_string(),
            context: String::new(),
            state: JobState::Created.to_string(),
            exit_state: String::new(),
            start_time: None,
            end_time: None,
            archived: false,
            current: false,
            current_index,
            next_index: current_index + 1,
            workflow: String::new(),
            boot_env: String::new(),
            extra_claims: Vec::new(),
            token: String::new(),
            meta: Some(Meta::new()),
        }
    }

    /// Normalize the record before use: the metadata mapping must always be
    /// observable. Safe to call any number of times.
    pub fn fill(&mut self) {
        if self.meta.is_none() {
            self.meta = Some(Meta::new());
        }
    }

    /// Check the record against the lifecycle rules, accumulating every
    /// violation found onto [`Job::validation`]. The record itself is left
    /// untouched; the caller decides whether to reject the mutation that
    /// produced it.
    pub fn validate(&mut self) {
        if !self.task.contains(':') {
            self.validation.add_error(format!("Invalid Task `{}`", self.task));
        }
        if let Err(why) = valid_name(&self.stage) {
            self.validation.add_error(format!("Invalid Stage `{}`: {why}", self.stage));
        }
        if let Err(err) = self.state.parse::<JobState>() {
            self.validation.add_error(err.to_string());
        }
        if !self.exit_state.is_empty() {
            if let Err(err) = self.exit_state.parse::<ExitState>() {
                self.validation.add_error(err.to_string());
            }
        }
    }

    /// Move the job along one edge of the state machine. Returns false and
    /// leaves the job untouched when the current state is not a legal state
    /// string or the edge does not exist (including any move out of a
    /// terminal state).
    ///
    /// Entering `running` from `created` stamps `start_time`; entering a
    /// terminal state stamps `end_time`. Resuming from `incomplete` keeps
    /// the original `start_time`.
    pub fn transition(&mut self, next: JobState) -> bool {
        let Ok(current) = self.state.parse::<JobState>() else {
            return false;
        };
        if !current.can_transition_to(next) {
            return false;
        }
        if current == JobState::Created && next == JobState::Running {
            self.start_time = Some(Utc::now());
        }
        if next.is_terminal() {
            self.end_time = Some(Utc::now());
        }
        self.state = next.to_string();
        true
    }

    /// Disable further log retrieval for this job. There is no way back.
    pub fn archive(&mut self) {
        self.archived = true;
    }
}

impl Keyed for Job {
    fn prefix(&self) -> &'static str {
        "jobs"
    }

    fn key(&self) -> String {
        self.uuid.to_string()
    }

    fn key_name(&self) -> &'static str {
        "Uuid"
    }
}

impl AuthScoped for Job {
    // Authorization is always scoped to the owning machine, never to the
    // job's own identity.
    fn auth_key(&self) -> String {
        self.machine.to_string()
    }
}

impl MetaBearing for Job {
    fn get_meta(&self) -> Meta {
        self.meta.clone().unwrap_or_default()
    }

    fn set_meta(&mut self, meta: Meta) {
        self.meta = Some(meta);
    }
}

//! Rendered job steps and the OS filter applied before handing them to the
//! agent.

use serde::{Deserialize, Serialize};

use crate::lifecycle::Meta;

/// One executable step of a job, rendered elsewhere from a task template.
///
/// When `path` is non-empty the agent writes `content` there (absolute, or
/// relative to the job's working directory); when it is empty, `content` is
/// a script to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobAction {
    /// Name of the template this step was rendered from.
    pub name: String,
    #[serde(default)]
    pub path: String,
    pub content: String,
    /// Metadata copied from the originating template. An `OS` key holds a
    /// comma-separated list of operating systems (or `any`) the step is
    /// valid for.
    #[serde(default)]
    pub meta: Meta,
}

impl JobAction {
    /// Whether this step may run on `target`. A step without `OS` metadata
    /// is valid everywhere, and an empty target accepts every step. OS
    /// tokens are trimmed and matched case-sensitively; `any` matches all
    /// targets.
    pub fn valid_for_os(&self, target: &str) -> bool {
        let Some(oses) = self.meta.get("OS") else {
            return true;
        };
        if target.is_empty() {
            return true;
        }
        oses.split(',')
            .map(str::trim)
            .any(|os| os == "any" || os == target)
    }
}

/// The ordered step sequence for one job; order is the execution order the
/// agent will follow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobActions(pub Vec<JobAction>);

impl JobActions {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobAction> {
        self.0.iter()
    }

    /// Derive the subsequence valid for `target`, preserving order. The
    /// input is never mutated.
    ///
    /// Only the first step is probed for `OS` metadata: a task is assumed
    /// to be either fully OS-tagged or not tagged at all, so an untagged
    /// first step passes the whole sequence through unfiltered. A sequence
    /// with mixed tagging therefore filters inconsistently; that is the
    /// documented policy, kept as-is because changing it would change what
    /// reaches the agent.
    pub fn filter_os(&self, target: &str) -> JobActions {
        if self.0.is_empty() {
            return self.clone();
        }
        if !self.0[0].meta.contains_key("OS") {
            return self.clone();
        }
        JobActions(
            self.0
                .iter()
                .filter(|action| action.valid_for_os(target))
                .cloned()
                .collect(),
        )
    }
}

impl FromIterator<JobAction> for JobActions {
    fn from_iter<I: IntoIterator<Item = JobAction>>(iter: I) -> Self {
        JobActions(iter.into_iter().collect())
    }
}

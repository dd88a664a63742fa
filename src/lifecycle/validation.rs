use serde::{Deserialize, Serialize};

/// Accumulating error set attached to a validatable record.
///
/// Validation never short-circuits and never rewrites the record: every
/// violation found is appended here and the caller decides what to do with
/// the invalid value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    errors: Vec<String>,
}

impl Validation {
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Drop accumulated violations before re-validating a mutated record.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// The generic valid-name rule: non-empty, ASCII letters, digits and
/// `-`, `_`, `.` only.
pub fn valid_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("must not be empty".to_string());
    }
    match name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
    {
        Some(c) => Err(format!("contains illegal character `{c}`")),
        None => Ok(()),
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvostError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Job failed validation with {0} violation(s)")]
    InvalidJob(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

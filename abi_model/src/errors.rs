use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML ABI description: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid JSON ABI description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported ABI description format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("type '{0}' is declared more than once")]
    DuplicateType(String),

    #[error("{kind} name '{name}' is not a valid C identifier")]
    InvalidIdentifier { kind: &'static str, name: String },
}

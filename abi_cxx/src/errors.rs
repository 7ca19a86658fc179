use std::path::PathBuf;
use thiserror::Error;

/* Fatal rendering errors; any of these aborts the whole run */
#[derive(Debug, Error)]
pub enum CodegenError {
  #[error("cannot declare '{name}' with type void")]
  VoidValue { name: String },

  #[error("array '{name}' must have at least one element")]
  ZeroLengthArray { name: String },

  #[error("'{name}' is declared more than once in '{scope}' after mangling")]
  DuplicateIdentifier { scope: String, name: String },

  #[error("failed to format generated output: {0}")]
  Fmt(#[from] std::fmt::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid generator config: {0}")]
  Yaml(#[from] serde_yml::Error),
}

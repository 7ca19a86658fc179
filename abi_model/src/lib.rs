//! ABI Type Model
//!
//! This crate contains the machine-independent type model of an ABI
//! description: primitive integers, aliases, enumerations and flag sets,
//! and records whose members may be tagged unions or pointer/length ranges.
//! It also knows how to load a model from a YAML or JSON description.
//! It contains no code generation logic.

pub mod errors;
pub mod file;
pub mod model;
pub mod types;
mod validate;

// Re-export commonly used types at the crate root
pub use errors::LoadError;
pub use file::{load_model, AbiFile, AbiMetadata};
pub use model::AbiModel;
pub use types::*;

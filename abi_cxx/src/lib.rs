//! Layout-checked C++ declarations for an ABI type model.
//!
//! Renders an [`abi_model::AbiModel`] into two headers: one with aliases,
//! scoped enumerations and forward declarations, and one with full record
//! definitions. Every record is followed by `static_assert`s proving it has
//! the same size, alignment and member offsets as the canonical C type.

pub mod codegen;
pub mod config;
pub mod errors;
pub mod report;

pub use codegen::{Artifact, CppCodeGenerator, GeneratedArtifacts, generate};
pub use config::{ArtifactConfig, GeneratorConfig};
pub use errors::{CodegenError, ConfigError};

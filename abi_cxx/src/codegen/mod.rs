pub mod cpp;
pub mod cpp_gen;

use crate::config::GeneratorConfig;
use crate::errors::CodegenError;
use abi_model::AbiModel;

pub use cpp::{Artifact, CppCodeGenerator, GeneratedArtifacts};

/// Render both artifacts for a model. Pure: no files are touched, and the
/// same model and config always give byte-identical output.
pub fn generate(model: &AbiModel, config: &GeneratorConfig) -> Result<GeneratedArtifacts, CodegenError> {
  CppCodeGenerator::new(config).emit_code(model)
}

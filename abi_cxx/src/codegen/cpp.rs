use crate::codegen::cpp_gen::{
  CanonicalNaming, CppNaming, RecordOptions, emit_struct, emit_typedef,
};
use crate::config::{ArtifactConfig, GeneratorConfig};
use crate::errors::CodegenError;
use abi_model::{AbiModel, Type};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/* One generated header, fully rendered */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
  pub file_name: String,
  pub contents: String,
}

impl Artifact {
  pub fn write_to(&self, output_dir: &Path) -> std::io::Result<PathBuf> {
    let path = output_dir.join(&self.file_name);
    fs::write(&path, &self.contents)?;
    Ok(path)
  }
}

/* Both artifacts of a run */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
  pub types: Artifact,
  pub structs: Artifact,
  /* Offset assertions emitted across all records */
  pub offset_assertions: usize,
}

impl GeneratedArtifacts {
  /* Write both headers; nothing is written unless generation already succeeded */
  pub fn write_to(&self, output_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    Ok(vec![self.types.write_to(output_dir)?, self.structs.write_to(output_dir)?])
  }
}

pub struct CppCodeGenerator<'a> {
  config: &'a GeneratorConfig,
  naming: CppNaming,
  canonical: CanonicalNaming,
}

impl<'a> CppCodeGenerator<'a> {
  pub fn new(config: &'a GeneratorConfig) -> Self {
    Self {
      config,
      naming: CppNaming::new(config.namespace.clone()),
      canonical: CanonicalNaming::new(config.canonical_prefix.clone()),
    }
  }

  pub fn emit_code(&self, model: &AbiModel) -> Result<GeneratedArtifacts, CodegenError> {
    let types = self.emit_types(model)?;
    let (structs, offset_assertions) = self.emit_structs(model)?;
    Ok(GeneratedArtifacts {
      types: Artifact {
        file_name: self.config.types_artifact.file_name.clone(),
        contents: types,
      },
      structs: Artifact {
        file_name: self.config.structs_artifact.file_name.clone(),
        contents: structs,
      },
      offset_assertions,
    })
  }

  /* Aliases, enumerations and struct forward declarations */
  pub fn emit_types(&self, model: &AbiModel) -> Result<String, CodegenError> {
    let mut output = String::new();
    self.emit_head(&mut output, model, &self.config.types_artifact)?;

    let mut emitted = 0usize;
    for ty in self.included(model) {
      emit_typedef(&mut output, ty, &self.naming, &self.canonical)?;
      emitted += 1;
    }

    self.emit_foot(&mut output, &self.config.types_artifact)?;
    tracing::info!(
      "rendered {} ({} of {} types)",
      self.config.types_artifact.file_name,
      emitted,
      model.len()
    );
    Ok(output)
  }

  /* Full record definitions, each followed by its layout assertions */
  pub fn emit_structs(&self, model: &AbiModel) -> Result<(String, usize), CodegenError> {
    let mut output = String::new();
    self.emit_head(&mut output, model, &self.config.structs_artifact)?;

    let options = RecordOptions {
      range_view_type: &self.config.range_view_type,
      range_length_member: self.config.range_length_member.as_deref(),
    };

    let mut assertions = 0usize;
    for ty in self.included(model) {
      if let Type::Struct(record) = ty {
        assertions += emit_struct(&mut output, record, &self.naming, &self.canonical, options)?;
      }
    }

    self.emit_foot(&mut output, &self.config.structs_artifact)?;
    tracing::info!(
      "rendered {} ({} offset assertions)",
      self.config.structs_artifact.file_name,
      assertions
    );
    Ok((output, assertions))
  }

  /* Types in model order, minus the exclusion set */
  fn included<'m>(&'m self, model: &'m AbiModel) -> impl Iterator<Item = &'m Type> + 'm {
    model.types().iter().filter(move |ty| match ty.name() {
      Some(name) if self.config.is_excluded(name) => {
        tracing::debug!("skipping excluded type {}", name);
        false
      }
      _ => true,
    })
  }

  fn emit_head(
    &self,
    output: &mut String,
    model: &AbiModel,
    artifact: &ArtifactConfig,
  ) -> Result<(), CodegenError> {
    writeln!(
      output,
      "// Generated from the {} ABI description. Do not edit.\n",
      model.name()
    )?;
    writeln!(output, "#ifndef {}", artifact.header_guard)?;
    writeln!(output, "#define {}\n", artifact.header_guard)?;
    if !artifact.preamble.is_empty() {
      writeln!(output, "{}", artifact.preamble)?;
    }
    writeln!(output, "namespace {} {{\n", self.naming.namespace())?;
    Ok(())
  }

  fn emit_foot(&self, output: &mut String, artifact: &ArtifactConfig) -> Result<(), CodegenError> {
    writeln!(output, "}}\n")?;
    writeln!(output, "#endif // {}", artifact.header_guard)?;
    Ok(())
  }
}

/* Layout and naming report for the analyze command */

use crate::codegen::cpp_gen::{CanonicalNaming, CppNaming, LayoutLeaf, Naming, layout_leaves};
use crate::config::GeneratorConfig;
use crate::errors::CodegenError;
use abi_model::{AbiModel, Type};
use indexmap::IndexMap;
use serde_derive::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EnumValueReport {
  pub name: String,
  pub generated: String,
  pub canonical: String,
  pub value: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EnumReport {
  pub generated: String,
  pub canonical: String,
  pub int_type: &'static str,
  pub flags: bool,
  pub values: Vec<EnumValueReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StructReport {
  pub generated: String,
  pub canonical: String,
  pub leaves: Vec<LayoutLeaf>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AnalysisReport {
  pub abi: String,
  pub excluded: Vec<String>,
  pub enums: IndexMap<String, EnumReport>,
  pub structs: IndexMap<String, StructReport>,
}

impl AnalysisReport {
  /* Number of offset assertions the structs artifact would carry */
  pub fn offset_assertions(&self) -> usize {
    self.structs.values().map(|s| s.leaves.len()).sum()
  }
}

/// Build the report for every generated enumeration and record, optionally
/// restricted to a single type name.
pub fn analyze(
  model: &AbiModel,
  config: &GeneratorConfig,
  only: Option<&str>,
) -> Result<AnalysisReport, CodegenError> {
  let naming = CppNaming::new(config.namespace.clone());
  let canonical = CanonicalNaming::new(config.canonical_prefix.clone());

  let mut report = AnalysisReport {
    abi: model.name().to_string(),
    excluded: Vec::new(),
    enums: IndexMap::new(),
    structs: IndexMap::new(),
  };

  for ty in model.types() {
    let Some(name) = ty.name() else { continue };
    if only.is_some_and(|wanted| wanted != name) {
      continue;
    }
    if config.is_excluded(name) {
      report.excluded.push(name.to_string());
      continue;
    }

    match ty {
      Type::IntLike(int_like) => {
        let values = int_like
          .values
          .iter()
          .map(|value| EnumValueReport {
            name: value.name.clone(),
            generated: naming.valname(int_like, value),
            canonical: canonical.valname(int_like, value),
            value: value.value,
          })
          .collect();
        report.enums.insert(
          name.to_string(),
          EnumReport {
            generated: naming.typename(ty)?,
            canonical: canonical.typename(ty)?,
            int_type: int_like.int_type.name(),
            flags: int_like.flags,
            values,
          },
        );
      }
      Type::Struct(record) => {
        report.structs.insert(
          name.to_string(),
          StructReport {
            generated: naming.typename(ty)?,
            canonical: canonical.typename(ty)?,
            leaves: layout_leaves(&record.members, config.range_length_member.as_deref()),
          },
        );
      }
      Type::Void
      | Type::Int(_)
      | Type::Atomic(_)
      | Type::Pointer(_)
      | Type::Array(_)
      | Type::Alias(_)
      | Type::UserDefined(_) => {}
    }
  }

  Ok(report)
}

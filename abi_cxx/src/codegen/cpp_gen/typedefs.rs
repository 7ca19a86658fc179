use super::canonical::CanonicalNaming;
use super::naming::{CppNaming, Naming};
use crate::errors::CodegenError;
use abi_model::{IntLikeType, Type};
use std::collections::BTreeSet;
use std::fmt::Write;

/* Emit the lightweight declaration for one type of the model */
pub fn emit_typedef(
  output: &mut String,
  ty: &Type,
  naming: &CppNaming,
  canonical: &CanonicalNaming,
) -> Result<(), CodegenError> {
  match ty {
    Type::Alias(_) => {
      writeln!(output, "using {} = {};\n", naming.typename(ty)?, canonical.typename(ty)?)?;
    }
    Type::IntLike(int_like) => {
      let name = naming.typename(ty)?;
      let ctype = canonical.typename(ty)?;
      emit_enum_class(output, &name, &ctype, int_like, naming, canonical)?;
      if int_like.flags {
        emit_flag_operators(output, &name, &ctype)?;
      }
    }
    Type::Struct(_) => {
      writeln!(output, "struct {};\n", naming.typename(ty)?)?;
    }
    Type::Void
    | Type::Int(_)
    | Type::Atomic(_)
    | Type::Pointer(_)
    | Type::Array(_)
    | Type::UserDefined(_) => {
      tracing::debug!("nothing to declare for {:?}", ty);
    }
  }
  Ok(())
}

/* Scoped enumeration whose values are the canonical constants, in declared order */
fn emit_enum_class(
  output: &mut String,
  name: &str,
  ctype: &str,
  int_like: &IntLikeType,
  naming: &CppNaming,
  canonical: &CanonicalNaming,
) -> Result<(), CodegenError> {
  let mut declared = BTreeSet::new();
  for value in &int_like.values {
    let mangled = naming.valname(int_like, value);
    if !declared.insert(mangled.clone()) {
      return Err(CodegenError::DuplicateIdentifier { scope: name.to_string(), name: mangled });
    }
  }

  /* A declared zero `none` takes the place of the synthesized one */
  let synthesize_none = int_like.flags
    && match int_like.values.iter().find(|v| naming.valname(int_like, v) == "none") {
      None => true,
      Some(value) if value.value == 0 => false,
      Some(_) => {
        return Err(CodegenError::DuplicateIdentifier {
          scope: name.to_string(),
          name: "none".to_string(),
        });
      }
    };

  write!(output, "enum class {} : {} {{", name, ctype)?;

  if !int_like.values.is_empty() || int_like.flags {
    output.push('\n');
    let width = int_like
      .values
      .iter()
      .map(|v| naming.valname(int_like, v).len())
      .max()
      .unwrap_or(0);

    if synthesize_none {
      writeln!(output, "  {:width$} = 0,", "none", width = width)?;
    }
    for value in &int_like.values {
      writeln!(
        output,
        "  {:width$} = {},",
        naming.valname(int_like, value),
        canonical.valname(int_like, value),
        width = width
      )?;
    }
  }

  writeln!(output, "}};\n")?;
  Ok(())
}

/* The whole algebra of a flags type: |, & and ~ through the canonical integer */
fn emit_flag_operators(output: &mut String, name: &str, ctype: &str) -> Result<(), CodegenError> {
  for op in ["|", "&"] {
    writeln!(
      output,
      "inline {ty} operator {op} ({ty} a, {ty} b) {{\n  return {ty}({ctype}(a) {op} {ctype}(b));\n}}\n",
      ty = name,
      op = op,
      ctype = ctype
    )?;
  }
  writeln!(
    output,
    "inline {ty} operator ~ ({ty} v) {{\n  return {ty}(~{ctype}(v));\n}}\n",
    ty = name,
    ctype = ctype
  )?;
  Ok(())
}

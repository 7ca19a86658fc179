use super::canonical::CanonicalNaming;
use super::helpers::indent;
use super::naming::{CppNaming, Naming, mangle};
use super::verify::emit_layout_assertions;
use crate::errors::CodegenError;
use abi_model::{StructMember, StructType, Type};
use std::collections::BTreeSet;
use std::fmt::Write;

/* Settings of the record emitter that come from the generator config */
#[derive(Debug, Clone, Copy)]
pub struct RecordOptions<'a> {
  pub range_view_type: &'a str,
  pub range_length_member: Option<&'a str>,
}

/// Emit the full definition of one record followed by its layout
/// assertions. Returns the number of offset assertions emitted.
pub fn emit_struct(
  output: &mut String,
  record: &StructType,
  naming: &CppNaming,
  canonical: &CanonicalNaming,
  options: RecordOptions<'_>,
) -> Result<usize, CodegenError> {
  let ty = Type::Struct(record.clone());
  let name = naming.typename(&ty)?;
  let cname = canonical.typename(&ty)?;

  writeln!(output, "struct {} {{", name)?;
  emit_members(output, &record.members, &name, 1, &BTreeSet::new(), naming, options)?;
  writeln!(output, "}};")?;

  let count = emit_layout_assertions(output, &name, &cname, &record.members, options.range_length_member)?;
  output.push('\n');

  tracing::debug!("emitted struct {} with {} offset assertions", name, count);
  Ok(count)
}

/* Names a member list declares in its own scope, hoisted alternatives included.
 * Two members spelled the same once mangled would not compile. */
fn scope_names(
  members: &[StructMember],
  scope: &str,
  names: &mut BTreeSet<String>,
) -> Result<(), CodegenError> {
  for member in members {
    let declared = match member {
      StructMember::Simple(_) | StructMember::Range(_) => member.name(),
      StructMember::Variant(variant) => {
        for alternative in &variant.alternatives {
          match &alternative.name {
            Some(name) => declare(scope, names, name)?,
            None => scope_names(&alternative.members, scope, names)?,
          }
        }
        None
      }
    };
    if let Some(name) = declared {
      declare(scope, names, name)?;
    }
  }
  Ok(())
}

fn declare(scope: &str, names: &mut BTreeSet<String>, name: &str) -> Result<(), CodegenError> {
  let mangled = mangle(name);
  if names.contains(&mangled) {
    return Err(CodegenError::DuplicateIdentifier { scope: scope.to_string(), name: mangled });
  }
  names.insert(mangled);
  Ok(())
}

fn emit_members(
  output: &mut String,
  members: &[StructMember],
  scope: &str,
  depth: usize,
  enclosing: &BTreeSet<String>,
  naming: &CppNaming,
  options: RecordOptions<'_>,
) -> Result<(), CodegenError> {
  let mut own = BTreeSet::new();
  scope_names(members, scope, &mut own)?;
  let mut shadowed = enclosing.clone();
  shadowed.extend(own);
  let scoped = naming.scoped(&shadowed);
  let pad = indent(depth);

  for member in members {
    match member {
      StructMember::Simple(simple) => {
        writeln!(output, "{}{};", pad, scoped.vardecl(&simple.ty, &mangle(&simple.name))?)?;
      }
      StructMember::Variant(variant) => {
        writeln!(output, "{}union {{", pad)?;
        for alternative in &variant.alternatives {
          match &alternative.name {
            None => {
              emit_members(output, &alternative.members, scope, depth + 1, &shadowed, naming, options)?;
            }
            Some(alt_name) => {
              writeln!(output, "{}  struct {{", pad)?;
              let nested = format!("{}.{}", scope, mangle(alt_name));
              emit_members(output, &alternative.members, &nested, depth + 2, &shadowed, naming, options)?;
              writeln!(output, "{}  }} {};", pad, mangle(alt_name))?;
            }
          }
        }
        writeln!(output, "{}}};", pad)?;
      }
      StructMember::Range(range) => {
        writeln!(
          output,
          "{}{}<{}{}> {};",
          pad,
          options.range_view_type,
          scoped.typename(&range.target)?,
          if range.constant { " const" } else { "" },
          mangle(&range.name)
        )?;
      }
    }
  }
  Ok(())
}

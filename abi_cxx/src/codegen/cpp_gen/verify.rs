use super::layout::layout_leaves;
use crate::errors::CodegenError;
use abi_model::StructMember;
use std::fmt::Write;

/// Emit the assertions binding a generated record to its canonical
/// counterpart: size, alignment, then one offset check per layout leaf in
/// member-declaration order. Returns the number of offset checks.
pub fn emit_layout_assertions(
  output: &mut String,
  name: &str,
  cname: &str,
  members: &[StructMember],
  range_length_member: Option<&str>,
) -> Result<usize, CodegenError> {
  writeln!(output, "static_assert(sizeof({}) == sizeof({}), \"\");", name, cname)?;
  writeln!(output, "static_assert(alignof({}) == alignof({}), \"\");", name, cname)?;

  let leaves = layout_leaves(members, range_length_member);
  for leaf in &leaves {
    writeln!(
      output,
      "static_assert(offsetof({}, {}) == offsetof({}, {}), \"\");",
      name, leaf.generated, cname, leaf.canonical
    )?;
  }
  Ok(leaves.len())
}

/* Layout paths shared by the record emitter and the layout verifier */

use super::naming::mangle;
use abi_model::StructMember;
use serde_derive::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafKind {
  /* A simple member, same name on both sides */
  Field,
  /* The view of a range member against the canonical base pointer */
  RangeBase,
  /* The length half of a view against the canonical length field */
  RangeLength,
}

/// One offset the generated record must share with the canonical one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LayoutLeaf {
  pub generated: String,
  pub canonical: String,
  pub kind: LeafKind,
}

/// Dotted prefix to a member through named variant alternatives. The
/// generated side spells names mangled; the canonical side keeps them raw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPath {
  generated: String,
  canonical: String,
}

impl LayoutPath {
  pub fn root() -> Self {
    Self::default()
  }

  pub fn nested(&self, name: &str) -> Self {
    Self {
      generated: format!("{}{}.", self.generated, mangle(name)),
      canonical: format!("{}{}.", self.canonical, name),
    }
  }

  pub fn generated(&self, name: &str) -> String {
    format!("{}{}", self.generated, mangle(name))
  }

  pub fn canonical(&self, name: &str) -> String {
    format!("{}{}", self.canonical, name)
  }
}

/// Walk a member list in declaration order and collect every leaf whose
/// offset is asserted. Anonymous alternatives keep the current prefix,
/// named ones extend it with `<name>.`.
///
/// `range_length_member` names the view's length member; when set, the
/// length half of each range is checked as well.
pub fn layout_leaves(members: &[StructMember], range_length_member: Option<&str>) -> Vec<LayoutLeaf> {
  let mut leaves = Vec::new();
  walk_members(members, &LayoutPath::root(), range_length_member, &mut leaves);
  leaves
}

fn walk_members(
  members: &[StructMember],
  path: &LayoutPath,
  range_length_member: Option<&str>,
  leaves: &mut Vec<LayoutLeaf>,
) {
  for member in members {
    match member {
      StructMember::Simple(simple) => leaves.push(LayoutLeaf {
        generated: path.generated(&simple.name),
        canonical: path.canonical(&simple.name),
        kind: LeafKind::Field,
      }),
      StructMember::Variant(variant) => {
        for alternative in &variant.alternatives {
          match &alternative.name {
            None => walk_members(&alternative.members, path, range_length_member, leaves),
            Some(name) => {
              walk_members(&alternative.members, &path.nested(name), range_length_member, leaves)
            }
          }
        }
      }
      StructMember::Range(range) => {
        leaves.push(LayoutLeaf {
          generated: path.generated(&range.name),
          canonical: path.canonical(&range.base_name),
          kind: LeafKind::RangeBase,
        });
        if let Some(length_member) = range_length_member {
          leaves.push(LayoutLeaf {
            generated: format!("{}.{}", path.generated(&range.name), length_member),
            canonical: path.canonical(&range.length_name),
            kind: LeafKind::RangeLength,
          });
        }
      }
    }
  }
}

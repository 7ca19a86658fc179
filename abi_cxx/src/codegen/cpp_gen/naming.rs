/* Identifier mangling and type rendering for the C++ side */

use super::helpers::{cpp_integral_type, is_cpp_keyword, sanitize_identifier};
use crate::errors::CodegenError;
use abi_model::{EnumValue, IntLikeType, Type};
use std::collections::BTreeSet;

/* Names that would shadow a standard facility once mangled */
const RENAMES: &[(&str, &str)] = &[("errno", "error")];

/// Map an ABI identifier to a C++-safe identifier.
///
/// Rules apply in order and the first match wins: a leading digit gets a
/// `_` prefix, a reserved word gets a `_` suffix, and the fixed renaming
/// table covers the remaining collisions. The result is a fixed point:
/// `mangle(&mangle(x)) == mangle(x)`.
pub fn mangle(name: &str) -> String {
  let name = sanitize_identifier(name);
  if name.starts_with(|c: char| c.is_ascii_digit()) {
    return format!("_{}", name);
  }
  if is_cpp_keyword(&name) {
    return format!("{}_", name);
  }
  if let Some((_, renamed)) = RENAMES.iter().find(|(from, _)| *from == name) {
    return renamed.to_string();
  }
  name
}

/// Spelling rules shared by the generated and the canonical representation.
pub trait Naming {
  /* Spelling of a type that is not threaded through a declarator */
  fn leaf_typename(&self, ty: &Type) -> Result<String, CodegenError>;

  fn valname(&self, owner: &IntLikeType, value: &EnumValue) -> String;

  fn typename(&self, ty: &Type) -> Result<String, CodegenError> {
    match ty {
      Type::Pointer(_) | Type::Array(_) => self.vardecl(ty, ""),
      _ => self.leaf_typename(ty),
    }
  }

  /* Declare a variable or field called `name` of type `ty` */
  fn vardecl(&self, ty: &Type, name: &str) -> Result<String, CodegenError> {
    declarator(ty, name, false, false, &|leaf: &Type| self.leaf_typename(leaf))
  }
}

/* Thread pointers and arrays through the declarator, innermost last */
fn declarator(
  ty: &Type,
  name: &str,
  array_needs_parens: bool,
  behind_pointer: bool,
  leaf: &dyn Fn(&Type) -> Result<String, CodegenError>,
) -> Result<String, CodegenError> {
  match ty {
    Type::Pointer(pointer) => {
      let decl = declarator(&pointer.target, &format!("*{}", name), true, true, leaf)?;
      if pointer.constant {
        Ok(format!("const {}", decl))
      } else {
        Ok(decl)
      }
    }
    Type::Array(array) => {
      if array.count == 0 {
        return Err(CodegenError::ZeroLengthArray { name: name.to_string() });
      }
      let name = if array_needs_parens {
        format!("({})", name)
      } else {
        name.to_string()
      };
      declarator(&array.element, &format!("{}[{}]", name, array.count), false, false, leaf)
    }
    Type::Void if !behind_pointer && !name.is_empty() => {
      Err(CodegenError::VoidValue { name: name.to_string() })
    }
    Type::Void
    | Type::Int(_)
    | Type::Atomic(_)
    | Type::Alias(_)
    | Type::IntLike(_)
    | Type::UserDefined(_)
    | Type::Struct(_) => Ok(format!("{} {}", leaf(ty)?, name)),
  }
}

/// C++ spelling of the generated declarations.
#[derive(Debug, Clone)]
pub struct CppNaming {
  namespace: String,
}

impl CppNaming {
  pub fn new(namespace: impl Into<String>) -> Self {
    Self { namespace: namespace.into() }
  }

  pub fn namespace(&self) -> &str {
    &self.namespace
  }

  /* Spell types as seen from inside a record where `shadowed` names are members */
  pub fn scoped<'a>(&'a self, shadowed: &'a BTreeSet<String>) -> ScopedCppNaming<'a> {
    ScopedCppNaming { base: self, shadowed }
  }

  fn render_leaf(
    &self,
    ty: &Type,
    shadowed: Option<&BTreeSet<String>>,
    naming: &dyn Naming,
  ) -> Result<String, CodegenError> {
    match ty {
      Type::Void => Ok("void".to_string()),
      Type::Int(int_type) => Ok(cpp_integral_type(*int_type)),
      Type::Atomic(target) => Ok(format!("std::atomic<{}>", naming.typename(target)?)),
      Type::Pointer(_) | Type::Array(_) => naming.typename(ty),
      Type::Alias(_) | Type::IntLike(_) | Type::UserDefined(_) | Type::Struct(_) => {
        let name = mangle(ty.name().unwrap_or_default());
        match shadowed {
          Some(members) if members.contains(&name) => {
            Ok(format!("{}::{}", self.namespace, name))
          }
          _ => Ok(name),
        }
      }
    }
  }
}

impl Naming for CppNaming {
  fn leaf_typename(&self, ty: &Type) -> Result<String, CodegenError> {
    self.render_leaf(ty, None, self)
  }

  fn valname(&self, _owner: &IntLikeType, value: &EnumValue) -> String {
    mangle(&value.name)
  }
}

/// C++ spelling inside a record body, qualifying type names that a member
/// of the record (or of an enclosing record) would otherwise shadow.
pub struct ScopedCppNaming<'a> {
  base: &'a CppNaming,
  shadowed: &'a BTreeSet<String>,
}

impl Naming for ScopedCppNaming<'_> {
  fn leaf_typename(&self, ty: &Type) -> Result<String, CodegenError> {
    self.base.render_leaf(ty, Some(self.shadowed), self)
  }

  fn valname(&self, owner: &IntLikeType, value: &EnumValue) -> String {
    self.base.valname(owner, value)
  }
}

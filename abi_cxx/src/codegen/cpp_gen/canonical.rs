/* Spelling of the canonical C representation the generated code is checked against */

use super::helpers::c_integral_type;
use super::naming::Naming;
use crate::errors::CodegenError;
use abi_model::{EnumValue, IntLikeType, Type};

/// Naming convention of the reference C header: user-defined types are
/// `<prefix><name>_t` and enumeration values are
/// `<PREFIX><CPREFIX><VALUE>`, where the value infix defaults to `<NAME>_`.
#[derive(Debug, Clone)]
pub struct CanonicalNaming {
  prefix: String,
}

impl CanonicalNaming {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self { prefix: prefix.into() }
  }
}

impl Naming for CanonicalNaming {
  fn leaf_typename(&self, ty: &Type) -> Result<String, CodegenError> {
    match ty {
      Type::Void => Ok("void".to_string()),
      Type::Int(int_type) => Ok(c_integral_type(*int_type)),
      Type::Atomic(target) => Ok(format!("_Atomic({})", self.typename(target)?)),
      Type::Pointer(_) | Type::Array(_) => self.typename(ty),
      Type::Alias(_) | Type::IntLike(_) | Type::UserDefined(_) | Type::Struct(_) => Ok(format!(
        "{}{}_t",
        self.prefix,
        ty.name().unwrap_or_default()
      )),
    }
  }

  fn valname(&self, owner: &IntLikeType, value: &EnumValue) -> String {
    let infix = match &owner.cprefix {
      Some(cprefix) => cprefix.to_uppercase(),
      None => format!("{}_", owner.name.to_uppercase()),
    };
    format!(
      "{}{}{}",
      self.prefix.to_uppercase(),
      infix,
      value.name.to_uppercase()
    )
  }
}

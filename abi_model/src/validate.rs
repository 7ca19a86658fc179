//! Identifier checks applied when a model is built.
//!
//! Canonical C code is addressed with the names exactly as declared, so
//! every name must already be spellable in C. Member and alternative names
//! appear on their own in `offsetof` paths and must be full identifiers.
//! Type and value names are always pasted after a prefix, so only their
//! characters are checked (`2big` is fine as `CLOUDABI_E2BIG`).

use crate::errors::LoadError;
use crate::types::{StructMember, Type};

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn check_fragment(kind: &'static str, name: &str) -> Result<(), LoadError> {
    if name.is_empty() || !name.chars().all(is_identifier_char) {
        return Err(LoadError::InvalidIdentifier {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

fn check_identifier(kind: &'static str, name: &str) -> Result<(), LoadError> {
    check_fragment(kind, name)?;
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(LoadError::InvalidIdentifier {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_type(ty: &Type) -> Result<(), LoadError> {
    match ty {
        Type::Void | Type::Int(_) => Ok(()),
        Type::Atomic(target) => check_type(target),
        Type::Pointer(pointer) => check_type(&pointer.target),
        Type::Array(array) => check_type(&array.element),
        Type::UserDefined(name) => check_fragment("type", name),
        Type::Alias(alias) => {
            check_fragment("type", &alias.name)?;
            check_type(&alias.underlying)
        }
        Type::IntLike(int_like) => {
            check_fragment("type", &int_like.name)?;
            if let Some(cprefix) = &int_like.cprefix {
                check_fragment("value prefix", cprefix)?;
            }
            for value in &int_like.values {
                check_fragment("value", &value.name)?;
            }
            Ok(())
        }
        Type::Struct(record) => {
            check_fragment("type", &record.name)?;
            check_members(&record.members)
        }
    }
}

fn check_members(members: &[StructMember]) -> Result<(), LoadError> {
    for member in members {
        match member {
            StructMember::Simple(simple) => {
                check_identifier("member", &simple.name)?;
                check_type(&simple.ty)?;
            }
            StructMember::Variant(variant) => {
                for alternative in &variant.alternatives {
                    if let Some(name) = &alternative.name {
                        check_identifier("alternative", name)?;
                    }
                    check_members(&alternative.members)?;
                }
            }
            StructMember::Range(range) => {
                check_identifier("member", &range.name)?;
                check_identifier("member", &range.base_name)?;
                check_identifier("member", &range.length_name)?;
                check_type(&range.target)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IntegralType, RangeMember, StructType};

    fn record(members: Vec<StructMember>) -> Type {
        Type::Struct(StructType {
            name: "s".to_string(),
            members,
        })
    }

    #[test]
    fn member_names_must_be_c_identifiers() {
        let int = Type::Int(IntegralType::Uint8);
        assert!(check_type(&record(vec![StructMember::simple("a_b", int.clone())])).is_ok());
        assert!(matches!(
            check_type(&record(vec![StructMember::simple("a-b", int.clone())])),
            Err(LoadError::InvalidIdentifier { kind: "member", .. })
        ));
        assert!(check_type(&record(vec![StructMember::simple("2x", int)])).is_err());
    }

    #[test]
    fn range_field_names_are_checked_too() {
        let mut range = RangeMember::new("data", Type::Void, false);
        range.length_name = "data len".to_string();
        assert!(check_type(&record(vec![StructMember::Range(range)])).is_err());
    }

    #[test]
    fn leading_digits_are_fine_in_pasted_names() {
        let ty = Type::pointer(Type::user_defined("2d_point"), false);
        assert!(check_type(&ty).is_ok());
        assert!(check_type(&Type::user_defined("a.b")).is_err());
    }
}

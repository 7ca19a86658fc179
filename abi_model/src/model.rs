use crate::errors::LoadError;
use crate::types::{StructType, Type};
use crate::validate;
use indexmap::IndexMap;

/* A complete, read-only ABI type model in declaration order */
#[derive(Debug, Clone, PartialEq)]
pub struct AbiModel {
    name: String,
    types: Vec<Type>,
    by_name: IndexMap<String, usize>,
}

impl AbiModel {
    /* Build a model; names must be C-spellable and user-defined type names unique */
    pub fn new(name: impl Into<String>, types: Vec<Type>) -> Result<Self, LoadError> {
        let mut by_name = IndexMap::with_capacity(types.len());
        for (idx, ty) in types.iter().enumerate() {
            validate::check_type(ty)?;
            if let Some(type_name) = ty.name() {
                if by_name.insert(type_name.to_string(), idx).is_some() {
                    return Err(LoadError::DuplicateType(type_name.to_string()));
                }
            }
        }
        Ok(Self {
            name: name.into(),
            types,
            by_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /* All types, in the order the description declares them */
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.by_name.get(name).map(|&idx| &self.types[idx])
    }

    pub fn structs(&self) -> impl Iterator<Item = &StructType> {
        self.types.iter().filter_map(|ty| match ty {
            Type::Struct(st) => Some(st),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

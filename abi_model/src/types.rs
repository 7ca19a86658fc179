use serde_derive::{Deserialize, Serialize};

/// Fixed-width primitive integers, keyed by the name the ABI description
/// declares them with.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IntegralType {
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Size,
    Uintptr,
}

impl IntegralType {
    /// The declared primitive name, e.g. `uint32` or `size`.
    pub fn name(self) -> &'static str {
        match self {
            IntegralType::Char => "char",
            IntegralType::Int8 => "int8",
            IntegralType::Int16 => "int16",
            IntegralType::Int32 => "int32",
            IntegralType::Int64 => "int64",
            IntegralType::Uint8 => "uint8",
            IntegralType::Uint16 => "uint16",
            IntegralType::Uint32 => "uint32",
            IntegralType::Uint64 => "uint64",
            IntegralType::Size => "size",
            IntegralType::Uintptr => "uintptr",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct PointerType {
    pub target: Box<Type>,
    #[serde(default, rename = "const")]
    pub constant: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ArrayType {
    pub element: Box<Type>,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AliasType {
    pub name: String,
    pub underlying: Box<Type>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct EnumValue {
    pub name: String,
    pub value: u64,
}

/// An enumeration or, when `flags` is set, a set of independent bits.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct IntLikeType {
    pub name: String,
    pub int_type: IntegralType,
    #[serde(default)]
    pub flags: bool,
    /// Overrides the `NAME_` infix of the canonical value constants.
    #[serde(default)]
    pub cprefix: Option<String>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl IntLikeType {
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct StructType {
    pub name: String,
    #[serde(default)]
    pub members: Vec<StructMember>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum Type {
    Void,
    Int(IntegralType),
    Atomic(Box<Type>),
    Pointer(PointerType),
    Array(ArrayType),
    Alias(AliasType),
    IntLike(IntLikeType),
    UserDefined(String),
    Struct(StructType),
}

impl Type {
    /// Name of a user-defined type; `None` for primitives and compound
    /// types built from other types.
    pub fn name(&self) -> Option<&str> {
        match self {
            Type::Alias(alias) => Some(&alias.name),
            Type::IntLike(int_like) => Some(&int_like.name),
            Type::UserDefined(name) => Some(name),
            Type::Struct(st) => Some(&st.name),
            Type::Void
            | Type::Int(_)
            | Type::Atomic(_)
            | Type::Pointer(_)
            | Type::Array(_) => None,
        }
    }

    pub fn pointer(target: Type, constant: bool) -> Self {
        Type::Pointer(PointerType {
            target: Box::new(target),
            constant,
        })
    }

    pub fn array(element: Type, count: u64) -> Self {
        Type::Array(ArrayType {
            element: Box::new(element),
            count,
        })
    }

    pub fn user_defined(name: impl Into<String>) -> Self {
        Type::UserDefined(name.into())
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct SimpleMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// One alternative of a tagged union. Anonymous alternatives have their
/// members hoisted into the union; named ones become a nested record.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct VariantAlternative {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<StructMember>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct VariantMember {
    pub alternatives: Vec<VariantAlternative>,
}

/// A pointer/length pair exposed as a single bounded view.
///
/// The canonical layout stores it as two fields. Their names are paired
/// once, when the member is built: `base_name` defaults to `name` and
/// `length_name` to `<name>_len`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", from = "RangeMemberSpec")]
pub struct RangeMember {
    pub name: String,
    pub target: Type,
    #[serde(rename = "const")]
    pub constant: bool,
    pub base_name: String,
    pub length_name: String,
}

impl RangeMember {
    pub fn new(name: impl Into<String>, target: Type, constant: bool) -> Self {
        RangeMemberSpec {
            name: name.into(),
            target,
            constant,
            base_name: None,
            length_name: None,
        }
        .into()
    }
}

/// Input form of [`RangeMember`] before the field names are paired.
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RangeMemberSpec {
    name: String,
    target: Type,
    #[serde(default, rename = "const")]
    constant: bool,
    #[serde(default)]
    base_name: Option<String>,
    #[serde(default)]
    length_name: Option<String>,
}

impl From<RangeMemberSpec> for RangeMember {
    fn from(spec: RangeMemberSpec) -> Self {
        let base_name = spec.base_name.unwrap_or_else(|| spec.name.clone());
        let length_name = spec
            .length_name
            .unwrap_or_else(|| format!("{}_len", spec.name));
        RangeMember {
            name: spec.name,
            target: spec.target,
            constant: spec.constant,
            base_name,
            length_name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum StructMember {
    Simple(SimpleMember),
    Variant(VariantMember),
    Range(RangeMember),
}

impl StructMember {
    pub fn simple(name: impl Into<String>, ty: Type) -> Self {
        StructMember::Simple(SimpleMember {
            name: name.into(),
            ty,
        })
    }

    /// Name the member declares in its record; variants declare none.
    pub fn name(&self) -> Option<&str> {
        match self {
            StructMember::Simple(simple) => Some(&simple.name),
            StructMember::Variant(_) => None,
            StructMember::Range(range) => Some(&range.name),
        }
    }
}

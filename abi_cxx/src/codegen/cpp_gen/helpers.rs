use abi_model::IntegralType;

const CPP_KEYWORDS: &[&str] = &[
  // C++17 keywords
  "alignas",
  "alignof",
  "asm",
  "auto",
  "bool",
  "break",
  "case",
  "catch",
  "char",
  "char16_t",
  "char32_t",
  "class",
  "const",
  "const_cast",
  "constexpr",
  "continue",
  "decltype",
  "default",
  "delete",
  "do",
  "double",
  "dynamic_cast",
  "else",
  "enum",
  "explicit",
  "export",
  "extern",
  "false",
  "float",
  "for",
  "friend",
  "goto",
  "if",
  "inline",
  "int",
  "long",
  "mutable",
  "namespace",
  "new",
  "noexcept",
  "nullptr",
  "operator",
  "private",
  "protected",
  "public",
  "register",
  "reinterpret_cast",
  "return",
  "short",
  "signed",
  "sizeof",
  "static",
  "static_assert",
  "static_cast",
  "struct",
  "switch",
  "template",
  "this",
  "thread_local",
  "throw",
  "true",
  "try",
  "typedef",
  "typeid",
  "typename",
  "union",
  "unsigned",
  "using",
  "virtual",
  "void",
  "volatile",
  "wchar_t",
  "while",
  // Alternative operator tokens
  "and",
  "and_eq",
  "bitand",
  "bitor",
  "compl",
  "not",
  "not_eq",
  "or",
  "or_eq",
  "xor",
  "xor_eq",
];

pub fn is_cpp_keyword(name: &str) -> bool {
  CPP_KEYWORDS.contains(&name)
}

/* Replace characters that cannot appear in a C++ identifier */
pub fn sanitize_identifier(name: &str) -> String {
  let mut sanitized: String = name
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
    .collect();

  if sanitized.is_empty() {
    sanitized.push('_');
  }

  sanitized
}

pub fn cpp_integral_type(int_type: IntegralType) -> String {
  match int_type {
    IntegralType::Char => "char".to_string(),
    other => format!("std::{}_t", other.name()),
  }
}

pub fn c_integral_type(int_type: IntegralType) -> String {
  match int_type {
    IntegralType::Char => "char".to_string(),
    other => format!("{}_t", other.name()),
  }
}

pub fn indent(depth: usize) -> String {
  "  ".repeat(depth)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn integral_spellings() {
    assert_eq!(cpp_integral_type(IntegralType::Uint32), "std::uint32_t");
    assert_eq!(cpp_integral_type(IntegralType::Size), "std::size_t");
    assert_eq!(cpp_integral_type(IntegralType::Char), "char");
    assert_eq!(c_integral_type(IntegralType::Int64), "int64_t");
    assert_eq!(c_integral_type(IntegralType::Char), "char");
  }

  #[test]
  fn sanitize_replaces_illegal_characters() {
    assert_eq!(sanitize_identifier("foo-bar"), "foo_bar");
    assert_eq!(sanitize_identifier(""), "_");
    assert_eq!(sanitize_identifier("ok_1"), "ok_1");
  }
}

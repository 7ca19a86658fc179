/* C++ Code Generation Tests
 *
 * These tests verify that the generator produces the declarations and the
 * layout assertions for aliases, enumerations, flag sets, tagged unions and
 * range members, honoring the exclusion set in both artifacts.
 */

use abi_cxx::{CodegenError, GeneratorConfig, generate};
use abi_model::{AbiFile, AbiModel, StructMember};

/* Helper to load a model from an inline YAML description */
fn model_from_yaml(yaml: &str) -> AbiModel {
  AbiFile::from_yaml_str(yaml)
    .and_then(AbiFile::into_model)
    .expect("ABI description should load")
}

/* Helper counting the leaves a record's offset assertions must cover */
fn expected_leaves(members: &[StructMember]) -> usize {
  members
    .iter()
    .map(|member| match member {
      StructMember::Simple(_) | StructMember::Range(_) => 1,
      StructMember::Variant(variant) => variant
        .alternatives
        .iter()
        .map(|alt| expected_leaves(&alt.members))
        .sum(),
    })
    .sum()
}

const TAGGED_UNION_ABI: &str = r#"
abi:
  name: "test"

types:
  - int-like:
      name: "kind"
      int-type: uint8
      values:
        - { name: "plain", value: 1 }
        - { name: "tagged", value: 2 }
  - struct:
      name: "record"
      members:
        - simple:
            name: "kind"
            type:
              user-defined: "kind"
        - variant:
            alternatives:
              - members:
                  - simple:
                      name: "x"
                      type:
                        int: int32
              - name: "tagged"
                members:
                  - simple:
                      name: "y"
                      type:
                        int: int32
"#;

#[test]
fn test_variant_hoisting_shape() {
  let model = model_from_yaml(TAGGED_UNION_ABI);
  let artifacts = generate(&model, &GeneratorConfig::default()).expect("generation should succeed");
  let structs = &artifacts.structs.contents;

  let expected_body = "struct record {\n\
    \x20 cloudabi::kind kind;\n\
    \x20 union {\n\
    \x20   std::int32_t x;\n\
    \x20   struct {\n\
    \x20     std::int32_t y;\n\
    \x20   } tagged;\n\
    \x20 };\n\
    };\n";
  assert!(structs.contains(expected_body), "unexpected record body:\n{}", structs);

  assert!(structs.contains("static_assert(offsetof(record, x) == offsetof(cloudabi_record_t, x), \"\");"));
  assert!(structs.contains(
    "static_assert(offsetof(record, tagged.y) == offsetof(cloudabi_record_t, tagged.y), \"\");"
  ));
  assert_eq!(artifacts.offset_assertions, 3);
}

#[test]
fn test_enum_literal_preservation() {
  let model = model_from_yaml(
    r#"
abi:
  name: "test"
types:
  - int-like:
      name: "filetype"
      int-type: uint8
      values:
        - { name: "unknown", value: 0 }
        - { name: "socket_stream", value: 0x82 }
        - { name: "block_device", value: 0x10 }
        - { name: "directory", value: 0x20 }
"#,
  );
  let artifacts = generate(&model, &GeneratorConfig::default()).expect("generation should succeed");

  let expected = "enum class filetype : cloudabi_filetype_t {\n\
    \x20 unknown       = CLOUDABI_FILETYPE_UNKNOWN,\n\
    \x20 socket_stream = CLOUDABI_FILETYPE_SOCKET_STREAM,\n\
    \x20 block_device  = CLOUDABI_FILETYPE_BLOCK_DEVICE,\n\
    \x20 directory     = CLOUDABI_FILETYPE_DIRECTORY,\n\
    };\n";
  assert!(
    artifacts.types.contents.contains(expected),
    "unexpected enumeration:\n{}",
    artifacts.types.contents
  );
  // Not a plain enumeration of sequential indices, and no flag algebra
  assert!(!artifacts.types.contents.contains("= 1,"));
  assert!(!artifacts.types.contents.contains("operator"));
}

#[test]
fn test_flags_algebra() {
  let model = model_from_yaml(
    r#"
abi:
  name: "test"
types:
  - int-like:
      name: "rights"
      int-type: uint64
      flags: true
      values:
        - { name: "a", value: 1 }
        - { name: "b", value: 2 }
"#,
  );
  let artifacts = generate(&model, &GeneratorConfig::default()).expect("generation should succeed");
  let types = &artifacts.types.contents;

  assert!(types.contains(
    "enum class rights : cloudabi_rights_t {\n  none = 0,\n  a = CLOUDABI_RIGHTS_A,\n  b = CLOUDABI_RIGHTS_B,\n};\n"
  ));
  assert!(types.contains("inline rights operator | (rights a, rights b) {\n  return rights(cloudabi_rights_t(a) | cloudabi_rights_t(b));\n}\n"));
  assert!(types.contains("inline rights operator & (rights a, rights b) {\n  return rights(cloudabi_rights_t(a) & cloudabi_rights_t(b));\n}\n"));
  assert!(types.contains("inline rights operator ~ (rights v) {\n  return rights(~cloudabi_rights_t(v));\n}\n"));
  assert_eq!(types.matches("operator").count(), 3);
}

#[test]
fn test_exclusion_respect() {
  let model = model_from_yaml(
    r#"
abi:
  name: "test"
types:
  - alias:
      name: "fd"
      underlying:
        int: uint32
  - alias:
      name: "handle"
      underlying:
        int: uint32
  - struct:
      name: "iovec"
      members:
        - range:
            name: "buf"
            target: void
  - struct:
      name: "holder"
      members:
        - simple:
            name: "vec"
            type:
              user-defined: "iovec"
"#,
  );
  let mut config = GeneratorConfig::default();
  config.exclude.insert("handle".to_string());

  let artifacts = generate(&model, &config).expect("generation should succeed");
  let types = &artifacts.types.contents;
  let structs = &artifacts.structs.contents;

  for excluded in ["fd", "handle", "iovec"] {
    assert!(!types.contains(&format!("using {} =", excluded)), "{} aliased", excluded);
    assert!(!types.contains(&format!("struct {};", excluded)), "{} forward declared", excluded);
    assert!(!structs.contains(&format!("struct {} {{", excluded)), "{} defined", excluded);
  }

  // Excluded types can still be referenced
  assert!(types.contains("struct holder;\n"));
  assert!(structs.contains("  iovec vec;\n"));
}

#[test]
fn test_layout_assertion_completeness() {
  let model = model_from_yaml(
    r#"
abi:
  name: "test"
types:
  - struct:
      name: "deep"
      members:
        - simple:
            name: "a"
            type:
              int: uint8
        - variant:
            alternatives:
              - members:
                  - simple:
                      name: "b"
                      type:
                        int: uint16
                  - range:
                      name: "c"
                      target:
                        int: char
                      const: true
              - name: "d"
                members:
                  - simple:
                      name: "e"
                      type:
                        int: uint32
                  - variant:
                      alternatives:
                        - name: "f"
                          members:
                            - simple:
                                name: "g"
                                type:
                                  int: uint64
                        - members:
                            - simple:
                                name: "h"
                                type:
                                  int: uint64
        - range:
            name: "tail"
            target: void
"#,
  );
  let artifacts = generate(&model, &GeneratorConfig::default()).expect("generation should succeed");
  let structs = &artifacts.structs.contents;

  let record = model.structs().next().expect("one record");
  let expected = expected_leaves(&record.members);
  assert_eq!(expected, 7);
  assert_eq!(structs.matches("offsetof(deep,").count(), expected);
  assert_eq!(artifacts.offset_assertions, expected);

  for path in ["a", "b", "c", "d.e", "d.f.g", "d.h", "tail"] {
    let assertion = format!("static_assert(offsetof(deep, {p}) == offsetof(cloudabi_deep_t, {p}), \"\");", p = path);
    assert!(structs.contains(&assertion), "missing assertion for {}", path);
  }
  assert!(structs.contains("static_assert(sizeof(deep) == sizeof(cloudabi_deep_t), \"\");"));
  assert!(structs.contains("static_assert(alignof(deep) == alignof(cloudabi_deep_t), \"\");"));
}

#[test]
fn test_range_length_half_opt_in() {
  let model = model_from_yaml(
    r#"
abi:
  name: "test"
types:
  - struct:
      name: "send_in"
      members:
        - range:
            name: "data"
            target:
              int: uint8
            const: true
"#,
  );

  let default_artifacts = generate(&model, &GeneratorConfig::default()).expect("generation should succeed");
  assert!(default_artifacts.structs.contents.contains("  mstd::range<std::uint8_t const> data;\n"));
  assert!(!default_artifacts.structs.contents.contains("data_len"));

  let config = GeneratorConfig::from_yaml_str(
    "range-view-type: \"cloudabi::range\"\nrange-length-member: \"_size\"\n",
  )
  .expect("config should parse");
  let artifacts = generate(&model, &config).expect("generation should succeed");
  assert!(artifacts.structs.contents.contains("  cloudabi::range<std::uint8_t const> data;\n"));
  assert!(artifacts.structs.contents.contains(
    "static_assert(offsetof(send_in, data._size) == offsetof(cloudabi_send_in_t, data_len), \"\");"
  ));
  assert_eq!(artifacts.offset_assertions, 2);
}

#[test]
fn test_artifact_framing() {
  let model = model_from_yaml(TAGGED_UNION_ABI);
  let config = GeneratorConfig::from_yaml_str(
    r##"
namespace: "myabi"
canonical-prefix: "myabi_"
types-artifact:
  file-name: "myabi_types.hpp"
  header-guard: "MYABI_TYPES_HPP"
  preamble: "#include <myabi_types.h>\n"
"##,
  )
  .expect("config should parse");

  let artifacts = generate(&model, &config).expect("generation should succeed");
  assert_eq!(artifacts.types.file_name, "myabi_types.hpp");
  assert_eq!(
    artifacts.types.contents,
    "// Generated from the test ABI description. Do not edit.\n\
     \n\
     #ifndef MYABI_TYPES_HPP\n\
     #define MYABI_TYPES_HPP\n\
     \n\
     #include <myabi_types.h>\n\
     \n\
     namespace myabi {\n\
     \n\
     enum class kind : myabi_kind_t {\n\
     \x20 plain  = MYABI_KIND_PLAIN,\n\
     \x20 tagged = MYABI_KIND_TAGGED,\n\
     };\n\
     \n\
     struct record;\n\
     \n\
     }\n\
     \n\
     #endif // MYABI_TYPES_HPP\n"
  );

  let structs = &artifacts.structs.contents;
  assert!(structs.starts_with("// Generated from the test ABI description. Do not edit.\n\n#ifndef CLOUDABI_STRUCTS_HPP\n"));
  assert!(structs.contains("#include \"cloudabi_types.hpp\"\n"));
  assert!(structs.contains("namespace myabi {\n\nstruct record {\n  myabi::kind kind;\n"));
  assert!(structs.ends_with("}\n\n#endif // CLOUDABI_STRUCTS_HPP\n"));
}

#[test]
fn test_determinism() {
  let model = model_from_yaml(TAGGED_UNION_ABI);
  let config = GeneratorConfig::default();
  let first = generate(&model, &config).expect("generation should succeed");
  let second = generate(&model, &config).expect("generation should succeed");
  assert_eq!(first, second);
}

#[test]
fn test_void_field_aborts_generation() {
  let model = model_from_yaml(
    r#"
abi:
  name: "test"
types:
  - struct:
      name: "broken"
      members:
        - simple:
            name: "nothing"
            type: void
"#,
  );
  let result = generate(&model, &GeneratorConfig::default());
  assert!(matches!(result, Err(CodegenError::VoidValue { name }) if name == "nothing"));
}

#[test]
fn test_mangling_collisions_abort_generation() {
  let model = model_from_yaml(
    r#"
abi:
  name: "test"
types:
  - int-like:
      name: "mode"
      int-type: uint8
      flags: true
      values:
        - { name: "none", value: 0 }
        - { name: "read", value: 1 }
  - struct:
      name: "clash"
      members:
        - simple:
            name: "private"
            type:
              int: uint8
        - simple:
            name: "private_"
            type:
              int: uint8
"#,
  );

  /* A declared zero `none` is reused; the record is not renderable */
  let result = generate(&model, &GeneratorConfig::default());
  assert!(matches!(
    result,
    Err(CodegenError::DuplicateIdentifier { scope, name }) if scope == "clash" && name == "private_"
  ));

  let mut config = GeneratorConfig::default();
  config.exclude.insert("clash".to_string());
  let artifacts = generate(&model, &config).expect("generation should succeed");
  assert!(artifacts.types.contents.contains(
    "enum class mode : cloudabi_mode_t {\n  none = CLOUDABI_MODE_NONE,\n  read = CLOUDABI_MODE_READ,\n};\n"
  ));
}

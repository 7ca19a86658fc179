/* Generator configuration: namespace, canonical naming, exclusions and artifact layout */

use crate::errors::ConfigError;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/* Types maintained by hand because their shape is platform specific */
const DEFAULT_EXCLUDE: &[&str] = &[
  "auxtype",
  "auxv",
  "ciovec",
  "dirent",
  "fd",
  "lookup",
  "iovec",
  "tcb",
  "threadattr",
];

/* Layout of one generated header */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ArtifactConfig {
  pub file_name: String,
  pub header_guard: String,
  #[serde(default)]
  pub preamble: String,
}

impl ArtifactConfig {
  pub fn types_default() -> Self {
    Self {
      file_name: "cloudabi_types.hpp".to_string(),
      header_guard: "CLOUDABI_TYPES_HPP".to_string(),
      preamble: "#include <cloudabi_types.h>\n".to_string(),
    }
  }

  pub fn structs_default() -> Self {
    Self {
      file_name: "cloudabi_structs.hpp".to_string(),
      header_guard: "CLOUDABI_STRUCTS_HPP".to_string(),
      preamble: concat!(
        "#include <atomic>\n",
        "#include <cstddef>\n",
        "#include <cstdint>\n",
        "\n",
        "#include <mstd/range.hpp>\n",
        "\n",
        "#include <cloudabi_types.h>\n",
        "\n",
        "#include \"cloudabi_types.hpp\"\n",
        "#include \"cloudabi_fd.hpp\"\n",
        "#include \"cloudabi_iovec.hpp\"\n",
      )
      .to_string(),
    }
  }
}

/// Everything a run needs besides the type model. Every key is optional
/// in the YAML form; missing keys take the CloudABI defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorConfig {
  /* Namespace wrapping both artifacts */
  pub namespace: String,

  /* Literal prefix of the canonical C names */
  pub canonical_prefix: String,

  /* Types never generated, in either artifact */
  pub exclude: BTreeSet<String>,

  /* Bounded-view template used for range members */
  pub range_view_type: String,

  /* Length member of the view; enables the length-half offset check */
  pub range_length_member: Option<String>,

  pub types_artifact: ArtifactConfig,
  pub structs_artifact: ArtifactConfig,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      namespace: "cloudabi".to_string(),
      canonical_prefix: "cloudabi_".to_string(),
      exclude: DEFAULT_EXCLUDE.iter().map(|name| name.to_string()).collect(),
      range_view_type: "mstd::range".to_string(),
      range_length_member: None,
      types_artifact: ArtifactConfig::types_default(),
      structs_artifact: ArtifactConfig::structs_default(),
    }
  }
}

impl GeneratorConfig {
  pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
    Ok(serde_yml::from_str(content)?)
  }

  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_yaml_str(&content)
  }

  pub fn is_excluded(&self, name: &str) -> bool {
    self.exclude.contains(name)
  }
}

use crate::errors::LoadError;
use crate::model::AbiModel;
use crate::types::Type;
use serde_derive::{Deserialize, Serialize};
use std::path::Path;

/* Metadata for an ABI description file */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AbiMetadata {
    /* Short ABI name (e.g., "cloudabi") */
    pub name: String,

    /* File description */
    #[serde(default)]
    pub description: Option<String>,
}

/* Complete ABI description file with metadata and type definitions */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AbiFile {
    /* ABI file metadata */
    pub abi: AbiMetadata,

    /* Type definitions, in declaration order */
    #[serde(default, with = "serde_yml::with::singleton_map_recursive")]
    pub types: Vec<Type>,
}

impl AbiFile {
    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_yml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }

    /* Read a description, picking the format from the file extension */
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn into_model(self) -> Result<AbiModel, LoadError> {
        AbiModel::new(self.abi.name, self.types)
    }
}

/* Load a description file straight into a model */
pub fn load_model(path: &Path) -> Result<AbiModel, LoadError> {
    AbiFile::load(path)?.into_model()
}

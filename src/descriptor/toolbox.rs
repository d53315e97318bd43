//! Toolbox descriptor type and descriptor file loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TbxmetaError};

use super::attribute::{AttrValue, AttributeSource, list_attr, text_attr};
use super::tool::ToolDescriptor;

/// Author-settable metadata for a toolbox and the tools it contains.
///
/// No field is required; absence at this level falls through to the
/// computed defaults. Tool-level values override these for the matching
/// tool document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolboxDescriptor {
    /// Toolbox alias used in qualified tool names.
    pub alias: Option<String>,
    /// Display label for the toolbox.
    pub label: Option<String>,
    /// Short purpose statement; feeds `idPurp`.
    pub description: Option<String>,
    /// Abstract text; feeds `idAbs`.
    pub id_abs: Option<String>,
    /// Credit/contact statement; feeds `idCredit`.
    pub id_credit: Option<String>,
    /// Usage limitation statement; feeds `useLimit`.
    pub use_limit: Option<String>,
    /// Explicit search keywords; derived from the name when absent.
    pub search_keys: Vec<String>,
    /// Help resources path; feeds `arcToolboxHelpPath`.
    pub arc_toolbox_help_path: Option<String>,
    /// Tools belonging to this toolbox.
    pub tools: Vec<ToolDescriptor>,
}

impl ToolboxDescriptor {
    /// Load a descriptor from a YAML or JSON source file.
    ///
    /// The extension picks the format; anything else is a descriptor
    /// error. YAML is also accepted under the `.pyt.yml`-style double
    /// extensions used by toolbox deployments.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let descriptor = match ext {
            "yml" | "yaml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            other => {
                return Err(TbxmetaError::Descriptor(format!(
                    "unsupported descriptor extension '{}' for {}",
                    other,
                    path.display()
                )));
            }
        };
        log::debug!("Loaded toolbox descriptor from {}", path.display());
        Ok(descriptor)
    }
}

impl AttributeSource for ToolboxDescriptor {
    fn attribute(&self, field: &str) -> Option<AttrValue> {
        match field {
            "alias" => text_attr(&self.alias),
            "idPurp" => text_attr(&self.description),
            "idAbs" => text_attr(&self.id_abs),
            "idCredit" => text_attr(&self.id_credit),
            "useLimit" => text_attr(&self.use_limit),
            "searchKeys" => list_attr(&self.search_keys),
            "arcToolboxHelpPath" => text_attr(&self.arc_toolbox_help_path),
            _ => None,
        }
    }
}

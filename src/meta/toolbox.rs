//! Toolbox-level derived metadata.
//!
//! Computes the default value for every toolbox document field. The
//! descriptor itself sits earlier in the resolution chain, so anything
//! the author set explicitly wins over what is derived here.

use std::path::{Path, PathBuf};

use crate::descriptor::attribute::text_attr;
use crate::descriptor::{AttrValue, AttributeSource, ToolboxDescriptor};
use crate::portal::Credits;
use crate::resolve::{derive_keywords, normalize, text_to_html};

use super::defaults::{DateFormats, EsriDefaults, FileDates};

/// Derived defaults for one toolbox, bound to its source file.
#[derive(Debug, Clone)]
pub struct ToolboxMetadata {
    descriptor: ToolboxDescriptor,
    source_path: PathBuf,
    toolbox_name: String,
    alias: String,
    id_purp: String,
    id_abs: String,
    res_title: String,
    keywords: Vec<String>,
    id_credit: String,
    use_limit: String,
    dates: FileDates,
    esri: EsriDefaults,
}

impl ToolboxMetadata {
    pub fn new(
        descriptor: ToolboxDescriptor,
        source_path: &Path,
        esri: EsriDefaults,
        formats: &DateFormats,
        credits: &Credits,
    ) -> Self {
        let toolbox_name = source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Toolbox")
            .to_string();

        let alias = descriptor
            .alias
            .clone()
            .unwrap_or_else(|| toolbox_name.clone());

        let id_purp = descriptor
            .description
            .as_deref()
            .map(normalize)
            .unwrap_or_else(|| default_purpose(&toolbox_name));

        let id_abs = descriptor
            .id_abs
            .as_deref()
            .map(normalize)
            .unwrap_or_else(|| {
                format!(
                    "{}{}{}",
                    id_purp,
                    "<br></br>".repeat(2),
                    abstract_tool_text(&descriptor)
                )
            });

        let keywords = if descriptor.search_keys.is_empty() {
            derive_keywords(&[&alias, &toolbox_name])
        } else {
            descriptor.search_keys.clone()
        };

        let id_credit = descriptor
            .id_credit
            .as_deref()
            .map(normalize)
            .unwrap_or_else(|| credits.contact_block());

        let use_limit = descriptor
            .use_limit
            .as_deref()
            .map(normalize)
            .unwrap_or_else(|| default_use_limit(credits));

        let dates = FileDates::for_path(source_path, formats);

        Self {
            descriptor,
            source_path: source_path.to_path_buf(),
            res_title: toolbox_name.clone(),
            toolbox_name,
            alias,
            id_purp,
            id_abs,
            keywords,
            id_credit,
            use_limit,
            dates,
            esri,
        }
    }

    pub fn descriptor(&self) -> &ToolboxDescriptor {
        &self.descriptor
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn toolbox_name(&self) -> &str {
        &self.toolbox_name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn esri(&self) -> &EsriDefaults {
        &self.esri
    }
}

impl AttributeSource for ToolboxMetadata {
    fn attribute(&self, field: &str) -> Option<AttrValue> {
        let value = match field {
            "alias" => self.alias.clone(),
            "resTitle" => self.res_title.clone(),
            "idPurp" => self.id_purp.clone(),
            "idAbs" => self.id_abs.clone(),
            "idCredit" => self.id_credit.clone(),
            "useLimit" => self.use_limit.clone(),
            "CreaDate" => self.dates.create_date.clone(),
            "CreaTime" => self.dates.create_time.clone(),
            "ModDate" => self.dates.mod_date.clone(),
            "ModTime" => self.dates.mod_time.clone(),
            "mdDateSt" => self.dates.current_date.clone(),
            "ArcGISFormat" => self.esri.arcgis_format.clone(),
            "SyncOnce" => self.esri.sync_once.clone(),
            "minScale" => self.esri.min_scale.clone(),
            "maxScale" => self.esri.max_scale.clone(),
            "ArcGISProfile" => self.esri.arcgis_profile.clone(),
            "formatName" => self.esri.toolbox_format_name.clone(),
            "arcToolboxHelpPath" => return text_attr(&self.esri.help_path),
            _ => return None,
        };
        Some(AttrValue::Text(value))
    }
}

fn default_purpose(toolbox_name: &str) -> String {
    text_to_html(&format!(
        "{} is a geospatial toolbox.\nContact the point of contact below for more information.",
        toolbox_name
    ))
}

/// "Included Tools" listing appended to the default abstract.
fn abstract_tool_text(descriptor: &ToolboxDescriptor) -> String {
    let mut lines = vec!["<b>Included Tools:</b>".to_string()];
    for tool in &descriptor.tools {
        let label = tool.label.as_deref().unwrap_or(&tool.name);
        let category = tool.category.as_deref().unwrap_or("None");
        lines.push(format!(
            "<br></br><b>    - {}</b> (Category: {})",
            label, category
        ));
        let description = tool
            .description
            .as_deref()
            .or(tool.usage.as_deref())
            .unwrap_or("");
        for line in description.lines() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                lines.push(format!("<em>        {}</em>", trimmed));
            }
        }
    }
    lines.join("<br></br>")
}

fn default_use_limit(credits: &Credits) -> String {
    let [poc, org, email] = credits.contact_lines();
    [
        "<b>For questions regarding usage limitations, contact:</b>".to_string(),
        poc,
        org,
        email,
        String::new(),
        format!(
            "<b>Disclaimer: **Metadata auto generated with module {}**</b>",
            env!("CARGO_PKG_NAME")
        ),
        "<b>    -For detailed release notes, contact the POC above!</b>".to_string(),
    ]
    .join("<br></br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ToolDescriptor;
    use crate::meta::defaults::ContactDefaults;

    fn credits() -> Credits {
        Credits::resolve(None, &ContactDefaults::default())
    }

    fn metadata_for(descriptor: ToolboxDescriptor) -> ToolboxMetadata {
        ToolboxMetadata::new(
            descriptor,
            Path::new("/data/Sample.yaml"),
            EsriDefaults::default(),
            &DateFormats::default(),
            &credits(),
        )
    }

    #[test]
    fn test_name_and_alias_default_to_file_stem() {
        let meta = metadata_for(ToolboxDescriptor::default());
        assert_eq!(meta.toolbox_name(), "Sample");
        assert_eq!(meta.alias(), "Sample");
        assert_eq!(meta.attribute("resTitle"), Some(AttrValue::from("Sample")));
    }

    #[test]
    fn test_explicit_alias_wins() {
        let descriptor = ToolboxDescriptor {
            alias: Some("sampletb".to_string()),
            ..ToolboxDescriptor::default()
        };
        let meta = metadata_for(descriptor);
        assert_eq!(meta.alias(), "sampletb");
    }

    #[test]
    fn test_default_abstract_lists_tools() {
        let descriptor = ToolboxDescriptor {
            tools: vec![
                ToolDescriptor {
                    name: "ClipRaster".to_string(),
                    label: Some("Clip Raster".to_string()),
                    description: Some("Clips a raster".to_string()),
                    ..ToolDescriptor::default()
                },
                ToolDescriptor::new("MergePoints"),
            ],
            ..ToolboxDescriptor::default()
        };
        let meta = metadata_for(descriptor);
        let abs = meta.attribute("idAbs").unwrap().into_text();
        assert!(abs.contains("<b>Included Tools:</b>"));
        assert!(abs.contains("Clip Raster"));
        assert!(abs.contains("(Category: None)"));
        assert!(abs.contains("MergePoints"));
        assert!(abs.contains("<em>        Clips a raster</em>"));
    }

    #[test]
    fn test_explicit_abstract_wins_over_listing() {
        let descriptor = ToolboxDescriptor {
            id_abs: Some("Sample abstract".to_string()),
            tools: vec![ToolDescriptor::new("ClipRaster")],
            ..ToolboxDescriptor::default()
        };
        let meta = metadata_for(descriptor);
        assert_eq!(meta.attribute("idAbs"), Some(AttrValue::from("Sample abstract")));
    }

    #[test]
    fn test_derived_keywords_from_names() {
        let meta = metadata_for(ToolboxDescriptor::default());
        assert_eq!(meta.keywords(), ["Sample".to_string()]);

        let descriptor = ToolboxDescriptor {
            search_keys: vec!["GIS".to_string(), "Raster".to_string()],
            ..ToolboxDescriptor::default()
        };
        let meta = metadata_for(descriptor);
        assert_eq!(meta.keywords(), ["GIS".to_string(), "Raster".to_string()]);
    }

    #[test]
    fn test_fixed_esri_values_exposed() {
        let meta = metadata_for(ToolboxDescriptor::default());
        assert_eq!(
            meta.attribute("formatName"),
            Some(AttrValue::from("ArcToolbox Toolbox"))
        );
        assert_eq!(meta.attribute("SyncOnce"), Some(AttrValue::from("TRUE")));
        assert_eq!(meta.attribute("minScale"), Some(AttrValue::from("150000000")));
        assert!(meta.attribute("arcToolboxHelpPath").is_none());
    }

    #[test]
    fn test_use_limit_mentions_contact_and_disclaimer() {
        let meta = metadata_for(ToolboxDescriptor::default());
        let limit = meta.attribute("useLimit").unwrap().into_text();
        assert!(limit.contains("usage limitations"));
        assert!(limit.contains("Point of Contact"));
        assert!(limit.contains("Metadata auto generated"));
    }

    #[test]
    fn test_date_fields_present() {
        let meta = metadata_for(ToolboxDescriptor::default());
        for field in ["CreaDate", "CreaTime", "ModDate", "ModTime", "mdDateSt"] {
            let value = meta.attribute(field).unwrap().into_text();
            assert_eq!(value.len(), 8, "{} should be 8 digits", field);
        }
    }

    #[test]
    fn test_unknown_field_is_none() {
        let meta = metadata_for(ToolboxDescriptor::default());
        assert!(meta.attribute("summary").is_none());
        assert!(meta.attribute("noSuchField").is_none());
    }
}

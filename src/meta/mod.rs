//! Metadata derivation and the generation entry point.
//!
//! Generation is a one-shot, synchronous pass run at toolbox load time:
//! resolve every field, assemble the schema-shaped trees, write one
//! document per tool plus the toolbox document beside the source file.

pub mod defaults;
pub mod document;
pub mod report;
pub mod tool;
pub mod toolbox;

pub use defaults::{ContactDefaults, DateFormats, EsriDefaults, FileDates};
pub use report::Report;
pub use tool::ToolMetadata;
pub use toolbox::ToolboxMetadata;

use std::path::Path;

use std::path::PathBuf;

use crate::descriptor::ToolboxDescriptor;
use crate::error::Result;
use crate::portal::{Credits, PortalProfile};
use crate::resolve::derive_keywords;
use crate::xml::{XmlTree, to_xml_string, write_document};

use document::{
    build_tool_document, build_toolbox_document, tool_document_path, toolbox_document_path,
};

/// Configurable metadata generator.
///
/// The defaults match stock Esri documents; deployments override them
/// through the config file, and a portal profile can supply contact
/// information.
#[derive(Default)]
pub struct Generator {
    pub esri: EsriDefaults,
    pub dates: DateFormats,
    pub contact: ContactDefaults,
    pub profile: Option<Box<dyn PortalProfile>>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the descriptor from the source file and generate all
    /// documents beside it.
    pub fn generate(&self, source: &Path, overwrite: bool) -> Result<Report> {
        let descriptor = ToolboxDescriptor::from_file(source)?;
        self.generate_descriptor(descriptor, source, overwrite)
    }

    /// Generate documents for an in-memory descriptor.
    pub fn generate_descriptor(
        &self,
        descriptor: ToolboxDescriptor,
        source: &Path,
        overwrite: bool,
    ) -> Result<Report> {
        let mut report = Report::default();
        for (path, tree) in self.documents(descriptor, source)? {
            report.record(write_document(&tree, &path, overwrite)?);
        }
        Ok(report)
    }

    /// Serialize all documents for a source file without touching disk.
    pub fn render(&self, source: &Path) -> Result<Vec<(PathBuf, String)>> {
        let descriptor = ToolboxDescriptor::from_file(source)?;
        self.documents(descriptor, source)?
            .into_iter()
            .map(|(path, tree)| Ok((path, to_xml_string(&tree)?)))
            .collect()
    }

    /// Assemble every document tree for one toolbox: one per tool, then
    /// the toolbox document.
    fn documents(
        &self,
        descriptor: ToolboxDescriptor,
        source: &Path,
    ) -> Result<Vec<(PathBuf, XmlTree)>> {
        let credits = Credits::resolve(self.profile.as_deref(), &self.contact);
        let toolbox = ToolboxMetadata::new(
            descriptor,
            source,
            self.esri.clone(),
            &self.dates,
            &credits,
        );
        log::info!(
            "Generating metadata for toolbox {} ({} tools)",
            toolbox.toolbox_name(),
            toolbox.descriptor().tools.len()
        );

        let mut documents = Vec::new();
        let mut keyword_master = toolbox.keywords().to_vec();

        for tool in toolbox.descriptor().tools.clone() {
            let tool_meta = ToolMetadata::new(&toolbox, &tool);
            keyword_master.extend(tool_meta.keywords().iter().cloned());

            let tree = build_tool_document(&toolbox, &tool_meta, &tool)?;
            documents.push((tool_document_path(&toolbox, &tool.name), tree));
        }

        // The toolbox document aggregates keywords across its tools.
        let toolbox_keywords = derive_keywords(&[&keyword_master.join(" ")]);
        let tree = build_toolbox_document(&toolbox, &toolbox_keywords)?;
        documents.push((toolbox_document_path(&toolbox), tree));

        Ok(documents)
    }
}

/// Generate metadata documents for a toolbox source file with stock
/// defaults. This is the entry point toolbox initialization code calls.
pub fn generate(source: &Path, overwrite: bool) -> Result<Report> {
    Generator::new().generate(source, overwrite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DESCRIPTOR: &str = r#"
alias: sampletb
idAbs: Sample abstract
tools:
  - name: ClipRaster
    label: Clip Raster
"#;

    fn write_descriptor(temp: &TempDir) -> std::path::PathBuf {
        let path = temp.path().join("Sample.yaml");
        std::fs::write(&path, DESCRIPTOR).unwrap();
        path
    }

    #[test]
    fn test_generate_writes_toolbox_and_tool_documents() {
        let temp = TempDir::new().unwrap();
        let source = write_descriptor(&temp);

        let report = generate(&source, false).unwrap();
        assert_eq!(report.total(), 2);
        assert_eq!(report.written.len(), 2);
        assert!(temp.path().join("Sample.yaml.xml").exists());
        assert!(temp.path().join("Sample.ClipRaster.pyt.xml").exists());
    }

    #[test]
    fn test_second_run_skips_without_overwrite() {
        let temp = TempDir::new().unwrap();
        let source = write_descriptor(&temp);

        generate(&source, false).unwrap();
        let report = generate(&source, false).unwrap();
        assert_eq!(report.written.len(), 0);
        assert_eq!(report.skipped.len(), 2);
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("NoSuch.yaml");
        assert!(generate(&source, false).is_err());
    }

    #[test]
    fn test_render_does_not_write() {
        let temp = TempDir::new().unwrap();
        let source = write_descriptor(&temp);

        let documents = Generator::new().render(&source).unwrap();
        assert_eq!(documents.len(), 2);
        assert!(documents.iter().all(|(_, xml)| xml.starts_with("<?xml")));
        assert!(!temp.path().join("Sample.yaml.xml").exists());
    }

    #[test]
    fn test_generator_with_profile() {
        use crate::portal::StaticProfile;

        let temp = TempDir::new().unwrap();
        let source = write_descriptor(&temp);

        let generator = Generator {
            profile: Some(Box::new(StaticProfile {
                full_name: Some("A. Hampton".to_string()),
                organization: Some("Geo Org".to_string()),
                email: Some("poc@example.com".to_string()),
            })),
            ..Generator::default()
        };
        generator.generate(&source, true).unwrap();

        let xml = std::fs::read_to_string(temp.path().join("Sample.yaml.xml")).unwrap();
        assert!(xml.contains("A. Hampton"));
        assert!(xml.contains("Geo Org"));
    }
}

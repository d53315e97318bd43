//! XML serialization and file output.
//!
//! Serializes an [`XmlTree`] with quick-xml and writes it beside the
//! source file. Existing files win unless overwrite is set; write
//! failures are fatal and carry the originating path.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Result, TbxmetaError};

use super::tree::{NodeId, XmlTree};

/// Result of one document write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The document was written (created or replaced).
    Written(PathBuf),
    /// An existing file was left untouched.
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written(p) | WriteOutcome::Skipped(p) => p,
        }
    }
}

/// Serialize a tree to an XML string with declaration, UTF-8.
pub fn to_xml_string(tree: &XmlTree) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_err)?;
    write_node(&mut writer, tree, tree.root())?;
    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| TbxmetaError::Xml(e.to_string()))
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, tree: &XmlTree, id: NodeId) -> Result<()> {
    let node = tree.node(id);
    let mut start = BytesStart::new(node.tag.as_str());
    for (key, value) in &node.attrs {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(xml_err)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(xml_err)?;
    if let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)?;
    }
    for child in &node.children {
        write_node(writer, tree, *child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.tag.as_str())))
        .map_err(xml_err)?;
    Ok(())
}

fn xml_err(err: impl std::fmt::Display) -> TbxmetaError {
    TbxmetaError::Xml(err.to_string())
}

/// Write a document to disk, honoring the overwrite flag.
pub fn write_document(tree: &XmlTree, path: &Path, overwrite: bool) -> Result<WriteOutcome> {
    if path.exists() && !overwrite {
        log::info!("Skipping existing metadata document {}", path.display());
        return Ok(WriteOutcome::Skipped(path.to_path_buf()));
    }
    let xml = to_xml_string(tree)?;
    fs::write(path, xml).map_err(|source| TbxmetaError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote metadata document {}", path.display());
    Ok(WriteOutcome::Written(path.to_path_buf()))
}

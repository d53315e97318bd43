//! Fixed XML schema structures for toolbox and tool documents.
//!
//! A schema is an ordered list of (tag, parent) entries; the root entry
//! has no parent and every parent is declared before its children. Tags
//! are unique within a structure, which is what lets leaf text be
//! addressed by tag alone. Two structures exist, one per document kind,
//! and their shape is stable across invocations so downstream parsers can
//! rely on it.

/// One entry in a schema structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub tag: &'static str,
    pub parent: Option<&'static str>,
}

const fn entry(tag: &'static str, parent: &'static str) -> SchemaEntry {
    SchemaEntry {
        tag,
        parent: Some(parent),
    }
}

const fn root(tag: &'static str) -> SchemaEntry {
    SchemaEntry { tag, parent: None }
}

/// A fixed document structure: ordered entries plus per-tag fixed
/// attributes.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    entries: &'static [SchemaEntry],
}

impl Schema {
    /// The root tag of the document.
    pub fn root_tag(&self) -> &'static str {
        self.entries[0].tag
    }

    /// Iterate entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.iter()
    }

    /// All tags in declaration order.
    pub fn tags(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.tag).collect()
    }

    /// Fixed XML attributes for a tag, if any.
    pub fn fixed_attributes(&self, tag: &str) -> &'static [(&'static str, &'static str)] {
        match tag {
            "metadata" => &[("xml:lang", "en")],
            "ScopeCd" => &[("value", "005")],
            "mdDateSt" => &[("Sync", "TRUE")],
            _ => &[],
        }
    }
}

/// Structure of a toolbox-level metadata document.
pub const TOOLBOX_SCHEMA: Schema = Schema {
    entries: &[
        root("metadata"),
        entry("Esri", "metadata"),
        entry("CreaDate", "Esri"),
        entry("CreaTime", "Esri"),
        entry("ArcGISFormat", "Esri"),
        entry("SyncOnce", "Esri"),
        entry("ModDate", "Esri"),
        entry("ModTime", "Esri"),
        entry("scaleRange", "Esri"),
        entry("minScale", "scaleRange"),
        entry("maxScale", "scaleRange"),
        entry("ArcGISProfile", "Esri"),
        entry("toolbox", "metadata"),
        entry("arcToolboxHelpPath", "toolbox"),
        entry("dataIdInfo", "metadata"),
        entry("idCitation", "dataIdInfo"),
        entry("resTitle", "idCitation"),
        entry("idPurp", "dataIdInfo"),
        entry("searchKeys", "dataIdInfo"),
        entry("idAbs", "dataIdInfo"),
        entry("idCredit", "dataIdInfo"),
        entry("resConst", "dataIdInfo"),
        entry("Consts", "resConst"),
        entry("useLimit", "Consts"),
        entry("distInfo", "metadata"),
        entry("distributor", "distInfo"),
        entry("distorFormat", "distributor"),
        entry("formatName", "distorFormat"),
        entry("mdHrLv", "metadata"),
        entry("ScopeCd", "mdHrLv"),
        entry("mdDateSt", "metadata"),
    ],
};

/// Structure of a tool-level metadata document.
pub const TOOL_SCHEMA: Schema = Schema {
    entries: &[
        root("metadata"),
        entry("Esri", "metadata"),
        entry("CreaDate", "Esri"),
        entry("CreaTime", "Esri"),
        entry("ArcGISFormat", "Esri"),
        entry("SyncOnce", "Esri"),
        entry("ModDate", "Esri"),
        entry("ModTime", "Esri"),
        entry("scaleRange", "Esri"),
        entry("minScale", "scaleRange"),
        entry("maxScale", "scaleRange"),
        entry("tool", "metadata"),
        entry("arcToolboxHelpPath", "tool"),
        entry("summary", "tool"),
        entry("usage", "tool"),
        entry("scriptExamples", "tool"),
        entry("parameters", "tool"),
        entry("dataIdInfo", "metadata"),
        entry("idCitation", "dataIdInfo"),
        entry("resTitle", "idCitation"),
        entry("idCredit", "dataIdInfo"),
        entry("searchKeys", "dataIdInfo"),
        entry("idAbs", "dataIdInfo"),
        entry("resConst", "dataIdInfo"),
        entry("Consts", "resConst"),
        entry("useLimit", "Consts"),
        entry("distInfo", "metadata"),
        entry("distributor", "distInfo"),
        entry("distorFormat", "distributor"),
        entry("formatName", "distorFormat"),
        entry("mdHrLv", "metadata"),
        entry("ScopeCd", "mdHrLv"),
        entry("mdDateSt", "metadata"),
    ],
};

//! In-memory XML tree built from a schema structure.
//!
//! Schema tags are unique, so schema-declared nodes are indexed by tag
//! and leaf text can be set by tag alone. Repeating sub-elements
//! (`keyword`, `scriptExample`, `param`) are appended by node id and are
//! not indexed.

use std::collections::HashMap;

use crate::error::{Result, TbxmetaError};
use crate::schema::Schema;

pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct XmlNode {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<NodeId>,
}

impl XmlNode {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// True when the node renders as `<tag/>`.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().unwrap_or("").is_empty() && self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct XmlTree {
    nodes: Vec<XmlNode>,
    index: HashMap<String, NodeId>,
    root: NodeId,
}

impl XmlTree {
    /// Build the node skeleton for a schema structure, fixed attributes
    /// applied. Every schema tag becomes an (initially empty) element.
    pub fn from_schema(schema: &Schema) -> Result<Self> {
        let mut tree = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            root: 0,
        };
        for entry in schema.entries() {
            let id = match entry.parent {
                None => {
                    tree.nodes.push(XmlNode::new(entry.tag));
                    tree.root = tree.nodes.len() - 1;
                    tree.root
                }
                Some(parent_tag) => {
                    let parent = tree.index.get(parent_tag).copied().ok_or_else(|| {
                        TbxmetaError::Schema(format!("unknown parent tag: {}", parent_tag))
                    })?;
                    tree.append_child(parent, entry.tag)
                }
            };
            if tree.index.insert(entry.tag.to_string(), id).is_some() {
                return Err(TbxmetaError::Schema(format!("duplicate tag: {}", entry.tag)));
            }
            for (key, value) in schema.fixed_attributes(entry.tag) {
                tree.set_node_attr(id, key, value);
            }
        }
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &XmlNode {
        &self.nodes[id]
    }

    /// Look up a schema-declared node by tag.
    pub fn find(&self, tag: &str) -> Option<NodeId> {
        self.index.get(tag).copied()
    }

    /// Append a new child element and return its id.
    pub fn append_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.nodes.push(XmlNode::new(tag));
        let id = self.nodes.len() - 1;
        self.nodes[parent].children.push(id);
        id
    }

    pub fn set_node_attr(&mut self, id: NodeId, key: &str, value: &str) {
        self.nodes[id].attrs.push((key.to_string(), value.to_string()));
    }

    pub fn set_node_text(&mut self, id: NodeId, text: &str) {
        self.nodes[id].text = Some(text.to_string());
    }

    /// Set an attribute on a schema-declared node.
    pub fn set_attr(&mut self, tag: &str, key: &str, value: &str) -> Result<()> {
        let id = self
            .find(tag)
            .ok_or_else(|| TbxmetaError::Schema(format!("no such tag: {}", tag)))?;
        self.set_node_attr(id, key, value);
        Ok(())
    }

    /// Set a node's text unless it already has some.
    ///
    /// First-wins semantics: sources are applied in priority order, so an
    /// earlier (higher-priority) value must not be clobbered by a later
    /// one. Returns whether the text was applied.
    pub fn set_text_if_empty(&mut self, tag: &str, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let Some(id) = self.find(tag) else {
            return false;
        };
        if self.nodes[id].text.as_deref().unwrap_or("").is_empty() {
            self.nodes[id].text = Some(text.to_string());
            true
        } else {
            false
        }
    }

    /// Text of a schema-declared node, empty when unset.
    pub fn text_of(&self, tag: &str) -> &str {
        self.find(tag)
            .and_then(|id| self.nodes[id].text.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{TOOL_SCHEMA, TOOLBOX_SCHEMA};

    #[test]
    fn test_from_schema_builds_all_tags() {
        let tree = XmlTree::from_schema(&TOOLBOX_SCHEMA).unwrap();
        for tag in TOOLBOX_SCHEMA.tags() {
            assert!(tree.find(tag).is_some(), "missing node for {}", tag);
        }
        assert_eq!(tree.node(tree.root()).tag, "metadata");
    }

    #[test]
    fn test_fixed_attributes_applied() {
        let tree = XmlTree::from_schema(&TOOL_SCHEMA).unwrap();
        let root = tree.node(tree.root());
        assert_eq!(
            root.attrs,
            vec![("xml:lang".to_string(), "en".to_string())]
        );
        let scope = tree.node(tree.find("ScopeCd").unwrap());
        assert_eq!(scope.attrs[0].0, "value");
    }

    #[test]
    fn test_set_text_if_empty_first_wins() {
        let mut tree = XmlTree::from_schema(&TOOLBOX_SCHEMA).unwrap();
        assert!(tree.set_text_if_empty("idAbs", "tool value"));
        assert!(!tree.set_text_if_empty("idAbs", "toolbox value"));
        assert_eq!(tree.text_of("idAbs"), "tool value");
    }

    #[test]
    fn test_set_text_ignores_empty_and_unknown() {
        let mut tree = XmlTree::from_schema(&TOOLBOX_SCHEMA).unwrap();
        assert!(!tree.set_text_if_empty("idAbs", ""));
        assert!(!tree.set_text_if_empty("noSuchTag", "x"));
        assert_eq!(tree.text_of("idAbs"), "");
    }

    #[test]
    fn test_append_child_not_indexed() {
        let mut tree = XmlTree::from_schema(&TOOLBOX_SCHEMA).unwrap();
        let keys = tree.find("searchKeys").unwrap();
        let kw = tree.append_child(keys, "keyword");
        tree.set_node_text(kw, "GIS");

        assert!(tree.find("keyword").is_none());
        assert_eq!(tree.node(keys).children.len(), 1);
        assert_eq!(tree.node(kw).text.as_deref(), Some("GIS"));
    }

    #[test]
    fn test_node_is_empty() {
        let mut tree = XmlTree::from_schema(&TOOLBOX_SCHEMA).unwrap();
        let id = tree.find("idPurp").unwrap();
        assert!(tree.node(id).is_empty());
        tree.set_node_text(id, "purpose");
        assert!(!tree.node(id).is_empty());
    }
}

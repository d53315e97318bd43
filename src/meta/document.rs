//! Document assembly: schema tree plus resolved values.
//!
//! The resolver chain for a toolbox document is descriptor, then derived
//! toolbox defaults. For a tool document it is tool descriptor, toolbox
//! descriptor, derived tool defaults, derived toolbox defaults, matching
//! the field-level override invariant.

use std::path::PathBuf;

use crate::descriptor::{AttributeSource, ToolDescriptor};
use crate::error::Result;
use crate::resolve::{resolve_text, text_to_html};
use crate::schema::{Schema, TOOL_SCHEMA, TOOLBOX_SCHEMA};
use crate::xml::XmlTree;

use super::tool::{ToolMetadata, dialog_reference_text, python_reference_text};
use super::toolbox::ToolboxMetadata;

/// Tags filled structurally rather than through text resolution.
const ANCHOR_TAGS: &[&str] = &["searchKeys", "scriptExamples", "parameters"];

/// Output path of the toolbox document: `<source>.xml` beside the source.
pub fn toolbox_document_path(toolbox: &ToolboxMetadata) -> PathBuf {
    let source = toolbox.source_path();
    let file_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Toolbox");
    source.with_file_name(format!("{}.xml", file_name))
}

/// Output path of a tool document: `<stem>.<Tool>.pyt.xml` beside the
/// source.
pub fn tool_document_path(toolbox: &ToolboxMetadata, tool_name: &str) -> PathBuf {
    toolbox.source_path().with_file_name(format!(
        "{}.{}.pyt.xml",
        toolbox.toolbox_name(),
        tool_name
    ))
}

/// Build the toolbox-level document tree.
pub fn build_toolbox_document(toolbox: &ToolboxMetadata, keywords: &[String]) -> Result<XmlTree> {
    let mut tree = XmlTree::from_schema(&TOOLBOX_SCHEMA)?;
    tree.set_attr("toolbox", "name", toolbox.toolbox_name())?;
    tree.set_attr("toolbox", "alias", toolbox.alias())?;

    let sources: [&dyn AttributeSource; 2] = [toolbox.descriptor(), toolbox];
    fill_text(&mut tree, &TOOLBOX_SCHEMA, &sources);
    append_keywords(&mut tree, keywords);
    Ok(tree)
}

/// Build the document tree for one tool.
pub fn build_tool_document(
    toolbox: &ToolboxMetadata,
    tool_meta: &ToolMetadata,
    tool: &ToolDescriptor,
) -> Result<XmlTree> {
    let mut tree = XmlTree::from_schema(&TOOL_SCHEMA)?;
    tree.set_attr("tool", "xmlns", "")?;
    tree.set_attr("tool", "name", &tool.name)?;
    tree.set_attr("tool", "displayname", &tool_meta.label)?;
    tree.set_attr("tool", "toolboxalias", toolbox.alias())?;

    let sources: [&dyn AttributeSource; 4] =
        [tool, toolbox.descriptor(), tool_meta, toolbox];
    fill_text(&mut tree, &TOOL_SCHEMA, &sources);

    append_keywords(&mut tree, tool_meta.keywords());
    append_script_examples(&mut tree, tool_meta);
    append_parameters(&mut tree, tool);
    Ok(tree)
}

fn fill_text(tree: &mut XmlTree, schema: &Schema, sources: &[&dyn AttributeSource]) {
    for entry in schema.entries() {
        if ANCHOR_TAGS.contains(&entry.tag) {
            continue;
        }
        let text = resolve_text(entry.tag, sources);
        tree.set_text_if_empty(entry.tag, &text);
    }
}

fn append_keywords(tree: &mut XmlTree, keywords: &[String]) {
    let Some(anchor) = tree.find("searchKeys") else {
        return;
    };
    for keyword in keywords {
        let node = tree.append_child(anchor, "keyword");
        tree.set_node_text(node, keyword);
    }
}

fn append_script_examples(tree: &mut XmlTree, tool_meta: &ToolMetadata) {
    let Some(anchor) = tree.find("scriptExamples") else {
        return;
    };
    for example in tool_meta.examples() {
        let example_node = tree.append_child(anchor, "scriptExample");
        let title = tree.append_child(example_node, "title");
        tree.set_node_text(title, &example.title);
        let para = tree.append_child(example_node, "para");
        tree.set_node_text(para, &text_to_html(&example.para));
        let code = tree.append_child(example_node, "code");
        tree.set_node_text(code, &example.code.join("\n"));
    }
}

fn append_parameters(tree: &mut XmlTree, tool: &ToolDescriptor) {
    let Some(anchor) = tree.find("parameters") else {
        return;
    };
    for param in &tool.parameters {
        let node = tree.append_child(anchor, "param");
        tree.set_node_attr(node, "type", &param.parameter_type);
        tree.set_node_attr(node, "datatype", &param.datatype);
        tree.set_node_attr(node, "name", &param.name);
        tree.set_node_attr(node, "displayname", &param.display_name);
        tree.set_node_attr(node, "direction", &param.direction);

        let dialog = tree.append_child(node, "dialogReference");
        tree.set_node_text(dialog, &dialog_reference_text(param));
        let python = tree.append_child(node, "pythonReference");
        tree.set_node_text(python, &python_reference_text(param));
    }
}

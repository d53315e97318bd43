//! Tool-level derived metadata: summaries, keywords, script examples and
//! parameter documentation.

use std::path::Path;

use crate::descriptor::{
    AttrValue, AttributeSource, ParamFilter, ParameterDescriptor, ScriptExample, ToolDescriptor,
};
use crate::resolve::{derive_keywords, normalize, text_to_html};

use super::toolbox::ToolboxMetadata;

/// Maximum allowed values rendered in a parameter's python reference.
const MAX_FILTER_VALUES: usize = 10;

/// Derived defaults for one tool document.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    pub tool_name: String,
    pub label: String,
    pub category: String,
    summary: String,
    usage: String,
    res_title: String,
    format_name: String,
    keywords: Vec<String>,
    examples: Vec<ScriptExample>,
}

impl ToolMetadata {
    pub fn new(toolbox: &ToolboxMetadata, tool: &ToolDescriptor) -> Self {
        let tool_name = tool.name.clone();
        let label = tool.label.clone().unwrap_or_else(|| tool_name.clone());
        let category = tool
            .category
            .clone()
            .unwrap_or_else(|| "Uncategorized".to_string());

        let summary = tool
            .description
            .as_deref()
            .map(normalize)
            .unwrap_or_else(|| default_summary(&tool_name));
        let usage = tool
            .usage
            .as_deref()
            .map(normalize)
            .unwrap_or_else(|| summary.clone());

        let res_title = format!("{}.({})", toolbox.alias(), category);

        let keywords = if tool.search_keys.is_empty() {
            let toolbox_keywords = toolbox.keywords().join(" ");
            derive_keywords(&[&label, &tool_name, &toolbox_keywords, &category])
        } else {
            tool.search_keys.clone()
        };

        let examples = validated_examples(toolbox, tool, &label, &summary);

        Self {
            tool_name,
            label,
            category,
            summary,
            usage,
            res_title,
            format_name: toolbox.esri().tool_format_name.clone(),
            keywords,
            examples,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn examples(&self) -> &[ScriptExample] {
        &self.examples
    }
}

impl AttributeSource for ToolMetadata {
    fn attribute(&self, field: &str) -> Option<AttrValue> {
        let value = match field {
            "summary" => self.summary.clone(),
            "usage" => self.usage.clone(),
            "resTitle" => self.res_title.clone(),
            "formatName" => self.format_name.clone(),
            _ => return None,
        };
        Some(AttrValue::Text(value))
    }
}

fn default_summary(tool_name: &str) -> String {
    text_to_html(&format!(
        "{} is a geospatial toolbox tool.\nContact the point of contact below for more information.",
        tool_name
    ))
}

/// Validate descriptor-supplied examples, or fall back to a generated
/// sample. Any example with no code invalidates the whole set; blank
/// titles and paragraphs are filled from the label and summary.
fn validated_examples(
    toolbox: &ToolboxMetadata,
    tool: &ToolDescriptor,
    label: &str,
    summary: &str,
) -> Vec<ScriptExample> {
    let provided = &tool.script_examples;
    if !provided.is_empty() && provided.iter().all(|ex| !ex.is_blank()) {
        return provided
            .iter()
            .map(|ex| ScriptExample {
                title: if ex.title.trim().is_empty() {
                    format!("{}: Code Sample", label)
                } else {
                    ex.title.clone()
                },
                para: if ex.para.trim().is_empty() {
                    format!("Sample Description: {}", summary)
                } else {
                    ex.para.clone()
                },
                code: ex.code.clone(),
            })
            .collect();
    }
    vec![default_example(toolbox.source_path(), toolbox.alias(), tool, label)]
}

fn default_example(
    source_path: &Path,
    alias: &str,
    tool: &ToolDescriptor,
    label: &str,
) -> ScriptExample {
    let para = [
        "<em>    <b>Note</b> : Calling custom toolboxes is only available</em>",
        "<em>    within external script interpreters and script files!</em>",
        "<em>    Code samples will not run inside application script windows.</em>",
    ]
    .join("\n");
    ScriptExample {
        title: format!("{}: Code Sample (1)", label),
        para,
        code: default_code(source_path, alias, tool),
    }
}

/// Generated import-and-call sample listing the tool's parameters.
fn default_code(source_path: &Path, alias: &str, tool: &ToolDescriptor) -> Vec<String> {
    let mut lines = vec![
        "# import the toolbox as a module".to_string(),
        "import arcpy".to_string(),
        format!("arcpy.ImportToolbox(r'{}',", source_path.display()),
        format!("{}r'{}')", " ".repeat(20), alias),
        String::new(),
        "# call the tool and return the output".to_string(),
    ];

    let lead = " ".repeat(11);
    let params = &tool.parameters;
    let width = params.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let args = params
        .iter()
        .map(|p| {
            format!(
                "{}{}#{}- Type({})",
                p.name,
                " ".repeat(width + 4 - p.name.len()),
                p.display_name,
                p.datatype
            )
        })
        .collect::<Vec<_>>()
        .join(&format!(",\n{}", lead));
    lines.push(format!(
        "result = arcpy.{}_{}(\n{}{}\n{})",
        tool.name, alias, lead, args, lead
    ));
    lines
}

/// Dialog help text for one parameter.
pub fn dialog_reference_text(param: &ParameterDescriptor) -> String {
    let body = param
        .dialog_reference
        .as_deref()
        .unwrap_or(&param.display_name);
    text_to_html(&format!("<em>{}</em><br></br>", body))
}

/// Python help text for one parameter: description, dependencies,
/// default value and allowed values.
pub fn python_reference_text(param: &ParameterDescriptor) -> String {
    if let Some(explicit) = &param.python_reference {
        return text_to_html(explicit);
    }

    let dependencies = if param.dependencies.is_empty() {
        "N/A".to_string()
    } else {
        param.dependencies.join(", ")
    };
    let default_value = param.default_value.as_deref().unwrap_or("N/A");

    let mut lines = vec![
        format!("<u>Python variable name:</u> (<em>{}</em>)", param.name),
        format!(
            "<u>Description:</u> {} {} value representing the tool",
            param.parameter_type,
            param.datatype.to_lowercase()
        ),
        format!(
            "{}\"<em>{}</em>\" {} parameter.",
            "&#160; ".repeat(10),
            param.display_name,
            param.direction
        ),
        format!("<u>Dependencies:</u> {}", dependencies),
        format!("<u>Default Value:</u> {}", default_value),
    ];
    if let Some(filter) = filter_text(param.filter.as_ref()) {
        lines.push(filter);
    }
    text_to_html(&lines.join("\n"))
}

fn filter_text(filter: Option<&ParamFilter>) -> Option<String> {
    match filter? {
        ParamFilter::ValueList(values) => {
            let lead = "&#160; ".repeat(8);
            let item_prefix = format!("\n<span>{}-</span>", lead);
            let mut text = format!(
                "<u>Allowed Values:</u>{}",
                values
                    .iter()
                    .take(MAX_FILTER_VALUES)
                    .map(|v| format!("{}{}", item_prefix, v))
                    .collect::<String>()
            );
            if values.len() > MAX_FILTER_VALUES {
                let note_prefix = format!("\n<span>{}</span>", lead);
                text.push_str(&format!(
                    "{}<b>*Only first {} values displayed...*</b>",
                    note_prefix, MAX_FILTER_VALUES
                ));
                text.push_str(&format!(
                    "{}  <b>*See tool parameter for full list...*</b>",
                    note_prefix
                ));
            }
            Some(text)
        }
        ParamFilter::Range { min, max } => {
            Some(format!("<u>Allowed Range:</u> Min({}),  Max ({})", min, max))
        }
    }
}

//! Tool descriptor types.
//!
//! A tool descriptor carries the author-settable metadata for a single
//! tool. Every field is optional; values set here take precedence over
//! toolbox-level values when the tool's document is generated.

use serde::{Deserialize, Serialize};

use super::attribute::{AttrValue, AttributeSource, list_attr, text_attr};

/// Author-settable metadata for one tool in a toolbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Tool class name; the only field generation relies on.
    pub name: String,
    /// Display label shown in the toolbox UI.
    pub label: Option<String>,
    /// Toolbox category the tool is grouped under.
    pub category: Option<String>,
    /// Short description; feeds the `summary` tag.
    pub description: Option<String>,
    /// Usage notes; defaults to the summary when absent.
    pub usage: Option<String>,
    /// Explicit search keywords; derived from names when absent.
    pub search_keys: Vec<String>,
    /// Usage limitation statement.
    pub use_limit: Option<String>,
    /// Credit/contact statement.
    pub id_credit: Option<String>,
    /// Code samples shown in the tool help.
    pub script_examples: Vec<ScriptExample>,
    /// Tool parameters, in declaration order.
    pub parameters: Vec<ParameterDescriptor>,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl AttributeSource for ToolDescriptor {
    fn attribute(&self, field: &str) -> Option<AttrValue> {
        match field {
            "summary" => text_attr(&self.description),
            "usage" => text_attr(&self.usage),
            "searchKeys" => list_attr(&self.search_keys),
            "useLimit" => text_attr(&self.use_limit),
            "idCredit" => text_attr(&self.id_credit),
            _ => None,
        }
    }
}

/// One code sample attached to a tool.
///
/// Examples with an empty title or paragraph get those filled from the
/// tool label/summary during validation; examples with no code lines are
/// discarded in favor of a generated sample.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptExample {
    pub title: String,
    pub para: String,
    pub code: Vec<String>,
}

impl ScriptExample {
    /// True when there is no code worth rendering.
    pub fn is_blank(&self) -> bool {
        self.code.iter().all(|line| line.trim().is_empty())
    }
}

/// One tool parameter, as declared by the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Script-level variable name.
    pub name: String,
    /// Label shown in the tool dialog.
    pub display_name: String,
    /// Geoprocessing datatype, e.g. "GPFeatureLayer".
    pub datatype: String,
    /// "Required", "Optional" or "Derived".
    pub parameter_type: String,
    /// "Input" or "Output".
    pub direction: String,
    /// Default value rendered in the parameter help.
    pub default_value: Option<String>,
    /// Names of parameters this one depends on.
    pub dependencies: Vec<String>,
    /// Help text override for the dialog reference.
    pub dialog_reference: Option<String>,
    /// Help text override for the python reference.
    pub python_reference: Option<String>,
    /// Allowed-value constraint, if any.
    pub filter: Option<ParamFilter>,
}

impl Default for ParameterDescriptor {
    fn default() -> Self {
        Self {
            name: String::new(),
            display_name: String::new(),
            datatype: "GPString".to_string(),
            parameter_type: "Required".to_string(),
            direction: "Input".to_string(),
            default_value: None,
            dependencies: Vec::new(),
            dialog_reference: None,
            python_reference: None,
            filter: None,
        }
    }
}

/// Value constraint on a parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ParamFilter {
    /// Fixed list of allowed values.
    ValueList(Vec<String>),
    /// Inclusive numeric range.
    Range { min: String, max: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_attribute_lookup() {
        let mut tool = ToolDescriptor::new("ClipRaster");
        tool.description = Some("Clips a raster".to_string());
        tool.search_keys = vec!["CLIP".to_string(), "Raster".to_string()];

        assert_eq!(
            tool.attribute("summary"),
            Some(AttrValue::from("Clips a raster"))
        );
        assert_eq!(
            tool.attribute("searchKeys"),
            Some(AttrValue::List(vec![
                "CLIP".to_string(),
                "Raster".to_string()
            ]))
        );
        // Absent fields resolve to None, never an error.
        assert!(tool.attribute("usage").is_none());
        assert!(tool.attribute("idAbs").is_none());
    }

    #[test]
    fn test_script_example_is_blank() {
        let blank = ScriptExample {
            title: "t".to_string(),
            para: "p".to_string(),
            code: vec!["   ".to_string(), String::new()],
        };
        assert!(blank.is_blank());

        let sample = ScriptExample {
            code: vec!["print('hi')".to_string()],
            ..ScriptExample::default()
        };
        assert!(!sample.is_blank());
    }

    #[test]
    fn test_parameter_defaults() {
        let param = ParameterDescriptor::default();
        assert_eq!(param.parameter_type, "Required");
        assert_eq!(param.direction, "Input");
        assert_eq!(param.datatype, "GPString");
        assert!(param.filter.is_none());
    }

    #[test]
    fn test_param_filter_yaml_round_trip() {
        let yaml = "value_list:\n- NEAREST\n- BILINEAR\n";
        let filter: ParamFilter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            filter,
            ParamFilter::ValueList(vec!["NEAREST".to_string(), "BILINEAR".to_string()])
        );

        let range: ParamFilter = serde_yaml::from_str("range:\n  min: '0'\n  max: '100'\n").unwrap();
        assert_eq!(
            range,
            ParamFilter::Range {
                min: "0".to_string(),
                max: "100".to_string()
            }
        );
    }
}

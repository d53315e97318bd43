//! Attribute values and the attribute source abstraction.
//!
//! Metadata fields are addressed by the XML tag name they feed (`idAbs`,
//! `resTitle`, `searchKeys`, ...). Anything that can supply field values
//! implements [`AttributeSource`]; the resolver walks a chain of sources
//! in priority order.

/// A single resolved attribute value.
///
/// Most fields are free text; `searchKeys` is an ordered list of keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    List(Vec<String>),
}

impl AttrValue {
    /// True when the value carries no usable content.
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Text(s) => s.is_empty(),
            AttrValue::List(items) => items.is_empty(),
        }
    }

    /// Borrow the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::List(_) => None,
        }
    }

    /// Borrow the list content, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::Text(_) => None,
            AttrValue::List(items) => Some(items),
        }
    }

    /// Consume into text, flattening lists with a space separator.
    pub fn into_text(self) -> String {
        match self {
            AttrValue::Text(s) => s,
            AttrValue::List(items) => items.join(" "),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::List(items)
    }
}

/// A supplier of metadata field values, keyed by XML tag name.
///
/// Returning `None` means the source has nothing to say about the field;
/// the resolver then moves on to the next source in the chain. Missing
/// fields are never an error.
pub trait AttributeSource {
    fn attribute(&self, field: &str) -> Option<AttrValue>;
}

/// Helper for descriptor impls: wrap an optional string field.
pub(crate) fn text_attr(value: &Option<String>) -> Option<AttrValue> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(AttrValue::from)
}

/// Helper for descriptor impls: wrap a keyword list field.
pub(crate) fn list_attr(items: &[String]) -> Option<AttrValue> {
    if items.is_empty() {
        None
    } else {
        Some(AttrValue::List(items.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_is_empty() {
        assert!(AttrValue::Text(String::new()).is_empty());
        assert!(AttrValue::List(vec![]).is_empty());
        assert!(!AttrValue::from("x").is_empty());
        assert!(!AttrValue::List(vec!["k".to_string()]).is_empty());
    }

    #[test]
    fn test_attr_value_accessors() {
        let text = AttrValue::from("hello");
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_list().is_none());

        let list = AttrValue::List(vec!["a".to_string(), "b".to_string()]);
        assert!(list.as_text().is_none());
        assert_eq!(list.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_into_text_flattens_lists() {
        let list = AttrValue::List(vec!["GIS".to_string(), "RASTER".to_string()]);
        assert_eq!(list.into_text(), "GIS RASTER");
    }

    #[test]
    fn test_text_attr_skips_empty() {
        assert!(text_attr(&None).is_none());
        assert!(text_attr(&Some(String::new())).is_none());
        assert_eq!(
            text_attr(&Some("v".to_string())),
            Some(AttrValue::from("v"))
        );
    }

    #[test]
    fn test_list_attr_skips_empty() {
        assert!(list_attr(&[]).is_none());
        assert!(list_attr(&["k".to_string()]).is_some());
    }
}

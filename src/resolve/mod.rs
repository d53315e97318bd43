//! Attribute resolution: fallback chains over descriptor sources.
//!
//! Every metadata field resolves through an ordered chain of
//! [`AttributeSource`]s: explicit tool-level value, explicit
//! toolbox-level value, derived default. The first source supplying a
//! non-empty value wins; absence everywhere yields an empty value, never
//! an error.

pub mod keywords;
pub mod text;

pub use keywords::derive_keywords;
pub use text::{cleandoc, normalize, text_to_html};

use crate::descriptor::{AttrValue, AttributeSource};

/// Resolve a field through a priority-ordered chain of sources.
///
/// Text values are normalized (multiline cleanup, HTML block rendering)
/// on the way out; list values pass through untouched.
pub fn resolve(field: &str, sources: &[&dyn AttributeSource]) -> Option<AttrValue> {
    for source in sources {
        if let Some(value) = source.attribute(field) {
            if !value.is_empty() {
                return Some(normalized(value));
            }
        }
    }
    None
}

/// Resolve a field to plain text; missing fields yield an empty string.
pub fn resolve_text(field: &str, sources: &[&dyn AttributeSource]) -> String {
    resolve(field, sources)
        .map(AttrValue::into_text)
        .unwrap_or_default()
}

fn normalized(value: AttrValue) -> AttrValue {
    match value {
        AttrValue::Text(s) => AttrValue::Text(text::normalize(&s)),
        list @ AttrValue::List(_) => list,
    }
}

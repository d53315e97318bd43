//! Default search keyword derivation.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

fn splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-zA-Z]+").expect("keyword splitter regex is valid"))
}

/// Derive search keywords from free-text parts (labels, names, aliases).
///
/// Terms are split on non-alphabetic characters. Terms with no internal
/// capitals are uppercased; terms that already carry mixed case keep
/// their spelling. Duplicates are collapsed case-insensitively with the
/// mixed-case spelling winning, and the result is sorted for stable
/// output.
pub fn derive_keywords(parts: &[&str]) -> Vec<String> {
    let joined = parts.join(" ");

    let mut by_key: BTreeMap<String, String> = BTreeMap::new();
    for token in splitter().split(&joined) {
        if token.is_empty() {
            continue;
        }
        let term = if token.chars().any(|c| c.is_uppercase()) {
            token.to_string()
        } else {
            token.to_uppercase()
        };
        let key = term.to_uppercase();
        match by_key.get(&key) {
            None => {
                by_key.insert(key, term);
            }
            Some(existing) => {
                // Prefer the spelling that kept lowercase letters.
                if *existing == existing.to_uppercase() && term != term.to_uppercase() {
                    by_key.insert(key, term);
                }
            }
        }
    }
    by_key.into_values().collect()
}

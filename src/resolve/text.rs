//! Multiline text cleanup and HTML block formatting.
//!
//! Descriptor strings written as indented multiline literals carry the
//! surrounding code's indentation. `cleandoc` strips it the way doc
//! tooling does: the first line is fully trimmed, the common leading
//! indent of the remaining lines is removed, blank edges are dropped and
//! tabs are expanded. Metadata viewers render HTML, so normalized
//! multiline text becomes a block of `<span>` lines.

const TAB_WIDTH: usize = 8;

/// Strip uniform indentation from a multiline string.
pub fn cleandoc(text: &str) -> String {
    let expanded = text.replace('\t', &" ".repeat(TAB_WIDTH));
    let lines: Vec<&str> = expanded.lines().collect();

    // Common leading whitespace of the non-blank lines after the first.
    let mut margin: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let stripped = line.trim_start();
        if stripped.is_empty() {
            continue;
        }
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        margin = Some(margin.map_or(indent, |m| m.min(indent)));
    }

    let margin = margin.unwrap_or(0);
    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            out.push(line.trim_start());
        } else {
            out.push(strip_indent(line, margin));
        }
    }

    while out.first().is_some_and(|l| l.trim().is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|l| l.trim().is_empty()) {
        out.pop();
    }
    out.join("\n")
}

fn strip_indent(line: &str, margin: usize) -> &str {
    let mut rest = line;
    let mut remaining = margin;
    while remaining > 0 {
        match rest.strip_prefix(' ') {
            Some(r) => {
                rest = r;
                remaining -= 1;
            }
            None => break,
        }
    }
    rest
}

/// Render a multiline string as an HTML block.
pub fn text_to_html(text: &str) -> String {
    cleandoc(text)
        .lines()
        .map(|line| format!("<span>{}</span>", line))
        .collect::<Vec<_>>()
        .join("<br></br>")
}

/// Normalize a resolved text value.
///
/// Strings that already read as a single clean line pass through
/// unchanged; anything with indentation or blank edges is rendered as an
/// HTML block.
pub fn normalize(text: &str) -> String {
    if cleandoc(text) == text {
        text.to_string()
    } else {
        text_to_html(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleandoc_single_line_unchanged() {
        assert_eq!(cleandoc("plain text"), "plain text");
    }

    #[test]
    fn test_cleandoc_strips_common_indent() {
        let text = "First line\n    second line\n        nested\n    third line";
        assert_eq!(cleandoc(text), "First line\nsecond line\n    nested\nthird line");
    }

    #[test]
    fn test_cleandoc_trims_blank_edges() {
        let text = "\n\n    body\n\n";
        assert_eq!(cleandoc(text), "body");
    }

    #[test]
    fn test_cleandoc_expands_tabs() {
        let text = "a\n\tb";
        assert_eq!(cleandoc(text), "a\nb");
    }

    #[test]
    fn test_cleandoc_first_line_fully_trimmed() {
        let text = "      leading\n   follower";
        assert_eq!(cleandoc(text), "leading\nfollower");
    }

    #[test]
    fn test_text_to_html_wraps_lines() {
        let html = text_to_html("one\ntwo");
        assert_eq!(html, "<span>one</span><br></br><span>two</span>");
    }

    #[test]
    fn test_normalize_passthrough_for_clean_text() {
        assert_eq!(normalize("Sample abstract"), "Sample abstract");
    }

    #[test]
    fn test_normalize_htmlizes_indented_text() {
        let text = "Summary line\n            continued here";
        let normalized = normalize(text);
        assert!(normalized.contains("<span>Summary line</span>"));
        assert!(normalized.contains("<span>continued here</span>"));
        assert!(normalized.contains("<br></br>"));
    }
}

//! INI text codec
//!
//! Reads `[section]` headers and `key=value` lines; `;` and `#` start
//! comment lines. Whitespace around names and values is trimmed and a
//! repeated key keeps its first position with the last value. Comment
//! lines are attached to the header or key below them; comments after the
//! last entry are kept at the end of the document.
//!
//! Writing is deterministic: the unnamed section first, without header,
//! then each section as `[name]` followed by `key = value` lines, with a
//! blank line between sections. Comments are written back above the line
//! they belong to.

use crate::domain::config::{ConfigDocument, Section};

/// Parse INI text into a document
pub fn parse(text: &str) -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    let mut current = String::new();
    let mut pending: Vec<String> = Vec::new();

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with(';') || trimmed.starts_with('#') {
            pending.push(trimmed.to_string());
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            if let Some(end) = rest.find(']') {
                current = rest[..end].trim().to_string();
                doc.ensure_section(&current).add_comments(pending.drain(..));
                continue;
            }
        }

        if let Some((key, value)) = trimmed.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let section = doc.ensure_section(&current);
            section.set(key, value.trim());
            section.add_key_comments(key, pending.drain(..));
        }
    }

    doc.set_trailing_comments(pending);
    doc
}

fn push_comments(out: &mut String, lines: &[String]) {
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

fn push_entries(out: &mut String, section: &Section) {
    for (key, value) in section.entries() {
        push_comments(out, section.key_comments(key));
        out.push_str(&format!("{} = {}\n", key, value));
    }
}

/// Serialize a document to INI text
pub fn serialize(doc: &ConfigDocument) -> String {
    let mut out = String::new();

    if let Some(unnamed) = doc.section("") {
        push_comments(&mut out, unnamed.comments());
        push_entries(&mut out, unnamed);
    }

    for section in doc.sections().iter().filter(|s| !s.name().is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        push_comments(&mut out, section.comments());
        out.push_str(&format!("[{}]\n", section.name()));
        push_entries(&mut out, section);
    }

    if !doc.trailing_comments().is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        push_comments(&mut out, doc.trailing_comments());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let text = r#"
[net]
port = 8080
host=example.org

[ui]
theme = dark
"#;
        let doc = parse(text);
        assert_eq!(doc.get("net", "port"), Some("8080"));
        assert_eq!(doc.get("net", "host"), Some("example.org"));
        assert_eq!(doc.get("ui", "theme"), Some("dark"));
    }

    #[test]
    fn parse_skips_comments_and_junk() {
        let text = "; comment\n# another\n[a]\nnot a pair\nk = v\n=orphan\n";
        let doc = parse(text);
        assert_eq!(doc.section("a").unwrap().entries().len(), 1);
        assert_eq!(doc.get("a", "k"), Some("v"));
    }

    #[test]
    fn parse_keys_before_header_go_to_unnamed_section() {
        let doc = parse("top = 1\n[a]\nk = 2\n");
        assert_eq!(doc.get("", "top"), Some("1"));
        assert_eq!(doc.get("a", "k"), Some("2"));
    }

    #[test]
    fn parse_duplicate_key_last_value_wins() {
        let doc = parse("[a]\nk = 1\nj = 2\nk = 3\n");
        let entries = doc.section("a").unwrap().entries();
        assert_eq!(entries[0], ("k".to_string(), "3".to_string()));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn parse_keeps_empty_sections() {
        let doc = parse("[empty]\n[full]\nk = v\n");
        assert!(doc.section("empty").unwrap().is_empty());
    }

    #[test]
    fn parse_value_keeps_inner_equals() {
        let doc = parse("[a]\nurl = http://x/?a=b\n");
        assert_eq!(doc.get("a", "url"), Some("http://x/?a=b"));
    }

    #[test]
    fn parse_strips_bom_and_crlf() {
        let doc = parse("\u{feff}[a]\r\nk = v\r\n");
        assert_eq!(doc.get("a", "k"), Some("v"));
    }

    #[test]
    fn serialize_layout() {
        let mut doc = ConfigDocument::new();
        doc.set("a", "x", "1");
        doc.set("a", "y", "2");
        doc.ensure_section("empty");
        doc.set("b", "z", "3");

        assert_eq!(
            serialize(&doc),
            "[a]\nx = 1\ny = 2\n\n[empty]\n\n[b]\nz = 3\n"
        );
    }

    #[test]
    fn serialize_unnamed_section_first() {
        let mut doc = ConfigDocument::new();
        doc.set("a", "x", "1");
        doc.set("", "top", "t");
        assert_eq!(serialize(&doc), "top = t\n\n[a]\nx = 1\n");
    }

    #[test]
    fn comments_survive_a_rewrite() {
        let text = "; baud rate of the CAN bus\n[can]\n# bits per second\nbaud=250000\nid = 7\n";
        let doc = parse(text);
        assert_eq!(doc.section("can").unwrap().comments(), ["; baud rate of the CAN bus"]);
        assert_eq!(
            serialize(&doc),
            "; baud rate of the CAN bus\n[can]\n# bits per second\nbaud = 250000\nid = 7\n"
        );
    }

    #[test]
    fn comments_above_unnamed_keys_and_at_end() {
        let text = "; top\nmode = 1\n\n[a]\nk = v\n; end of file\n";
        let doc = parse(text);
        assert_eq!(doc.section("").unwrap().key_comments("mode"), ["; top"]);
        assert_eq!(doc.trailing_comments(), ["; end of file"]);
        assert_eq!(
            serialize(&doc),
            "; top\nmode = 1\n\n[a]\nk = v\n\n; end of file\n"
        );
    }

    #[test]
    fn serialize_is_stable_across_reparse() {
        let text = "; head\n[a]\nx = 1\n\n[b]\n\n[c]\n# why\ny = hello world\n";
        let once = serialize(&parse(text));
        assert_eq!(once, text);
        assert_eq!(serialize(&parse(&once)), once);
    }
}

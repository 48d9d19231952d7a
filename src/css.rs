//! Extracts the glyph table from the FontAwesome stylesheet.
//!
//! The stylesheet is the only place the icon names and their codepoints are
//! published together, so we scrape the `:before { content: "\fXXX"; }`
//! rules rather than the font itself. Icon classes were named `icon-*` up
//! to 3.x and `fa-*` from 4.0 on; both spellings are accepted.

use regex::Regex;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    pub name: String,
    pub codepoint: u32,
}

/// Parse the stylesheet into glyph records (document order, duplicates kept)
/// and a single-hop alias map (last write wins on a duplicate alias).
///
/// Aliased icons share one rule, e.g.
/// `.fa-group:before, .fa-users:before { content: "\f0c0"; }`: each selector
/// is an alias of the one that follows it, and only the last selector of the
/// group sits next to the content declaration and becomes a glyph record.
pub fn parse_stylesheet(css: &str) -> (Vec<GlyphRecord>, BTreeMap<String, String>) {
    let rule = Regex::new(
        r#"\.(?:icon|fa)-([a-z1-9-]+):before\s*\{\s*content:\s*"\\([0-9a-fA-F]{4})";?\s*\}"#,
    )
    .unwrap();
    let glyphs = rule
        .captures_iter(css)
        .map(|cap| GlyphRecord {
            name: cap[1].to_string(),
            codepoint: u32::from_str_radix(&cap[2], 16).unwrap(),
        })
        .collect();

    // Pair each :before selector with its successor whenever the two are
    // joined by a comma. A selector followed by "{" ends its group.
    let selector = Regex::new(r"\.(?:icon|fa)-([a-z1-9-]+):before\s*([,{])").unwrap();
    let mut aliases = BTreeMap::new();
    let mut pending: Option<String> = None;
    for cap in selector.captures_iter(css) {
        let name = cap[1].to_string();
        if let Some(alias) = pending.take() {
            aliases.insert(alias, name.clone());
        }
        if &cap[2] == "," {
            pending = Some(name);
        }
    }

    (glyphs, aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CSS: &str = r#"
.fa-glass:before {
  content: "\f000";
}
.fa-music:before {
  content: "\f001";
}
.icon-envelope:before {
  content: "\f003";
}
.fa-remove:before,
.fa-close:before,
.fa-times:before {
  content: "\f00d";
}
.fa-ul {
  list-style-type: none;
}
"#;

    #[test]
    fn finds_simple_rules() {
        let (glyphs, _) = parse_stylesheet(CSS);
        assert_eq!(
            glyphs[0],
            GlyphRecord {
                name: "glass".to_string(),
                codepoint: 0xf000
            }
        );
        assert_eq!(glyphs[1].name, "music");
    }

    #[test]
    fn accepts_both_class_prefixes() {
        let (glyphs, _) = parse_stylesheet(CSS);
        assert!(glyphs.iter().any(|g| g.name == "envelope"));
    }

    #[test]
    fn grouped_selectors_become_alias_chain() {
        let (glyphs, aliases) = parse_stylesheet(CSS);
        // only the selector next to the declaration yields a record
        assert!(glyphs.iter().any(|g| g.name == "times"));
        assert!(!glyphs.iter().any(|g| g.name == "remove"));
        assert_eq!(aliases.get("remove"), Some(&"close".to_string()));
        assert_eq!(aliases.get("close"), Some(&"times".to_string()));
        assert_eq!(aliases.len(), 2);
    }

    #[test]
    fn group_does_not_leak_into_next_rule() {
        let css = r#"
.fa-a:before, .fa-b:before { content: "\f001"; }
.fa-c:before { content: "\f002"; }
"#;
        let (_, aliases) = parse_stylesheet(css);
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.get("a"), Some(&"b".to_string()));
    }

    #[test]
    fn class_alphabet_is_restricted() {
        // "0" is outside the accepted alphabet, underscores too
        let css = r#"
.fa-battery-0:before { content: "\f244"; }
.fa-spin_fast:before { content: "\f255"; }
.fa-heart:before { content: "\f004"; }
"#;
        let (glyphs, _) = parse_stylesheet(css);
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].name, "heart");
    }

    #[test]
    fn codepoint_must_be_four_hex_digits() {
        let css = r#".fa-x:before { content: "\f00"; }"#;
        let (glyphs, _) = parse_stylesheet(css);
        assert!(glyphs.is_empty());
    }

    #[test]
    fn duplicate_alias_is_last_write_wins() {
        let css = r#"
.fa-old:before, .fa-first:before { content: "\f001"; }
.fa-old:before, .fa-second:before { content: "\f002"; }
"#;
        let (_, aliases) = parse_stylesheet(css);
        assert_eq!(aliases.get("old"), Some(&"second".to_string()));
    }

    #[test]
    fn duplicate_records_are_kept_in_document_order() {
        let css = r#"
.fa-star:before { content: "\f005"; }
.fa-star:before { content: "\f006"; }
"#;
        let (glyphs, _) = parse_stylesheet(css);
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].codepoint, 0xf005);
        assert_eq!(glyphs[1].codepoint, 0xf006);
    }
}

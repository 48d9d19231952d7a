//! Formats for every generated TeX line.

use std::collections::HashMap;

/// Derive the control-word part of an icon macro: title-case the
/// hyphen-separated words and stick them together, so `share-alt-square`
/// becomes `ShareAltSquare` (and the macro `\faShareAltSquare`). Names that
/// would produce digits take their replacement from the override table
/// verbatim.
pub fn macro_identifier(name: &str, overrides: &HashMap<&'static str, &'static str>) -> String {
    if let Some(replacement) = overrides.get(name) {
        return (*replacement).to_string();
    }
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// `\def\faGlass{\faicon{glass}}`
pub fn generic_def(ident: &str, name: &str) -> String {
    format!("\\def\\fa{}{{\\faicon{{{}}}}}", ident, name)
}

/// A generic macro for the alias plus the `faicon@` indirection pointing it
/// at the canonical name.
pub fn alias_def(ident: &str, alias: &str, target: &str) -> String {
    format!(
        "\\def\\fa{}{{\\faicon{{{}}}}}\\expandafter\\def\\csname faicon@{}\\endcsname{{\\faicon{{{}}}}}",
        ident, alias, alias, target
    )
}

/// Direct-symbol definition for the OpenType engines; the codepoint is
/// given in TeX hex notation.
pub fn xeluatex_def(name: &str, codepoint: u32) -> String {
    format!(
        "\\expandafter\\def\\csname faicon@{}\\endcsname{{{{\\FA\\symbol{{\"{:04X}}}}}}}",
        name, codepoint
    )
}

/// Paged definition for pdfTeX: the glyph is addressed by its page's font
/// and its slot offset.
pub fn pdftex_def(name: &str, ordinal: &str, offset: usize) -> String {
    format!(
        "\\expandafter\\def\\csname faicon@{}\\endcsname{{{{\\FA{}\\symbol{{{}}}}}}}",
        name, ordinal, offset
    )
}

/// `\font\FAone=FontAwesome--fontawesomeone.enc`
pub fn font_def(ordinal: &str, enc_file: &str) -> String {
    format!("\\font\\FA{}=FontAwesome--{}", ordinal, enc_file)
}

/// Map registration for one page, from the line otftotfm printed.
pub fn mapline_def(mapline: &str) -> String {
    format!("\\pdfmapline{{+{}}}", mapline)
}

/// One row of the showcase document.
pub fn showcase_line(name: &str, ident: &str, tag: &str) -> String {
    format!("  \\showcaseicon{{{}}}{{fa{}}}{{{}}}", name, ident, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::macro_overrides;
    use pretty_assertions::assert_eq;

    #[test]
    fn identifier_title_cases_hyphenated_words() {
        let overrides = macro_overrides();
        assert_eq!(
            macro_identifier("share-alt-square", &overrides),
            "ShareAltSquare"
        );
        assert_eq!(
            macro_identifier("external-link-square", &overrides),
            "ExternalLinkSquare"
        );
        assert_eq!(macro_identifier("glass", &overrides), "Glass");
    }

    #[test]
    fn identifier_is_deterministic() {
        let overrides = macro_overrides();
        assert_eq!(
            macro_identifier("hand-o-up", &overrides),
            macro_identifier("hand-o-up", &overrides)
        );
    }

    #[test]
    fn overridden_names_use_the_replacement_verbatim() {
        let overrides = macro_overrides();
        assert_eq!(macro_identifier("500px", &overrides), "FiveHundredPx");
        assert_eq!(macro_identifier("battery-4", &overrides), "BatteryFour");
    }

    #[test]
    fn generic_line_shape() {
        assert_eq!(
            generic_def("Glass", "glass"),
            "\\def\\faGlass{\\faicon{glass}}"
        );
    }

    #[test]
    fn alias_line_shape() {
        assert_eq!(
            alias_def("Group", "group", "users"),
            "\\def\\faGroup{\\faicon{group}}\\expandafter\\def\\csname faicon@group\\endcsname{\\faicon{users}}"
        );
    }

    #[test]
    fn xeluatex_line_uses_uppercase_hex() {
        assert_eq!(
            xeluatex_def("glass", 0xf000),
            "\\expandafter\\def\\csname faicon@glass\\endcsname{{\\FA\\symbol{\"F000}}}"
        );
    }

    #[test]
    fn pdftex_line_addresses_page_and_offset() {
        assert_eq!(
            pdftex_def("glass", "two", 17),
            "\\expandafter\\def\\csname faicon@glass\\endcsname{{\\FAtwo\\symbol{17}}}"
        );
    }

    #[test]
    fn mapline_and_font_lines() {
        assert_eq!(
            font_def("one", "fontawesomeone.enc"),
            "\\font\\FAone=FontAwesome--fontawesomeone.enc"
        );
        assert_eq!(
            mapline_def("FontAwesome--fontawesomeone FontAwesome ..."),
            "\\pdfmapline{+FontAwesome--fontawesomeone FontAwesome ...}"
        );
    }

    #[test]
    fn showcase_line_shape() {
        assert_eq!(
            showcase_line("group", "Group", "alias"),
            "  \\showcaseicon{group}{faGroup}{alias}"
        );
        assert_eq!(
            showcase_line("glass", "Glass", ""),
            "  \\showcaseicon{glass}{faGlass}{}"
        );
    }
}

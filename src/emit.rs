//! Builds and writes the generated binding files. File bodies are built as
//! strings; the `write_*` wrappers only do IO.

use crate::css::GlyphRecord;
use crate::encoding::{coordinate, Page};
use crate::error::FatexError;
use crate::tables::ORDINALS;
use crate::tex;
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

type Overrides = HashMap<&'static str, &'static str>;

/// `\def\fa...` macros for every glyph, then the alias section. A record
/// named after an alias (the font sometimes is) is written under its
/// canonical name.
pub fn generic_symbols(
    glyphs: &[GlyphRecord],
    aliases: &BTreeMap<String, String>,
    overrides: &Overrides,
) -> String {
    let mut lines: Vec<String> = glyphs
        .iter()
        .map(|g| {
            let name = aliases.get(&g.name).unwrap_or(&g.name);
            tex::generic_def(&tex::macro_identifier(name, overrides), name)
        })
        .collect();
    lines.push("% aliases".to_string());
    for (alias, target) in aliases {
        lines.push(tex::alias_def(
            &tex::macro_identifier(alias, overrides),
            alias,
            target,
        ));
    }
    lines.join("\n") + "\n"
}

/// Direct `\symbol` definitions for XeTeX and LuaTeX.
pub fn xeluatex_symbols(glyphs: &[GlyphRecord], aliases: &BTreeMap<String, String>) -> String {
    glyphs
        .iter()
        .map(|g| {
            let name = aliases.get(&g.name).unwrap_or(&g.name);
            tex::xeluatex_def(name, g.codepoint)
        })
        .join("\n")
        + "\n"
}

/// Paged `\symbol` definitions for pdfTeX, one per partitioned glyph in
/// flat-list order.
pub fn pdftex_symbols(names: &[String]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let (page, offset) = coordinate(i);
            tex::pdftex_def(name, ORDINALS[page], offset)
        })
        .join("\n")
        + "\n"
}

/// A PostScript encoding vector listing all 256 slots of one page.
pub fn enc_file(page: &Page) -> String {
    let mut body = format!("/{} [\n", page.stem());
    for name in &page.names {
        body.push('/');
        body.push_str(name);
        body.push('\n');
    }
    body.push_str("] def\n");
    body
}

/// The raw otftotfm map lines, page order.
pub fn map_file(maplines: &[String]) -> String {
    maplines.join("\n") + "\n"
}

/// Font definition for one page.
pub fn fd_file(page: &Page) -> String {
    tex::font_def(page.ordinal, &format!("{}.enc", page.stem())) + "\n"
}

/// The lines substituted for the package template's marker: a map
/// registration and a font selection per page.
pub fn package_font_lines(pages: &[Page], maplines: &[String]) -> Vec<String> {
    pages
        .iter()
        .zip(maplines)
        .flat_map(|(page, mapline)| {
            [
                tex::mapline_def(mapline),
                tex::font_def(page.ordinal, &format!("{}.enc", page.stem())),
            ]
        })
        .collect()
}

/// One showcase row per glyph and alias, sorted by icon name; aliases are
/// tagged so the document can label them.
pub fn showcase_lines(
    glyphs: &[GlyphRecord],
    aliases: &BTreeMap<String, String>,
    overrides: &Overrides,
) -> Vec<String> {
    let mut entries: Vec<(&str, &str)> = glyphs
        .iter()
        .map(|g| (g.name.as_str(), ""))
        .chain(aliases.keys().map(|a| (a.as_str(), "alias")))
        .collect();
    entries.sort();
    entries
        .iter()
        .map(|(name, tag)| tex::showcase_line(name, &tex::macro_identifier(name, overrides), tag))
        .collect()
}

/// Copy `template` through to the output, replacing the single marker line
/// with the generated lines. Every other line is kept verbatim.
pub fn expand_template(template: &str, marker: &str, lines: &[String]) -> String {
    let mut out = String::new();
    for line in template.lines() {
        if line == marker {
            for generated in lines {
                out.push_str(generated);
                out.push('\n');
            }
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

pub fn write(path: impl AsRef<Path>, contents: &str) -> Result<(), FatexError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(FatexError::io(path))
}

pub fn write_from_template(
    template_path: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
    marker: &str,
    lines: &[String],
) -> Result<(), FatexError> {
    let template_path = template_path.as_ref();
    let template =
        fs::read_to_string(template_path).map_err(FatexError::io(template_path))?;
    write(out_path, &expand_template(&template, marker, lines))
}

//! Buckets the font's glyphs into the 256-slot encoding pages that the
//! Type 1 toolchain can address.

use crate::error::FatexError;
use crate::tables::{NOTDEF, ORDINALS};
use std::collections::{HashMap, HashSet};

pub const PAGE_SIZE: usize = 256;

/// One encoding page: exactly [`PAGE_SIZE`] slot names, padded with
/// [`NOTDEF`], identified by a 1-based number and its ordinal word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub ordinal: &'static str,
    pub names: Vec<String>,
}

impl Page {
    /// `fontawesometwo.enc` and the encoding vector inside it share a stem.
    pub fn stem(&self) -> String {
        format!("fontawesome{}", self.ordinal)
    }
}

/// Translate the raw `otfinfo -g` output into the stylesheet's spelling:
/// drop the empty slot marker and every glyph the rename table blanks out,
/// rename the rest, and sort. The result is the flat list the pages and the
/// pdfTeX symbol coordinates are derived from.
pub fn stylesheet_names(
    font_names: &[String],
    renames: &HashMap<&'static str, &'static str>,
) -> Vec<String> {
    let mut names: Vec<String> = font_names
        .iter()
        .filter(|n| n.as_str() != NOTDEF)
        .filter(|n| renames.get(n.as_str()) != Some(&NOTDEF))
        .map(|n| match renames.get(n.as_str()) {
            Some(renamed) => renamed.replace('_', "-"),
            None => n.replace('_', "-"),
        })
        .collect();
    names.sort();
    names
}

/// Split the sorted name list into pages. Glyph `i` lands on page
/// `i / 256 + 1` at offset `i % 256`; the last page is padded with
/// [`NOTDEF`] up to a full 256 slots.
pub fn paginate(names: &[String]) -> Result<Vec<Page>, FatexError> {
    let max = ORDINALS.len() - 1;
    let mut pages = Vec::new();
    for (index, chunk) in names.chunks(PAGE_SIZE).enumerate() {
        let number = index + 1;
        if number > max {
            return Err(FatexError::TooManyPages {
                glyphs: names.len(),
                max,
            });
        }
        let mut slots = chunk.to_vec();
        slots.resize(PAGE_SIZE, NOTDEF.to_string());
        pages.push(Page {
            number,
            ordinal: ORDINALS[number],
            names: slots,
        });
    }
    Ok(pages)
}

/// Page/offset of the glyph at `index` in the flat sorted list.
pub fn coordinate(index: usize) -> (usize, usize) {
    (index / PAGE_SIZE + 1, index % PAGE_SIZE)
}

/// The stylesheet and the font are supposed to expose the same icon set.
/// When they do not, say so, but carry on: the font is what actually gets
/// encoded, so its names stay the ground truth for page assignment.
pub fn report_name_mismatch(css_names: &HashSet<String>, font_names: &[String]) {
    let font_set: HashSet<&str> = font_names.iter().map(|n| n.as_str()).collect();
    let mut missing_from_font: Vec<&str> = css_names
        .iter()
        .map(|n| n.as_str())
        .filter(|n| !font_set.contains(n))
        .collect();
    let mut missing_from_css: Vec<&str> = font_set
        .iter()
        .copied()
        .filter(|n| !css_names.contains(*n))
        .collect();
    if missing_from_font.is_empty() && missing_from_css.is_empty() {
        return;
    }
    missing_from_font.sort_unstable();
    missing_from_css.sort_unstable();
    log::warn!(
        "Stylesheet and font glyphs do not match: {} missing from the font, {} missing from the stylesheet",
        missing_from_font.len(),
        missing_from_css.len()
    );
    for name in missing_from_font {
        log::debug!("  not in font: {}", name);
    }
    for name in missing_from_css {
        log::debug!("  not in stylesheet: {}", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::rename_table;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn renames_filter_and_sort() {
        let out = stylesheet_names(
            &names(&[".notdef", "group", "zzz", "space", "hand_right", "bell"]),
            &rename_table(),
        );
        // ".notdef" and "space" (blanked) go, "group" renames to "users",
        // "hand_right" renames, "bell" renames to "bell-o", then sorted
        assert_eq!(out, names(&["bell-o", "hand-o-right", "users", "zzz"]));
    }

    #[test]
    fn unrenamed_names_swap_underscores_for_hyphens() {
        let out = stylesheet_names(&names(&["some_new_icon"]), &rename_table());
        assert_eq!(out, names(&["some-new-icon"]));
    }

    #[test]
    fn rename_targets_are_normalized_too() {
        // "play_circle" maps to "play_circle_o" in the table; the
        // stylesheet spelling uses hyphens
        let out = stylesheet_names(&names(&["play_circle"]), &rename_table());
        assert_eq!(out, names(&["play-circle-o"]));
    }

    #[test]
    fn short_list_is_one_padded_page() {
        let pages = paginate(&names(&["a", "b", "c"])).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].ordinal, "one");
        assert_eq!(pages[0].names.len(), PAGE_SIZE);
        assert_eq!(&pages[0].names[..3], &names(&["a", "b", "c"])[..]);
        assert!(pages[0].names[3..].iter().all(|n| n == NOTDEF));
    }

    #[test]
    fn overflow_by_one_opens_a_second_page() {
        let list: Vec<String> = (0..257).map(|i| format!("g{:03}", i)).collect();
        let pages = paginate(&list).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].ordinal, "one");
        assert_eq!(pages[1].ordinal, "two");
        assert!(pages[0].names.iter().all(|n| n != NOTDEF));
        assert_eq!(pages[1].names[0], "g256");
        assert!(pages[1].names[1..].iter().all(|n| n == NOTDEF));
    }

    #[test]
    fn pages_round_trip_to_the_flat_list() {
        let list: Vec<String> = (0..600).map(|i| format!("g{:03}", i)).collect();
        let pages = paginate(&list).unwrap();
        assert_eq!(pages.len(), 3); // ceil(600 / 256)
        let mut rebuilt: Vec<String> = pages.iter().flat_map(|p| p.names.clone()).collect();
        while rebuilt.last().map(|n| n.as_str()) == Some(NOTDEF) {
            rebuilt.pop();
        }
        assert_eq!(rebuilt, list);
    }

    #[test]
    fn coordinates_match_page_contents() {
        let list: Vec<String> = (0..600).map(|i| format!("g{:03}", i)).collect();
        let pages = paginate(&list).unwrap();
        for (i, name) in list.iter().enumerate() {
            let (page, offset) = coordinate(i);
            assert_eq!(&pages[page - 1].names[offset], name);
        }
    }

    #[test]
    fn empty_list_has_no_pages() {
        assert!(paginate(&[]).unwrap().is_empty());
    }

    #[test]
    fn page_count_is_capped_by_the_ordinal_names() {
        let list: Vec<String> = (0..PAGE_SIZE * ORDINALS.len())
            .map(|i| format!("g{:04}", i))
            .collect();
        let err = paginate(&list).unwrap_err();
        assert!(matches!(err, FatexError::TooManyPages { .. }));
    }
}

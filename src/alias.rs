//! Flattens the alias chains scraped from the stylesheet.

use crate::error::FatexError;
use std::collections::{BTreeMap, HashSet};

/// Follow every alias chain to its terminal name, so each key maps straight
/// to a canonical (non-alias) class name.
///
/// Chains of any depth are walked iteratively; a chain that revisits a name
/// is a cycle and a fatal error. A chain whose terminal name is not among
/// `defined` (the stylesheet's glyph classes) is dropped without comment.
/// The result contains no key as a value, so resolving it again is a no-op.
pub fn resolve(
    edges: &BTreeMap<String, String>,
    defined: &HashSet<String>,
) -> Result<BTreeMap<String, String>, FatexError> {
    let mut resolved = BTreeMap::new();
    for (alias, first) in edges {
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(alias);
        let mut target = first;
        while let Some(next) = edges.get(target) {
            if !seen.insert(target) {
                return Err(FatexError::AliasCycle {
                    alias: alias.clone(),
                });
            }
            target = next;
        }
        if defined.contains(target) {
            resolved.insert(alias.clone(), target.clone());
        } else {
            log::debug!("Dropping alias {} => {}: no such glyph", alias, target);
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edges(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    fn defined(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn single_hop() {
        let resolved = resolve(&edges(&[("group", "users")]), &defined(&["users"])).unwrap();
        assert_eq!(resolved, edges(&[("group", "users")]));
    }

    #[test]
    fn chains_flatten_to_the_terminal_name() {
        let resolved = resolve(
            &edges(&[("remove", "close"), ("close", "times")]),
            &defined(&["times"]),
        )
        .unwrap();
        assert_eq!(
            resolved,
            edges(&[("remove", "times"), ("close", "times")])
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let names = defined(&["e"]);
        let once = resolve(
            &edges(&[("a", "b"), ("b", "c"), ("c", "e")]),
            &names,
        )
        .unwrap();
        let twice = resolve(&once, &names).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn chain_to_an_undefined_name_is_dropped() {
        let resolved = resolve(
            &edges(&[("a", "b"), ("b", "ghost"), ("ok", "check")]),
            &defined(&["check"]),
        )
        .unwrap();
        assert_eq!(resolved, edges(&[("ok", "check")]));
    }

    #[test]
    fn cycle_is_an_error_not_a_hang() {
        let err = resolve(
            &edges(&[("a", "b"), ("b", "c"), ("c", "a")]),
            &defined(&[]),
        )
        .unwrap_err();
        assert!(matches!(err, FatexError::AliasCycle { .. }));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let err = resolve(&edges(&[("a", "a")]), &defined(&["a"])).unwrap_err();
        assert!(matches!(err, FatexError::AliasCycle { alias } if alias == "a"));
    }

    #[test]
    fn empty_input() {
        assert!(resolve(&BTreeMap::new(), &defined(&[])).unwrap().is_empty());
    }
}

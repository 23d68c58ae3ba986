//! Free-text name resolution against a candidate set.
//!
//! Used identically for workspace names and script names: an unambiguous
//! match resolves without prompting, anything else falls back to the
//! interactive selector.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;
use wsr_core::error::Result;

use crate::selection::{select_from_list, Selection};

/// Resolves free-text input against a candidate set.
///
/// A single-element candidate set short-circuits without matching or
/// prompting. Non-empty input takes the top fuzzy match when one exists;
/// otherwise (or with no input at all) the interactive selector is shown,
/// seeded with the full candidate set.
///
/// # Errors
///
/// Returns an error if the interactive selector fails on terminal IO.
pub fn resolve(input: Option<&str>, candidates: &[String], label: &str) -> Result<Selection> {
    if let [only] = candidates {
        debug!("Single candidate, skipping {label} resolution");
        println!("Found {label}: {only}");
        return Ok(Selection::Chosen(only.clone()));
    }

    if let Some(input) = input.filter(|input| !input.is_empty()) {
        if let Some(found) = top_match(input, candidates) {
            println!("Found {label}: {found}");
            return Ok(Selection::Chosen(found));
        }

        println!("Could not find a {label} matching `{input}`, please select one from the list below:");
    }

    select_from_list(label, candidates)
}

/// The best-scoring fuzzy match for `input`, or `None` when nothing
/// matches. Ties keep the earliest candidate.
#[must_use]
pub fn top_match(input: &str, candidates: &[String]) -> Option<String> {
    let matcher = SkimMatcherV2::default();

    let mut best: Option<(i64, &String)> = None;
    for candidate in candidates {
        if let Some(score) = matcher.fuzzy_match(candidate, input) {
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, candidate));
            }
        }
    }

    best.map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_top_match_exact() {
        let names = candidates(&["api", "web", "shared"]);
        assert_eq!(top_match("api", &names), Some("api".to_string()));
    }

    #[test]
    fn test_top_match_partial() {
        let names = candidates(&["frontend", "backend", "shared"]);
        assert_eq!(top_match("bck", &names), Some("backend".to_string()));
    }

    #[test]
    fn test_top_match_none() {
        let names = candidates(&["api", "web"]);
        assert_eq!(top_match("zzz", &names), None);
    }

    #[test]
    fn test_top_match_prefers_better_score() {
        // An exact name should outrank a name that merely contains the
        // letters somewhere
        let names = candidates(&["web-e2e-tests", "web"]);
        assert_eq!(top_match("web", &names), Some("web".to_string()));
    }

    #[test]
    fn test_resolve_single_candidate_shortcut() {
        // No terminal interaction may happen here, for any input
        let names = candidates(&["api"]);

        let resolved = resolve(Some("whatever"), &names, "Workspace").unwrap();
        assert_eq!(resolved, Selection::Chosen("api".to_string()));

        let resolved = resolve(None, &names, "Workspace").unwrap();
        assert_eq!(resolved, Selection::Chosen("api".to_string()));
    }

    #[test]
    fn test_resolve_exact_match_is_non_interactive() {
        let names = candidates(&["api", "web", "shared"]);

        let resolved = resolve(Some("web"), &names, "Workspace").unwrap();
        assert_eq!(resolved, Selection::Chosen("web".to_string()));
    }

    #[test]
    fn test_resolve_fuzzy_match_is_non_interactive() {
        let names = candidates(&["frontend", "backend"]);

        let resolved = resolve(Some("front"), &names, "Workspace").unwrap();
        assert_eq!(resolved, Selection::Chosen("frontend".to_string()));
    }
}

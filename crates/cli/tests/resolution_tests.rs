#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use wsr_cli::arguments::disambiguate;
    use wsr_cli::resolver::resolve;
    use wsr_cli::selection::Selection;
    use wsr_core::compose::compose;
    use wsr_core::history::HistoryStore;
    use wsr_core::workspace::parse_catalog;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_fuzzy_input_to_composite_command() {
        let listing = r#"{"location":"packages/api","name":"api"}
{"location":"packages/web","name":"web"}"#;
        let catalog = parse_catalog(listing).unwrap();

        let input = disambiguate(Some("ap".to_string()), names(&["test"]), catalog.len());
        assert_eq!(input.workspace_candidate, Some("ap".to_string()));

        let workspace_names: Vec<String> = catalog.keys().cloned().collect();
        let resolved = resolve(
            input.workspace_candidate.as_deref(),
            &workspace_names,
            "Workspace",
        )
        .unwrap();
        assert_eq!(resolved, Selection::Chosen("api".to_string()));

        let composite = compose("api", &input.command_tokens.join(" "));
        assert_eq!(composite, "yarn workspace api test");
    }

    #[test]
    fn test_single_workspace_positional_becomes_command() {
        let listing = r#"{"location":"packages/only","name":"only"}"#;
        let catalog = parse_catalog(listing).unwrap();

        // `wsr build` in a single-workspace repo: `build` is the command
        let input = disambiguate(Some("build".to_string()), vec![], catalog.len());
        assert!(input.workspace_candidate.is_none());
        assert_eq!(input.command_tokens, names(&["build"]));

        let workspace_names: Vec<String> = catalog.keys().cloned().collect();
        let resolved = resolve(None, &workspace_names, "Workspace").unwrap();
        assert_eq!(resolved, Selection::Chosen("only".to_string()));

        let composite = compose("only", &input.command_tokens.join(" "));
        assert_eq!(composite, "yarn workspace only build");
    }

    #[test]
    fn test_replayed_entries_bubble_to_most_recent() {
        let dir = TempDir::new().unwrap();
        let history = HistoryStore::new(&dir.path().join("wsr"));

        history.append("yarn workspace api build").unwrap();
        history.append("yarn workspace web test").unwrap();

        // Pick the older entry from the browse view and replay it
        let browsed = history.browse().unwrap();
        assert_eq!(
            browsed,
            names(&["yarn workspace web test", "yarn workspace api build"])
        );
        history.append(&browsed[1]).unwrap();

        assert_eq!(
            history.most_recent().unwrap(),
            Some("yarn workspace api build".to_string())
        );
        assert_eq!(
            history.browse().unwrap(),
            names(&["yarn workspace api build", "yarn workspace web test"])
        );
    }
}

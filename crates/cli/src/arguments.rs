//! Positional-argument disambiguation.
//!
//! The first positional argument is ambiguous: in a multi-workspace
//! repository it names the workspace, but with exactly one workspace there
//! is nothing to resolve and it is really the start of the command. That
//! heuristic lives here, in one function producing one intermediate
//! result, so no other call site re-implements it.

use log::debug;

/// The disambiguated reading of the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Free-text candidate for the workspace name, if any.
    pub workspace_candidate: Option<String>,
    /// Tokens of the command to run, possibly empty.
    pub command_tokens: Vec<String>,
}

/// Splits the positionals into a workspace-name candidate and command
/// tokens, given how many workspaces the catalog holds.
#[must_use]
pub fn disambiguate(
    workspace_arg: Option<String>,
    command_args: Vec<String>,
    catalog_len: usize,
) -> ResolvedInput {
    match workspace_arg {
        Some(first) if catalog_len == 1 => {
            debug!("Single workspace, treating `{first}` as the start of the command");
            let mut command_tokens = vec![first];
            command_tokens.extend(command_args);
            ResolvedInput {
                workspace_candidate: None,
                command_tokens,
            }
        }
        workspace_candidate => ResolvedInput {
            workspace_candidate,
            command_tokens: command_args,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_multi_workspace_first_positional_is_name() {
        let input = disambiguate(Some("api".to_string()), strings(&["test"]), 3);

        assert_eq!(input.workspace_candidate, Some("api".to_string()));
        assert_eq!(input.command_tokens, strings(&["test"]));
    }

    #[test]
    fn test_single_workspace_first_positional_is_command() {
        let input = disambiguate(Some("test".to_string()), vec![], 1);

        assert!(input.workspace_candidate.is_none());
        assert_eq!(input.command_tokens, strings(&["test"]));
    }

    #[test]
    fn test_single_workspace_prepends_to_command_tokens() {
        let input = disambiguate(Some("jest".to_string()), strings(&["--watch"]), 1);

        assert!(input.workspace_candidate.is_none());
        assert_eq!(input.command_tokens, strings(&["jest", "--watch"]));
    }

    #[test]
    fn test_no_positionals() {
        let input = disambiguate(None, vec![], 5);

        assert!(input.workspace_candidate.is_none());
        assert!(input.command_tokens.is_empty());
    }

    #[test]
    fn test_single_workspace_without_positionals() {
        let input = disambiguate(None, vec![], 1);

        assert!(input.workspace_candidate.is_none());
        assert!(input.command_tokens.is_empty());
    }
}

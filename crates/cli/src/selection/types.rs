//! Type definitions for the selection prompts.

/// Outcome of an interactive (or short-circuited) selection.
///
/// Cancelling a prompt terminates the whole invocation, so `Quit` is
/// propagated up to `main` rather than handled locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(String),
    Quit,
}

/// Direction to move the highlighted row in the selection prompt.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

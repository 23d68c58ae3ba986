//! Interactive selection and user input handling.
//!
//! This module provides the terminal-based prompts for wsr: the
//! incrementally-filterable candidate list and the free-form command
//! prompt behind the `run` sentinel.
//!
//! # User Interface
//!
//! The list prompt supports:
//! - Typing to filter candidates (fuzzy search, re-ranked per keystroke)
//! - Arrow key navigation
//! - Enter to select the highlighted candidate
//! - Escape or Ctrl-C to cancel, which ends the whole program

// Export public items from submodules
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::prompt_free_form;
pub use types::Selection;
pub use ui::select_from_list;

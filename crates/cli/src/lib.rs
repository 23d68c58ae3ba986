//! WSR CLI Library
//!
//! This crate provides the command-line interface for wsr, an interactive
//! runner for package scripts in a yarn workspace monorepo. It handles
//! argument parsing, workspace/script name resolution and the interactive
//! selection prompts.
//!
//! # Key Features
//!
//! - **Fuzzy Name Resolution**: Partial or misspelled workspace and script
//!   names resolve to the best match without prompting
//! - **Interactive Selection**: An incrementally-filterable list prompt for
//!   whenever input is missing or unmatched
//! - **Positional Disambiguation**: With a single-workspace repository the
//!   first positional argument is treated as the command, not a name
//! - **Replay**: Last command, most recent history entry, deduplicated
//!   history browsing and last-workspace reuse
//!
//! # Architecture
//!
//! The CLI is organized into several key modules:
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`arguments`]: Positional-argument disambiguation
//! - [`resolver`]: Fuzzy matching with interactive fallback
//! - [`selection`]: Interactive list selection and free-form input
//!
//! # Examples
//!
//! The CLI binary (`wsr`) can be used in several ways:
//!
//! ```bash
//! # Fully interactive - pick a workspace, then a script
//! wsr
//!
//! # Fuzzy workspace name, interactive script selection
//! wsr api
//!
//! # Fuzzy workspace name and explicit command
//! wsr api test --watch
//!
//! # Replay the most recent history entry
//! wsr --re-run
//!
//! # Browse the deduplicated history and re-run an entry
//! wsr --command-history
//! ```

pub mod arguments;
pub mod cli_args;
pub mod resolver;
pub mod selection;

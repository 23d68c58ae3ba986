//! WSR Core Library
//!
//! This crate provides the core functionality for wsr, a command-line helper
//! for running package scripts inside a yarn workspace monorepo. It covers
//! workspace discovery, manifest script listing, command composition,
//! history/state persistence and child process execution.
//!
//! # Key Features
//!
//! - **Workspace Catalog**: Discover the repository's workspaces via the
//!   package manager and map names to locations
//! - **Script Catalog**: List a workspace's invocable scripts from its
//!   manifest, with the free-form `run` sentinel always offered first
//! - **Command History**: Append-only per-project log of executed commands
//! - **Last Command/Workspace State**: Single-value files for quick replay
//! - **Execution**: Run the composed command through the user's shell with
//!   inherited standard streams
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Loading the workspace catalog:
//!
//! ```no_run
//! use wsr_core::workspace::load_catalog;
//!
//! let catalog = load_catalog()?;
//! for (name, location) in &catalog {
//!     println!("{name} -> {location}");
//! }
//! # Ok::<(), wsr_core::error::Error>(())
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod execution;
pub mod history;
pub mod manifest;
pub mod state;
pub mod workspace;

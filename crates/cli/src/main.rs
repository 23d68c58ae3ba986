use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};

use wsr_cli::arguments::{disambiguate, ResolvedInput};
use wsr_cli::cli_args::Args;
use wsr_cli::resolver;
use wsr_cli::selection::{prompt_free_form, select_from_list, Selection};
use wsr_core::error::{Error, Result};
use wsr_core::history::HistoryStore;
use wsr_core::manifest::RUN_SENTINEL;
use wsr_core::state::StateStore;
use wsr_core::workspace::Catalog;
use wsr_core::{compose, config, execution, manifest, workspace};

/// Outcome of the replay short-circuits (`-l`, `-r`, `-c`).
enum Replay {
    /// A composite command to execute as-is.
    Command(String),
    /// The user cancelled an interactive replay prompt.
    Cancelled,
    /// No usable state; degrade to the normal resolution pipeline.
    NoState,
}

fn replay_request_is_valid(args: &Args) -> Result<bool> {
    if !args.replay_requested() {
        return Ok(false);
    }

    if args.workspace_name.is_some() {
        // Can't replay if a workspace/command is specified, doesn't make sense
        return Err(Error::ReplayWithArguments);
    }

    Ok(true)
}

/// Find the composite command a replay flag refers to, if it exists.
fn find_replay_command(args: &Args, history: &HistoryStore, state: &StateStore) -> Result<Replay> {
    if args.last_command {
        return Ok(match state.last_command()? {
            Some(command) => Replay::Command(command),
            None => {
                warn!("Last command replay was specified, but there is no previous command!");
                Replay::NoState
            }
        });
    }

    if args.re_run {
        return Ok(match history.most_recent()? {
            Some(command) => Replay::Command(command),
            None => {
                warn!("Re-run was specified, but the command history is empty!");
                Replay::NoState
            }
        });
    }

    // -c / --command-history
    let entries = history.browse()?;
    if entries.is_empty() {
        warn!("History browsing was specified, but the command history is empty!");
        return Ok(Replay::NoState);
    }

    Ok(match select_from_list("History", &entries)? {
        Selection::Chosen(entry) => Replay::Command(entry),
        Selection::Quit => Replay::Cancelled,
    })
}

/// Reuse the previously selected workspace when `-w` asks for it and the
/// saved name still exists in the catalog.
fn reuse_workspace(args: &Args, state: &StateStore, catalog: &Catalog) -> Result<Option<String>> {
    if !args.reuse_workspace {
        return Ok(None);
    }

    match state.last_workspace()? {
        Some(name) if catalog.contains_key(&name) => {
            println!("Reusing workspace: {name}");
            Ok(Some(name))
        }
        Some(name) => {
            warn!("Previous workspace `{name}` is not in the catalog any more!");
            Ok(None)
        }
        None => {
            warn!("Reuse workspace was specified, but there is no previous workspace!");
            Ok(None)
        }
    }
}

/// Resolve the command to run: explicit tokens win, otherwise the
/// workspace's scripts are offered, with the sentinel prompting for
/// free-form text. `None` means the user cancelled.
fn resolve_command(input: &ResolvedInput, location: &str) -> Result<Option<String>> {
    if !input.command_tokens.is_empty() {
        return Ok(Some(input.command_tokens.join(" ")));
    }

    let scripts = manifest::load_scripts(location)?;

    let script = match resolver::resolve(None, &scripts, "Script")? {
        Selection::Chosen(script) => script,
        Selection::Quit => return Ok(None),
    };

    if script == RUN_SENTINEL {
        return Ok(Some(prompt_free_form()?));
    }

    Ok(Some(script))
}

/// Print, record and execute a composite command. Recording happens first
/// so an interactive child that never returns cleanly still leaves a trace.
fn run_composite(composite: &str, history: &HistoryStore) -> Result<()> {
    println!("Running: {composite}");
    history.append(composite)?;
    execution::execute_composite(composite)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    workspace::verify_package_manager()?;

    let state_dir = config::get_state_dir(&args.state_dir);
    let history = HistoryStore::new(&state_dir);
    let state = StateStore::new(&state_dir);

    if replay_request_is_valid(&args)? {
        match find_replay_command(&args, &history, &state)? {
            Replay::Command(composite) => return run_composite(&composite, &history),
            Replay::Cancelled => return Ok(()),
            Replay::NoState => {} // fall through to normal resolution
        }
    }

    let catalog = workspace::load_catalog()?;
    if catalog.is_empty() {
        return Err(Error::Misc(
            "No workspaces were found in this repository.".to_string(),
        ));
    }
    debug!("Catalog has {} workspaces", catalog.len());

    let mut input = disambiguate(args.workspace_name.clone(), args.command.clone(), catalog.len());

    let workspace_name = if let Some(name) = reuse_workspace(&args, &state, &catalog)? {
        // The positional that would have named a workspace belongs to the
        // command when the workspace comes from saved state
        if let Some(candidate) = input.workspace_candidate.take() {
            input.command_tokens.insert(0, candidate);
        }
        name
    } else {
        let names: Vec<String> = catalog.keys().cloned().collect();
        match resolver::resolve(input.workspace_candidate.as_deref(), &names, "Workspace")? {
            Selection::Chosen(name) => name,
            Selection::Quit => return Ok(()),
        }
    };

    let location = catalog.get(&workspace_name).ok_or_else(|| {
        Error::Misc(format!("Workspace `{workspace_name}` has no known location."))
    })?;

    let command = match resolve_command(&input, location)? {
        Some(command) => command,
        None => return Ok(()),
    };

    let composite = compose::compose(&workspace_name, &command);

    state.write_last_workspace(&workspace_name)?;
    state.write_last_command(&composite)?;

    run_composite(&composite, &history)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::SubProcessExit(code)) => {
            // Mirror the child's exit code instead of swallowing it
            match code.and_then(|code| u8::try_from(code).ok()) {
                Some(code) => ExitCode::from(code),
                None => ExitCode::FAILURE,
            }
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

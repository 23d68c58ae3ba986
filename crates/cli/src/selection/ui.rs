use std::io::{stdout, Write};

use crossterm::cursor::{MoveToColumn, MoveToNextLine, MoveUp};
use crossterm::event::{Event, KeyCode, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{event, queue};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use wsr_core::error::Result;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, Selection};

/// How many candidate rows to show below the filter line
const MAX_VISIBLE_ROWS: usize = 10;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

/// Prompts the user to choose one candidate from the list.
///
/// The prompt renders inline (no alternate screen): a bold filter line
/// followed by the ranked candidates. Every keystroke re-ranks the list
/// with the same fuzzy matcher used for non-interactive resolution.
///
/// # Errors
///
/// Returns an error on terminal IO failure.
pub fn select_from_list(label: &str, candidates: &[String]) -> Result<Selection> {
    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

    let mut filter_text = String::new();
    let mut selected_index: usize = 0;
    let mut drawn_rows: u16 = 0;

    loop {
        let ranked = rank_candidates(candidates, &filter_text);
        let visible_len = ranked.len().min(MAX_VISIBLE_ROWS);
        if selected_index >= visible_len {
            selected_index = visible_len.saturating_sub(1);
        }

        drawn_rows = redraw(label, &filter_text, &ranked, selected_index, drawn_rows)?;

        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    clear_prompt(drawn_rows)?;
                    return Ok(Selection::Quit);
                }
                KeyCode::Esc => {
                    clear_prompt(drawn_rows)?;
                    return Ok(Selection::Quit);
                }
                KeyCode::Enter => {
                    if let Some(choice) = ranked.get(selected_index) {
                        clear_prompt(drawn_rows)?;
                        return Ok(Selection::Chosen(choice.clone()));
                    }
                    // Nothing matches the filter; keep waiting for input
                }
                KeyCode::Up => {
                    selected_index = move_selected_index(selected_index, visible_len, Up);
                }
                KeyCode::Down => {
                    selected_index = move_selected_index(selected_index, visible_len, Down);
                }
                KeyCode::Backspace => {
                    filter_text.pop();
                    selected_index = 0;
                }
                KeyCode::Char(c) => {
                    filter_text.push(c);
                    selected_index = 0;
                }
                _ => {}
            }
        }
    }
}

/// Ranks candidates against the filter text, best score first.
///
/// An empty filter keeps the original candidate order; ties keep it too,
/// because the sort is stable.
pub fn rank_candidates(candidates: &[String], filter_text: &str) -> Vec<String> {
    if filter_text.is_empty() {
        return candidates.to_vec();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &String)> = candidates
        .iter()
        .filter_map(|candidate| {
            matcher
                .fuzzy_match(candidate, filter_text)
                .map(|score| (score, candidate))
        })
        .collect();

    scored.sort_by(|(score_a, _), (score_b, _)| score_b.cmp(score_a));

    scored
        .into_iter()
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

/// Move the highlighted row in the given direction, wrapping around
fn move_selected_index(
    selected_index: usize,
    visible_len: usize,
    direction: CycleDirection,
) -> usize {
    if visible_len == 0 {
        return 0;
    }

    match direction {
        Up => {
            if selected_index == 0 {
                visible_len - 1
            } else {
                selected_index - 1
            }
        }
        Down => (selected_index + 1) % visible_len,
    }
}

fn redraw(
    label: &str,
    filter_text: &str,
    ranked: &[String],
    selected_index: usize,
    previously_drawn: u16,
) -> Result<u16> {
    let mut stdout = stdout();

    if previously_drawn > 0 {
        queue!(stdout, MoveUp(previously_drawn), MoveToColumn(0))?;
    }
    queue!(stdout, Clear(ClearType::FromCursorDown))?;

    queue!(
        stdout,
        SetAttribute(Attribute::Bold),
        Print(format!("{label}: {filter_text}")),
        SetAttribute(Attribute::Reset),
        MoveToNextLine(1),
    )?;
    let mut rows: u16 = 1;

    if ranked.is_empty() {
        queue!(
            stdout,
            SetForegroundColor(Color::Red),
            Print("No matches!".to_string()),
            SetForegroundColor(Color::Reset),
            MoveToNextLine(1),
        )?;
        rows += 1;
    }

    for (i, candidate) in ranked.iter().take(MAX_VISIBLE_ROWS).enumerate() {
        if i == selected_index {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::DarkGreen),
                Print(format!("> {candidate}")),
                SetAttribute(Attribute::Reset),
                SetForegroundColor(Color::Reset),
            )?;
        } else {
            queue!(stdout, Print(format!("  {candidate}")))?;
        }
        queue!(stdout, MoveToNextLine(1))?;
        rows += 1;
    }

    stdout.flush()?;
    Ok(rows)
}

fn clear_prompt(drawn_rows: u16) -> Result<()> {
    let mut stdout = stdout();

    if drawn_rows > 0 {
        queue!(stdout, MoveUp(drawn_rows), MoveToColumn(0))?;
    }
    queue!(stdout, Clear(ClearType::FromCursorDown))?;
    stdout.flush()?;

    Ok(())
}

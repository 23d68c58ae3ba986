use std::io::{stdin, stdout, Write};

use wsr_core::error::Result;

/// Prompts for the free-form command behind the `run` sentinel.
///
/// An empty command would compose to nothing runnable, so the prompt
/// repeats until something is typed.
///
/// # Errors
///
/// Returns an error on stdin/stdout failure.
pub fn prompt_free_form() -> Result<String> {
    loop {
        print!("Run: ");
        stdout().flush()?;

        let mut input = String::new();
        stdin().read_line(&mut input)?;
        let read_value = input.trim().to_string();

        if !read_value.is_empty() {
            return Ok(read_value);
        }
    }
}

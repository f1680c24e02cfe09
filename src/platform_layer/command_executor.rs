/*
 * This module is responsible for executing specific `PlatformCommand`s on a
 * terminal. Each function takes the console streams and the command-specific
 * parameters. Commands that ask the user something return the resulting
 * `AppEvent`, which the caller feeds back into the application logic.
 */

use super::error::Result as PlatformResult;
use super::types::{AppEvent, MessageSeverity};
use std::io::{BufRead, Write};
use std::path::Path;

/*
 * Reads one line from `input` with the trailing newline removed.
 * Returns `None` once the input is exhausted.
 */
pub(crate) fn read_trimmed_line<R: BufRead>(input: &mut R) -> PlatformResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

// Prints the result rows numbered from 1, the way a user later refers to them.
pub(crate) fn execute_show_search_results<W: Write>(
    output: &mut W,
    items: &[String],
) -> PlatformResult<()> {
    log::debug!("CommandExecutor: Showing {} result rows.", items.len());
    writeln!(output)?;
    for (i, item) in items.iter().enumerate() {
        writeln!(output, "{:>4}. {}", i + 1, item)?;
    }
    writeln!(output)?;
    Ok(())
}

pub(crate) fn execute_clear_results<W: Write>(output: &mut W) -> PlatformResult<()> {
    log::trace!("CommandExecutor: Clearing result rows.");
    output.flush()?;
    Ok(())
}

/*
 * Executes the `ShowMessageBox` command.
 * Logging of the message content is centralized here, at the level matching its severity.
 */
pub(crate) fn execute_show_message_box<W: Write>(
    output: &mut W,
    title: &str,
    message: &str,
    severity: MessageSeverity,
) -> PlatformResult<()> {
    match severity {
        MessageSeverity::Error => log::error!("Platform MessageBox ({title}): {message}"),
        MessageSeverity::Warning => log::warn!("Platform MessageBox ({title}): {message}"),
        MessageSeverity::Information => log::info!("Platform MessageBox ({title}): {message}"),
    }
    let marker = match severity {
        MessageSeverity::Error => "[error] ",
        MessageSeverity::Warning => "[warning] ",
        MessageSeverity::Information => "",
    };
    writeln!(output, "{marker}{title}: {message}")?;
    Ok(())
}

pub(crate) fn execute_update_status_text<W: Write>(
    output: &mut W,
    text: &str,
) -> PlatformResult<()> {
    log::debug!("CommandExecutor: Status text '{text}'");
    writeln!(output, "{text}")?;
    Ok(())
}

/*
 * Executes the `ShowOpenConfirmation` command.
 * Asks an OK/Cancel question on the terminal. Only an answer starting with 'y'
 * (either case) accepts; an empty answer or closed input declines. With
 * `auto_confirm` the question is printed but accepted without reading input.
 */
pub(crate) fn execute_show_open_confirmation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    path: &Path,
    display_name: &str,
    auto_confirm: bool,
) -> PlatformResult<AppEvent> {
    write!(
        output,
        "Open File: Do you want to open the file for order code:\n\n{display_name}?\n[y/N] "
    )?;
    let confirmed = if auto_confirm {
        writeln!(output, "y")?;
        true
    } else {
        output.flush()?;
        match read_trimmed_line(input)? {
            Some(answer) => answer.trim().to_ascii_lowercase().starts_with('y'),
            None => {
                writeln!(output)?;
                false
            }
        }
    };
    log::debug!("CommandExecutor: Open confirmation for {path:?}: {confirmed}");
    Ok(AppEvent::OpenConfirmationCompleted {
        path: path.to_path_buf(),
        confirmed,
    })
}

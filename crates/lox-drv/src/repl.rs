//! Interactive prompt.
//!
//! Each line is scanned on its own, so line numbers restart at 1. Errors
//! are reported and the prompt carries on.

use std::io::Write;

use lox_util::Handler;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::{report_diagnostics, run_source};

/// Runs the prompt until end of input (Ctrl-D) or interrupt (Ctrl-C).
pub fn run_prompt(config: &Config) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                record_history(&mut editor, &line, config)?;
                scan_line(&line, config, &mut stdout.lock(), &mut stderr.lock())?;
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("prompt closed");
                break;
            },
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Adds a non-blank line to the in-memory history when history is enabled.
fn record_history(editor: &mut DefaultEditor, line: &str, config: &Config) -> Result<()> {
    if config.history && !line.trim().is_empty() {
        let added = editor.add_history_entry(line)?;
        debug!(added, "history entry");
    }
    Ok(())
}

/// Scans one prompt line and reports its errors. Returns true if it had any.
pub fn scan_line<W: Write, E: Write>(
    line: &str,
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    let handler = Handler::new();
    run_source(line, config, out, &handler)?;
    report_diagnostics(&handler, err)?;
    Ok(handler.has_errors())
}

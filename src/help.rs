//! Embedded manual for the `help` command.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::error::{AppError, Result};

const MANUAL_ROFF: &str = include_str!("../doc/redmine-instances.1");
const MANUAL_TEXT: &str = include_str!("../doc/redmine-instances.txt");

/// Show the manual. On an interactive terminal it is formatted and paged
/// by `man`; otherwise, or when `man` is unavailable, the plain-text
/// version is written to `out`.
pub fn show_help(out: &mut dyn Write, interactive: bool) -> Result<()> {
    if interactive && page_manual()? {
        return Ok(());
    }
    out.write_all(MANUAL_TEXT.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Returns `false` when `man` could not be started.
fn page_manual() -> Result<bool> {
    let mut child = match Command::new("man")
        .args(["-l", "-"])
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            log::warn!("Cannot run man ({}), printing plain text manual", e);
            return Ok(false);
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        // The pager may be closed before reading everything.
        match stdin.write_all(MANUAL_ROFF.as_bytes()) {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                return Err(AppError::process(format!("failed to feed manual to man: {}", e)));
            }
            _ => {}
        }
    }

    let status = child
        .wait()
        .map_err(|e| AppError::process(format!("failed to wait for man: {}", e)))?;
    if !status.success() {
        return Err(AppError::process(format!("man exited with {}", status)));
    }
    Ok(true)
}

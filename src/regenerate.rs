//! Running the external update command.

use crate::config::UpdateCommand;
use crate::error::{ManagerError, Result};
use std::process::{Command, Stdio};

/// Runs `command` to completion.
///
/// There is no timeout: a hung command hangs the caller.
///
/// # Errors
///
/// Returns [`ManagerError::Spawn`] if the command cannot be started and
/// [`ManagerError::Regenerate`] with the combined stdout and stderr if it exits
/// unsuccessfully.
pub fn regenerate(command: &UpdateCommand) -> Result<()> {
    tracing::debug!(command = %command, "Regenerating resolv.conf");

    let output = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ManagerError::Spawn {
            command: command.to_string(),
            source,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(ManagerError::Regenerate {
            command: command.to_string(),
            status: output.status,
            output: combined,
        });
    }

    if !combined.is_empty() {
        tracing::debug!(output = %combined.trim_end(), "Update command output");
    }
    tracing::info!(command = %command, "Regenerated resolv.conf");
    Ok(())
}

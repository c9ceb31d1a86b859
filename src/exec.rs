use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// Resolves `bin` the way a shell would: paths with a separator are taken
/// as-is, bare names are looked up in `PATH`.
pub(crate) fn find_in_path(bin: &str) -> Option<PathBuf> {
    let candidate = PathBuf::from(bin);
    if candidate.components().count() > 1 {
        return candidate.is_file().then_some(candidate);
    }
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(bin))
        .find(|p| p.is_file())
}

pub(crate) fn run_with_stdin(mut cmd: Command, input: &str) -> Result<()> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("Failed to spawn command")?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait().context("Failed to wait for command")?;
    written.context("Failed to write command stdin")?;
    if status.success() {
        Ok(())
    } else {
        bail!("Command failed with status: {status}");
    }
}

pub(crate) fn can_prompt() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

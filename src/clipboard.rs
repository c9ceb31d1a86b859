use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};

use crate::config::{ClipboardBackend, ClipboardConfig};
use crate::exec;

/// Copy commands tried in order when no command is configured.
const DEFAULT_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip.exe"],
];

pub(crate) trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard through `arboard`.
pub(crate) struct NativeClipboard;

impl Clipboard for NativeClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut ctx = arboard::Clipboard::new().context("clipboard init failed")?;
        ctx.set_text(text.to_owned())
            .context("clipboard set failed")?;
        Ok(())
    }
}

/// Pipes the text into the first available copy command.
pub(crate) struct CommandClipboard {
    candidates: Vec<Vec<String>>,
}

impl CommandClipboard {
    pub(crate) fn new(candidates: Vec<Vec<String>>) -> Self {
        Self { candidates }
    }

    pub(crate) fn platform_default() -> Self {
        Self::new(
            DEFAULT_COMMANDS
                .iter()
                .map(|argv| argv.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }
}

impl Clipboard for CommandClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        for argv in &self.candidates {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };
            let Some(path) = exec::find_in_path(program) else {
                continue;
            };
            let mut cmd = Command::new(path);
            cmd.args(args);
            return exec::run_with_stdin(cmd, text)
                .with_context(|| format!("`{program}` failed"));
        }
        bail!("no clipboard command found in PATH");
    }
}

/// Tries `primary`, then `secondary`.
pub(crate) struct FallbackClipboard {
    primary: Box<dyn Clipboard>,
    secondary: Box<dyn Clipboard>,
}

impl FallbackClipboard {
    pub(crate) fn new(primary: Box<dyn Clipboard>, secondary: Box<dyn Clipboard>) -> Self {
        Self { primary, secondary }
    }
}

impl Clipboard for FallbackClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let first = match self.primary.set_text(text) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        self.secondary
            .set_text(text)
            .map_err(|second| anyhow!("{first:#}; fallback: {second:#}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    Native,
    Command,
}

/// Strategy order for the `auto` backend, primary first.
///
/// X11 and Wayland drop the selection once its owner exits, so on Linux the
/// copy tools (which keep serving it in the background) go first.
pub(crate) fn auto_order() -> [Strategy; 2] {
    if cfg!(target_os = "linux") {
        [Strategy::Command, Strategy::Native]
    } else {
        [Strategy::Native, Strategy::Command]
    }
}

fn build(strategy: Strategy, config: &ClipboardConfig) -> Box<dyn Clipboard> {
    match strategy {
        Strategy::Native => Box::new(NativeClipboard),
        Strategy::Command => match &config.command {
            Some(argv) => Box::new(CommandClipboard::new(vec![argv.clone()])),
            None => Box::new(CommandClipboard::platform_default()),
        },
    }
}

pub(crate) fn from_config(config: &ClipboardConfig) -> Box<dyn Clipboard> {
    match config.backend {
        ClipboardBackend::Native => build(Strategy::Native, config),
        ClipboardBackend::Command => build(Strategy::Command, config),
        ClipboardBackend::Auto => {
            let [primary, secondary] = auto_order();
            Box::new(FallbackClipboard::new(
                build(primary, config),
                build(secondary, config),
            ))
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CopyOutcome {
    /// Nothing to copy.
    Skipped,
    Copied,
    Failed(String),
}

pub(crate) fn copy_to_clipboard(clipboard: &mut dyn Clipboard, text: &str) -> CopyOutcome {
    if text.is_empty() {
        return CopyOutcome::Skipped;
    }
    match clipboard.set_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => CopyOutcome::Failed(format!("{e:#}")),
    }
}

use std::fmt;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use dialoguer::console::Style;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme as PromptTheme};
use serde::{Deserialize, Serialize};

use bn_cli::render::Tone;

use crate::config::bn_home_dir;

const THEME_FILE: &str = "theme.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub(crate) fn parse(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => bail!("Unknown theme: {other} (expected light or dark)"),
        }
    }

    pub(crate) fn prompt_theme(self) -> Box<dyn PromptTheme> {
        match self {
            Theme::Light => Box::new(SimpleTheme),
            Theme::Dark => Box::new(ColorfulTheme::default()),
        }
    }

    pub(crate) fn style(self, tone: Tone) -> Style {
        match (self, tone) {
            (_, Tone::Plain) => Style::new(),
            (Theme::Light, Tone::Error) => Style::new().for_stderr().bold(),
            (Theme::Light, _) => Style::new(),
            (Theme::Dark, Tone::Success) => Style::new().green(),
            (Theme::Dark, Tone::Warning) => Style::new().yellow(),
            (Theme::Dark, Tone::Error) => Style::new().for_stderr().red().bold(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

pub(crate) trait ThemeStore {
    fn load(&self) -> Result<Option<Theme>>;
    fn save(&mut self, theme: Theme) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub(crate) struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn default_location() -> Result<Self> {
        let home = bn_home_dir().ok_or_else(|| anyhow!("HOME is not set; cannot use $HOME/.bn"))?;
        Ok(Self::new(home.join(THEME_FILE)))
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let file: ThemeFile = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(file.theme))
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(&ThemeFile { theme })? + "\n";
        std::fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Stored preference, or `light` when absent or unreadable.
pub(crate) fn current_theme(store: &dyn ThemeStore) -> Theme {
    match store.load() {
        Ok(theme) => theme.unwrap_or_default(),
        Err(e) => {
            eprintln!("Warning: failed to read theme preference: {e:#}");
            Theme::default()
        }
    }
}

/// Persists `theme`; a failed write still leaves it in effect for this run.
pub(crate) fn apply_theme(store: &mut dyn ThemeStore, theme: Theme) -> Theme {
    if let Err(e) = store.save(theme) {
        eprintln!("Warning: failed to save theme preference: {e:#}");
    }
    theme
}

pub(crate) fn toggle_theme(store: &mut dyn ThemeStore) -> Theme {
    let next = current_theme(store).toggled();
    apply_theme(store, next)
}

/// Theme for rendering; falls back to the default when there is no home dir.
pub(crate) fn active_theme() -> Theme {
    match FileThemeStore::default_location() {
        Ok(store) => current_theme(&store),
        Err(e) => {
            eprintln!("Warning: failed to read theme preference: {e:#}");
            Theme::default()
        }
    }
}

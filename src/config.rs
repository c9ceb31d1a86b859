use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use bn_cli::branch_name::MAX_BRANCH_NAME_LEN;
use bn_cli::composer::BranchType;

const CONFIG_FILE: &str = "config.toml";

pub(crate) fn bn_home_dir() -> Option<PathBuf> {
    if let Some(v) = std::env::var_os("BN_HOME") {
        return Some(PathBuf::from(v));
    }
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".bn"))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ClipboardBackend {
    #[default]
    Auto,
    Native,
    Command,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ClipboardConfig {
    pub(crate) backend: ClipboardBackend,
    /// Copy command and its arguments; the text is written to its stdin.
    pub(crate) command: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) branch_types: Vec<String>,
    pub(crate) max_length: usize,
    pub(crate) clipboard: ClipboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_types: vec![
                "feature".to_string(),
                "bugfix".to_string(),
                "hotfix".to_string(),
            ],
            max_length: MAX_BRANCH_NAME_LEN,
            clipboard: ClipboardConfig::default(),
        }
    }
}

impl Config {
    /// Reads `$BN_HOME/config.toml`; a missing file means defaults.
    pub(crate) fn load() -> Result<Self> {
        let Some(home) = bn_home_dir() else {
            return Ok(Self::default());
        };
        let path = home.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub(crate) fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.branch_types.is_empty() {
            bail!("branch_types must not be empty");
        }
        for (i, name) in self.branch_types.iter().enumerate() {
            let ok = !name.is_empty()
                && name.bytes().all(|b| {
                    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-'
                });
            if !ok {
                bail!("branch type must match [a-z0-9_-]+: {name:?}");
            }
            if self.branch_types[..i].contains(name) {
                bail!("duplicate branch type: {name}");
            }
        }
        if self.max_length == 0 {
            bail!("max_length must be positive");
        }
        if let Some(cmd) = &self.clipboard.command {
            if cmd.first().map_or(true, |c| c.trim().is_empty()) {
                bail!("clipboard.command must name a program");
            }
            if self.clipboard.backend == ClipboardBackend::Native {
                bail!("clipboard.command has no effect with backend = \"native\"");
            }
        }
        Ok(())
    }

    pub(crate) fn branch_types(&self) -> Vec<BranchType> {
        self.branch_types.iter().map(BranchType::new).collect()
    }

    pub(crate) fn find_branch_type(&self, name: &str) -> Result<BranchType> {
        if self.branch_types.iter().any(|t| t == name) {
            return Ok(BranchType::new(name));
        }
        bail!(
            "Unknown branch type: {name} (expected one of: {})",
            self.branch_types.join(", ")
        );
    }
}

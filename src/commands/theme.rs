use anyhow::Result;

use crate::cli::{ThemeArgs, ThemeCommands};
use crate::theme::{apply_theme, current_theme, toggle_theme, FileThemeStore, Theme};

pub(crate) fn cmd_theme(args: ThemeArgs) -> Result<()> {
    let mut store = FileThemeStore::default_location()?;
    let theme = match args.command.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => current_theme(&store),
        ThemeCommands::Toggle => toggle_theme(&mut store),
        ThemeCommands::Set { theme } => apply_theme(&mut store, Theme::parse(&theme)?),
    };
    println!("{theme}");
    Ok(())
}

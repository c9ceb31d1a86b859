use anyhow::{anyhow, bail, Context, Result};
use dialoguer::theme::Theme as PromptTheme;
use dialoguer::{Confirm, Input, Select};

use bn_cli::composer::{BranchType, Composer, Field, Submission, SubmissionState};
use bn_cli::render::{render, Tone};

use crate::cli::NewArgs;
use crate::clipboard::{self, copy_to_clipboard, CopyOutcome};
use crate::commands::print_lines;
use crate::config::Config;
use crate::exec;
use crate::theme::{self, Theme};

pub(crate) fn cmd_new(args: NewArgs) -> Result<()> {
    let config = Config::load()?;
    let theme = theme::active_theme();
    let prompt_theme = theme.prompt_theme();

    let can_prompt = exec::can_prompt();

    let branch_type = match args.branch_type.as_deref() {
        Some(name) => config.find_branch_type(name)?,
        None if can_prompt => select_branch_type(&config, &*prompt_theme)?,
        None => config
            .branch_types()
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No branch types configured"))?,
    };

    let interactive = can_prompt && has_missing_fields(&args, &branch_type);

    let mut task_id = if branch_type.requires_task_id() {
        args.task.unwrap_or_default()
    } else {
        String::new()
    };
    let mut description = args.description.unwrap_or_default();
    if interactive {
        if branch_type.requires_task_id() && task_id.is_empty() {
            task_id = prompt_field(Field::TaskId, "", &*prompt_theme)?;
        }
        if description.is_empty() {
            description = prompt_field(Field::Description, "", &*prompt_theme)?;
        }
    }

    let mut composer = Composer::new();
    let name = loop {
        let submission = Submission {
            branch_type: branch_type.clone(),
            task_id: task_id.clone(),
            description: description.clone(),
        };
        let state = composer.submit(&submission).clone();
        match state {
            SubmissionState::Composed(name) => {
                print_lines(&render(composer.state(), config.max_length), theme);
                break name;
            }
            SubmissionState::Error(e) if interactive => {
                print_lines(&render(composer.state(), config.max_length), theme);
                composer.edit();
                match e.field() {
                    Field::TaskId => {
                        task_id = prompt_field(Field::TaskId, &task_id, &*prompt_theme)?
                    }
                    Field::Description => {
                        description =
                            prompt_field(Field::Description, &description, &*prompt_theme)?
                    }
                }
            }
            SubmissionState::Error(e) => return Err(e.into()),
            other => bail!("Submission did not complete: {other:?}"),
        }
    };

    let copy = args.copy
        || (interactive
            && Confirm::with_theme(&*prompt_theme)
                .with_prompt("Copy to clipboard?")
                .default(true)
                .interact()
                .context("Prompt failed")?);
    if copy {
        copy_name(&config, &name, theme);
    }
    Ok(())
}

/// True when a field the branch type needs was not given on the command line.
fn has_missing_fields(args: &NewArgs, branch_type: &BranchType) -> bool {
    args.branch_type.is_none()
        || args.description.is_none()
        || (branch_type.requires_task_id() && args.task.is_none())
}

fn copy_name(config: &Config, name: &str, theme: Theme) {
    let mut clipboard = clipboard::from_config(&config.clipboard);
    match copy_to_clipboard(clipboard.as_mut(), name) {
        CopyOutcome::Copied => {
            let style = theme.style(Tone::Success).for_stderr();
            eprintln!("{}", style.apply_to("Copied!"));
        }
        CopyOutcome::Failed(msg) => {
            eprintln!("Warning: failed to copy to clipboard: {msg}");
        }
        CopyOutcome::Skipped => {}
    }
}

fn select_branch_type(config: &Config, theme: &dyn PromptTheme) -> Result<BranchType> {
    let types = config.branch_types();
    let items: Vec<&str> = types.iter().map(BranchType::as_str).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Branch type")
        .items(&items)
        .default(0)
        .interact()
        .context("TUI selection failed")?;
    Ok(types[selection].clone())
}

fn prompt_field(field: Field, initial: &str, theme: &dyn PromptTheme) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(field.label())
        .allow_empty(true);
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    }
    input.interact_text().context("Prompt failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(branch_type: Option<&str>, task: Option<&str>, description: Option<&str>) -> NewArgs {
        NewArgs {
            branch_type: branch_type.map(str::to_string),
            task: task.map(str::to_string),
            description: description.map(str::to_string),
            copy: false,
        }
    }

    #[test]
    fn hotfix_without_task_has_nothing_missing() {
        let a = args(Some("hotfix"), None, Some("x"));
        assert!(!has_missing_fields(&a, &BranchType::new("hotfix")));
    }

    #[test]
    fn task_is_missing_for_types_that_need_it() {
        let a = args(Some("feature"), None, Some("x"));
        assert!(has_missing_fields(&a, &BranchType::new("feature")));
        let a = args(Some("feature"), Some("AB-1"), Some("x"));
        assert!(!has_missing_fields(&a, &BranchType::new("feature")));
    }

    #[test]
    fn type_or_description_missing() {
        let a = args(None, Some("AB-1"), Some("x"));
        assert!(has_missing_fields(&a, &BranchType::new("feature")));
        let a = args(Some("hotfix"), None, None);
        assert!(has_missing_fields(&a, &BranchType::new("hotfix")));
    }
}

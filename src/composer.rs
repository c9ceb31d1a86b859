use std::fmt;

use crate::branch_name::{
    extract_task_id, is_valid_branch_name_text, normalize_branch_name, trim_text,
};

pub const HOTFIX: &str = "hotfix";

/// Hotfix branches always live under this prefix, whatever the selected type.
const HOTFIX_PREFIX: &str = "feature/hotfix-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchType(String);

impl BranchType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_hotfix(&self) -> bool {
        self.0 == HOTFIX
    }

    pub fn requires_task_id(&self) -> bool {
        !self.is_hotfix()
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TaskId,
    Description,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::TaskId => "Task ID",
            Field::Description => "Branch description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    MissingTaskId,
    InvalidCharacters(Field),
    TaskIdFormatInvalid,
    MissingDescription,
    DescriptionEmptyAfterNormalization,
}

impl ComposeError {
    pub fn field(&self) -> Field {
        match self {
            ComposeError::MissingTaskId | ComposeError::TaskIdFormatInvalid => Field::TaskId,
            ComposeError::InvalidCharacters(field) => *field,
            ComposeError::MissingDescription
            | ComposeError::DescriptionEmptyAfterNormalization => Field::Description,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ComposeError::MissingTaskId => "Please fill in the task ID",
            ComposeError::InvalidCharacters(_) => {
                "Use only Latin letters, digits, hyphens and underscores"
            }
            ComposeError::TaskIdFormatInvalid => "Invalid task ID format (expected PROJECT-123)",
            ComposeError::MissingDescription => "Please fill in the branch description",
            ComposeError::DescriptionEmptyAfterNormalization => "Branch name cannot be empty",
        }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field().label(), self.message())
    }
}

impl std::error::Error for ComposeError {}

/// Raw field values of one submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub branch_type: BranchType,
    pub task_id: String,
    pub description: String,
}

/// True when some whitespace-separated token starts with `http://` or `https://`.
pub fn is_url(input: &str) -> bool {
    input.split_whitespace().any(|token| {
        let lower = token.get(..8).unwrap_or(token).to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    })
}

/// Validates the submission in field order and builds the branch name.
///
/// Stops at the first failing rule; no partial name is ever returned.
pub fn compose(submission: &Submission) -> Result<String, ComposeError> {
    let task_id = trim_text(&submission.task_id);
    let description = trim_text(&submission.description);

    let mut extracted = None;
    if submission.branch_type.requires_task_id() {
        if task_id.is_empty() {
            return Err(ComposeError::MissingTaskId);
        }
        if !is_url(task_id) && !is_valid_branch_name_text(task_id) {
            return Err(ComposeError::InvalidCharacters(Field::TaskId));
        }
        extracted = Some(extract_task_id(task_id).ok_or(ComposeError::TaskIdFormatInvalid)?);
    }

    if description.is_empty() {
        return Err(ComposeError::MissingDescription);
    }
    if !is_valid_branch_name_text(description) {
        return Err(ComposeError::InvalidCharacters(Field::Description));
    }
    let normalized = normalize_branch_name(description);
    if normalized.is_empty() {
        return Err(ComposeError::DescriptionEmptyAfterNormalization);
    }

    Ok(match extracted {
        Some(id) => format!("{}/{id}-{normalized}", submission.branch_type),
        None => format!("{HOTFIX_PREFIX}{normalized}"),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Error(ComposeError),
    Composed(String),
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Error(_) | SubmissionState::Composed(_))
    }
}

/// Tracks the outcome of the latest submission.
#[derive(Debug)]
pub struct Composer {
    state: SubmissionState,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn submit(&mut self, submission: &Submission) -> &SubmissionState {
        self.state = SubmissionState::Validating;
        self.state = match compose(submission) {
            Ok(name) => SubmissionState::Composed(name),
            Err(e) => SubmissionState::Error(e),
        };
        &self.state
    }

    /// A field was edited: any finished outcome is stale.
    pub fn edit(&mut self) {
        if self.state.is_terminal() {
            self.state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(branch_type: &str, task_id: &str, description: &str) -> Submission {
        Submission {
            branch_type: BranchType::new(branch_type),
            task_id: task_id.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn feature_uses_extracted_task_id() {
        let s = submission("feature", "proj-123", "Add login");
        assert_eq!(compose(&s).unwrap(), "feature/PROJ-123-add_login");
    }

    #[test]
    fn url_task_id_bypasses_character_check() {
        let s = submission(
            "feature",
            "see https://tracker.example/PROJ-9",
            "Add Login Page",
        );
        assert_eq!(compose(&s).unwrap(), "feature/PROJ-9-add_login_page");

        let s = submission("feature", "HTTPS://tracker.example/browse/ab-5", "x");
        assert_eq!(compose(&s).unwrap(), "feature/AB-5-x");
    }

    #[test]
    fn url_without_identifier_is_format_error() {
        let s = submission("feature", "https://tracker.example/", "x");
        assert_eq!(compose(&s), Err(ComposeError::TaskIdFormatInvalid));
    }

    #[test]
    fn invalid_task_id_characters() {
        let s = submission("feature", "bad!id", "x");
        assert_eq!(
            compose(&s),
            Err(ComposeError::InvalidCharacters(Field::TaskId))
        );
    }

    #[test]
    fn task_id_checks_run_before_description_checks() {
        let s = submission("feature", "  ", "");
        assert_eq!(compose(&s), Err(ComposeError::MissingTaskId));
        let s = submission("bugfix", "no id here", "");
        assert_eq!(compose(&s), Err(ComposeError::TaskIdFormatInvalid));
    }

    #[test]
    fn hotfix_ignores_task_id_and_uses_feature_prefix() {
        let s = submission("hotfix", "", "Fix   Crash--Now");
        assert_eq!(compose(&s).unwrap(), "feature/hotfix-fix_crash_now");
        let s = submission("hotfix", "bad!id", "crash");
        assert_eq!(compose(&s).unwrap(), "feature/hotfix-crash");
    }

    #[test]
    fn bugfix_requires_description() {
        let s = submission("bugfix", "BUG-7", "");
        assert_eq!(compose(&s), Err(ComposeError::MissingDescription));
        let s = submission("bugfix", "BUG-7", "Null deref");
        assert_eq!(compose(&s).unwrap(), "bugfix/BUG-7-null_deref");
    }

    #[test]
    fn blank_detection_uses_form_whitespace() {
        let s = submission("hotfix", "", "\u{feff}");
        assert_eq!(compose(&s), Err(ComposeError::MissingDescription));
        let s = submission("hotfix", "", "\u{85}");
        assert_eq!(
            compose(&s),
            Err(ComposeError::InvalidCharacters(Field::Description))
        );
        let s = submission("feature", "\u{feff}\u{a0}", "x");
        assert_eq!(compose(&s), Err(ComposeError::MissingTaskId));
    }

    #[test]
    fn description_errors() {
        let s = submission("feature", "AB-1", "add login!!");
        assert_eq!(
            compose(&s),
            Err(ComposeError::InvalidCharacters(Field::Description))
        );
        let s = submission("feature", "AB-1", "- _ -");
        assert_eq!(
            compose(&s),
            Err(ComposeError::DescriptionEmptyAfterNormalization)
        );
    }

    #[test]
    fn error_display_names_field() {
        assert_eq!(
            ComposeError::MissingTaskId.to_string(),
            "Task ID: Please fill in the task ID"
        );
        assert_eq!(
            ComposeError::InvalidCharacters(Field::Description).field(),
            Field::Description
        );
    }

    #[test]
    fn composer_moves_between_states() {
        let mut composer = Composer::new();
        assert_eq!(composer.state(), &SubmissionState::Idle);

        composer.submit(&submission("bugfix", "BUG-7", ""));
        assert_eq!(
            composer.state(),
            &SubmissionState::Error(ComposeError::MissingDescription)
        );

        composer.edit();
        assert_eq!(composer.state(), &SubmissionState::Idle);

        let state = composer.submit(&submission("bugfix", "BUG-7", "crash"));
        assert_eq!(state, &SubmissionState::Composed("bugfix/BUG-7-crash".to_string()));
        assert!(state.is_terminal());

        composer.edit();
        assert!(!composer.state().is_terminal());
    }

    #[test]
    fn is_url_checks_scheme_per_token() {
        assert!(is_url("https://x"));
        assert!(is_url("see http://x/AB-1"));
        assert!(!is_url("ftp://x"));
        assert!(!is_url("xhttps://x"));
        assert!(!is_url("PROJ-1"));
    }
}

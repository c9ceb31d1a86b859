use crate::branch_name::{length_info, LengthInfo};
use crate::composer::SubmissionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
    pub stream: Stream,
}

impl Line {
    fn out(text: String, tone: Tone) -> Self {
        Self {
            text,
            tone,
            stream: Stream::Stdout,
        }
    }
}

pub fn length_lines(info: LengthInfo) -> Vec<Line> {
    if info.valid {
        return vec![Line::out(
            format!("Length: {} characters ✓", info.length),
            Tone::Success,
        )];
    }
    vec![
        Line::out(
            format!("Length: {} characters ⚠", info.length),
            Tone::Warning,
        ),
        Line::out(
            format!("Exceeds the maximum length ({} characters)", info.max),
            Tone::Warning,
        ),
    ]
}

/// Projects the composer state onto output lines.
pub fn render(state: &SubmissionState, max_length: usize) -> Vec<Line> {
    match state {
        SubmissionState::Idle | SubmissionState::Validating => Vec::new(),
        SubmissionState::Error(e) => vec![Line {
            text: e.to_string(),
            tone: Tone::Error,
            stream: Stream::Stderr,
        }],
        SubmissionState::Composed(name) => {
            let mut lines = vec![Line::out(name.clone(), Tone::Plain)];
            lines.extend(length_lines(length_info(name, max_length)));
            lines
        }
    }
}

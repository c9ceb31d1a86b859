pub mod composer;
pub mod render;

pub mod branch_name {
    pub const MAX_BRANCH_NAME_LEN: usize = 40;

    /// Whitespace as matched by a JavaScript-style `\s` class.
    fn is_space(ch: char) -> bool {
        (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
    }

    /// Trims the same whitespace set the validator and normalizer use.
    pub fn trim_text(text: &str) -> &str {
        text.trim_matches(is_space)
    }

    pub fn is_valid_branch_name_text(text: &str) -> bool {
        let trimmed = trim_text(text);
        !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || is_space(ch))
    }

    /// Finds the leftmost `[A-Za-z]{2,}-[0-9]+` in `input` and returns it upper-cased.
    pub fn extract_task_id(input: &str) -> Option<String> {
        let bytes = input.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if !bytes[i].is_ascii_alphabetic() {
                i += 1;
                continue;
            }
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            if i - start < 2 || bytes.get(i) != Some(&b'-') {
                continue;
            }
            let digits = i + 1;
            let mut end = digits;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end > digits {
                return Some(input[start..end].to_ascii_uppercase());
            }
        }
        None
    }

    /// Canonicalizes free text into a lowercase, underscore-delimited token.
    ///
    /// Characters outside `[a-z0-9\s_-]` (after lowercasing) are dropped, and
    /// every run of whitespace, hyphens and underscores becomes a single `_`.
    /// The result never starts or ends with `_`.
    pub fn normalize_branch_name(name: &str) -> String {
        let lowered = name.to_lowercase();
        let mut out = String::with_capacity(lowered.len());
        let mut prev_underscore = false;
        for ch in lowered.trim_matches(is_space).chars() {
            let mapped = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                ch
            } else if ch == '_' || ch == '-' || is_space(ch) {
                '_'
            } else {
                continue;
            };
            if mapped == '_' {
                if prev_underscore {
                    continue;
                }
                prev_underscore = true;
            } else {
                prev_underscore = false;
            }
            out.push(mapped);
        }

        let out = out.strip_prefix('_').unwrap_or(&out);
        let out = out.strip_suffix('_').unwrap_or(out);
        out.to_string()
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LengthInfo {
        pub length: usize,
        pub max: usize,
        pub valid: bool,
    }

    pub fn length_info(branch_name: &str, max: usize) -> LengthInfo {
        let length = branch_name.chars().count();
        LengthInfo {
            length,
            max,
            valid: length <= max,
        }
    }

}

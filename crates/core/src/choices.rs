//! Conversions between the newline-delimited choices text the user edits and
//! the canonical ordered sequence used for validation, persistence and
//! submission.

pub const MAX_CHOICES: usize = 50;
pub const MAX_CHOICE_LEN: usize = 40;

/// Split on newline, trim each segment, drop the empty ones. Order is kept.
pub fn canonical_choices(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|choice| !choice.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse view of [`canonical_choices`]: one entry per line.
pub fn choices_text<S: AsRef<str>>(choices: &[S]) -> String {
    choices
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Length in characters, not bytes.
pub fn choice_len(choice: &str) -> usize {
    choice.chars().count()
}

/// Cut at the first newline. The head (newline included) and the remainder
/// are both trimmed. Without a newline the whole text is the head.
pub fn split_first_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(idx) => (text[..=idx].trim(), text[idx + 1..].trim()),
        None => (text, ""),
    }
}

/// Drop the first line, keeping the trimmed remainder.
pub fn strip_first_line(text: &str) -> String {
    split_first_line(text).1.to_string()
}

//! Display fields derived from a run's subfolder name and metadata.
//!
//! Subfolders look like `2025-04-15-gpt-4o-prompt-a-1`: a date, the model
//! slug, then the prompt variant and repetition. None of these helpers fail;
//! irregular inputs produce a best-effort value and a warning.

use super::model::RatingMetadata;

const PROMPT_MARKER: &str = "prompt-";

/// Everything from the first `prompt-` onwards, or `""` when there is no
/// prompt segment.
pub fn prompt_from_subfolder(subfolder: &str) -> String {
    match subfolder.split_once(PROMPT_MARKER) {
        Some((_, rest)) if !rest.is_empty() => format!("{PROMPT_MARKER}{rest}"),
        _ => String::new(),
    }
}

/// The leading `YYYY-MM-DD` of a subfolder. Calendar validity is not checked.
pub fn date_from_subfolder(subfolder: &str) -> String {
    let date = subfolder.split('-').take(3).collect::<Vec<_>>().join("-");
    if !looks_like_date(&date) {
        tracing::warn!(subfolder, "subfolder does not start with a YYYY-MM-DD date");
    }
    date
}

/// Model name without its provider prefix (`openai/gpt-4o` -> `gpt-4o`).
///
/// Only the second `/`-separated segment is kept, so `a/b/c` gives `b`.
pub fn model_short_name(metadata: Option<&RatingMetadata>) -> String {
    let Some(model) = metadata.and_then(|m| m.model.as_deref()) else {
        return String::new();
    };

    match model.split('/').nth(1) {
        Some(name) => name.to_string(),
        None => {
            tracing::warn!(model, "model name has no provider prefix");
            String::new()
        }
    }
}

fn looks_like_date(candidate: &str) -> bool {
    let widths: Vec<usize> = candidate.split('-').map(str::len).collect();
    widths == [4, 2, 2] && candidate.chars().all(|c| c == '-' || c.is_ascii_digit())
}

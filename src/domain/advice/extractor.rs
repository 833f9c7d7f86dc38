//! Pulls the advice object out of free-form model output.

use super::{Advice, AdviceError};

/// Returns the outermost balanced `{...}` span that starts earliest,
/// ignoring braces inside JSON strings.
///
/// One pass over the input. Opening braces that never close are skipped
/// over rather than rescanned, so a later object is still found.
pub fn find_json_object(raw: &str) -> Option<&str> {
    let mut open: Vec<usize> = Vec::new();
    let mut best: Option<(usize, usize)> = None;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in raw.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            // Quotes outside any object are prose
            '"' if !open.is_empty() => in_string = true,
            '{' => open.push(index),
            '}' => {
                let Some(start) = open.pop() else {
                    continue;
                };
                let end = index + ch.len_utf8();
                if open.is_empty() {
                    return Some(&raw[start..end]);
                }
                if best.map_or(true, |(earliest, _)| start < earliest) {
                    best = Some((start, end));
                }
            }
            _ => {}
        }
    }

    best.map(|(start, end)| &raw[start..end])
}

/// Extracts and parses advice from model output.
///
/// Missing fields come back empty; non-string fields are a parse error.
pub fn extract_advice(raw: &str) -> Result<Advice, AdviceError> {
    let candidate = find_json_object(raw).ok_or(AdviceError::Extraction)?;
    serde_json::from_str::<Advice>(candidate).map_err(|e| AdviceError::Parse(e.to_string()))
}

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::models::domain::{GeneratedPrompt, PhysicsResult, RawPhysicsResult};

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A```[A-Za-z0-9_-]*[ \t]*\r?\n?").expect("OPENING_FENCE is a valid regex pattern")
});

static CLOSING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n?```\z").expect("CLOSING_FENCE is a valid regex pattern")
});

/// Removes the Markdown fence delimiters (with or without a language tag)
/// wrapping the whole reply. Fences inside the content are kept.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    let opened = OPENING_FENCE.replace(trimmed, "");
    CLOSING_FENCE.replace(&opened, "").trim().to_string()
}

/// Returns the first top-level balanced `{...}` region. Braces inside JSON
/// string literals are ignored.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Best-effort parse of model text into `T`: the text as-is, then with
/// fences stripped, then the first balanced object inside it.
pub fn parse_model_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    if let Ok(value) = serde_json::from_str::<T>(raw.trim()) {
        return Some(value);
    }

    let stripped = strip_code_fences(raw);
    if let Ok(value) = serde_json::from_str::<T>(&stripped) {
        return Some(value);
    }

    let candidate = extract_json_object(&stripped)?;
    match serde_json::from_str::<T>(candidate) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("Extracted JSON region did not parse: {}", err);
            None
        }
    }
}

/// Normalizes free-text model output. Never fails: unreadable output
/// becomes the fallback result.
pub fn normalize_text(raw: &str) -> PhysicsResult {
    match parse_model_json::<RawPhysicsResult>(raw) {
        Some(parsed) => parsed.into(),
        None => {
            log::warn!(
                "Model output could not be parsed ({} chars); serving fallback animation",
                raw.len()
            );
            PhysicsResult::fallback()
        }
    }
}

/// Normalizes schema-constrained output. Providers occasionally ignore the
/// schema, so anything that fails strict parsing goes through the text path.
pub fn normalize_structured(raw: &str) -> PhysicsResult {
    match serde_json::from_str::<RawPhysicsResult>(raw.trim()) {
        Ok(parsed) => parsed.into(),
        Err(err) => {
            log::warn!("Structured output did not match schema: {}", err);
            normalize_text(raw)
        }
    }
}

pub fn normalize_generated_prompt(raw: &str) -> Option<GeneratedPrompt> {
    parse_model_json(raw)
}

//! Reply Formatter
//!
//! Provider replies should look like
//!
//! ```text
//! BAŞLIK:
//! 1. Adım
//! 2. Adım
//!
//! Not: ...
//! ```
//!
//! Well-formed replies pass through; anything else gets a default note
//! appended, and "no knowledge" replies are replaced by the disclaimer.

use regex::Regex;
use std::sync::OnceLock;

use super::{DISCLAIMER, REPLY_NOT_RETRIEVED};
use crate::domain::entities::fold_case;

/// Marker opening the trailing note block
pub const NOTE_MARKER: &str = "Not:";

/// Appended to replies that don't follow the expected shape
pub const DEFAULT_NOTE: &str = "\n\nNot: Durum devam ederse en yakın sağlık kuruluşuna başvurun.";

/// Case-insensitive phrase the model uses when it has no answer
const NO_KNOWLEDGE_MARKER: &str = "bilgim yok";

static REPLY_SHAPE: OnceLock<Regex> = OnceLock::new();

fn reply_shape() -> &'static Regex {
    REPLY_SHAPE.get_or_init(|| {
        Regex::new(r"(?s)^(.*?):(\n\d+\..*?)(\n\nNot:.*)?$").expect("reply shape regex is valid")
    })
}

/// Whether `text` has the "title: numbered steps [+ note]" shape
pub fn is_well_formed(text: &str) -> bool {
    reply_shape().is_match(text)
}

fn has_trailing_note(text: &str) -> bool {
    let text = text.trim_end();
    if text.ends_with(NOTE_MARKER) {
        return true;
    }
    text.rsplit("\n\n")
        .next()
        .map(|block| block.trim_start().starts_with(NOTE_MARKER))
        .unwrap_or(false)
}

/// Normalize a raw provider reply
pub fn format_response(text: &str) -> String {
    if text.trim().is_empty()
        || text.contains(REPLY_NOT_RETRIEVED)
        || fold_case(text).contains(NO_KNOWLEDGE_MARKER)
    {
        return DISCLAIMER.to_string();
    }

    if is_well_formed(text) {
        return text.trim().to_string();
    }

    tracing::warn!("Reply does not match the expected shape: {:?}", text);

    let mut formatted = text.trim().to_string();
    if !has_trailing_note(&formatted) {
        formatted.push_str(DEFAULT_NOTE);
    }
    formatted
}

//! Latin-to-Aksara transliteration.
//!
//! Input is lowercased and split on single spaces. Each word is scanned left
//! to right: the longest consonant grapheme is matched first, then the next
//! character decides between the bare glyph (inherent "a"), a vowel sign, or
//! a virama. Vowels with no preceding consonant use their independent form,
//! and anything the table does not know passes through unchanged.

mod transducer;


use tracing::{debug, debug_span};

use crate::script::{ScriptTable, ScriptVariant};

pub use transducer::{tokenize_word, Unit, UnitKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterateError {
    #[error("No text provided")]
    MissingInput,
    #[error("unsupported script: {0}")]
    UnsupportedScript(String),
}

/// Transliterate `text` into `script` using the process-wide table.
///
/// `None` is distinct from an empty string: it reports
/// [`TransliterateError::MissingInput`], while `Some("")` yields `Ok("")`.
pub fn transliterate(
    text: Option<&str>,
    script: ScriptVariant,
) -> Result<String, TransliterateError> {
    let text = text.ok_or(TransliterateError::MissingInput)?;
    Ok(transliterate_with(ScriptTable::global(script), text))
}

/// Transliterate `text` with an explicit table.
pub fn transliterate_with(table: &ScriptTable, text: &str) -> String {
    let _span = debug_span!(
        "transliterate",
        script = table.variant().name(),
        chars = text.chars().count()
    )
    .entered();

    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split(' ').collect();
    let mut out = String::with_capacity(lowered.len() * 2);
    let mut unit_count = 0;

    for (idx, word) in words.iter().enumerate() {
        // An empty token is one extra space from a run of spaces.
        if word.is_empty() {
            out.push(' ');
            continue;
        }
        for unit in tokenize_word(table, word) {
            out.push_str(&unit.output);
            unit_count += 1;
        }
        if idx + 1 < words.len() {
            out.push(' ');
        }
    }

    debug!(words = words.len(), units = unit_count);
    out.trim().to_string()
}

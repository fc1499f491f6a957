//! Character-level Unicode classification for the Aksara output blocks.

use crate::script::ScriptVariant;

/// Balinese block (U+1B00..U+1B7F).
pub fn is_balinese(c: char) -> bool {
    ('\u{1B00}'..='\u{1B7F}').contains(&c)
}

/// Sundanese block (U+1B80..U+1BBF) plus Sundanese Supplement (U+1CC0..U+1CCF),
/// which only holds punctuation but shows up in real Sundanese text.
pub fn is_sundanese(c: char) -> bool {
    ('\u{1B80}'..='\u{1BBF}').contains(&c) || ('\u{1CC0}'..='\u{1CCF}').contains(&c)
}

/// Javanese block (U+A980..U+A9DF).
pub fn is_javanese(c: char) -> bool {
    ('\u{A980}'..='\u{A9DF}').contains(&c)
}

/// The script whose block contains `c`, if any.
pub fn script_of(c: char) -> Option<ScriptVariant> {
    ScriptVariant::ALL.into_iter().find(|v| v.contains_glyph(c))
}

impl ScriptVariant {
    pub fn contains_glyph(self, c: char) -> bool {
        match self {
            ScriptVariant::Bali => is_balinese(c),
            ScriptVariant::Sunda => is_sundanese(c),
            ScriptVariant::Jawa => is_javanese(c),
        }
    }
}

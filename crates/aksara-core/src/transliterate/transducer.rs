use serde::Serialize;

use crate::script::{ScriptTable, INHERENT_VOWEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Non-alphabetic character copied verbatim.
    Passthrough,
    /// Consonant followed by "a": bare glyph.
    Syllable,
    /// Consonant followed by another vowel: glyph plus vowel sign.
    SyllableWithSign,
    /// Consonant with no following vowel: glyph plus virama.
    DeadConsonant,
    IndependentVowel,
    /// Alphabetic character missing from every table.
    Unmapped,
}

/// One transduction step: the source characters consumed and what was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub source: String,
    pub output: String,
}

impl Unit {
    fn copied(kind: UnitKind, c: char) -> Self {
        Self {
            kind,
            source: c.to_string(),
            output: c.to_string(),
        }
    }
}

/// Split one lowercase word into transduction units.
///
/// Concatenating every `source` gives back `word`; concatenating every
/// `output` gives its transliteration.
pub fn tokenize_word(table: &ScriptTable, word: &str) -> Vec<Unit> {
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if !ch.is_alphabetic() {
            units.push(Unit::copied(UnitKind::Passthrough, ch));
            i += 1;
            continue;
        }

        if let Some(cons) = table.match_consonant(&chars[i..]) {
            let start = i;
            i += cons.len();
            let mut output = cons.glyph.clone();

            // The vowel is consumed with the consonant; anything else is left
            // for the next iteration.
            let kind = match chars.get(i).copied().filter(|&c| table.is_vowel(c)) {
                Some(INHERENT_VOWEL) => {
                    i += 1;
                    UnitKind::Syllable
                }
                Some(vowel) => {
                    output.push_str(table.vowel_sign(vowel).unwrap_or(""));
                    i += 1;
                    UnitKind::SyllableWithSign
                }
                None => {
                    output.push_str(table.virama());
                    UnitKind::DeadConsonant
                }
            };

            units.push(Unit {
                kind,
                source: chars[start..i].iter().collect(),
                output,
            });
            continue;
        }

        match table.independent_vowel(ch) {
            Some(glyph) => units.push(Unit {
                kind: UnitKind::IndependentVowel,
                source: ch.to_string(),
                output: glyph.to_string(),
            }),
            None => units.push(Unit::copied(UnitKind::Unmapped, ch)),
        }
        i += 1;
    }

    units
}

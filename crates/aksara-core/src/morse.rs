//! International Morse code for Latin letters and digits.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::settings::settings;

/// Gap between words in hand-spaced Morse (three spaces).
const WORD_GAP: &str = "   ";

const ALPHABET: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
];

fn code_to_char() -> &'static HashMap<&'static str, char> {
    static INSTANCE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    INSTANCE.get_or_init(|| ALPHABET.iter().map(|&(c, code)| (code, c)).collect())
}

fn char_to_code(c: char) -> Option<&'static str> {
    ALPHABET.iter().find(|&&(k, _)| k == c).map(|&(_, code)| code)
}

/// Encode `text` using the configured word separator.
pub fn encode(text: &str) -> String {
    encode_with(text, &settings().morse.word_separator)
}

/// Encode `text`, emitting `word_separator` for each space.
///
/// Characters without a Morse code are dropped.
pub fn encode_with(text: &str, word_separator: &str) -> String {
    let mut tokens: Vec<&str> = Vec::with_capacity(text.len());
    let mut dropped = 0;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c == ' ' {
            tokens.push(word_separator);
        } else if let Some(code) = char_to_code(c) {
            tokens.push(code);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug!(dropped, "morse encode skipped unknown characters");
    }
    tokens.join(" ")
}

/// Decode `code` using the configured word separator.
pub fn decode(code: &str) -> String {
    decode_with(code, &settings().morse.word_separator)
}

/// Decode `code`. Words are split on `word_separator` tokens or on a run of
/// three spaces; letters on any other whitespace. Unknown symbols are dropped.
pub fn decode_with(code: &str, word_separator: &str) -> String {
    let table = code_to_char();
    let mut words: Vec<String> = Vec::new();

    for chunk in code.trim().split(WORD_GAP) {
        let mut word = String::new();
        for symbol in chunk.split_whitespace() {
            if symbol == word_separator {
                words.push(std::mem::take(&mut word));
            } else if let Some(&c) = table.get(symbol) {
                word.push(c);
            }
        }
        words.push(word);
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sos() {
        assert_eq!(encode_with("SOS", "/"), "... --- ...");
    }

    #[test]
    fn test_encode_words_and_digits() {
        assert_eq!(encode_with("hi 2", "/"), ".... .. / ..---");
    }

    #[test]
    fn test_encode_drops_unknown() {
        assert_eq!(encode_with("a!b", "/"), ".- -...");
        assert_eq!(encode_with("", "/"), "");
    }

    #[test]
    fn test_decode_separator_token() {
        assert_eq!(decode_with(".... .. / ..---", "/"), "hi 2");
    }

    #[test]
    fn test_decode_three_space_gap() {
        assert_eq!(decode_with(".... ..   ..---", "/"), "hi 2");
    }

    #[test]
    fn test_decode_drops_unknown_symbols() {
        assert_eq!(decode_with("... ...... ...", "/"), "ss");
    }

    #[test]
    fn test_decode_trims() {
        assert_eq!(decode_with("  .-  ", "/"), "a");
        assert_eq!(decode_with("", "/"), "");
    }

    #[test]
    fn test_round_trip_keeps_space_runs() {
        let text = "sos  help 112";
        assert_eq!(decode_with(&encode_with(text, "/"), "/"), text);
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(encode_with("a b", "|"), ".- | -...");
        assert_eq!(decode_with(".- | -...", "|"), "a b");
    }

    #[test]
    fn test_default_settings_separator() {
        assert_eq!(encode("a b"), ".- / -...");
        assert_eq!(decode(".- / -..."), "a b");
    }

    #[test]
    fn test_alphabet_codes_unique() {
        assert_eq!(code_to_char().len(), ALPHABET.len());
    }
}

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_script_toml, ScriptConfig, ScriptConfigError};
use super::ScriptVariant;

const BALI_TOML: &str = include_str!("bali.toml");
const SUNDA_TOML: &str = include_str!("sunda.toml");
const JAWA_TOML: &str = include_str!("jawa.toml");

/// Returns the embedded default table TOML for `variant`.
pub fn default_toml(variant: ScriptVariant) -> &'static str {
    match variant {
        ScriptVariant::Bali => BALI_TOML,
        ScriptVariant::Sunda => SUNDA_TOML,
        ScriptVariant::Jawa => JAWA_TOML,
    }
}

fn custom_toml(variant: ScriptVariant) -> &'static OnceLock<String> {
    static BALI: OnceLock<String> = OnceLock::new();
    static SUNDA: OnceLock<String> = OnceLock::new();
    static JAWA: OnceLock<String> = OnceLock::new();
    match variant {
        ScriptVariant::Bali => &BALI,
        ScriptVariant::Sunda => &SUNDA,
        ScriptVariant::Jawa => &JAWA,
    }
}

fn table_slot(variant: ScriptVariant) -> &'static OnceLock<ScriptTable> {
    static BALI: OnceLock<ScriptTable> = OnceLock::new();
    static SUNDA: OnceLock<ScriptTable> = OnceLock::new();
    static JAWA: OnceLock<ScriptTable> = OnceLock::new();
    match variant {
        ScriptVariant::Bali => &BALI,
        ScriptVariant::Sunda => &SUNDA,
        ScriptVariant::Jawa => &JAWA,
    }
}

/// A consonant grapheme and the glyph it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grapheme {
    pub key: Vec<char>,
    pub glyph: String,
}

impl Grapheme {
    /// Length of the grapheme in source characters.
    pub(crate) fn len(&self) -> usize {
        self.key.len()
    }
}

/// Immutable lookup tables for one script variant.
#[derive(Debug)]
pub struct ScriptTable {
    variant: ScriptVariant,
    /// Sorted by descending grapheme length, ties in key order, so the
    /// first prefix hit is the longest match.
    consonants: Vec<Grapheme>,
    independent_vowels: HashMap<char, String>,
    vowel_signs: HashMap<char, String>,
    virama: String,
}

impl ScriptTable {
    /// Set custom TOML for `variant` before its first `global()` call.
    /// Fails with `AlreadyInitialized` once the table has been built.
    pub fn init_custom(
        variant: ScriptVariant,
        toml_content: String,
    ) -> Result<(), ScriptConfigError> {
        // Validate eagerly
        parse_script_toml(variant, &toml_content)?;
        if table_slot(variant).get().is_some() {
            return Err(ScriptConfigError::AlreadyInitialized);
        }
        custom_toml(variant)
            .set(toml_content)
            .map_err(|_| ScriptConfigError::AlreadyInitialized)
    }

    /// Get or initialize the table singleton for `variant`.
    pub fn global(variant: ScriptVariant) -> &'static ScriptTable {
        table_slot(variant).get_or_init(|| {
            let toml_str = custom_toml(variant)
                .get()
                .map(|s| s.as_str())
                .unwrap_or(default_toml(variant));
            let config =
                parse_script_toml(variant, toml_str).expect("script table TOML must be valid");
            ScriptTable::from_config(variant, config)
        })
    }

    /// Parse and validate `toml_str`, returning a standalone table.
    pub fn from_toml(variant: ScriptVariant, toml_str: &str) -> Result<Self, ScriptConfigError> {
        parse_script_toml(variant, toml_str).map(|config| Self::from_config(variant, config))
    }

    /// Build from an already validated config.
    pub fn from_config(variant: ScriptVariant, config: ScriptConfig) -> Self {
        let mut consonants: Vec<Grapheme> = config
            .consonants
            .into_iter()
            .map(|(key, glyph)| Grapheme {
                key: key.chars().collect(),
                glyph,
            })
            .collect();
        // Stable sort: BTreeMap order is kept within each length.
        consonants.sort_by_key(|g| Reverse(g.len()));

        Self {
            variant,
            consonants,
            independent_vowels: single_char_map(config.independent_vowels),
            vowel_signs: single_char_map(config.vowel_signs),
            virama: config.virama,
        }
    }

    pub fn variant(&self) -> ScriptVariant {
        self.variant
    }

    /// Longest consonant grapheme that prefixes `input`.
    pub fn match_consonant(&self, input: &[char]) -> Option<&Grapheme> {
        self.consonants.iter().find(|g| input.starts_with(&g.key))
    }

    pub fn consonants(&self) -> &[Grapheme] {
        &self.consonants
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.independent_vowels.contains_key(&c)
    }

    pub fn independent_vowel(&self, c: char) -> Option<&str> {
        self.independent_vowels.get(&c).map(String::as_str)
    }

    pub fn vowel_sign(&self, c: char) -> Option<&str> {
        self.vowel_signs.get(&c).map(String::as_str)
    }

    pub fn virama(&self) -> &str {
        &self.virama
    }
}

fn single_char_map(map: impl IntoIterator<Item = (String, String)>) -> HashMap<char, String> {
    map.into_iter()
        .filter_map(|(key, glyph)| key.chars().next().map(|c| (c, glyph)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(table: &ScriptTable) -> Vec<String> {
        table
            .consonants()
            .iter()
            .map(|g| g.key.iter().collect())
            .collect()
    }

    #[test]
    fn consonants_sorted_longest_first() {
        for variant in ScriptVariant::ALL {
            let table = ScriptTable::global(variant);
            let lens: Vec<usize> = table.consonants().iter().map(Grapheme::len).collect();
            assert!(
                lens.windows(2).all(|w| w[0] >= w[1]),
                "{variant}: consonants not sorted by length: {lens:?}"
            );
        }
    }

    #[test]
    fn ties_are_in_key_order() {
        let table = ScriptTable::global(ScriptVariant::Jawa);
        let ks = keys(table);
        assert_eq!(&ks[..4], &["dh", "ng", "ny", "th"]);
    }

    #[test]
    fn longest_match_wins() {
        let table = ScriptTable::global(ScriptVariant::Sunda);
        let input: Vec<char> = "ngan".chars().collect();
        let g = table.match_consonant(&input).unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.glyph, "ᮍ");

        let input: Vec<char> = "nan".chars().collect();
        assert_eq!(table.match_consonant(&input).unwrap().glyph, "ᮔ");
    }

    #[test]
    fn no_match_for_vowel_or_empty() {
        let table = ScriptTable::global(ScriptVariant::Bali);
        assert!(table.match_consonant(&['a', 'k']).is_none());
        assert!(table.match_consonant(&[]).is_none());
    }

    #[test]
    fn vowel_lookups() {
        let table = ScriptTable::global(ScriptVariant::Sunda);
        assert!(table.is_vowel('a'));
        assert!(table.is_vowel('é'));
        assert!(!table.is_vowel('k'));
        assert_eq!(table.independent_vowel('a'), Some("ᮃ"));
        assert_eq!(table.vowel_sign('u'), Some("ᮥ"));
        assert_eq!(table.vowel_sign('a'), None);
        assert_eq!(table.virama(), "᮪");
    }

    #[test]
    fn jawa_o_sign_is_two_glyphs() {
        let table = ScriptTable::global(ScriptVariant::Jawa);
        assert_eq!(table.vowel_sign('o'), Some("\u{A9BA}\u{A9B4}"));
    }

    #[test]
    fn from_toml_is_independent_of_global() {
        let toml = r#"
virama = "᭄"
[consonants]
k = "ᬓ"
[independent_vowels]
a = "ᬅ"
[vowel_signs]
"#;
        let table = ScriptTable::from_toml(ScriptVariant::Bali, toml).unwrap();
        assert_eq!(table.consonants().len(), 1);
        assert!(ScriptTable::global(ScriptVariant::Bali).consonants().len() > 1);
    }

    #[test]
    fn init_custom_rejects_invalid() {
        let err = ScriptTable::init_custom(ScriptVariant::Jawa, "nope {{".into()).unwrap_err();
        assert!(matches!(err, ScriptConfigError::Parse(_)));
    }

    #[test]
    fn init_custom_after_global_is_rejected() {
        let before = ScriptTable::global(ScriptVariant::Bali).consonants().len();
        let toml = r#"
virama = "᭄"
[consonants]
k = "ᬓ"
[independent_vowels]
a = "ᬅ"
[vowel_signs]
"#;
        let err = ScriptTable::init_custom(ScriptVariant::Bali, toml.into()).unwrap_err();
        assert!(matches!(err, ScriptConfigError::AlreadyInitialized));
        assert!(custom_toml(ScriptVariant::Bali).get().is_none());
        assert_eq!(ScriptTable::global(ScriptVariant::Bali).consonants().len(), before);
    }
}

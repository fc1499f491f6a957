use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ScriptVariant, INHERENT_VOWEL, MAX_GRAPHEME_LEN};

/// Raw, validated contents of a script table TOML document.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptConfig {
    pub virama: String,
    pub consonants: BTreeMap<String, String>,
    pub independent_vowels: BTreeMap<String, String>,
    pub vowel_signs: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptySection(&'static str),
    #[error("invalid consonant grapheme: {0:?}")]
    InvalidGrapheme(String),
    #[error("invalid vowel key: {0:?}")]
    InvalidVowelKey(String),
    #[error("[vowel_signs] must not contain the inherent vowel \"a\"")]
    InherentVowelSign,
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("virama is empty")]
    EmptyVirama,
    #[error("glyph {glyph:?} for {key} is outside the script's Unicode block")]
    ForeignGlyph { key: String, glyph: String },
    #[error("script table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a [`ScriptConfig`] for `variant`, validating every entry.
pub fn parse_script_toml(
    variant: ScriptVariant,
    toml_str: &str,
) -> Result<ScriptConfig, ScriptConfigError> {
    let config: ScriptConfig =
        toml::from_str(toml_str).map_err(|e| ScriptConfigError::Parse(e.to_string()))?;

    if config.consonants.is_empty() {
        return Err(ScriptConfigError::EmptySection("consonants"));
    }
    if config.independent_vowels.is_empty() {
        return Err(ScriptConfigError::EmptySection("independent_vowels"));
    }
    if config.virama.is_empty() {
        return Err(ScriptConfigError::EmptyVirama);
    }
    check_glyph(variant, "virama", &config.virama)?;

    for (key, glyph) in &config.consonants {
        let len = key.chars().count();
        if len == 0 || len > MAX_GRAPHEME_LEN || !is_lower_alpha(key) {
            return Err(ScriptConfigError::InvalidGrapheme(key.clone()));
        }
        check_glyph(variant, key, glyph)?;
    }

    for map in [&config.independent_vowels, &config.vowel_signs] {
        for (key, glyph) in map {
            if key.chars().count() != 1 || !is_lower_alpha(key) {
                return Err(ScriptConfigError::InvalidVowelKey(key.clone()));
            }
            check_glyph(variant, key, glyph)?;
        }
    }

    if config
        .vowel_signs
        .keys()
        .any(|k| k.starts_with(INHERENT_VOWEL))
    {
        return Err(ScriptConfigError::InherentVowelSign);
    }

    Ok(config)
}

fn is_lower_alpha(key: &str) -> bool {
    key.chars().all(|c| c.is_alphabetic() && !c.is_uppercase())
}

fn check_glyph(variant: ScriptVariant, key: &str, glyph: &str) -> Result<(), ScriptConfigError> {
    if glyph.is_empty() {
        return Err(ScriptConfigError::EmptyValue(key.to_string()));
    }
    if !glyph.chars().all(|c| variant.contains_glyph(c)) {
        return Err(ScriptConfigError::ForeignGlyph {
            key: key.to_string(),
            glyph: glyph.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::default_toml;

    const MINIMAL: &str = r#"
virama = "᮪"

[consonants]
k = "ᮊ"
ng = "ᮍ"

[independent_vowels]
a = "ᮃ"

[vowel_signs]
u = "ᮥ"
"#;

    #[test]
    fn parse_valid_toml() {
        let config = parse_script_toml(ScriptVariant::Sunda, MINIMAL).unwrap();
        assert_eq!(config.consonants.len(), 2);
        assert_eq!(config.consonants["ng"], "ᮍ");
        assert_eq!(config.independent_vowels["a"], "ᮃ");
        assert_eq!(config.vowel_signs["u"], "ᮥ");
        assert_eq!(config.virama, "᮪");
    }

    #[test]
    fn parse_default_tables() {
        for variant in ScriptVariant::ALL {
            let config = parse_script_toml(variant, default_toml(variant)).unwrap();
            assert!(
                config.consonants.len() >= 20,
                "{variant}: expected 20+ consonants, got {}",
                config.consonants.len()
            );
            assert!(!config.vowel_signs.contains_key("a"));
        }
    }

    #[test]
    fn error_glyph_from_other_script() {
        // Sundanese table loaded as Balinese.
        let err = parse_script_toml(ScriptVariant::Bali, MINIMAL).unwrap_err();
        assert!(matches!(err, ScriptConfigError::ForeignGlyph { .. }));
    }

    #[test]
    fn error_empty_consonants() {
        let toml = r#"
virama = "᮪"
[consonants]
[independent_vowels]
a = "ᮃ"
[vowel_signs]
"#;
        let err = parse_script_toml(ScriptVariant::Sunda, toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::EmptySection("consonants")));
    }

    #[test]
    fn error_long_grapheme() {
        let toml = MINIMAL.replace("ng = ", "ngg = ");
        let err = parse_script_toml(ScriptVariant::Sunda, &toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::InvalidGrapheme(ref k) if k == "ngg"));
    }

    #[test]
    fn error_uppercase_grapheme() {
        let toml = MINIMAL.replace("k = ", "K = ");
        let err = parse_script_toml(ScriptVariant::Sunda, &toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::InvalidGrapheme(_)));
    }

    #[test]
    fn error_multi_letter_vowel_sign() {
        let toml = MINIMAL.replace("u = ", "eu = ");
        let err = parse_script_toml(ScriptVariant::Sunda, &toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::InvalidVowelKey(ref k) if k == "eu"));
    }

    #[test]
    fn error_inherent_vowel_sign() {
        let toml = format!("{MINIMAL}a = \"ᮥ\"\n");
        let err = parse_script_toml(ScriptVariant::Sunda, &toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::InherentVowelSign));
    }

    #[test]
    fn error_empty_value() {
        let toml = MINIMAL.replace("k = \"ᮊ\"", "k = \"\"");
        let err = parse_script_toml(ScriptVariant::Sunda, &toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::EmptyValue(ref k) if k == "k"));
    }

    #[test]
    fn error_empty_virama() {
        let toml = MINIMAL.replace("virama = \"᮪\"", "virama = \"\"");
        let err = parse_script_toml(ScriptVariant::Sunda, &toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::EmptyVirama));
    }

    #[test]
    fn error_missing_virama() {
        let toml = MINIMAL.replace("virama = \"᮪\"", "");
        let err = parse_script_toml(ScriptVariant::Sunda, &toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_script_toml(ScriptVariant::Jawa, "not valid toml {{{").unwrap_err();
        assert!(matches!(err, ScriptConfigError::Parse(_)));
    }
}

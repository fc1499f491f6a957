//! Latin-to-Aksara grapheme tables.
//!
//! Each supported script is described by an embedded TOML table mapping
//! Latin graphemes to target-script glyphs. Tables are parsed and validated
//! once, then shared read-only for the lifetime of the process.

mod config;
mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::transliterate::TransliterateError;

pub use config::{parse_script_toml, ScriptConfig, ScriptConfigError};
pub use table::{default_toml, Grapheme, ScriptTable};

/// Vowel carried by every bare consonant glyph. Never has a vowel sign.
pub const INHERENT_VOWEL: char = 'a';

/// Longest consonant grapheme accepted in a table, in source characters.
pub const MAX_GRAPHEME_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptVariant {
    Bali,
    Sunda,
    Jawa,
}

impl ScriptVariant {
    pub const ALL: [ScriptVariant; 3] = [
        ScriptVariant::Bali,
        ScriptVariant::Sunda,
        ScriptVariant::Jawa,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScriptVariant::Bali => "bali",
            ScriptVariant::Sunda => "sunda",
            ScriptVariant::Jawa => "jawa",
        }
    }
}

impl fmt::Display for ScriptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScriptVariant {
    type Err = TransliterateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bali" | "balinese" => Ok(ScriptVariant::Bali),
            "sunda" | "sundanese" => Ok(ScriptVariant::Sunda),
            "jawa" | "javanese" | "java" => Ok(ScriptVariant::Jawa),
            _ => Err(TransliterateError::UnsupportedScript(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("bali".parse::<ScriptVariant>().unwrap(), ScriptVariant::Bali);
        assert_eq!("Balinese".parse::<ScriptVariant>().unwrap(), ScriptVariant::Bali);
        assert_eq!("SUNDA".parse::<ScriptVariant>().unwrap(), ScriptVariant::Sunda);
        assert_eq!(" sundanese ".parse::<ScriptVariant>().unwrap(), ScriptVariant::Sunda);
        assert_eq!("java".parse::<ScriptVariant>().unwrap(), ScriptVariant::Jawa);
        assert_eq!("javanese".parse::<ScriptVariant>().unwrap(), ScriptVariant::Jawa);
    }

    #[test]
    fn parse_unknown_is_unsupported() {
        let err = "thai".parse::<ScriptVariant>().unwrap_err();
        assert_eq!(err, TransliterateError::UnsupportedScript("thai".into()));
        assert_eq!(err.to_string(), "unsupported script: thai");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for v in ScriptVariant::ALL {
            assert_eq!(v.to_string().parse::<ScriptVariant>().unwrap(), v);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            script: ScriptVariant,
        }
        let w: Wrapper = toml::from_str("script = \"jawa\"").unwrap();
        assert_eq!(w.script, ScriptVariant::Jawa);
        assert!(toml::from_str::<Wrapper>("script = \"latin\"").is_err());
    }
}

use std::fs;
use std::process;

use aksara_engine::script::{default_toml, parse_script_toml, ScriptVariant};
use aksara_engine::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn table_export(script: ScriptVariant) {
    print!("{}", default_toml(script));
}

pub fn table_validate(script: ScriptVariant, file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(parse_script_toml(script, &content), "Error: {}");
    println!(
        "OK: {} consonants, {} independent vowels, {} vowel signs",
        config.consonants.len(),
        config.independent_vowels.len(),
        config.vowel_signs.len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: transliterate.default_script={}, morse.word_separator={}",
        s.transliterate.default_script, s.morse.word_separator
    );
}

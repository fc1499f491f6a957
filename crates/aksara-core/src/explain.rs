use serde::Serialize;

use crate::script::{ScriptTable, ScriptVariant};
use crate::transliterate::{tokenize_word, transliterate_with, Unit};

/// Full diagnostic result for one input text.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub script: ScriptVariant,
    pub words: Vec<ExplainWord>,
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainWord {
    pub word: String,
    pub units: Vec<Unit>,
}

impl ExplainWord {
    pub fn output(&self) -> String {
        self.units.iter().map(|u| u.output.as_str()).collect()
    }
}

/// Record every transduction decision for `text`.
///
/// Empty tokens from runs of spaces are skipped; `result` is the same string
/// [`transliterate_with`] returns.
pub fn explain(table: &ScriptTable, text: &str) -> ExplainResult {
    let lowered = text.to_lowercase();
    let words = lowered
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(|w| ExplainWord {
            word: w.to_string(),
            units: tokenize_word(table, w),
        })
        .collect();

    ExplainResult {
        input: text.to_string(),
        script: table.variant(),
        words,
        result: transliterate_with(table, text),
    }
}

/// Format an [`ExplainResult`] as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} \"{}\" ({} words) ===\n",
        result.script,
        result.input,
        result.words.len(),
    ));

    for w in &result.words {
        out.push_str(&format!("  {} -> {}\n", w.word, w.output()));
        let width = w
            .units
            .iter()
            .map(|u| UnicodeWidthStr::width(u.source.as_str()))
            .max()
            .unwrap_or(0);
        for u in &w.units {
            let pad = width.saturating_sub(UnicodeWidthStr::width(u.source.as_str()));
            out.push_str(&format!(
                "    {}{}  {:<18} {}\n",
                u.source,
                " ".repeat(pad),
                format!("{:?}", u.kind),
                u.output,
            ));
        }
    }

    out.push_str(&format!("Result: {}\n", result.result));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliterate::UnitKind;

    #[test]
    fn explain_matches_transliteration() {
        let table = ScriptTable::global(ScriptVariant::Sunda);
        let result = explain(table, "Aku  ngan");
        assert_eq!(result.input, "Aku  ngan");
        assert_eq!(result.words.len(), 2);
        assert_eq!(result.words[0].word, "aku");
        assert_eq!(result.words[0].output(), "ᮃᮊᮥ");
        assert_eq!(result.words[1].units[0].kind, UnitKind::Syllable);
        assert_eq!(result.result, "ᮃᮊᮥ  ᮍᮔ᮪");
    }

    #[test]
    fn explain_empty_input() {
        let table = ScriptTable::global(ScriptVariant::Bali);
        let result = explain(table, "");
        assert!(result.words.is_empty());
        assert_eq!(result.result, "");
    }

    #[test]
    fn format_text_lists_units() {
        let table = ScriptTable::global(ScriptVariant::Sunda);
        let text = format_text(&explain(table, "ngan"));
        assert!(text.starts_with("=== sunda \"ngan\" (1 words) ===\n"));
        assert!(text.contains("nga  Syllable"));
        assert!(text.contains("DeadConsonant"));
        assert!(text.ends_with("Result: ᮍᮔ᮪\n"));
    }

    #[test]
    fn serializes_unit_kinds_in_snake_case() {
        let table = ScriptTable::global(ScriptVariant::Jawa);
        let json = serde_json::to_value(explain(table, "aku")).unwrap();
        assert_eq!(json["script"], "jawa");
        assert_eq!(json["words"][0]["units"][1]["kind"], "syllable_with_sign");
        assert_eq!(json["result"], "ꦄꦏꦸ");
    }
}

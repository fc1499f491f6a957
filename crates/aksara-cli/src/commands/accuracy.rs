//! Regression corpus runner: transliterates each case and compares against
//! the expected output.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use aksara_engine::script::{ScriptTable, ScriptVariant};
use aksara_engine::transliterate::transliterate_with;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {msg}")]
    Io { path: String, msg: String },
    #[error("failed to parse corpus TOML: {0}")]
    Parse(String),
    #[error("no cases match the given filters")]
    NoCases,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub script: ScriptVariant,
    pub input: String,
    pub expected: String,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub script: ScriptVariant,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

#[derive(Debug, Default)]
pub struct CaseFilter {
    pub script: Option<ScriptVariant>,
    pub category: Option<String>,
}

impl CaseFilter {
    fn matches(&self, case: &AccuracyCase) -> bool {
        if let Some(script) = self.script {
            if case.script != script {
                return false;
            }
        }
        if let Some(ref cat) = self.category {
            if case.category != *cat {
                return false;
            }
        }
        true
    }
}

pub fn parse_corpus(content: &str) -> Result<AccuracyCorpus, CorpusError> {
    toml::from_str(content).map_err(|e| CorpusError::Parse(e.to_string()))
}

pub fn load_corpus(path: &Path) -> Result<AccuracyCorpus, CorpusError> {
    let content = fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        msg: e.to_string(),
    })?;
    parse_corpus(&content)
}

pub fn run_accuracy(
    corpus: &AccuracyCorpus,
    filter: &CaseFilter,
) -> Result<AccuracyReport, CorpusError> {
    let cases: Vec<&AccuracyCase> = corpus.cases.iter().filter(|c| filter.matches(c)).collect();
    if cases.is_empty() {
        return Err(CorpusError::NoCases);
    }

    let results: Vec<AccuracyResult> = cases
        .into_iter()
        .map(|case| {
            let (actual, status) = if case.skip {
                (String::new(), AccuracyStatus::Skip)
            } else {
                let actual = transliterate_with(ScriptTable::global(case.script), &case.input);
                let status = if actual == case.expected {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };
                (actual, status)
            };
            AccuracyResult {
                script: case.script,
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
                status,
                category: case.category.clone(),
                note: case.note.clone(),
            }
        })
        .collect();

    let summary = summarize(&results);
    Ok(AccuracyReport { results, summary })
}

fn summarize(results: &[AccuracyResult]) -> AccuracySummary {
    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let total = results.len();
    let pass = count(AccuracyStatus::Pass);
    let fail = count(AccuracyStatus::Fail);
    let skip = count(AccuracyStatus::Skip);
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    AccuracySummary {
        total,
        pass,
        fail,
        skip,
        pass_rate: format!("{:.1}%", rate),
    }
}

/// Human-readable report grouped by category. Passing cases only with `verbose`.
pub fn format_report(report: &AccuracyReport, verbose: bool) -> String {
    let mut out = String::new();

    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(&r.category).or_default().push(r);
    }

    for (cat, group) in &grouped {
        out.push_str(&format!("\n=== {} ({} cases) ===\n", cat, group.len()));
        for r in group {
            match r.status {
                AccuracyStatus::Pass => {
                    if verbose {
                        out.push_str(&format!(
                            "  \u{2713} [{}] {} \u{2192} {}\n",
                            r.script, r.input, r.expected
                        ));
                    }
                }
                AccuracyStatus::Fail => {
                    out.push_str(&format!(
                        "  \u{2717} [{}] {} \u{2192} {} (expected {})\n",
                        r.script, r.input, r.actual, r.expected
                    ));
                }
                AccuracyStatus::Skip => {
                    let note = r.note.as_deref().unwrap_or("");
                    out.push_str(&format!("  - [{}] {} skipped {}\n", r.script, r.input, note));
                }
            }
        }
    }

    let s = &report.summary;
    out.push_str(&format!(
        "\nTotal: {}  Pass: {}  Fail: {}  Skip: {}  ({})\n",
        s.total, s.pass, s.fail, s.skip, s.pass_rate
    ));
    out
}

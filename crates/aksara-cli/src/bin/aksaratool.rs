use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use aksara_cli::commands::accuracy::{format_report, load_corpus, run_accuracy, CaseFilter};
use aksara_cli::commands::{config_ops, convert_ops};
use aksara_engine::api;
use aksara_engine::script::ScriptVariant;
use aksara_engine::settings::settings;

#[derive(Parser)]
#[command(name = "aksaratool", about = "Latin to Aksara Bali/Sunda/Jawa transliteration tool")]
struct Cli {
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Custom script table, repeatable
    #[arg(long = "table", global = true, value_name = "SCRIPT=FILE")]
    tables: Vec<String>,
    /// Write JSON-lines traces to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (arguments, or stdin lines when none are given)
    Transliterate {
        /// Target script (bali, sunda, jawa); defaults to settings
        #[arg(short, long, value_parser = parse_script)]
        script: Option<ScriptVariant>,
        /// Print the JSON response envelope
        #[arg(long)]
        json: bool,
        /// Text to transliterate
        text: Vec<String>,
    },
    /// Show every transduction decision for a text
    Explain {
        #[arg(short, long, value_parser = parse_script)]
        script: Option<ScriptVariant>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        text: String,
    },
    /// Morse code encode/decode
    Morse {
        #[command(subcommand)]
        action: MorseAction,
    },
    /// Export or validate script tables
    Table {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Run transliteration accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: PathBuf,
        /// Only run cases for this script
        #[arg(short, long, value_parser = parse_script)]
        script: Option<ScriptVariant>,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum MorseAction {
    Encode {
        #[arg(long)]
        json: bool,
        text: String,
    },
    Decode {
        #[arg(long)]
        json: bool,
        code: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default table
    Export {
        #[arg(value_parser = parse_script)]
        script: ScriptVariant,
    },
    /// Check a custom table file
    Validate {
        #[arg(value_parser = parse_script)]
        script: ScriptVariant,
        file: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the embedded default settings
    Export,
    /// Check a custom settings file
    Validate { file: String },
}

fn parse_script(s: &str) -> Result<ScriptVariant, String> {
    s.parse().map_err(|e: aksara_engine::transliterate::TransliterateError| e.to_string())
}

fn load_configs(cli: &Cli) {
    if let Some(ref dir) = cli.trace_dir {
        api::trace_init(dir);
    }
    if let Some(ref path) = cli.settings {
        api::settings_load_config(path).unwrap_or_else(|e| {
            eprintln!("Failed to load settings {}: {}", path.display(), e);
            process::exit(1);
        });
    }
    for entry in &cli.tables {
        let Some((script, file)) = entry.split_once('=') else {
            eprintln!("Invalid --table value {entry:?}, expected SCRIPT=FILE");
            process::exit(1);
        };
        api::script_load_config(script, Path::new(file)).unwrap_or_else(|e| {
            eprintln!("Failed to load table {}: {}", file, e);
            process::exit(1);
        });
    }
}

fn main() {
    let cli = Cli::parse();
    load_configs(&cli);
    let default_script = || settings().transliterate.default_script;

    match cli.command {
        Command::Transliterate { script, json, text } => {
            convert_ops::transliterate_cmd(script.unwrap_or_else(default_script), &text, json);
        }

        Command::Explain { script, json, text } => {
            convert_ops::explain_cmd(script.unwrap_or_else(default_script), &text, json);
        }

        Command::Morse { action } => match action {
            MorseAction::Encode { json, text } => convert_ops::morse_encode_cmd(&text, json),
            MorseAction::Decode { json, code } => convert_ops::morse_decode_cmd(&code, json),
        },

        Command::Table { action } => match action {
            ConfigAction::Export { script } => config_ops::table_export(script),
            ConfigAction::Validate { script, file } => config_ops::table_validate(script, &file),
        },

        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },

        Command::Accuracy {
            corpus_file,
            script,
            category,
            verbose,
            json,
        } => {
            let corpus = load_corpus(&corpus_file).unwrap_or_else(|e| {
                eprintln!("{}", e);
                process::exit(1);
            });
            let filter = CaseFilter { script, category };
            let report = run_accuracy(&corpus, &filter).unwrap_or_else(|e| {
                eprintln!("{}", e);
                process::exit(1);
            });

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else {
                print!("{}", format_report(&report, verbose));
            }

            if report.summary.fail > 0 {
                process::exit(1);
            }
        }
    }
}

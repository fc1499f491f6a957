use std::io::{self, BufRead};
use std::process;

use aksara_engine::explain::{explain, format_text};
use aksara_engine::script::{ScriptTable, ScriptVariant};
use aksara_engine::{decode_morse_request, encode_morse_request, transliterate_request, Response};

/// Transliterate each argument, or each stdin line when `texts` is empty.
pub fn transliterate_cmd(script: ScriptVariant, texts: &[String], json: bool) {
    let emit = |text: &str| {
        let response = transliterate_request(Some(text), Some(script.name()));
        print_response(&response, json);
    };

    if texts.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.unwrap_or_else(|e| {
                eprintln!("Failed to read line: {}", e);
                process::exit(1);
            });
            emit(&line);
        }
    } else {
        for text in texts {
            emit(text);
        }
    }
}

pub fn explain_cmd(script: ScriptVariant, text: &str, json: bool) {
    let result = explain(ScriptTable::global(script), text);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("JSON serialization failed")
        );
    } else {
        print!("{}", format_text(&result));
    }
}

pub fn morse_encode_cmd(text: &str, json: bool) {
    print_response(&encode_morse_request(Some(text)), json);
}

pub fn morse_decode_cmd(code: &str, json: bool) {
    print_response(&decode_morse_request(Some(code)), json);
}

fn print_response(response: &Response, json: bool) {
    if json {
        println!("{}", response.to_json());
        return;
    }
    match &response.data.result {
        Some(result) if response.is_ok() => println!("{result}"),
        _ => {
            eprintln!("Error: {}", response.message);
            process::exit(1);
        }
    }
}

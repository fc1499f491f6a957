//! Request-handler layer: JSON envelopes and config loading for HTTP or CLI callers.

mod types;


pub use types::{AksaraError, Response, ResponseData, STATUS_BAD_REQUEST, STATUS_OK};

use std::path::Path;

use tracing::debug;

use crate::morse;
use crate::script::{ScriptTable, ScriptVariant};
use crate::settings::settings;
use crate::transliterate::{transliterate, TransliterateError};

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Transliterate `text` into `script` (or the configured default script).
pub fn transliterate_request(text: Option<&str>, script: Option<&str>) -> Response {
    let variant = match script {
        Some(name) => match name.parse::<ScriptVariant>() {
            Ok(v) => v,
            Err(e) => return Response::bad_request(e.to_string()),
        },
        None => settings().transliterate.default_script,
    };
    let response = Response::from(transliterate(text, variant));
    debug!(script = variant.name(), status = response.status);
    response
}

pub fn encode_morse_request(text: Option<&str>) -> Response {
    match text {
        Some(text) => Response::ok(morse::encode(text)),
        None => Response::bad_request(TransliterateError::MissingInput.to_string()),
    }
}

pub fn decode_morse_request(code: Option<&str>) -> Response {
    match code {
        Some(code) => Response::ok(morse::decode(code)),
        None => Response::bad_request("No morse provided"),
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install a custom table for `script` from a TOML file. Must run before
/// the first transliteration in that script.
pub fn script_load_config(script: &str, path: &Path) -> Result<(), AksaraError> {
    let variant = parse_script(script)?;
    let content = read_config(path)?;
    ScriptTable::init_custom(variant, content)
        .map_err(|e| AksaraError::InvalidData { msg: e.to_string() })
}

pub fn script_default_config(script: &str) -> Result<String, AksaraError> {
    let variant = parse_script(script)?;
    Ok(crate::script::default_toml(variant).to_string())
}

pub fn settings_load_config(path: &Path) -> Result<(), AksaraError> {
    let content = read_config(path)?;
    crate::settings::init_custom(content)
        .map_err(|e| AksaraError::InvalidData { msg: e.to_string() })
}

pub fn settings_default_config() -> String {
    crate::settings::DEFAULT_SETTINGS_TOML.to_string()
}

pub fn trace_init(log_dir: &Path) {
    crate::trace_init::init_tracing(log_dir);
}

fn parse_script(script: &str) -> Result<ScriptVariant, AksaraError> {
    script
        .parse()
        .map_err(|e: TransliterateError| AksaraError::InvalidData { msg: e.to_string() })
}

fn read_config(path: &Path) -> Result<String, AksaraError> {
    std::fs::read_to_string(path).map_err(|e| AksaraError::Io {
        msg: format!("{}: {e}", path.display()),
    })
}

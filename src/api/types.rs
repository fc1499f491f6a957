use serde::Serialize;

use aksara_core::transliterate::TransliterateError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum AksaraError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// `{"status": .., "message": .., "data": {..}}` as returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: u16,
    pub message: String,
    pub data: ResponseData,
}

/// Empty (`{}`) on errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Response {
    pub fn ok(result: String) -> Self {
        Self {
            status: STATUS_OK,
            message: String::new(),
            data: ResponseData {
                result: Some(result),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            message: message.into(),
            data: ResponseData::default(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn to_json(&self) -> String {
        // Only strings and integers: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<Result<String, TransliterateError>> for Response {
    fn from(result: Result<String, TransliterateError>) -> Self {
        match result {
            Ok(text) => Response::ok(text),
            Err(e) => Response::bad_request(e.to_string()),
        }
    }
}

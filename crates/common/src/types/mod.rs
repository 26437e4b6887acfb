use serde::{Deserialize, Serialize};

/// `{status_code, status_message}` body used for acknowledgments and errors.
/// The code is carried as a string mirroring the HTTP status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusEnvelope {
    pub status_code: String,
    pub status_message: String,
}

impl StatusEnvelope {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self { status_code: code.to_string(), status_message: message.into() }
    }

    pub fn ok() -> Self {
        Self::new(200, "OK")
    }
}

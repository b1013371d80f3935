use serde_json::Value;

pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// The one error surfaced to users: a display message plus the HTTP status
/// when the server answered at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
    pub status: Option<u16>,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_ERROR_MESSAGE)
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds the error for a non-2xx response from its (optional) JSON body.
    #[must_use]
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        let message = body
            .and_then(detail_message)
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        Self::new(message).with_status(status)
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

/// Extracts the server-provided `detail` message.
///
/// Plain string details are used as-is. Validation failures carry a list of
/// `{ "msg": ... }` objects; their messages are joined with `"; "`.
#[must_use]
pub fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) => non_empty(detail),
        Value::Array(entries) => {
            let messages = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .filter_map(non_empty)
                .collect::<Vec<_>>();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

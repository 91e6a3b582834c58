//! Client error types and server error classification

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Structured error code the backend uses for stock rejections
const STOCK_ERROR_CODE: &str = "INSUFFICIENT_STOCK";

/// Errors produced by API calls
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: connection, TLS, timeout, or body decoding
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{message}")]
    Api {
        status: StatusCode,
        /// Structured error code, when the backend provides one
        code: Option<String>,
        message: String,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
        }
    }

    /// Whether a rejection is about stock availability.
    ///
    /// The structured `code` field decides when present. Otherwise falls
    /// back to keyword matching on the free-text message ("stock", or
    /// "stok" from backends still answering in Indonesian). The keyword
    /// fallback is fragile and kept only for backends without structured
    /// codes.
    pub fn is_stock_related(&self) -> bool {
        match self {
            ClientError::Api { code: Some(code), .. } => code == STOCK_ERROR_CODE,
            ClientError::Api { message, .. } => {
                let message = message.to_lowercase();
                message.contains("stock") || message.contains("stok")
            }
            ClientError::Transport(_) => false,
        }
    }
}

/// Error payload shapes the backend is known to produce
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorField>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Detail {
        code: Option<String>,
        message: Option<String>,
    },
    Text(String),
}

/// Build a [`ClientError::Api`] from a non-success response body.
///
/// Accepts `{"error": {"code", "message"}}`, `{"error": "text"}`,
/// `{"message": "text"}`, and plain text; anything unparseable falls back
/// to the raw body.
pub(crate) fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        match parsed.error {
            Some(ErrorField::Detail { code, message }) => {
                return ClientError::Api {
                    status,
                    code,
                    message: message.unwrap_or_else(|| fallback_message(status)),
                };
            }
            Some(ErrorField::Text(message)) => {
                return ClientError::Api {
                    status,
                    code: None,
                    message,
                };
            }
            None => {
                if let Some(message) = parsed.message {
                    return ClientError::Api {
                        status,
                        code: None,
                        message,
                    };
                }
            }
        }
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    ClientError::Api {
        status,
        code: None,
        message: if text.is_empty() {
            fallback_message(status)
        } else {
            text
        },
    }
}

fn fallback_message(status: StatusCode) -> String {
    format!("server returned {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: Option<&str>, message: &str) -> ClientError {
        ClientError::Api {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: code.map(str::to_string),
            message: message.to_string(),
        }
    }

    #[test]
    fn structured_stock_code_is_classified() {
        assert!(api(Some("INSUFFICIENT_STOCK"), "not enough of product 3").is_stock_related());
    }

    #[test]
    fn structured_non_stock_code_is_not_classified() {
        // The code wins over keyword sniffing when present
        assert!(!api(Some("VALIDATION_ERROR"), "stock field missing").is_stock_related());
    }

    #[test]
    fn keyword_fallback_matches_free_text() {
        assert!(api(None, "Insufficient STOCK for Widget").is_stock_related());
        assert!(api(None, "stok tidak cukup").is_stock_related());
        assert!(!api(None, "store not found").is_stock_related());
    }

    #[test]
    fn parses_structured_error_body() {
        let body = br#"{"error": {"code": "INSUFFICIENT_STOCK", "message": "not enough Widget"}}"#;
        let err = api_error(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert!(err.is_stock_related());
        assert_eq!(err.to_string(), "not enough Widget");
    }

    #[test]
    fn parses_flat_error_string_body() {
        let err = api_error(StatusCode::BAD_REQUEST, br#"{"error": "bad order"}"#);
        assert_eq!(err.to_string(), "bad order");
        assert!(!err.is_stock_related());
    }

    #[test]
    fn parses_message_field_body() {
        let err = api_error(StatusCode::BAD_REQUEST, br#"{"message": "stok habis"}"#);
        assert_eq!(err.to_string(), "stok habis");
        assert!(err.is_stock_related());
    }

    #[test]
    fn falls_back_to_raw_text_body() {
        let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, b"boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn empty_body_reports_the_status() {
        let err = api_error(StatusCode::BAD_GATEWAY, b"");
        assert_eq!(err.to_string(), "server returned 502 Bad Gateway");
    }
}

//! API response envelope and error normalization
//!
//! Every endpoint answers with the same JSON envelope:
//! `{status: "success" | "error", message, data, pagination?}`.
//! Transport failures, non-2xx statuses and `status: "error"` bodies are all
//! folded into [`ApiError`], whose `Display` is the message shown to the user.

use super::pagination::Pagination;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Uniform response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Successful envelope with the status stripped
#[derive(Debug, Clone, PartialEq)]
pub struct ApiPayload<T> {
    pub data: Option<T>,
    pub message: String,
    pub pagination: Option<Pagination>,
}

impl<T> ApiPayload<T> {
    /// Data is mandatory for fetch-by-id / create / update
    pub fn require_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Decode("response carries no data".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("HTTP {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Application(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Decode a raw HTTP response body into a payload or an error
pub fn decode_envelope<T: DeserializeOwned>(
    http_ok: bool,
    http_status: u16,
    body: &str,
) -> Result<ApiPayload<T>, ApiError> {
    // 204 No Content and other bodiless successes
    if http_ok && body.trim().is_empty() {
        return Ok(ApiPayload {
            data: None,
            message: String::new(),
            pagination: None,
        });
    }

    let parsed = serde_json::from_str::<ApiEnvelope<T>>(body);

    match parsed {
        Ok(envelope) if envelope.status == ApiStatus::Error || !http_ok => {
            let message = if envelope.message.trim().is_empty() {
                format!("HTTP {}", http_status)
            } else {
                envelope.message
            };
            Err(ApiError::Application(message))
        }
        Ok(envelope) => Ok(ApiPayload {
            data: envelope.data,
            message: envelope.message,
            pagination: envelope.pagination,
        }),
        Err(e) => Err(error_from_body(http_ok, http_status, body, e)),
    }
}

/// Body that is not a `T` envelope. An `{status: "error", message}` body whose
/// data has another shape still yields its message.
fn error_from_body(
    http_ok: bool,
    http_status: u16,
    body: &str,
    parse_error: serde_json::Error,
) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        status: Option<ApiStatus>,
        #[serde(default)]
        message: String,
    }

    let error_body = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .filter(|b| !b.message.trim().is_empty());

    match error_body {
        Some(b) if !http_ok || b.status == Some(ApiStatus::Error) => {
            ApiError::Application(b.message)
        }
        _ if !http_ok => ApiError::Http {
            status: http_status,
        },
        _ => ApiError::Decode(parse_error.to_string()),
    }
}

/// Query for paged list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new(page: usize, search: &str, size: usize) -> Self {
        let search = search.trim();
        Self {
            page: page.max(1),
            size: size.max(1),
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
        }
    }
}

/// List-with-pagination result of a fetch_list operation
#[derive(Debug, Clone, PartialEq)]
pub struct ListPayload<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_success_list_envelope() {
        let body = r#"{"status":"success","message":"ok","data":[{"id":1},{"id":2}],
            "pagination":{"currentPage":1,"totalPages":4,"totalItems":38}}"#;
        let payload = decode_envelope::<Vec<Item>>(true, 200, body).unwrap();
        assert_eq!(payload.data.unwrap().len(), 2);
        assert_eq!(payload.pagination.unwrap().total_items, 38);
    }

    #[test]
    fn test_error_status_in_envelope() {
        let body = r#"{"status":"error","message":"Discount code expired","data":null}"#;
        let err = decode_envelope::<Item>(true, 200, body).unwrap_err();
        assert_eq!(err, ApiError::Application("Discount code expired".into()));
        assert_eq!(err.to_string(), "Discount code expired");
    }

    #[test]
    fn test_non_2xx_with_envelope_uses_message() {
        let body = r#"{"status":"error","message":"Tag not found"}"#;
        let err = decode_envelope::<Item>(false, 404, body).unwrap_err();
        assert_eq!(err.to_string(), "Tag not found");
    }

    #[test]
    fn test_non_2xx_with_mismatched_data_still_uses_message() {
        let body = r#"{"status":"error","message":"Validation failed","data":{"name":"required"}}"#;
        let err = decode_envelope::<Vec<Item>>(false, 400, body).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed");
    }

    #[test]
    fn test_empty_success_body_has_no_data() {
        let payload = decode_envelope::<serde_json::Value>(true, 204, "").unwrap();
        assert!(payload.data.is_none());
        assert!(payload.pagination.is_none());

        let payload = decode_envelope::<Item>(true, 200, "  \n").unwrap();
        assert!(payload.data.is_none());
    }

    #[test]
    fn test_non_2xx_without_body() {
        let err = decode_envelope::<Item>(false, 502, "Bad Gateway").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 502 });
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_2xx_with_garbage_is_decode_error() {
        let err = decode_envelope::<Item>(true, 200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_require_data() {
        let body = r#"{"status":"success","message":"deleted"}"#;
        let payload = decode_envelope::<Item>(true, 200, body).unwrap();
        assert_eq!(payload.message, "deleted");
        assert!(payload.require_data().is_err());
    }

    #[test]
    fn test_list_query_normalizes_input() {
        let q = ListQuery::new(0, "   ", 0);
        assert_eq!(q.page, 1);
        assert_eq!(q.size, 1);
        assert_eq!(q.search, None);

        let q = ListQuery::new(3, " shoes ", 12);
        assert_eq!(q.search.as_deref(), Some("shoes"));
    }
}

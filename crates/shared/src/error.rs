use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Unauthorized,
    Forbidden,
    Validation,
    RateLimited,
    Internal,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ErrorCode::Unauthorized,
            403 => ErrorCode::Forbidden,
            400 | 409 | 422 => ErrorCode::Validation,
            429 => ErrorCode::RateLimited,
            _ => ErrorCode::Internal,
        }
    }
}

/// Error body returned by the API server (`{"detail": "..."}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "detail_as_text")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn parse(raw: &[u8]) -> Self {
        serde_json::from_slice(raw).unwrap_or_default()
    }
}

// Validation failures carry a list of objects instead of a string.
fn detail_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn from_response(status: u16, raw_body: &[u8]) -> Self {
        let body = ErrorBody::parse(raw_body);
        Self {
            code: ErrorCode::from_status(status),
            message: body.detail.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_detail() {
        let err = ApiError::from_response(400, r#"{"detail":"Email già registrata"}"#.as_bytes());
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.message, "Email già registrata");
    }

    #[test]
    fn tolerates_missing_or_structured_detail() {
        assert!(ErrorBody::parse(b"not json").detail.is_none());
        assert!(ErrorBody::parse(b"{}").detail.is_none());
        let structured = ErrorBody::parse(br#"{"detail":[{"loc":["body","plan"]}]}"#);
        assert!(structured.detail.expect("detail").contains("plan"));
    }
}

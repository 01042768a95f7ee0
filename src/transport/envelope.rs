use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::domain::{ErrorResponse, ResponseParameters, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has ok=true but no result")]
    MissingResult,

    #[error("response contains unknown mask point: {value}")]
    UnknownMaskPoint { value: String },

    #[error("response contains an invalid value: {0}")]
    Validation(#[from] ValidationError),
}

/// Decoded `{ ok, result }` envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Ok(T),
    Failed(ErrorResponse),
}

impl<T> Reply<T> {
    pub fn try_map<U>(
        self,
        f: impl FnOnce(T) -> Result<U, TransportError>,
    ) -> Result<Reply<U>, TransportError> {
        match self {
            Self::Ok(value) => Ok(Reply::Ok(f(value)?)),
            Self::Failed(error) => Ok(Reply::Failed(error)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct JsonEnvelope<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    error_code: Option<i32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Option<ResponseParametersJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseParametersJson {
    #[serde(default)]
    migrate_to_chat_id: Option<i64>,
    #[serde(default)]
    retry_after: Option<u64>,
}

impl From<ResponseParametersJson> for ResponseParameters {
    fn from(value: ResponseParametersJson) -> Self {
        Self {
            migrate_to_chat_id: value.migrate_to_chat_id,
            retry_after: value.retry_after,
        }
    }
}

fn error_response<T>(envelope: JsonEnvelope<T>) -> ErrorResponse {
    ErrorResponse {
        error_code: envelope.error_code,
        description: envelope.description,
        parameters: envelope.parameters.map(ResponseParameters::from),
    }
}

pub fn decode_envelope<T: DeserializeOwned>(json: &str) -> Result<Reply<T>, TransportError> {
    let mut parsed: JsonEnvelope<T> = serde_json::from_str(json)?;
    if !parsed.ok {
        return Ok(Reply::Failed(error_response(parsed)));
    }
    match parsed.result.take() {
        Some(result) => Ok(Reply::Ok(result)),
        None => Err(TransportError::MissingResult),
    }
}

/// Extract an `ok: false` envelope from a body of unknown shape.
///
/// Returns `None` when the body is not JSON or reports `ok: true`.
pub fn decode_error_envelope(json: &str) -> Option<ErrorResponse> {
    let parsed: JsonEnvelope<IgnoredAny> = serde_json::from_str(json).ok()?;
    if parsed.ok {
        return None;
    }
    Some(error_response(parsed))
}

pub fn decode_bool_json_response(json: &str) -> Result<Reply<bool>, TransportError> {
    decode_envelope::<bool>(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_bool_returns_literal_result() {
        assert_eq!(
            decode_bool_json_response(r#"{"ok":true,"result":true}"#).unwrap(),
            Reply::Ok(true)
        );
        assert_eq!(
            decode_bool_json_response(r#"{"ok":true,"result":false}"#).unwrap(),
            Reply::Ok(false)
        );
    }

    #[test]
    fn decode_failed_envelope_keeps_error_fields() {
        let json = r#"
        {
          "ok": false,
          "error_code": 429,
          "description": "Too Many Requests: retry after 5",
          "parameters": { "retry_after": 5 }
        }
        "#;

        let reply = decode_bool_json_response(json).unwrap();
        assert_eq!(
            reply,
            Reply::Failed(ErrorResponse {
                error_code: Some(429),
                description: Some("Too Many Requests: retry after 5".to_owned()),
                parameters: Some(ResponseParameters {
                    migrate_to_chat_id: None,
                    retry_after: Some(5),
                }),
            })
        );
    }

    #[test]
    fn decode_ok_without_result_is_an_error() {
        let err = decode_bool_json_response(r#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, TransportError::MissingResult));
    }

    #[test]
    fn decode_invalid_json_is_an_error() {
        let err = decode_bool_json_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_wrong_result_type_is_an_error() {
        let err = decode_bool_json_response(r#"{"ok":true,"result":"yes"}"#).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_error_envelope_ignores_success_and_garbage() {
        assert_eq!(decode_error_envelope(r#"{"ok":true,"result":{}}"#), None);
        assert_eq!(decode_error_envelope("<html>Bad Gateway</html>"), None);

        let error = decode_error_envelope(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: STICKERSET_INVALID"}"#,
        )
        .unwrap();
        assert_eq!(error.error_code, Some(400));
        assert_eq!(
            error.description.as_deref(),
            Some("Bad Request: STICKERSET_INVALID")
        );
        assert_eq!(error.parameters, None);
    }

    #[test]
    fn try_map_passes_failures_through() {
        let failed: Reply<bool> = Reply::Failed(ErrorResponse::default());
        let mapped = failed.try_map(|value| Ok(u8::from(value))).unwrap();
        assert_eq!(mapped, Reply::Failed(ErrorResponse::default()));

        let ok: Reply<bool> = Reply::Ok(true);
        assert_eq!(ok.try_map(|value| Ok(u8::from(value))).unwrap(), Reply::Ok(1));
    }
}

//! Response envelope handling for the console backend.
//!
//! Successful responses are usually wrapped as
//! `{ "success": true, "data": ..., "message": "..." }`, but some endpoints
//! return the bare payload. Error bodies carry a message under `message`,
//! `detail` or `error`, and field errors either under `errors` or as a
//! top-level `{ "field": ["message", ...] }` map.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value as Json;

use crate::error::ApiError;
use crate::error::FieldValidationError;

/// Wrapped API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend considers the call successful.
    pub success: bool,
    /// The payload; absent on failures.
    pub data: Option<T>,
    /// Optional human-readable message.
    pub message: Option<String>,
    /// Optional field errors.
    pub errors: Option<Json>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Enveloped(ApiResponse<T>),
    Bare(T),
}

const MESSAGE_KEYS: [&str; 4] = ["message", "detail", "error", "non_field_errors"];

/// Decodes a successful response body, unwrapping the envelope if present.
///
/// An envelope with `success: false` is turned into an error even when the
/// HTTP status was 2xx.
pub fn decode_payload<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let payload: Payload<T> = serde_json::from_str(body)
        .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;

    match payload {
        Payload::Enveloped(response) if !response.success => Err(ApiError::Http {
            status,
            message: response.message,
            field_errors: response
                .errors
                .as_ref()
                .map(field_errors_from)
                .unwrap_or_default(),
        }),
        Payload::Enveloped(ApiResponse { data: Some(data), .. }) => Ok(data),
        Payload::Enveloped(_) => Err(ApiError::parse_with_body("response envelope has no data", body)),
        Payload::Bare(data) => Ok(data),
    }
}

/// Builds an [`ApiError`] from a non-2xx response body.
///
/// Bodies that are not JSON keep the status only; the raw text is never
/// surfaced as a user-facing message.
pub fn decode_error(status: u16, body: &str) -> ApiError {
    let Ok(Json::Object(object)) = serde_json::from_str::<Json>(body) else {
        return ApiError::http(status);
    };

    let message = MESSAGE_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(first_text));

    let field_errors = match object.get("errors") {
        Some(errors) => field_errors_from(errors),
        None if message.is_none() => field_errors_from_map(&object),
        None => Vec::new(),
    };

    ApiError::Http {
        status,
        message,
        field_errors,
    }
}

fn field_errors_from(errors: &Json) -> Vec<FieldValidationError> {
    match errors {
        Json::Object(map) => field_errors_from_map(map),
        other => first_text(other)
            .map(|message| vec![FieldValidationError::new("", message)])
            .unwrap_or_default(),
    }
}

fn field_errors_from_map(map: &Map<String, Json>) -> Vec<FieldValidationError> {
    map.iter()
        .filter(|(field, _)| !MESSAGE_KEYS.contains(&field.as_str()))
        .filter_map(|(field, value)| {
            first_text(value).map(|message| FieldValidationError::new(field.clone(), message))
        })
        .collect()
}

fn first_text(value: &Json) -> Option<String> {
    match value {
        Json::String(s) => Some(s.clone()),
        Json::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        id: i64,
        name: String,
    }

    #[test]
    fn test_decode_enveloped_payload() {
        let body = r#"{"success": true, "data": [{"id": 1, "name": "a"}], "message": "ok"}"#;
        let rows: Vec<Named> = decode_payload(200, body).unwrap();
        assert_eq!(rows, vec![Named { id: 1, name: "a".into() }]);
    }

    #[test]
    fn test_envelope_without_message_or_errors() {
        let body = r#"{"success": true, "data": {"id": 3, "name": "c"}}"#;
        let row: Named = decode_payload(200, body).unwrap();
        assert_eq!(row, Named { id: 3, name: "c".into() });

        let body = r#"{"success": true}"#;
        let err = decode_payload::<Named>(200, body).unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }));
    }

    #[test]
    fn test_decode_bare_payload() {
        let body = r#"{"id": 2, "name": "b"}"#;
        let row: Named = decode_payload(201, body).unwrap();
        assert_eq!(row.id, 2);
    }

    #[test]
    fn test_unsuccessful_envelope_is_an_error() {
        let body = r#"{"success": false, "message": "duplicate"}"#;
        let err = decode_payload::<Named>(200, body).unwrap_err();
        assert_eq!(err.server_message(), Some("duplicate"));
        assert_eq!(err.status_code(), Some(200));
    }

    #[test]
    fn test_decode_payload_reports_parse_errors() {
        let err = decode_payload::<Named>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Parse { body: Some(_), .. }));
    }

    #[test]
    fn test_decode_error_message_keys() {
        let err = decode_error(404, r#"{"detail": "Not found."}"#);
        assert_eq!(err.server_message(), Some("Not found."));

        let err = decode_error(400, r#"{"error": "bad scope"}"#);
        assert_eq!(err.server_message(), Some("bad scope"));
    }

    #[test]
    fn test_decode_error_field_errors() {
        let err = decode_error(
            400,
            r#"{"success": false, "message": "Validation failed", "errors": {"barcode": ["Barcode already exists."]}}"#,
        );
        assert_eq!(err.server_message(), Some("Validation failed"));
        assert_eq!(err.field_errors()[0].field, "barcode");
        assert_eq!(err.field_errors()[0].message, "Barcode already exists.");
    }

    #[test]
    fn test_decode_error_top_level_field_map() {
        let err = decode_error(400, r#"{"name": ["This field is required."]}"#);
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.server_message(), Some("This field is required."));
    }

    #[test]
    fn test_decode_error_non_json_body() {
        let err = decode_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status_code(), Some(502));
        assert!(err.server_message().is_none());
    }
}

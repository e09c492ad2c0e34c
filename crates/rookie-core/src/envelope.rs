use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wrapper the stock service uses for both successful and failed responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ApiErrorBody) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }

    /// Human-readable upstream message, if the service supplied a non-empty one.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|error| error.message.as_deref())
            .filter(|message| !message.is_empty())
    }

    /// Machine code from the error body (`error.error`).
    pub fn error_code(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(|error| error.error.as_str())
            .filter(|code| !code.is_empty())
    }

    /// Payload of a well-formed success envelope.
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

impl ApiEnvelope<Value> {
    /// Read an envelope from any JSON value.
    ///
    /// Fields with an unexpected type count as absent, so a body like
    /// `{"error":"Not Found"}` still yields an envelope. `data: null` is absent.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self {
                success: false,
                data: None,
                error: None,
            };
        };

        Self {
            success: fields.get("success").and_then(Value::as_bool).unwrap_or(false),
            data: fields.remove("data").filter(|data| !data.is_null()),
            error: fields.get("error").and_then(ApiErrorBody::from_value),
        }
    }
}

/// Error object embedded in a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine code, e.g. `"Not Found"` or `"NOT_FOUND"`.
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Redundant copy of the HTTP status.
    #[serde(default)]
    pub code: u16,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>, message: Option<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            message,
            code,
        }
    }

    /// Lenient counterpart of `Deserialize`: `None` unless `value` is an object.
    fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_owned);

        Some(Self {
            error: text("error").unwrap_or_default(),
            message: text("message"),
            code: fields
                .get("code")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_envelope_exposes_message_and_code() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(
            r#"{"success":false,"error":{"error":"NOT_FOUND","message":"not found","code":404}}"#,
        )
        .expect("envelope should parse");

        assert_eq!(envelope.error_message(), Some("not found"));
        assert_eq!(envelope.error_code(), Some("NOT_FOUND"));
        assert!(envelope.into_data().is_none());
    }

    #[test]
    fn bare_failure_envelope_has_no_message() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":false}"#).expect("envelope should parse");

        assert_eq!(envelope.error_message(), None);
        assert_eq!(envelope.error_code(), None);
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let envelope = ApiEnvelope::from_value(json!({
            "success": null,
            "data": null,
            "error": {"error": null, "message": "not found", "code": "404"},
        }));

        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.error_message(), Some("not found"));
        assert_eq!(envelope.error_code(), None);
        assert_eq!(envelope.error.map(|error| error.code), Some(0));
    }

    #[test]
    fn string_error_is_not_an_error_body() {
        let envelope = ApiEnvelope::from_value(json!({"success": false, "error": "Not Found"}));

        assert_eq!(envelope.error, None);
        assert_eq!(envelope.error_message(), None);
    }

    #[test]
    fn non_object_json_is_an_empty_envelope() {
        let envelope = ApiEnvelope::from_value(json!(["AAPL"]));

        assert_eq!(envelope, ApiEnvelope { success: false, data: None, error: None });
    }

    #[test]
    fn constructed_failure_round_trips_through_lenient_reader() {
        let failure: ApiEnvelope<Value> = ApiEnvelope::failure(ApiErrorBody::new(
            "NOT_FOUND",
            Some(String::from("Stock not found")),
            404,
        ));
        let value = serde_json::to_value(&failure).expect("envelope should serialize");

        assert_eq!(ApiEnvelope::from_value(value), failure);
    }

    #[test]
    fn data_without_success_flag_is_not_trusted() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"data":7}"#).expect("envelope should parse");

        assert!(!envelope.success);
        assert_eq!(envelope.into_data(), None);
    }
}

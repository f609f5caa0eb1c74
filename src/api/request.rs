use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::TestimonialError;

const DEFAULT_METHOD: &str = "GET";
const DEFAULT_BODY: &str = "{}";

/// The parts of an API Gateway proxy event the handler reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: String,
    pub body: String,
    pub is_base64_encoded: bool,
    pub query: HashMap<String, String>,
}

impl Default for ApiRequest {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD.to_string(),
            body: DEFAULT_BODY.to_string(),
            is_base64_encoded: false,
            query: HashMap::new(),
        }
    }
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    /// Reads `httpMethod`, `body`, `isBase64Encoded` and `queryStringParameters`.
    /// Missing or `null` members fall back to `GET`, `"{}"` and an empty map.
    #[must_use]
    pub fn from_event(payload: &Value) -> Self {
        let method = payload
            .get("httpMethod")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_METHOD)
            .to_string();

        let body = payload
            .get("body")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_BODY)
            .to_string();

        let is_base64_encoded = payload
            .get("isBase64Encoded")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let query = payload
            .get("queryStringParameters")
            .and_then(Value::as_object)
            .map(|params| {
                params
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            method,
            body,
            is_base64_encoded,
            query,
        }
    }

    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Decodes the body as a JSON object into `T`.
    ///
    /// # Errors
    ///
    /// Returns `Store` with the decoder's message when the body is not valid
    /// base64 (if flagged), not UTF-8, not JSON, or not an object.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T, TestimonialError> {
        let text = if self.is_base64_encoded {
            String::from_utf8(STANDARD.decode(self.body.as_bytes())?)?
        } else {
            self.body.clone()
        };

        let value: Value = serde_json::from_str(&text)?;
        if !value.is_object() {
            return Err(TestimonialError::Store(
                "request body must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_event_defaults() {
        let req = ApiRequest::from_event(&json!({}));
        assert_eq!(req, ApiRequest::default());
        assert_eq!(req.method, "GET");
        assert_eq!(req.body, "{}");
        assert!(req.query.is_empty());
    }

    #[test]
    fn test_from_event_null_members() {
        let req = ApiRequest::from_event(&json!({
            "httpMethod": "DELETE",
            "body": null,
            "queryStringParameters": null
        }));
        assert_eq!(req.method, "DELETE");
        assert_eq!(req.body, "{}");
        assert_eq!(req.query_param("id"), None);
    }

    #[test]
    fn test_from_event_reads_query() {
        let req = ApiRequest::from_event(&json!({
            "httpMethod": "DELETE",
            "queryStringParameters": {"id": "5", "skip": 1}
        }));
        assert_eq!(req.query_param("id"), Some("5"));
        assert_eq!(req.query_param("skip"), None);
    }

    #[test]
    fn test_json_body_base64() {
        let req = ApiRequest {
            method: "POST".to_string(),
            body: STANDARD.encode(r#"{"clientName":"Acme"}"#),
            is_base64_encoded: true,
            query: HashMap::new(),
        };
        let v: Value = req.json_body().unwrap();
        assert_eq!(v["clientName"], "Acme");
    }

    #[test]
    fn test_json_body_rejects_malformed() {
        let req = ApiRequest::new("POST").with_body("{not json");
        assert!(matches!(
            req.json_body::<Value>(),
            Err(TestimonialError::Store(_))
        ));

        let req = ApiRequest::new("POST").with_body("[1, 2]");
        assert_eq!(
            req.json_body::<Value>(),
            Err(TestimonialError::Store(
                "request body must be a JSON object".to_string()
            ))
        );
    }
}

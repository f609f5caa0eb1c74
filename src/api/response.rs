//! Response envelope returned to API Gateway.
//!
//! Every response carries `Access-Control-Allow-Origin: *`. JSON bodies add a
//! `Content-Type`, preflight responses add the allowed methods and headers.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::errors::TestimonialError;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ApiResponse {
    fn with_headers(status_code: u16, headers: &[(&str, &str)], body: String) -> Self {
        Self {
            status_code,
            headers: headers
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            body,
            is_base64_encoded: false,
        }
    }

    /// 200 with CORS headers only, for `OPTIONS`.
    #[must_use]
    pub fn preflight() -> Self {
        Self::with_headers(
            200,
            &[
                ("Access-Control-Allow-Origin", ALLOW_ORIGIN),
                ("Access-Control-Allow-Methods", ALLOW_METHODS),
                ("Access-Control-Allow-Headers", ALLOW_HEADERS),
            ],
            String::new(),
        )
    }

    /// 204 with an empty body.
    #[must_use]
    pub fn no_content() -> Self {
        Self::with_headers(
            204,
            &[("Access-Control-Allow-Origin", ALLOW_ORIGIN)],
            String::new(),
        )
    }

    /// A JSON body with the given status.
    ///
    /// # Errors
    ///
    /// Returns `Store` if `value` cannot be serialised.
    pub fn json<T: Serialize + ?Sized>(
        status_code: u16,
        value: &T,
    ) -> Result<Self, TestimonialError> {
        let body = serde_json::to_string(value)?;
        Ok(Self::json_text(status_code, body))
    }

    fn json_text(status_code: u16, body: String) -> Self {
        Self::with_headers(
            status_code,
            &[
                ("Content-Type", JSON_CONTENT_TYPE),
                ("Access-Control-Allow-Origin", ALLOW_ORIGIN),
            ],
            body,
        )
    }

    /// `{"error": message}` with the given status.
    #[must_use]
    pub fn error(status_code: u16, message: &str) -> Self {
        Self::json_text(status_code, json!({ "error": message }).to_string())
    }

    #[must_use]
    pub fn from_error(error: &TestimonialError) -> Self {
        Self::error(error.status_code(), &error.to_string())
    }
}

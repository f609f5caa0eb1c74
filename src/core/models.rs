use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::TestimonialError;

pub const DEFAULT_VIDEO_TYPE: &str = "upload";
pub const DEFAULT_SORT_ORDER: i32 = 999;

/// A `video_testimonials` row as returned to callers (snake_case keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct VideoTestimonial {
    pub id: i64,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub video_type: Option<String>,
    pub sort_order: Option<i32>,
}

/// Values written by an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub client_name: String,
    pub description: String,
    pub video_url: String,
    pub video_type: String,
    pub sort_order: i32,
}

/// Values overwritten by an update. `sort_order` is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialChanges {
    pub client_name: String,
    pub description: String,
    pub video_url: String,
    pub video_type: String,
}

/// POST body (camelCase keys). Absent and `null` fields both take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub video_type: Option<String>,
    pub sort_order: Option<i32>,
}

impl CreateTestimonialRequest {
    #[must_use]
    pub fn into_new(self) -> NewTestimonial {
        NewTestimonial {
            client_name: self.client_name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            video_url: self.video_url.unwrap_or_default(),
            video_type: self
                .video_type
                .unwrap_or_else(|| DEFAULT_VIDEO_TYPE.to_string()),
            sort_order: self.sort_order.unwrap_or(DEFAULT_SORT_ORDER),
        }
    }
}

/// PUT body. `id` stays untyped until checked so falsy values can be told apart
/// from malformed ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    pub id: Option<Value>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub video_type: Option<String>,
}

impl UpdateTestimonialRequest {
    /// Splits the body into the target id and the overwritten fields.
    ///
    /// # Errors
    ///
    /// `MissingId` when `id` is absent or falsy, `Store` when it is not an integer.
    pub fn into_parts(self) -> Result<(i64, TestimonialChanges), TestimonialError> {
        let id = match self.id.as_ref() {
            Some(value) => parse_id(value)?,
            None => None,
        }
        .ok_or(TestimonialError::MissingId)?;

        let changes = TestimonialChanges {
            client_name: self.client_name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            video_url: self.video_url.unwrap_or_default(),
            video_type: self
                .video_type
                .unwrap_or_else(|| DEFAULT_VIDEO_TYPE.to_string()),
        };

        Ok((id, changes))
    }
}

/// Interprets a JSON id. Falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`)
/// yield `None`.
///
/// # Errors
///
/// Returns `Store` for values that are present but not an integer.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_id(value: &Value) -> Result<Option<i64>, TestimonialError> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) => {
            if let Some(id) = n.as_i64() {
                return Ok((id != 0).then_some(id));
            }
            match n.as_f64() {
                Some(f) if f == 0.0 => Ok(None),
                Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(Some(f as i64)),
                _ => Err(invalid_id(value)),
            }
        }
        Value::String(s) => parse_query_id(s),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        _ => Err(invalid_id(value)),
    }
}

/// Interprets an id taken from a query string. Empty means absent.
///
/// # Errors
///
/// Returns `Store` when the text is not an integer.
pub fn parse_query_id(raw: &str) -> Result<Option<i64>, TestimonialError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| TestimonialError::Store(format!("invalid testimonial id: {raw}")))
}

fn invalid_id(value: &Value) -> TestimonialError {
    TestimonialError::Store(format!("invalid testimonial id: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults() {
        let req: CreateTestimonialRequest =
            serde_json::from_value(json!({"clientName": "Acme"})).unwrap();
        let new = req.into_new();
        assert_eq!(new.client_name, "Acme");
        assert_eq!(new.description, "");
        assert_eq!(new.video_url, "");
        assert_eq!(new.video_type, "upload");
        assert_eq!(new.sort_order, 999);
    }

    #[test]
    fn test_create_request_nulls_take_defaults() {
        let req: CreateTestimonialRequest = serde_json::from_value(json!({
            "clientName": null,
            "videoType": null,
            "sortOrder": null
        }))
        .unwrap();
        let new = req.into_new();
        assert_eq!(new.client_name, "");
        assert_eq!(new.video_type, "upload");
        assert_eq!(new.sort_order, 999);
    }

    #[test]
    fn test_create_request_ignores_snake_case_keys() {
        let req: CreateTestimonialRequest =
            serde_json::from_value(json!({"client_name": "Acme", "sortOrder": 3})).unwrap();
        let new = req.into_new();
        assert_eq!(new.client_name, "");
        assert_eq!(new.sort_order, 3);
    }

    #[test]
    fn test_update_request_requires_id() {
        let req: UpdateTestimonialRequest =
            serde_json::from_value(json!({"clientName": "Acme"})).unwrap();
        assert_eq!(req.into_parts(), Err(TestimonialError::MissingId));

        let req: UpdateTestimonialRequest = serde_json::from_value(json!({"id": 0})).unwrap();
        assert_eq!(req.into_parts(), Err(TestimonialError::MissingId));
    }

    #[test]
    fn test_update_request_parts() {
        let req: UpdateTestimonialRequest = serde_json::from_value(json!({
            "id": "12",
            "clientName": "Acme",
            "videoType": "youtube",
            "sortOrder": 1
        }))
        .unwrap();
        let (id, changes) = req.into_parts().unwrap();
        assert_eq!(id, 12);
        assert_eq!(changes.client_name, "Acme");
        assert_eq!(changes.video_type, "youtube");
        assert_eq!(changes.description, "");
    }

    #[test]
    fn test_parse_id_falsy_values() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert_eq!(parse_id(&value), Ok(None), "{value} should be falsy");
        }
    }

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id(&json!(7)), Ok(Some(7)));
        assert_eq!(parse_id(&json!(7.0)), Ok(Some(7)));
        assert_eq!(parse_id(&json!("42")), Ok(Some(42)));
        assert_eq!(parse_id(&json!("0")), Ok(Some(0)));
    }

    #[test]
    fn test_parse_id_rejects_non_integers() {
        for value in [json!(true), json!(1.5), json!("abc"), json!([1]), json!({"a": 1})] {
            match parse_id(&value) {
                Err(TestimonialError::Store(msg)) => {
                    assert!(msg.starts_with("invalid testimonial id"));
                }
                other => panic!("unexpected result for {value}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_row_serializes_snake_case() {
        let row = VideoTestimonial {
            id: 1,
            client_name: Some("Acme".to_string()),
            description: Some(String::new()),
            video_url: Some("https://x/v.mp4".to_string()),
            video_type: Some("upload".to_string()),
            sort_order: Some(999),
        };
        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 1,
                "client_name": "Acme",
                "description": "",
                "video_url": "https://x/v.mp4",
                "video_type": "upload",
                "sort_order": 999
            })
        );
    }
}

//! API Lambda handler - method dispatch over the `video_testimonials` table.
//!
//! This module handles:
//! - CORS preflight (answered without reading config or touching the store)
//! - Request validation (`id` presence for update/delete)
//! - One store statement per request, on a connection opened for that request
//! - Mapping every failure to a JSON error response

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::request::ApiRequest;
use super::response::ApiResponse;
use crate::core::config::AppConfig;
use crate::core::models::{
    CreateTestimonialRequest, NewTestimonial, TestimonialChanges, UpdateTestimonialRequest,
    parse_query_id,
};
use crate::errors::TestimonialError;
use crate::store::{StoreConnector, TestimonialStore};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Configuration is read on every invocation, so a missing `DATABASE_URL`
/// surfaces as a 500 response rather than a failed cold start.
///
/// # Errors
///
/// Never returns an error for request-level failures; those become JSON
/// error responses.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<C: StoreConnector>(
    event: LambdaEvent<Value>,
    connector: &C,
) -> Result<ApiResponse, Error> {
    let config = AppConfig::from_env();
    let request = ApiRequest::from_event(&event.payload);
    info!(method = %request.method, "API Lambda received request");

    Ok(handle_request(&config, connector, &request).await)
}

/// Turns one request into one response. This is the single error boundary.
pub async fn handle_request<C: StoreConnector>(
    config: &AppConfig,
    connector: &C,
    request: &ApiRequest,
) -> ApiResponse {
    if request.method == "OPTIONS" {
        return ApiResponse::preflight();
    }

    match dispatch(config, connector, request).await {
        Ok(response) => {
            info!(status = response.status_code, "Request handled");
            response
        }
        Err(e) => {
            let status = e.status_code();
            if status >= 500 {
                error!(status, "Request failed: {}", e);
            } else {
                info!(status, "Request rejected: {}", e);
            }
            ApiResponse::from_error(&e)
        }
    }
}

async fn dispatch<C: StoreConnector>(
    config: &AppConfig,
    connector: &C,
    request: &ApiRequest,
) -> Result<ApiResponse, TestimonialError> {
    let database_url = config.database_url()?;
    let operation = Operation::from_request(request)?;

    let mut store = connector.connect(database_url).await?;
    let outcome = operation.execute(&mut store).await;
    if let Err(e) = store.close().await {
        warn!("Failed to close database connection: {}", e);
    }
    outcome
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Operation {
    List,
    Create(NewTestimonial),
    Update(i64, TestimonialChanges),
    Delete(i64),
}

impl Operation {
    fn from_request(request: &ApiRequest) -> Result<Self, TestimonialError> {
        match request.method.as_str() {
            "GET" => Ok(Operation::List),
            "POST" => {
                let body: CreateTestimonialRequest = request.json_body()?;
                Ok(Operation::Create(body.into_new()))
            }
            "PUT" => {
                let body: UpdateTestimonialRequest = request.json_body()?;
                let (id, changes) = body.into_parts()?;
                Ok(Operation::Update(id, changes))
            }
            "DELETE" => {
                let id = request
                    .query_param("id")
                    .map(parse_query_id)
                    .transpose()?
                    .flatten()
                    .ok_or(TestimonialError::MissingId)?;
                Ok(Operation::Delete(id))
            }
            _ => Err(TestimonialError::MethodNotAllowed),
        }
    }

    async fn execute<S: TestimonialStore>(
        self,
        store: &mut S,
    ) -> Result<ApiResponse, TestimonialError> {
        match self {
            Operation::List => {
                let rows = store.list().await?;
                ApiResponse::json(200, &rows)
            }
            Operation::Create(testimonial) => {
                let row = store.create(&testimonial).await?;
                info!(id = row.id, "Created testimonial");
                ApiResponse::json(201, &row)
            }
            Operation::Update(id, changes) => {
                let row = store
                    .update(id, &changes)
                    .await?
                    .ok_or(TestimonialError::NotFound)?;
                ApiResponse::json(200, &row)
            }
            Operation::Delete(id) => {
                let removed = store.delete(id).await?;
                info!(id, removed, "Deleted testimonial");
                Ok(ApiResponse::no_content())
            }
        }
    }
}

//! Testimonials - a Lambda-backed CRUD API for the site's video testimonials.
//!
//! Each invocation receives an API Gateway proxy event, runs exactly one
//! statement against the `video_testimonials` PostgreSQL table and answers
//! with a JSON body plus CORS headers.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - sqlx for PostgreSQL access, one connection per invocation
//! - serde for the camelCase request / snake_case response payloads
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use testimonials::api::{ApiRequest, handle_request};
//! use testimonials::core::config::AppConfig;
//! use testimonials::store::PgConnector;
//!
//! #[tokio::main]
//! async fn main() {
//!     testimonials::setup_logging();
//!
//!     let config = AppConfig {
//!         database_url: Some("postgres://localhost/site".to_string()),
//!     };
//!     let request = ApiRequest::new("POST")
//!         .with_body(r#"{"clientName":"Acme","videoUrl":"https://x/v.mp4"}"#);
//!
//!     let response = handle_request(&config, &PgConnector, &request).await;
//!     println!("{} {}", response.status_code, response.body);
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod store;

pub use errors::TestimonialError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// testimonials::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

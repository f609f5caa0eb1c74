use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TestimonialError {
    #[error("Database connection not configured")]
    ConfigMissing,

    #[error("ID is required")]
    MissingId,

    #[error("Testimonial not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Anything raised while talking to the store or decoding the request.
    /// The message is returned to the caller as-is.
    #[error("{0}")]
    Store(String),
}

impl TestimonialError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            TestimonialError::MissingId => 400,
            TestimonialError::NotFound => 404,
            TestimonialError::MethodNotAllowed => 405,
            TestimonialError::ConfigMissing | TestimonialError::Store(_) => 500,
        }
    }
}

impl From<sqlx::Error> for TestimonialError {
    fn from(error: sqlx::Error) -> Self {
        TestimonialError::Store(error.to_string())
    }
}

impl From<serde_json::Error> for TestimonialError {
    fn from(error: serde_json::Error) -> Self {
        TestimonialError::Store(error.to_string())
    }
}

impl From<base64::DecodeError> for TestimonialError {
    fn from(error: base64::DecodeError) -> Self {
        TestimonialError::Store(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for TestimonialError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        TestimonialError::Store(error.to_string())
    }
}

//! Persistence seam for the `video_testimonials` table.
//!
//! A [`StoreConnector`] opens one [`TestimonialStore`] per invocation. The store
//! owns its connection and must be closed by the caller once the single
//! statement has run.

pub mod postgres;

use async_trait::async_trait;

use crate::core::models::{NewTestimonial, TestimonialChanges, VideoTestimonial};
use crate::errors::TestimonialError;

pub use postgres::{PgConnector, PgTestimonialStore};

#[async_trait]
pub trait StoreConnector: Send + Sync {
    type Store: TestimonialStore;

    async fn connect(&self, database_url: &str) -> Result<Self::Store, TestimonialError>;
}

#[async_trait]
pub trait TestimonialStore: Send + Sized {
    /// All rows ordered by `sort_order` ascending.
    async fn list(&mut self) -> Result<Vec<VideoTestimonial>, TestimonialError>;

    async fn create(
        &mut self,
        testimonial: &NewTestimonial,
    ) -> Result<VideoTestimonial, TestimonialError>;

    /// Overwrites the row and stamps `updated_at`. `None` when no row has `id`.
    async fn update(
        &mut self,
        id: i64,
        changes: &TestimonialChanges,
    ) -> Result<Option<VideoTestimonial>, TestimonialError>;

    /// Returns the number of rows removed.
    async fn delete(&mut self, id: i64) -> Result<u64, TestimonialError>;

    async fn close(self) -> Result<(), TestimonialError>;
}

use async_trait::async_trait;
use sqlx::{Connection, PgConnection};
use tracing::debug;

use super::{StoreConnector, TestimonialStore};
use crate::core::models::{NewTestimonial, TestimonialChanges, VideoTestimonial};
use crate::errors::TestimonialError;

// Casts keep decoding stable whether `id` is SERIAL or BIGSERIAL.
const LIST_SQL: &str = r"
    SELECT id::BIGINT AS id, client_name, description, video_url, video_type,
           sort_order::INTEGER AS sort_order
    FROM video_testimonials
    ORDER BY sort_order ASC
";

const INSERT_SQL: &str = r"
    INSERT INTO video_testimonials
        (client_name, description, video_url, video_type, sort_order)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id::BIGINT AS id, client_name, description, video_url, video_type,
              sort_order::INTEGER AS sort_order
";

const UPDATE_SQL: &str = r"
    UPDATE video_testimonials
    SET client_name = $1, description = $2, video_url = $3,
        video_type = $4, updated_at = NOW()
    WHERE id = $5
    RETURNING id::BIGINT AS id, client_name, description, video_url, video_type,
              sort_order::INTEGER AS sort_order
";

const DELETE_SQL: &str = "DELETE FROM video_testimonials WHERE id = $1";

/// Opens a dedicated PostgreSQL connection per invocation. No pool, no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgConnector;

#[async_trait]
impl StoreConnector for PgConnector {
    type Store = PgTestimonialStore;

    async fn connect(&self, database_url: &str) -> Result<Self::Store, TestimonialError> {
        let conn = PgConnection::connect(database_url).await?;
        debug!("Opened database connection");
        Ok(PgTestimonialStore { conn })
    }
}

/// A single open connection. Each statement runs in autocommit mode.
pub struct PgTestimonialStore {
    conn: PgConnection,
}

#[async_trait]
impl TestimonialStore for PgTestimonialStore {
    async fn list(&mut self) -> Result<Vec<VideoTestimonial>, TestimonialError> {
        let rows = sqlx::query_as::<_, VideoTestimonial>(LIST_SQL)
            .fetch_all(&mut self.conn)
            .await?;
        Ok(rows)
    }

    async fn create(
        &mut self,
        testimonial: &NewTestimonial,
    ) -> Result<VideoTestimonial, TestimonialError> {
        let row = sqlx::query_as::<_, VideoTestimonial>(INSERT_SQL)
            .bind(&testimonial.client_name)
            .bind(&testimonial.description)
            .bind(&testimonial.video_url)
            .bind(&testimonial.video_type)
            .bind(testimonial.sort_order)
            .fetch_one(&mut self.conn)
            .await?;
        Ok(row)
    }

    async fn update(
        &mut self,
        id: i64,
        changes: &TestimonialChanges,
    ) -> Result<Option<VideoTestimonial>, TestimonialError> {
        let row = sqlx::query_as::<_, VideoTestimonial>(UPDATE_SQL)
            .bind(&changes.client_name)
            .bind(&changes.description)
            .bind(&changes.video_url)
            .bind(&changes.video_type)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await?;
        Ok(row)
    }

    async fn delete(&mut self, id: i64) -> Result<u64, TestimonialError> {
        let result = sqlx::query(DELETE_SQL)
            .bind(id)
            .execute(&mut self.conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn close(self) -> Result<(), TestimonialError> {
        self.conn.close().await?;
        debug!("Closed database connection");
        Ok(())
    }
}

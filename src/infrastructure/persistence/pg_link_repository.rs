//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, StoredLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link mappings.
///
/// Uses SQLx bound parameters for SQL injection protection.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    web_url: String,
    deeplink: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for StoredLink {
    fn from(row: LinkRow) -> Self {
        StoredLink {
            id: row.id,
            link: Link::new(row.web_url, row.deeplink),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_deeplink_by_web_url(&self, web_url: &str) -> Result<Option<String>, AppError> {
        let deeplink = sqlx::query_scalar::<_, String>(
            "SELECT deeplink FROM links WHERE web_url = $1 ORDER BY id LIMIT 1",
        )
        .bind(web_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(deeplink)
    }

    async fn find_web_url_by_deeplink(&self, deeplink: &str) -> Result<Option<String>, AppError> {
        let web_url = sqlx::query_scalar::<_, String>(
            "SELECT web_url FROM links WHERE deeplink = $1 ORDER BY id LIMIT 1",
        )
        .bind(deeplink)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(web_url)
    }

    async fn insert(&self, link: &Link) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO links (web_url, deeplink)
            VALUES ($1, $2)
            ON CONFLICT (md5(web_url), md5(deeplink)) DO NOTHING
            "#,
        )
        .bind(&link.web_url)
        .bind(&link.deeplink)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<StoredLink>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, web_url, deeplink, created_at
            FROM links
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(StoredLink::from).collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

//! Process-local link repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Link, StoredLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// A repository that keeps mappings in memory.
///
/// Follows the same rules as [`super::PgLinkRepository`]: duplicate pairs are
/// ignored and lookups return the oldest match. Contents are lost on restart.
///
/// # Use Cases
///
/// - Testing handlers and services without PostgreSQL
/// - Offline conversions from the admin CLI
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<Vec<StoredLink>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory link repository");
        Self::default()
    }

    /// Number of stored pairs.
    pub async fn count(&self) -> usize {
        self.links.read().await.len()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_deeplink_by_web_url(&self, web_url: &str) -> Result<Option<String>, AppError> {
        let links = self.links.read().await;
        Ok(links
            .iter()
            .find(|stored| stored.link.web_url == web_url)
            .map(|stored| stored.link.deeplink.clone()))
    }

    async fn find_web_url_by_deeplink(&self, deeplink: &str) -> Result<Option<String>, AppError> {
        let links = self.links.read().await;
        Ok(links
            .iter()
            .find(|stored| stored.link.deeplink == deeplink)
            .map(|stored| stored.link.web_url.clone()))
    }

    async fn insert(&self, link: &Link) -> Result<(), AppError> {
        let mut links = self.links.write().await;
        if links.iter().any(|stored| &stored.link == link) {
            return Ok(());
        }

        let id = links.len() as i64 + 1;
        links.push(StoredLink {
            id,
            link: link.clone(),
            created_at: Utc::now(),
        });

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<StoredLink>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let links = self.links.read().await;
        Ok(links.iter().rev().take(limit).cloned().collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_lookup_both_ways() {
        let repo = InMemoryLinkRepository::new();
        let link = Link::new("https://www.trendyol.com/a-p-1", "ty://?Page=Product&ContentId=1");

        repo.insert(&link).await.unwrap();

        assert_eq!(
            repo.find_deeplink_by_web_url(&link.web_url).await.unwrap(),
            Some(link.deeplink.clone())
        );
        assert_eq!(
            repo.find_web_url_by_deeplink(&link.deeplink).await.unwrap(),
            Some(link.web_url.clone())
        );
        assert_eq!(repo.find_deeplink_by_web_url("https://x.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_pairs_are_ignored() {
        let repo = InMemoryLinkRepository::new();
        let link = Link::new("https://www.trendyol.com", "ty://?Page=Home");

        repo.insert(&link).await.unwrap();
        repo.insert(&link).await.unwrap();

        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_lookup_returns_oldest_match() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(&Link::new("https://www.trendyol.com/a", "ty://?Page=Home"))
            .await
            .unwrap();
        repo.insert(&Link::new("https://www.trendyol.com/b", "ty://?Page=Home"))
            .await
            .unwrap();

        assert_eq!(
            repo.find_web_url_by_deeplink("ty://?Page=Home").await.unwrap(),
            Some("https://www.trendyol.com/a".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_recent_is_newest_first() {
        let repo = InMemoryLinkRepository::new();
        for i in 0..3 {
            repo.insert(&Link::new(format!("https://www.trendyol.com/{i}"), "ty://?Page=Home"))
                .await
                .unwrap();
        }

        let recent = repo.list_recent(2).await.unwrap();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].link.web_url, "https://www.trendyol.com/2");
        assert_eq!(recent[1].link.web_url, "https://www.trendyol.com/1");
        assert!(repo.list_recent(-1).await.unwrap().is_empty());
    }
}

//! Repository trait for the web URL / deeplink mapping store.

use crate::domain::entities::{Link, StoredLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisted link mappings.
///
/// The same web URL may map to several deeplinks over time and vice versa;
/// lookups return the oldest matching pair.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds the deeplink stored for a web URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_deeplink_by_web_url(&self, web_url: &str) -> Result<Option<String>, AppError>;

    /// Finds the web URL stored for a deeplink.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_web_url_by_deeplink(&self, deeplink: &str) -> Result<Option<String>, AppError>;

    /// Stores a pair. Storing an existing pair again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, link: &Link) -> Result<(), AppError>;

    /// Lists the most recently stored pairs, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<StoredLink>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn health_check(&self) -> Result<(), AppError>;
}

//! Conversion service backed by the mapping store.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::audit::{AuditEntry, AuditLog, Direction};
use crate::domain::entities::{Link, PageKind};
use crate::domain::repositories::LinkRepository;
use crate::domain::translator::{TranslateError, Translator};
use crate::error::AppError;

/// Where a conversion result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionSource {
    /// Found in the mapping store.
    Stored,
    /// Translated on this call.
    Created,
}

/// Result of a conversion in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub link: Link,
    pub source: ConversionSource,
    /// Classification outcome; `None` for stored results, which are not
    /// re-classified.
    pub page: Option<PageKind>,
}

/// Service converting web URLs and deeplinks.
///
/// # Flow
///
/// 1. Look the input up in the mapping store and return a stored counterpart
/// 2. On a miss (or a failing store) translate the input
/// 3. Persist the new pair and report the outcome to the audit log
///
/// Persisting and auditing never fail a conversion.
pub struct ConverterService<L: LinkRepository + ?Sized, A: AuditLog + ?Sized> {
    translator: Translator,
    link_repository: Arc<L>,
    audit_log: Arc<A>,
}

/// Service type held in the application state.
pub type DynConverterService = ConverterService<dyn LinkRepository, dyn AuditLog>;

impl<L: LinkRepository + ?Sized, A: AuditLog + ?Sized> ConverterService<L, A> {
    /// Creates a new converter service.
    pub fn new(translator: Translator, link_repository: Arc<L>, audit_log: Arc<A>) -> Self {
        Self {
            translator,
            link_repository,
            audit_log,
        }
    }

    /// Returns the deeplink for a web URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or contains
    /// whitespace.
    pub async fn to_deeplink(&self, web_url: &str) -> Result<Conversion, AppError> {
        self.convert(Direction::ToDeeplink, web_url).await
    }

    /// Returns the web URL for a deeplink.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the deeplink is empty or contains
    /// whitespace.
    pub async fn to_web_url(&self, deeplink: &str) -> Result<Conversion, AppError> {
        self.convert(Direction::ToWebUrl, deeplink).await
    }

    async fn convert(&self, direction: Direction, request: &str) -> Result<Conversion, AppError> {
        let stored = match direction {
            Direction::ToDeeplink => self.link_repository.find_deeplink_by_web_url(request).await,
            Direction::ToWebUrl => self.link_repository.find_web_url_by_deeplink(request).await,
        };

        match stored {
            Ok(Some(response)) => {
                debug!("Store HIT for {}", request);
                self.audit_log
                    .record(AuditEntry::Resolved {
                        direction,
                        request: request.to_string(),
                        response: response.clone(),
                    })
                    .await;

                return Ok(Conversion {
                    link: pair(direction, request, response),
                    source: ConversionSource::Stored,
                    page: None,
                });
            }
            Ok(None) => debug!("Store MISS for {}", request),
            Err(e) => warn!("Store lookup failed for {}: {}. Translating instead", request, e),
        }

        let (response, page) = match self.translate(direction, request) {
            Ok(translated) => translated,
            Err(e) => {
                self.audit_log
                    .record(AuditEntry::Rejected {
                        direction,
                        request: request.to_string(),
                        reason: e.to_string(),
                    })
                    .await;
                return Err(e.into());
            }
        };

        self.audit_log
            .record(AuditEntry::Created {
                direction,
                request: request.to_string(),
                response: response.clone(),
                page,
            })
            .await;

        let link = pair(direction, request, response);
        if let Err(e) = self.link_repository.insert(&link).await {
            warn!("Failed to store {} -> {}: {}", link.web_url, link.deeplink, e);
        }

        Ok(Conversion {
            link,
            source: ConversionSource::Created,
            page: Some(page),
        })
    }

    fn translate(
        &self,
        direction: Direction,
        request: &str,
    ) -> Result<(String, PageKind), TranslateError> {
        let rules = self.translator.rules();
        let rendered = match direction {
            Direction::ToDeeplink => {
                let target = self.translator.classify_web_url(request)?;
                (target.to_deeplink(rules), target.kind())
            }
            Direction::ToWebUrl => {
                let target = self.translator.classify_deeplink(request)?;
                (target.to_web_url(rules), target.kind())
            }
        };

        Ok(rendered)
    }
}

/// Orders a request and its response as a (web URL, deeplink) pair.
fn pair(direction: Direction, request: &str, response: String) -> Link {
    match direction {
        Direction::ToDeeplink => Link::new(request, response),
        Direction::ToWebUrl => Link::new(response, request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audit::MockAuditLog;
    use crate::domain::repositories::MockLinkRepository;
    use serde_json::json;

    fn audit_expecting(check: fn(&AuditEntry) -> bool) -> MockAuditLog {
        let mut audit = MockAuditLog::new();
        audit
            .expect_record()
            .withf(move |entry| check(entry))
            .times(1)
            .returning(|_| ());
        audit
    }

    fn service(
        repo: MockLinkRepository,
        audit: MockAuditLog,
    ) -> ConverterService<MockLinkRepository, MockAuditLog> {
        ConverterService::new(Translator::new(), Arc::new(repo), Arc::new(audit))
    }

    #[tokio::test]
    async fn test_to_deeplink_returns_stored_mapping() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_deeplink_by_web_url()
            .withf(|url| url == "https://www.trendyol.com/a-p-1")
            .times(1)
            .returning(|_| Ok(Some("ty://?Page=Product&ContentId=1".to_string())));
        repo.expect_insert().times(0);

        let audit = audit_expecting(|e| matches!(e, AuditEntry::Resolved { .. }));

        let conversion = service(repo, audit)
            .to_deeplink("https://www.trendyol.com/a-p-1")
            .await
            .unwrap();

        assert_eq!(conversion.source, ConversionSource::Stored);
        assert_eq!(conversion.link.deeplink, "ty://?Page=Product&ContentId=1");
        assert_eq!(conversion.page, None);
    }

    #[tokio::test]
    async fn test_to_deeplink_translates_and_stores_on_miss() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_deeplink_by_web_url()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|link| {
                link.web_url == "https://www.trendyol.com/test/saat-p-1"
                    && link.deeplink == "ty://?Page=Product&ContentId=1"
            })
            .times(1)
            .returning(|_| Ok(()));

        let audit = audit_expecting(|e| {
            matches!(
                e,
                AuditEntry::Created {
                    page: PageKind::Product,
                    direction: Direction::ToDeeplink,
                    ..
                }
            )
        });

        let conversion = service(repo, audit)
            .to_deeplink("https://www.trendyol.com/test/saat-p-1")
            .await
            .unwrap();

        assert_eq!(conversion.source, ConversionSource::Created);
        assert_eq!(conversion.page, Some(PageKind::Product));
        assert_eq!(conversion.link.deeplink, "ty://?Page=Product&ContentId=1");
    }

    #[tokio::test]
    async fn test_to_web_url_stores_pair_in_web_url_order() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_web_url_by_deeplink()
            .withf(|deeplink| deeplink == "ty://?Page=Search&Query=elbise")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|link| {
                link.web_url == "https://www.trendyol.com/sr?q=elbise"
                    && link.deeplink == "ty://?Page=Search&Query=elbise"
            })
            .times(1)
            .returning(|_| Ok(()));

        let audit = audit_expecting(|e| {
            matches!(
                e,
                AuditEntry::Created {
                    page: PageKind::Search,
                    direction: Direction::ToWebUrl,
                    ..
                }
            )
        });

        let conversion = service(repo, audit)
            .to_web_url("ty://?Page=Search&Query=elbise")
            .await
            .unwrap();

        assert_eq!(conversion.link.web_url, "https://www.trendyol.com/sr?q=elbise");
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_and_not_stored() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_deeplink_by_web_url()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert().times(0);

        let audit = audit_expecting(|e| matches!(e, AuditEntry::Rejected { .. }));

        let result = service(repo, audit)
            .to_deeplink("https://www.trendyol.com/ WithSpace")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_failing_lookup_falls_back_to_translation() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_web_url_by_deeplink()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        repo.expect_insert().times(1).returning(|_| Ok(()));

        let audit = audit_expecting(|e| matches!(e, AuditEntry::Created { .. }));

        let conversion = service(repo, audit)
            .to_web_url("ty://?Page=Favorites")
            .await
            .unwrap();

        assert_eq!(conversion.link.web_url, "https://www.trendyol.com");
        assert_eq!(conversion.page, Some(PageKind::Home));
    }

    #[tokio::test]
    async fn test_failing_insert_does_not_fail_conversion() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_deeplink_by_web_url()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let audit = audit_expecting(|e| matches!(e, AuditEntry::Created { .. }));

        let conversion = service(repo, audit)
            .to_deeplink("https://www.trendyol.com/Hesabim/Favoriler")
            .await
            .unwrap();

        assert_eq!(conversion.link.deeplink, "ty://?Page=Home");
    }
}

//! Link entity pairing a web URL with its deeplink.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A web URL and the deeplink addressing the same page.
///
/// Produced per conversion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub web_url: String,
    pub deeplink: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(web_url: impl Into<String>, deeplink: impl Into<String>) -> Self {
        Self {
            web_url: web_url.into(),
            deeplink: deeplink.into(),
        }
    }
}

/// A link as persisted in the mapping store.
#[derive(Debug, Clone)]
pub struct StoredLink {
    pub id: i64,
    pub link: Link,
    pub created_at: DateTime<Utc>,
}

/// Page a link was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Product,
    Search,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Product => "product",
            PageKind::Search => "search",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new("https://www.trendyol.com", "ty://?Page=Home");

        assert_eq!(link.web_url, "https://www.trendyol.com");
        assert_eq!(link.deeplink, "ty://?Page=Home");
    }

    #[test]
    fn test_page_kind_display() {
        assert_eq!(PageKind::Product.to_string(), "product");
        assert_eq!(
            serde_json::to_string(&PageKind::Search).unwrap(),
            "\"search\""
        );
    }
}

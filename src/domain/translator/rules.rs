//! Fixed site addresses and separators used by the translator.

/// Immutable set of prefixes and separators describing the storefront.
///
/// The translator never mutates its rules; a custom set can be supplied with
/// [`super::Translator::with_rules`], otherwise [`SiteRules::default`] describes
/// the production site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRules {
    /// Home page URL, also the prefix every recognized web URL starts with.
    pub home_url: String,
    /// Search page prefix, up to and including the `q=` marker.
    pub search_url_prefix: String,
    /// Base of a rendered product URL; the content id is appended directly.
    pub product_url_base: String,
    /// Path marker separating the product slug from its content id.
    pub product_separator: String,
    /// Marker after which a search URL carries its term.
    pub search_query_marker: String,
    pub home_deeplink: String,
    pub search_deeplink_prefix: String,
    pub product_deeplink_prefix: String,
    /// Letters that force a search term to be query-escaped.
    pub escaped_letters: String,
}

impl Default for SiteRules {
    fn default() -> Self {
        Self {
            home_url: "https://www.trendyol.com".to_string(),
            search_url_prefix: "https://www.trendyol.com/sr?q=".to_string(),
            product_url_base: "https://www.trendyol.com/brand/name-p-".to_string(),
            product_separator: "-p-".to_string(),
            search_query_marker: "q=".to_string(),
            home_deeplink: "ty://?Page=Home".to_string(),
            search_deeplink_prefix: "ty://?Page=Search&Query=".to_string(),
            product_deeplink_prefix: "ty://?Page=Product&ContentId=".to_string(),
            escaped_letters: "çÇğĞıİöÖşŞüÜ".to_string(),
        }
    }
}

impl SiteRules {
    /// Returns true if `term` contains any letter from [`Self::escaped_letters`].
    pub fn needs_escaping(&self, term: &str) -> bool {
        term.chars().any(|c| self.escaped_letters.contains(c))
    }
}

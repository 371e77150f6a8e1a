//! Bidirectional translation between web URLs and app deeplinks.
//!
//! Translation is a pure, two-step pass: the input is first classified into a
//! [`Target`] (home, product or search), which is then rendered to the other
//! link form. Input that is syntactically broken fails with
//! [`TranslateError::InvalidInput`]; input that parses but does not describe a
//! recognizable page falls back to the home page rather than failing.
//!
//! # Examples
//!
//! ```
//! use deeplink_converter::domain::translator::Translator;
//!
//! let translator = Translator::new();
//!
//! assert_eq!(
//!     translator.url_to_deeplink("https://www.trendyol.com/test/saat-p-1").unwrap(),
//!     "ty://?Page=Product&ContentId=1"
//! );
//! assert_eq!(
//!     translator.deeplink_to_url("ty://?Page=Favorites").unwrap(),
//!     "https://www.trendyol.com"
//! );
//! ```

mod deeplink;
mod query;
mod rules;
mod target;
mod web_url;

pub use query::{QueryParams, query_escape, query_escape_bytes};
pub use rules::SiteRules;
pub use target::{ProductTarget, SearchTarget, Target};

/// Errors produced by the translator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The input is not a well-formed link or contains whitespace.
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },
}

impl TranslateError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Stateless translator between web URLs and deeplinks.
///
/// Cheap to clone and safe to share across threads; it holds nothing but its
/// [`SiteRules`].
#[derive(Debug, Clone, Default)]
pub struct Translator {
    rules: SiteRules,
}

impl Translator {
    /// Creates a translator for the production site.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: SiteRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SiteRules {
        &self.rules
    }

    /// Classifies a web URL without rendering it.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidInput`] if the URL contains whitespace
    /// or is not absolute.
    pub fn classify_web_url(&self, url: &str) -> Result<Target, TranslateError> {
        web_url::classify(url, &self.rules)
    }

    /// Classifies a deeplink without rendering it.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidInput`] if the deeplink is empty or
    /// contains whitespace.
    pub fn classify_deeplink(&self, deeplink: &str) -> Result<Target, TranslateError> {
        deeplink::classify(deeplink, &self.rules)
    }

    /// Translates a web URL into its deeplink.
    ///
    /// # Errors
    ///
    /// See [`Self::classify_web_url`].
    pub fn url_to_deeplink(&self, url: &str) -> Result<String, TranslateError> {
        let target = self.classify_web_url(url)?;
        Ok(target.to_deeplink(&self.rules))
    }

    /// Translates a deeplink into its web URL.
    ///
    /// # Errors
    ///
    /// See [`Self::classify_deeplink`].
    pub fn deeplink_to_url(&self, deeplink: &str) -> Result<String, TranslateError> {
        let target = self.classify_deeplink(deeplink)?;
        Ok(target.to_web_url(&self.rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_product_with_both_ids() {
        let translator = Translator::new();

        let deeplink = translator
            .url_to_deeplink("https://www.trendyol.com/casio/erkek-kol-saati-p-1925865?boutiqueId=439892&merchantId=105064")
            .unwrap();
        let url = translator.deeplink_to_url(&deeplink).unwrap();

        assert_eq!(
            url,
            "https://www.trendyol.com/brand/name-p-1925865?boutiqueId=439892&merchantId=105064"
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = SiteRules {
            home_url: "https://shop.test".to_string(),
            search_url_prefix: "https://shop.test/sr?q=".to_string(),
            product_url_base: "https://shop.test/p/x-p-".to_string(),
            home_deeplink: "shop://?Page=Home".to_string(),
            ..SiteRules::default()
        };
        let translator = Translator::with_rules(rules);

        assert_eq!(
            translator.url_to_deeplink("https://shop.test/about").unwrap(),
            "shop://?Page=Home"
        );
        assert_eq!(
            translator.deeplink_to_url("ty://?Page=Product&ContentId=9").unwrap(),
            "https://shop.test/p/x-p-9"
        );
    }

    #[test]
    fn test_invalid_input_message_names_the_input() {
        let err = Translator::new().deeplink_to_url("ty://?Page= x").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid input 'ty://?Page= x': deeplink must not contain whitespace"
        );
    }
}

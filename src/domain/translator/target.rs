//! Classified destinations and their rendering to either link form.

use super::rules::SiteRules;
use crate::domain::entities::PageKind;

/// Destination a web URL or deeplink was classified as.
///
/// A target is direction-agnostic: the same value renders to a deeplink with
/// [`Target::to_deeplink`] and to a web URL with [`Target::to_web_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Home,
    Product(ProductTarget),
    Search(SearchTarget),
}

/// Product detail page with its optional campaign and merchant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTarget {
    pub content_id: String,
    /// Called `boutiqueId` on the web and `CampaignId` in deeplinks.
    pub campaign_id: Option<String>,
    pub merchant_id: Option<String>,
}

/// Search page with a term already in its rendered (escaped) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    pub query: String,
}

impl ProductTarget {
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            campaign_id: None,
            merchant_id: None,
        }
    }

    pub fn with_campaign(mut self, campaign_id: impl Into<String>) -> Self {
        self.campaign_id = Some(campaign_id.into());
        self
    }

    pub fn with_merchant(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }
}

impl Target {
    pub fn kind(&self) -> PageKind {
        match self {
            Target::Home => PageKind::Home,
            Target::Product(_) => PageKind::Product,
            Target::Search(_) => PageKind::Search,
        }
    }

    /// Renders the target as a `ty://` deeplink.
    ///
    /// Campaign is always emitted before merchant.
    pub fn to_deeplink(&self, rules: &SiteRules) -> String {
        match self {
            Target::Home => rules.home_deeplink.clone(),
            Target::Search(search) => format!("{}{}", rules.search_deeplink_prefix, search.query),
            Target::Product(product) => {
                let mut deeplink = format!("{}{}", rules.product_deeplink_prefix, product.content_id);
                if let Some(campaign_id) = &product.campaign_id {
                    deeplink.push_str("&CampaignId=");
                    deeplink.push_str(campaign_id);
                }
                if let Some(merchant_id) = &product.merchant_id {
                    deeplink.push_str("&MerchantId=");
                    deeplink.push_str(merchant_id);
                }
                deeplink
            }
        }
    }

    /// Renders the target as a public web URL.
    pub fn to_web_url(&self, rules: &SiteRules) -> String {
        match self {
            Target::Home => rules.home_url.clone(),
            Target::Search(search) => format!("{}{}", rules.search_url_prefix, search.query),
            Target::Product(product) => {
                let base = format!("{}{}", rules.product_url_base, product.content_id);
                match (&product.campaign_id, &product.merchant_id) {
                    (Some(campaign_id), Some(merchant_id)) => {
                        format!("{base}?boutiqueId={campaign_id}&merchantId={merchant_id}")
                    }
                    (None, Some(merchant_id)) => format!("{base}?merchantId={merchant_id}"),
                    (Some(campaign_id), None) => format!("{base}?boutiqueId={campaign_id}"),
                    (None, None) => base,
                }
            }
        }
    }
}

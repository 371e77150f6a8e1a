//! Classification of `ty://` deeplinks.

use super::TranslateError;
use super::query::{QueryParams, query_escape_bytes, raw_query};
use super::rules::SiteRules;
use super::target::{ProductTarget, SearchTarget, Target};

const QUERY: &str = "Query";
const CONTENT_ID: &str = "ContentId";
const CAMPAIGN_ID: &str = "CampaignId";
const MERCHANT_ID: &str = "MerchantId";

/// Classifies a deeplink into the page it addresses.
///
/// # Errors
///
/// Returns [`TranslateError::InvalidInput`] if the deeplink is empty or
/// contains whitespace.
pub(super) fn classify(input: &str, rules: &SiteRules) -> Result<Target, TranslateError> {
    if input.is_empty() {
        return Err(TranslateError::invalid(input, "deeplink must not be empty"));
    }
    if input.chars().any(char::is_whitespace) {
        return Err(TranslateError::invalid(input, "deeplink must not contain whitespace"));
    }

    if input.starts_with(&rules.search_deeplink_prefix) {
        Ok(search(input))
    } else if input.starts_with(&rules.product_deeplink_prefix) {
        Ok(product(input))
    } else {
        Ok(Target::Home)
    }
}

fn search(input: &str) -> Target {
    let params = QueryParams::parse(raw_query(input));
    let query = params.get_bytes(QUERY).unwrap_or_default();

    if query.is_empty() || query.contains(&b'?') {
        return Target::Home;
    }

    Target::Search(SearchTarget {
        query: query_escape_bytes(query),
    })
}

fn product(input: &str) -> Target {
    let params = QueryParams::parse(raw_query(input));
    if [CAMPAIGN_ID, MERCHANT_ID, CONTENT_ID]
        .iter()
        .any(|key| params.is_blank(key))
    {
        return Target::Home;
    }

    // A content id that is not UTF-8 is not one we can address.
    let content_id = params.get(CONTENT_ID).unwrap_or_default();
    if content_id.is_empty() {
        return Target::Home;
    }

    let product = ProductTarget {
        content_id: content_id.to_string(),
        campaign_id: params.get(CAMPAIGN_ID).map(str::to_owned),
        merchant_id: params.get(MERCHANT_ID).map(str::to_owned),
    };

    // Without ids the content id must not carry structure of its own.
    if product.campaign_id.is_none()
        && product.merchant_id.is_none()
        && product.content_id.contains(['&', '=', '/'])
    {
        return Target::Home;
    }

    Target::Product(product)
}

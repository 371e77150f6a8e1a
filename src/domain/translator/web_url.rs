//! Classification of public web URLs.

use url::Url;

use super::TranslateError;
use super::query::{QueryParams, query_escape, raw_query};
use super::rules::SiteRules;
use super::target::{ProductTarget, SearchTarget, Target};

const BOUTIQUE_ID: &str = "boutiqueId";
const MERCHANT_ID: &str = "merchantId";

/// Classifies a web URL into the page it addresses.
///
/// # Errors
///
/// Returns [`TranslateError::InvalidInput`] if the input contains whitespace or
/// is not an absolute URL with a host.
pub(super) fn classify(input: &str, rules: &SiteRules) -> Result<Target, TranslateError> {
    validate(input)?;

    let path = path_of(input);
    if input.starts_with(&rules.home_url) && path.contains(&rules.product_separator) {
        return Ok(product(input, path, rules));
    }

    if input.starts_with(&rules.search_url_prefix) {
        return Ok(search(input, rules));
    }

    Ok(Target::Home)
}

fn validate(input: &str) -> Result<(), TranslateError> {
    if input.chars().any(char::is_whitespace) {
        return Err(TranslateError::invalid(input, "web URL must not contain whitespace"));
    }

    let url = Url::parse(input).map_err(|e| TranslateError::invalid(input, e.to_string()))?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(TranslateError::invalid(input, "web URL must have a host"));
    }

    Ok(())
}

/// Everything before the query string or fragment.
fn path_of(input: &str) -> &str {
    input.find(['?', '#']).map_or(input, |end| &input[..end])
}

fn product(input: &str, path: &str, rules: &SiteRules) -> Target {
    let params = QueryParams::parse(raw_query(input));
    if params.is_blank(BOUTIQUE_ID) || params.is_blank(MERCHANT_ID) {
        return Target::Home;
    }

    let content_id = path
        .split(rules.product_separator.as_str())
        .nth(1)
        .unwrap_or_default();
    if content_id.is_empty() {
        return Target::Home;
    }

    let mut product = ProductTarget::new(content_id);
    if !input.contains('?') {
        return Target::Product(product);
    }

    // A query string that carries neither id is not a product link we know.
    product.campaign_id = params.non_empty(BOUTIQUE_ID).map(str::to_owned);
    product.merchant_id = params.non_empty(MERCHANT_ID).map(str::to_owned);
    if product.campaign_id.is_none() && product.merchant_id.is_none() {
        return Target::Home;
    }

    Target::Product(product)
}

fn search(input: &str, rules: &SiteRules) -> Target {
    let query = input
        .split_once(rules.search_query_marker.as_str())
        .map_or("", |(_, query)| query);

    if query.is_empty() || query.contains(['?', '&', '/']) {
        return Target::Home;
    }

    let query = if rules.needs_escaping(query) {
        query_escape(query)
    } else {
        query.to_string()
    };

    Target::Search(SearchTarget { query })
}

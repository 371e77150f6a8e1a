//! Query string helpers shared by both translation directions.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};

/// Bytes kept verbatim by [`query_escape`]; everything else is `%XX` encoded.
const QUERY_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapes a value for use inside a query string.
///
/// Unreserved characters are kept, a space becomes `+` and every other byte of
/// the UTF-8 encoding is percent-encoded with uppercase hex digits.
pub fn query_escape(value: &str) -> String {
    query_escape_bytes(value.as_bytes())
}

/// Same as [`query_escape`] for a value that need not be valid UTF-8.
pub fn query_escape_bytes(value: &[u8]) -> String {
    // '%' itself is encoded, so "%20" in the output can only come from a space.
    percent_encode(value, QUERY_ESCAPE_SET)
        .to_string()
        .replace("%20", "+")
}

/// Returns the raw query string of `input`: the text after the first `?`,
/// without any `#fragment`. Empty when there is no `?`.
pub fn raw_query(input: &str) -> &str {
    let Some((_, query)) = input.split_once('?') else {
        return "";
    };

    query.split_once('#').map_or(query, |(query, _)| query)
}

/// Decodes one key or value: `+` is a space and every `%` must start a
/// two-digit hex escape. Returns `None` for a malformed escape.
fn unescape(raw: &str) -> Option<Vec<u8>> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || (i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit())
    });
    if !well_formed {
        return None;
    }

    Some(percent_decode_str(&raw.replace('+', " ")).collect())
}

/// Decoded query parameters in their original order.
///
/// Keeps the difference between a key that is absent and a key that is
/// present with an empty value. Values are kept as raw bytes, so decoding and
/// re-escaping gives back the same bytes even when they are not UTF-8.
/// Lookups are case-sensitive and return the first value of a repeated key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(Vec<u8>, Vec<u8>)>,
}

impl QueryParams {
    /// Parses a raw `application/x-www-form-urlencoded` query string.
    ///
    /// A pair whose key or value holds a malformed `%` escape is dropped, so
    /// its key reads as absent.
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .filter_map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                Some((unescape(key)?, unescape(value)?))
            })
            .collect();

        Self { pairs }
    }

    /// First value for `key` as raw bytes, or `None` if the key is absent.
    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        self.pairs
            .iter()
            .find(|(k, _)| k.as_slice() == key.as_bytes())
            .map(|(_, v)| v.as_slice())
    }

    /// First value for `key`, or `None` if the key is absent or its value is
    /// not valid UTF-8.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_bytes(key)
            .and_then(|value| std::str::from_utf8(value).ok())
    }

    /// Returns true if `key` is present but carries an empty value.
    pub fn is_blank(&self, key: &str) -> bool {
        self.get_bytes(key).is_some_and(<[u8]>::is_empty)
    }

    /// Value of `key` only when it is present and non-empty.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

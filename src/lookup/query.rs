//! Lookup URL construction

/// Path under the API base that performs a name lookup
const NAME_PATH: &str = "name";

/// Build the lookup URL for the given text
///
/// The text becomes a single percent-encoded path segment, so `/`, `?`, `#`,
/// `%` and spaces in user input cannot change the shape of the request.
/// Callers reject empty and whitespace-only text before getting here.
pub fn build_lookup_url(base_url: &str, text: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        NAME_PATH,
        urlencoding::encode(text)
    )
}

/// Recover the query text from a URL produced by [`build_lookup_url`]
///
/// Returns `None` if the URL does not end in a name lookup segment or the
/// segment is not valid percent-encoded UTF-8.
pub fn lookup_text_from_url(url: &str) -> Option<String> {
    let (prefix, segment) = url.rsplit_once('/')?;
    if !prefix.ends_with(NAME_PATH) {
        return None;
    }
    urlencoding::decode(segment).ok().map(|text| text.into_owned())
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;

//! Match highlighting for suggestions
//!
//! Splits a suggestion around case-insensitive occurrences of the query so the
//! renderer can emphasize the matched parts.

use regex::RegexBuilder;

/// A run of suggestion text, emphasized when it matches the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    fn matched(text: &'a str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// Split `suggestion` into plain and emphasized segments
///
/// The query is matched literally (regex metacharacters are escaped) and
/// without regard to case. An empty or whitespace-only query yields the whole
/// suggestion as one plain segment. Segments are never empty and concatenate
/// back to `suggestion`.
pub fn highlight_segments<'a>(suggestion: &'a str, query: &str) -> Vec<Segment<'a>> {
    if suggestion.is_empty() {
        return Vec::new();
    }
    if query.trim().is_empty() {
        return vec![Segment::plain(suggestion)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            // Only reachable for queries large enough to blow the size limit
            log::debug!("Highlight pattern rejected: {}", e);
            return vec![Segment::plain(suggestion)];
        }
    };

    let mut segments = Vec::new();
    let mut last_end = 0;

    for found in pattern.find_iter(suggestion) {
        if found.start() > last_end {
            segments.push(Segment::plain(&suggestion[last_end..found.start()]));
        }
        segments.push(Segment::matched(found.as_str()));
        last_end = found.end();
    }

    if last_end < suggestion.len() {
        segments.push(Segment::plain(&suggestion[last_end..]));
    }

    segments
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;

//! Link resolver: anchor extraction, pattern filtering, and rewriting
//!
//! Given a fetched page and the address it came from, this module produces
//! the stage's contribution to the next link set: every anchor href that
//! matches the stage pattern, rewritten into a fully-qualified address.

use crate::url::resolve_href;
use crate::StageError;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// Extracts, filters, and resolves the matching links in a page
///
/// # Algorithm
///
/// 1. Parse the content for anchor elements; anchors without an href
///    attribute are skipped silently
/// 2. Keep the raw hrefs the pattern matches (regex search, so a pattern
///    matches if it occurs anywhere in the href)
/// 3. Rewrite each retained href into an absolute address using the source
///    address as resolution context
///
/// The filter runs on the RAW href, before rewriting, and document order is
/// preserved. A page with no matching anchors yields an empty list, which
/// is not an error.
///
/// # Arguments
///
/// * `html` - The page content
/// * `base` - The address the page was fetched from
/// * `pattern` - This stage's filter pattern
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Resolved absolute addresses in document order
/// * `Err(StageError)` - Content could not be parsed for anchors
pub fn matching_links(html: &str, base: &Url, pattern: &Regex) -> Result<Vec<String>, StageError> {
    let document = Html::parse_document(html);

    let anchor_selector = Selector::parse("a").map_err(|e| StageError::HtmlParse {
        url: base.to_string(),
        message: e.to_string(),
    })?;

    let links = document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| pattern.is_match(href))
        .map(|href| resolve_href(href, base))
        .collect();

    Ok(links)
}

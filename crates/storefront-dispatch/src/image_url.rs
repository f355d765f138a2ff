//! Turns a product image location into an absolute, safely encoded URL.

use percent_encoding::{percent_decode_str, utf8_percent_encode};
use reqwest::Url;
use storefront_core::contact::URI_COMPONENT;

/// Resolves `location` against the directory of `page_url`.
///
/// `http(s)` locations are returned verbatim. Relative ones are joined onto
/// the page URL and every path segment is re-encoded on its own, so spaces
/// and `&` inside folder or file names cannot break the link. If the page URL
/// does not parse, the result is a plain unencoded concatenation.
#[must_use]
pub fn resolve_image_url(location: &str, page_url: &str) -> String {
    let location = location.trim();
    if has_http_scheme(location) {
        return location.to_string();
    }

    match Url::parse(page_url).and_then(|base| base.join(location)) {
        Ok(url) => encode_path_segments(url),
        Err(e) => {
            tracing::warn!(
                page_url,
                location,
                error = %e,
                "could not resolve image location; falling back to string concatenation"
            );
            concat_fallback(page_url, location)
        }
    }
}

fn has_http_scheme(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn encode_path_segments(mut url: Url) -> String {
    let encoded = url
        .path()
        .split('/')
        .map(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8_lossy();
            utf8_percent_encode(&decoded, URI_COMPONENT).to_string()
        })
        .collect::<Vec<_>>()
        .join("/");
    url.set_path(&encoded);
    url.to_string()
}

/// Page directory (everything before the last `/`) joined with the location.
fn concat_fallback(page_url: &str, location: &str) -> String {
    let dir = page_url.rsplit_once('/').map_or(page_url, |(dir, _)| dir);
    format!("{dir}/{}", location.trim_start_matches("./"))
}

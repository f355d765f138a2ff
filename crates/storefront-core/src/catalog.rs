//! Portfolio gallery: which files are shown, how they are named, and paging.

use std::path::Path;

use serde::Serialize;

/// Gallery items revealed per "load more".
pub const ITEMS_PER_LOAD: usize = 12;

/// Directory the storefront serves portfolio images from, relative to the page.
pub const PORTFOLIO_IMAGE_DIR: &str = "./images & logo";

/// Price shown for portfolio items; never listed in order messages.
pub const UNLISTED_PRICE: &str = "Contact for pricing";

const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    pub product_name: String,
    pub product_price: String,
    pub image_path: String,
}

impl PortfolioItem {
    #[must_use]
    pub fn from_file(file: &str) -> Self {
        Self {
            product_name: product_name_from_file(file),
            product_price: UNLISTED_PRICE.to_string(),
            image_path: format!("{PORTFOLIO_IMAGE_DIR}/{file}"),
        }
    }
}

/// A portfolio image is an `img`-tagged jpg/jpeg/png that is neither a video
/// still nor a logo.
#[must_use]
pub fn is_portfolio_image(file: &str) -> bool {
    let lower = file.to_lowercase();
    lower.contains("img")
        && !lower.contains("vid")
        && !lower.contains("logo")
        && IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Derives a display name: extension dropped, `_`/`-` turned into spaces and
/// every word capitalized.
#[must_use]
pub fn product_name_from_file(file: &str) -> String {
    let stem = match file.rfind('.') {
        Some(idx) if idx + 1 < file.len() && !file[idx + 1..].contains('/') => &file[..idx],
        _ => file,
    };

    let mut name = String::with_capacity(stem.len());
    let mut prev_is_word = false;
    for c in stem.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !prev_is_word {
            name.push(c.to_ascii_uppercase());
        } else {
            name.push(c);
        }
        prev_is_word = is_word;
    }
    name
}

/// One "load more" slice of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryPage {
    pub items: Vec<PortfolioItem>,
    /// Offset of the next page, `None` once everything has been shown.
    pub next_cursor: Option<usize>,
}

/// Portfolio items in directory-listing order.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<PortfolioItem>,
}

impl Gallery {
    /// Keeps only the files that pass [`is_portfolio_image`].
    pub fn from_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = files
            .into_iter()
            .filter(|f| is_portfolio_image(f.as_ref()))
            .map(|f| PortfolioItem::from_file(f.as_ref()))
            .collect();
        Self { items }
    }

    /// Scans `dir` once, in file-name order. A missing or unreadable
    /// directory yields an empty gallery.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "portfolio directory unreadable");
                return Self::default();
            }
        };

        let mut files: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        files.sort();

        let gallery = Self::from_files(&files);
        tracing::info!(
            dir = %dir.display(),
            files = files.len(),
            items = gallery.len(),
            "loaded portfolio gallery"
        );
        gallery
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns up to `limit` items starting at `cursor`.
    #[must_use]
    pub fn page(&self, cursor: usize, limit: usize) -> GalleryPage {
        let start = cursor.min(self.items.len());
        let end = start.saturating_add(limit).min(self.items.len());
        GalleryPage {
            items: self.items[start..end].to_vec(),
            next_cursor: (end < self.items.len()).then_some(end),
        }
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

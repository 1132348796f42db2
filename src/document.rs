use anyhow::{Result, anyhow};
use scraper::{Html, Selector};

/// A parsed HTML document supporting CSS selector presence queries.
///
/// Parsing and selector matching are delegated wholesale to `scraper`;
/// malformed markup is tolerated to whatever degree the parser tolerates it.
pub struct Document {
    tree: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Document {
            tree: Html::parse_document(html),
        }
    }

    /// True when at least one element matches the selector.
    pub fn has_match(&self, selector: &str) -> Result<bool> {
        let parsed = Selector::parse(selector)
            .map_err(|e| anyhow!("invalid selector '{}': {}", selector, e))?;
        Ok(self.tree.select(&parsed).next().is_some())
    }
}

use log::trace;
use scraper::{Html, Node, Selector};
use url::Url;

use super::{ExtractedContent, Extractor};
use crate::core::CrawlResult;

// Anchors that never lead to a page.
const SKIPPED_HREF_PREFIXES: &[&str] = &["#", "javascript:", "mailto:", "tel:"];

pub struct HtmlExtractor {
    link_selector: Selector,
}

impl HtmlExtractor {
    pub fn new() -> Self {
        Self {
            link_selector: Selector::parse("a[href]").unwrap(),
        }
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for HtmlExtractor {
    fn extract(&self, html: &str, base: &Url) -> CrawlResult<ExtractedContent> {
        let document = Html::parse_document(html);
        let text = visible_text(&document);

        let mut links = Vec::new();
        for element in document.select(&self.link_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let href = href.trim();
            let lowered = href.to_ascii_lowercase();
            if href.is_empty()
                || SKIPPED_HREF_PREFIXES
                    .iter()
                    .any(|prefix| lowered.starts_with(prefix))
            {
                continue;
            }
            match base.join(href) {
                Ok(url) => links.push(url),
                Err(e) => trace!("Ignoring unresolvable href {:?} on {}: {}", href, base, e),
            }
        }

        Ok(ExtractedContent { text, links })
    }
}

fn visible_text(document: &Html) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
                continue;
            }
            Node::Element(element) => {
                if matches!(element.name(), "script" | "style" | "noscript") {
                    continue;
                }
            }
            _ => {}
        }
        let children: Vec<_> = node.children().collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    parts.join(" ")
}

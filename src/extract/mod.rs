mod base;
mod html;

pub use base::{ExtractedContent, Extractor};
pub use html::HtmlExtractor;

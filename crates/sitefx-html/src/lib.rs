//! sitefx HTML
//!
//! Loads page markup into a [`sitefx_dom::Document`] with html5ever and
//! writes documents back out as HTML.

mod parser;
mod serializer;

pub use parser::HtmlParser;
pub use serializer::HtmlSerializer;
pub use sitefx_dom::Document;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Serialize a whole document to HTML
pub fn to_html(doc: &Document) -> String {
    HtmlSerializer::new().serialize_document(doc)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build document: {0}")]
    Dom(#[from] sitefx_dom::DomError),
}

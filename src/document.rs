//! XML document loading.
//!
//! The whole report is parsed into a read-only DOM before any validation
//! runs. DTD processing is rejected outright, which rules out external
//! entity resolution on crafted input.

use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{ParseError, Result};

/// Parse a UTF-8 buffer into a document tree.
///
/// Any malformed markup surfaces as [`ParseError::Syntax`] carrying the
/// underlying parser message.
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: false,
        ..ParsingOptions::default()
    };

    Document::parse_with_options(text, options).map_err(ParseError::syntax)
}

/// Read a report file into memory.
///
/// Read and encoding failures are reported as [`ParseError::Syntax`]; the
/// caller-facing layer is responsible for checking that the path exists
/// beforehand so a missing file gets its own message.
pub fn read_to_string(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(ParseError::syntax)?;
    String::from_utf8(bytes).map_err(ParseError::syntax)
}

/// Concatenated text of all descendant text nodes.
///
/// Joins adjacent text and CDATA runs, matching how a normalized DOM
/// reports element content.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

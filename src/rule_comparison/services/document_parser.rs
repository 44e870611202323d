use crate::rule_comparison::domain::Environment;
use crate::shared::error::CompareError;
use crate::shared::Result;

/// Parses raw XML text into a navigable document tree.
///
/// Malformed input is detected positively by the parser and surfaced as
/// a [`CompareError::ParseError`] naming the side, with the library's
/// positional diagnostics in the details. Tree construction has no other
/// side effects; the returned document borrows `xml` and is dropped once
/// extraction is done.
pub fn parse(env: Environment, xml: &str) -> Result<roxmltree::Document<'_>> {
    roxmltree::Document::parse(xml).map_err(|e| {
        CompareError::ParseError {
            side: env.to_string(),
            details: e.to_string(),
        }
        .into()
    })
}

//! Decoder trait definition

use anyhow::Result;
use serde_json::Value;

/// Decodes the raw text of a metadata block
///
/// Returning `Ok(None)` means the block carried no data and is skipped.
/// Errors are not caught by the extractor; they end the transform for the
/// current document.
///
/// Any `Fn(&str) -> anyhow::Result<Option<Value>>` is a decoder:
///
/// ```
/// use fob_mdx_frontmatter::Decoder;
/// use serde_json::json;
///
/// let upper = |raw: &str| -> anyhow::Result<Option<serde_json::Value>> {
///     Ok(Some(json!({ "text": raw.to_uppercase() })))
/// };
/// assert_eq!(upper.decode("hi").unwrap(), Some(json!({ "text": "HI" })));
/// ```
pub trait Decoder: Send + Sync {
    /// Decode `raw` into a value, or `None` when the block is empty
    fn decode(&self, raw: &str) -> Result<Option<Value>>;
}

impl<F> Decoder for F
where
    F: Fn(&str) -> Result<Option<Value>> + Send + Sync,
{
    fn decode(&self, raw: &str) -> Result<Option<Value>> {
        self(raw)
    }
}

//! Per-document compile context

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Side channel carried alongside a document while it is transformed
///
/// Plugins write out-of-band results into `data`; the frontmatter plugin
/// uses it for the attach disposition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompileContext {
    /// Optional file path, used in error messages
    pub filepath: Option<String>,
    /// Key-value data produced by plugins
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl CompileContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filepath(mut self, filepath: impl Into<String>) -> Self {
        self.filepath = Some(filepath.into());
        self
    }

    /// Store `value` under `key`, replacing whatever was there
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.data.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_overwrites() {
        let mut ctx = CompileContext::new();
        assert_eq!(ctx.insert("frontmatter", json!(1)), None);
        assert_eq!(ctx.insert("frontmatter", json!(2)), Some(json!(1)));
        assert_eq!(ctx.get("frontmatter"), Some(&json!(2)));
    }

    #[test]
    fn test_with_filepath() {
        let ctx = CompileContext::new().with_filepath("post.mdx");
        assert_eq!(ctx.filepath.as_deref(), Some("post.mdx"));
        assert!(ctx.data.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut ctx = CompileContext::new().with_filepath("post.mdx");
        ctx.insert("frontmatter", json!({ "title": "Hi" }));

        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(
            value,
            json!({ "filepath": "post.mdx", "data": { "frontmatter": { "title": "Hi" } } })
        );

        let back: CompileContext = serde_json::from_value(value).unwrap();
        assert_eq!(back, ctx);
    }

    #[test]
    fn test_deserialize_defaults_data() {
        let ctx: CompileContext = serde_json::from_value(json!({ "filepath": null })).unwrap();
        assert_eq!(ctx, CompileContext::new());
    }
}

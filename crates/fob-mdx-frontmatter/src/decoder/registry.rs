//! Decoder registry keyed by mdast node type

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{Decoder, TomlDecoder, YamlDecoder};

/// Registry of frontmatter decoders
///
/// Maps a node type tag to the decoder that handles it. Built once per
/// plugin configuration and only read afterwards, so a single registry can
/// serve documents processed on different threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use fob_mdx_frontmatter::DecoderRegistry;
///
/// let mut registry = DecoderRegistry::with_defaults();
/// registry.register("code", Arc::new(|raw: &str| -> anyhow::Result<Option<serde_json::Value>> {
///     Ok(Some(serde_json::json!({ "snippet": raw })))
/// }));
///
/// assert!(registry.has("yaml"));
/// assert!(registry.has("code"));
/// ```
#[derive(Clone)]
pub struct DecoderRegistry {
    decoders: FxHashMap<String, Arc<dyn Decoder>>,
}

impl DecoderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            decoders: FxHashMap::default(),
        }
    }

    /// Create a registry holding the built-in `yaml` and `toml` decoders
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("yaml", Arc::new(YamlDecoder));
        registry.register("toml", Arc::new(TomlDecoder));
        registry
    }

    /// Build the effective registry: defaults first, then caller entries
    ///
    /// Caller entries replace a built-in decoder with the same tag.
    pub fn from_overrides<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, Arc<dyn Decoder>)>,
        S: Into<String>,
    {
        let mut registry = Self::with_defaults();
        for (tag, decoder) in overrides {
            registry.register(tag, decoder);
        }
        registry
    }

    /// Register a decoder
    ///
    /// Registering a tag that already exists replaces its decoder.
    pub fn register(&mut self, tag: impl Into<String>, decoder: Arc<dyn Decoder>) {
        self.decoders.insert(tag.into(), decoder);
    }

    /// Get a decoder by tag
    pub fn get(&self, tag: &str) -> Option<&Arc<dyn Decoder>> {
        self.decoders.get(tag)
    }

    /// Check if a tag is registered
    pub fn has(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.decoders.keys().map(|s| s.as_str()).collect();
        tags.sort_unstable();
        tags
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

//! Frontmatter plugin options

use std::sync::Arc;

use bon::Builder;
use serde_json::Value;

use crate::action::Action;
use crate::decoder::Decoder;

/// Context key and policy name used when no `name` is configured
pub const DEFAULT_NAME: &str = "frontmatter";

/// Options for [`FrontmatterPlugin`](crate::FrontmatterPlugin)
///
/// ```
/// use fob_mdx_frontmatter::{Action, Disposition, FrontmatterOptions};
///
/// let options = FrontmatterOptions::builder()
///     .name("meta")
///     .action(Action::Static(Disposition::Attach))
///     .build()
///     .with_parser("code", |raw| Ok(Some(serde_json::json!({ "source": raw }))));
/// assert_eq!(options.name.as_deref(), Some("meta"));
/// ```
#[derive(Builder, Clone, Default)]
pub struct FrontmatterOptions {
    /// Export everything under this single name instead of one export per key.
    /// Also the context key for the attach disposition.
    #[builder(into)]
    pub name: Option<String>,

    /// Decoders that extend or replace the built-in `yaml` and `toml` entries
    #[builder(default)]
    pub parsers: Vec<(String, Arc<dyn Decoder>)>,

    /// What to do with the extracted record
    #[builder(default)]
    pub action: Action,
}

impl std::fmt::Debug for FrontmatterOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontmatterOptions")
            .field("name", &self.name)
            .field(
                "parsers",
                &self.parsers.iter().map(|(tag, _)| tag).collect::<Vec<_>>(),
            )
            .field("action", &self.action)
            .finish()
    }
}

impl FrontmatterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Register a closure decoder for `tag`
    pub fn with_parser<F>(self, tag: impl Into<String>, parser: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<Option<Value>> + Send + Sync + 'static,
    {
        self.with_decoder(tag, Arc::new(parser))
    }

    /// Register a decoder for `tag`
    pub fn with_decoder(mut self, tag: impl Into<String>, decoder: Arc<dyn Decoder>) -> Self {
        self.parsers.push((tag.into(), decoder));
        self
    }

    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.action = action.into();
        self
    }

    /// Export name, or [`DEFAULT_NAME`]
    pub fn key(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }
}

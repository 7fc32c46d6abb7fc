//! Declarative frontmatter configuration
//!
//! Loads the serializable subset of [`FrontmatterOptions`] from TOML text or
//! an already-parsed JSON value (for example the `frontmatter` table of a
//! project config file). Decoders and dynamic actions can only be set in code.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::{Action, Disposition};
use crate::error::{FrontmatterError, Result};
use crate::options::FrontmatterOptions;

/// Serializable frontmatter settings
///
/// ```toml
/// name = "meta"
/// action = "attach"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontmatterConfig {
    /// Export name; see [`FrontmatterOptions::name`]
    #[serde(default)]
    pub name: Option<String>,

    /// Static action tag: `embed`, `attach`, `suppress`
    /// (or `mdx-export`, `vfile-data`, `skip`)
    #[serde(default)]
    pub action: Option<String>,
}

impl FrontmatterConfig {
    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let toml_val: toml::Table = toml::from_str(content)
            .map_err(|e| FrontmatterError::Config(format!("Invalid TOML syntax: {}", e)))?;

        let value = serde_json::to_value(toml_val)
            .map_err(|e| FrontmatterError::Config(format!("TOML to JSON conversion failed: {}", e)))?;

        Self::from_value(value)
    }

    /// Deserialize from a JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| FrontmatterError::Config(e.to_string()))
    }

    /// Resolved disposition; unknown tags resolve to suppress
    pub fn disposition(&self) -> Disposition {
        self.action
            .as_deref()
            .map(Disposition::from_tag)
            .unwrap_or_default()
    }

    /// Convert into plugin options with the built-in decoders only
    pub fn into_options(self) -> FrontmatterOptions {
        let action = Action::Static(self.disposition());
        FrontmatterOptions::builder()
            .maybe_name(self.name)
            .action(action)
            .build()
    }
}

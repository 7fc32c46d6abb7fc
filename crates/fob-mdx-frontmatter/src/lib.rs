//! # fob-mdx-frontmatter
//!
//! Expose MDX frontmatter as named exports.
//!
//! The plugin scans the top-level nodes of an mdast tree for metadata blocks
//! (`yaml` and `toml` by default), decodes and merges them, and then does
//! one of three things with the result:
//!
//! - **embed**: insert `export const title = "...", tags = [...];` as the first node
//! - **attach**: store the record in the [`CompileContext`] under its name
//! - **suppress**: leave everything as is
//!
//! ```
//! use fob_mdx_frontmatter::{FrontmatterOptions, esm_exports, process};
//!
//! let source = "---\ntitle: Hello\ntags: [a, b]\n---\n\n# Hello";
//! let result = process(source, FrontmatterOptions::default(), None).unwrap();
//!
//! assert_eq!(
//!     esm_exports(&result.tree),
//!     ["export const title = \"Hello\", tags = [\"a\", \"b\"];"]
//! );
//! ```

pub mod action;
pub mod config;
pub mod context;
pub mod decoder;
pub mod document;
pub mod error;
pub mod esm;
pub mod export;
pub mod extract;
pub mod options;
pub mod plugins;
mod router;

// Re-export public types
pub use action::{Action, Disposition, TravelFn};
pub use config::FrontmatterConfig;
pub use context::CompileContext;
pub use decoder::{Decoder, DecoderRegistry, TomlDecoder, YamlDecoder};
pub use document::{ProcessResult, esm_exports, parse_mdx, process};
pub use error::FrontmatterError;
pub use esm::{check_module, validate_esm_syntax};
pub use export::{ExportDeclaration, Expression, create_export, is_valid_identifier};
pub use extract::extract;
pub use options::{DEFAULT_NAME, FrontmatterOptions};
pub use plugins::{FrontmatterPlugin, MdxPlugin, run_plugins};

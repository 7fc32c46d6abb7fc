//! Plugin system for document tree transformations

mod frontmatter;
mod trait_def;

pub use frontmatter::FrontmatterPlugin;
pub use trait_def::{MdxPlugin, run_plugins};

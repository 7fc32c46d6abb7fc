//! Plugin trait for transforming the MDX document tree

use markdown::mdast::Node;

use crate::context::CompileContext;
use crate::error::Result;

/// Plugin that transforms an MDX document tree
///
/// Plugins run once per document and may mutate the tree in place or record
/// out-of-band results in the [`CompileContext`].
///
/// # Thread Safety
///
/// Plugins must be `Send + Sync` because documents may be processed in
/// parallel. A plugin's configuration is shared across those documents;
/// the tree and context passed to [`transform`](MdxPlugin::transform)
/// belong to the single document being processed.
pub trait MdxPlugin: Send + Sync {
    /// Plugin name for debugging and logging
    ///
    /// Use a short, lowercase identifier like "frontmatter".
    fn name(&self) -> &'static str;

    /// Transform the document tree
    ///
    /// `tree` is expected to be the root node of the document.
    fn transform(&self, tree: &mut Node, ctx: &mut CompileContext) -> Result<()>;
}

/// Run `plugins` over a document in order, stopping at the first error
pub fn run_plugins(
    plugins: &[&dyn MdxPlugin],
    tree: &mut Node,
    ctx: &mut CompileContext,
) -> Result<()> {
    for plugin in plugins {
        tracing::debug!(plugin = plugin.name(), "Running AST transformation plugin");
        plugin.transform(tree, ctx)?;
    }
    Ok(())
}

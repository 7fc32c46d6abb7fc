//! Parsing MDX sources and running the frontmatter plugin over them

use markdown::mdast::Node;
use serde_json::{Map, Value};

use crate::action::Disposition;
use crate::context::CompileContext;
use crate::error::{FrontmatterError, Result};
use crate::options::FrontmatterOptions;
use crate::plugins::FrontmatterPlugin;

/// Maximum allowed MDX source size (10MB)
const MAX_MDX_SIZE: usize = 10 * 1024 * 1024;

/// Parse an MDX source into an mdast root with frontmatter nodes enabled
///
/// ESM blocks are validated with OXC while parsing.
pub fn parse_mdx(source: &str, filepath: Option<&str>) -> Result<Node> {
    if source.len() > MAX_MDX_SIZE {
        return Err(FrontmatterError::Parse(format!(
            "MDX source exceeds maximum size of {} bytes ({} MB)",
            MAX_MDX_SIZE,
            MAX_MDX_SIZE / 1024 / 1024
        )));
    }

    let mut parse_options = markdown::ParseOptions::mdx();
    parse_options.mdx_esm_parse = Some(Box::new(crate::esm::validate_esm_syntax));
    parse_options.constructs.frontmatter = true;

    markdown::to_mdast(source, &parse_options).map_err(|e| {
        let err = FrontmatterError::Parse(e.to_string());
        match filepath {
            Some(file) => err.with_file(file),
            None => err,
        }
    })
}

/// Code of every top-level ESM node, in document order
pub fn esm_exports(tree: &Node) -> Vec<&str> {
    let Node::Root(root) = tree else {
        return Vec::new();
    };

    root.children
        .iter()
        .filter_map(|child| match child {
            Node::MdxjsEsm(esm) => Some(esm.value.as_str()),
            _ => None,
        })
        .collect()
}

/// Result of [`process`]
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// Transformed document tree
    pub tree: Node,
    /// Side-channel data written by the plugin
    pub data: Map<String, Value>,
    /// Disposition that was applied
    pub disposition: Disposition,
}

/// Parse `source` and run a [`FrontmatterPlugin`] built from `options`
///
/// ```
/// use fob_mdx_frontmatter::{Disposition, FrontmatterOptions, process};
///
/// let options = FrontmatterOptions::new().with_action(Disposition::Attach);
/// let result = process("---\ntitle: Hi\n---\n", options, None).unwrap();
///
/// assert_eq!(result.data["frontmatter"]["title"], "Hi");
/// ```
pub fn process(
    source: &str,
    options: FrontmatterOptions,
    filepath: Option<&str>,
) -> Result<ProcessResult> {
    let plugin = FrontmatterPlugin::new(options)?;
    let mut tree = parse_mdx(source, filepath)?;

    let mut ctx = CompileContext::new();
    if let Some(file) = filepath {
        ctx = ctx.with_filepath(file);
    }

    let disposition = plugin.run(&mut tree, &mut ctx)?;

    Ok(ProcessResult {
        tree,
        data: ctx.data,
        disposition,
    })
}

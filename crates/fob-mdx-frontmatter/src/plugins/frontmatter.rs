//! Frontmatter plugin: extract metadata blocks and re-expose them

use std::fmt;

use markdown::mdast::Node;

use super::MdxPlugin;
use crate::action::{Disposition, Policy};
use crate::context::CompileContext;
use crate::decoder::DecoderRegistry;
use crate::error::{FrontmatterError, Result};
use crate::export::is_valid_identifier;
use crate::extract::extract;
use crate::options::{DEFAULT_NAME, FrontmatterOptions};
use crate::router::route;

/// Plugin that exposes frontmatter as exports or compile-time data
///
/// The decoder registry and the action are resolved once in
/// [`FrontmatterPlugin::new`]. After that the plugin is read-only and can be
/// shared between threads processing different documents.
///
/// Per document the plugin:
/// 1. decodes every registered top-level metadata block and merges the results,
/// 2. asks the action what to do with the merged record,
/// 3. embeds an `export const` node, attaches the record to the context,
///    or does nothing.
///
/// Metadata nodes are never removed from the tree.
///
/// # Example
///
/// ```
/// use fob_mdx_frontmatter::{CompileContext, FrontmatterOptions, FrontmatterPlugin, parse_mdx};
///
/// let plugin = FrontmatterPlugin::new(FrontmatterOptions::default()).unwrap();
/// let mut tree = parse_mdx("---\ntitle: Hello\n---\n\n# Hi", None).unwrap();
/// let mut ctx = CompileContext::new();
///
/// plugin.run(&mut tree, &mut ctx).unwrap();
///
/// let exports = fob_mdx_frontmatter::esm_exports(&tree);
/// assert_eq!(exports, ["export const title = \"Hello\";"]);
/// ```
pub struct FrontmatterPlugin {
    name: Option<String>,
    registry: DecoderRegistry,
    policy: Policy,
}

impl FrontmatterPlugin {
    /// Resolve options into a ready-to-run plugin
    ///
    /// # Errors
    ///
    /// Returns [`FrontmatterError::InvalidName`] if `options.name` is set but
    /// is not a valid binding identifier.
    pub fn new(options: FrontmatterOptions) -> Result<Self> {
        if let Some(name) = options.name.as_deref().filter(|name| !is_valid_identifier(name)) {
            return Err(FrontmatterError::InvalidName {
                name: name.to_string(),
            });
        }

        Ok(Self {
            registry: DecoderRegistry::from_overrides(options.parsers),
            policy: options.action.into_policy(),
            name: options.name,
        })
    }

    /// Configured export name, if any
    pub fn export_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Effective decoder registry
    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    /// Process one document and report which disposition was applied
    ///
    /// # Errors
    ///
    /// - [`FrontmatterError::NotRoot`] if `tree` is not a root node
    /// - [`FrontmatterError::Shape`] for a non-object block without a name
    /// - [`FrontmatterError::InvalidKey`] / [`FrontmatterError::ExportShape`]
    ///   when the record cannot be exported
    /// - [`FrontmatterError::Decode`] for decoder failures
    pub fn run(&self, tree: &mut Node, ctx: &mut CompileContext) -> Result<Disposition> {
        let root = match tree {
            Node::Root(root) => root,
            other => return Err(FrontmatterError::NotRoot(format!("{other:?}"))),
        };

        let record = extract(&root.children, &self.registry, self.name.is_some())?;

        let key = self.name.as_deref().unwrap_or(DEFAULT_NAME);
        let (disposition, record) = self.policy.decide(key, record);

        tracing::debug!(
            file = ctx.filepath.as_deref(),
            %disposition,
            has_record = record.is_some(),
            "Routing frontmatter"
        );

        route(
            disposition,
            record,
            self.name.as_deref(),
            key,
            &mut root.children,
            ctx,
        )?;

        Ok(disposition)
    }
}

impl MdxPlugin for FrontmatterPlugin {
    fn name(&self) -> &'static str {
        "frontmatter"
    }

    fn transform(&self, tree: &mut Node, ctx: &mut CompileContext) -> Result<()> {
        self.run(tree, ctx).map(|_| ())
    }
}

impl fmt::Debug for FrontmatterPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrontmatterPlugin")
            .field("name", &self.name)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use markdown::mdast::{Paragraph, Root, Yaml};
    use serde_json::json;

    fn root(children: Vec<Node>) -> Node {
        Node::Root(Root {
            children,
            position: None,
        })
    }

    fn yaml(value: &str) -> Node {
        Node::Yaml(Yaml {
            value: value.to_string(),
            position: None,
        })
    }

    #[test]
    fn test_invalid_name_rejected_at_construction() {
        let err = FrontmatterPlugin::new(FrontmatterOptions::new().with_name("not-valid")).unwrap_err();
        assert!(matches!(err, FrontmatterError::InvalidName { ref name } if name == "not-valid"));
    }

    #[test]
    fn test_not_root() {
        let plugin = FrontmatterPlugin::new(FrontmatterOptions::default()).unwrap();
        let mut tree = Node::Paragraph(Paragraph {
            children: vec![],
            position: None,
        });
        let err = plugin.run(&mut tree, &mut CompileContext::new()).unwrap_err();
        assert!(matches!(err, FrontmatterError::NotRoot(_)));
    }

    #[test]
    fn test_policy_sees_default_name_and_unwrapped_record() {
        let plugin = FrontmatterPlugin::new(FrontmatterOptions::new().with_action(Action::dynamic(
            |name, record| {
                assert_eq!(name, "frontmatter");
                assert_eq!(record, Some(json!({ "x": 1 })));
                (Disposition::Suppress, record)
            },
        )))
        .unwrap();

        let mut tree = root(vec![yaml("x: 1")]);
        let disposition = plugin.run(&mut tree, &mut CompileContext::new()).unwrap();
        assert_eq!(disposition, Disposition::Suppress);
    }

    #[test]
    fn test_rewritten_record_is_wrapped_after_policy() {
        let plugin = FrontmatterPlugin::new(
            FrontmatterOptions::new()
                .with_name("meta")
                .with_action(Action::dynamic(|_, _| (Disposition::Embed, Some(json!([1, 2]))))),
        )
        .unwrap();

        let mut tree = root(vec![yaml("x: 1")]);
        plugin.run(&mut tree, &mut CompileContext::new()).unwrap();

        let Node::Root(root) = &tree else { unreachable!() };
        let Node::MdxjsEsm(esm) = &root.children[0] else {
            panic!("expected ESM node first");
        };
        assert_eq!(esm.value, "export const meta = [1, 2];");
    }

    #[test]
    fn test_registry_includes_overrides() {
        let plugin = FrontmatterPlugin::new(
            FrontmatterOptions::new().with_parser("code", |_raw| Ok(None)),
        )
        .unwrap();
        assert_eq!(plugin.registry().tags(), vec!["code", "toml", "yaml"]);
        assert_eq!(MdxPlugin::name(&plugin), "frontmatter");
    }
}

//! Apply a disposition to the document tree or the compile context

use markdown::mdast::Node;
use serde_json::{Map, Value};

use crate::action::Disposition;
use crate::context::CompileContext;
use crate::error::Result;
use crate::export::{Declarator, ExportDeclaration, Expression, create_export};

/// Perform `disposition` for `record`
///
/// - `Embed` nests the record under `name` when one is set and inserts the
///   export node as the first child. A configured name is always exported,
///   bound to `undefined` when the record is absent. Without a name nothing
///   is inserted for an absent record or one with no keys to export.
/// - `Attach` writes the record (or `null` when absent) into the context
///   under `key`, overwriting any earlier value.
/// - `Suppress` does nothing.
///
/// The export node is fully built before the tree is touched, so an error
/// leaves `children` unchanged.
pub(crate) fn route(
    disposition: Disposition,
    record: Option<Value>,
    name: Option<&str>,
    key: &str,
    children: &mut Vec<Node>,
    ctx: &mut CompileContext,
) -> Result<()> {
    match disposition {
        Disposition::Embed => {
            let node = match (name, record) {
                (Some(name), Some(record)) => {
                    let mut wrapped = Map::with_capacity(1);
                    wrapped.insert(name.to_string(), record);
                    create_export(&Value::Object(wrapped))?
                }
                (Some(name), None) => {
                    tracing::debug!("No frontmatter found, exporting {} as undefined", name);
                    let declaration = ExportDeclaration {
                        declarators: vec![Declarator {
                            id: name.to_string(),
                            init: Expression::Undefined,
                        }],
                    };
                    Some(declaration.into_node())
                }
                (None, Some(record)) => create_export(&record)?,
                (None, None) => {
                    tracing::debug!("No frontmatter to export");
                    return Ok(());
                }
            };

            match node {
                Some(node) => children.insert(0, node),
                None => tracing::debug!("Frontmatter record has no keys, nothing to export"),
            }
        }
        Disposition::Attach => {
            ctx.insert(key, record.unwrap_or(Value::Null));
        }
        Disposition::Suppress => {}
    }

    Ok(())
}

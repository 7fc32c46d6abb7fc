//! Frontmatter extraction from the top level of a document

use markdown::mdast::Node;
use serde_json::{Map, Value};

use crate::decoder::DecoderRegistry;
use crate::error::{FrontmatterError, Result};

/// mdast type tag and raw text of a literal node
///
/// Only literal nodes carry text a decoder can consume. Parent nodes never
/// match a registered tag.
pub fn literal(node: &Node) -> Option<(&'static str, &str)> {
    let literal = match node {
        Node::Yaml(n) => ("yaml", n.value.as_str()),
        Node::Toml(n) => ("toml", n.value.as_str()),
        Node::Code(n) => ("code", n.value.as_str()),
        Node::Html(n) => ("html", n.value.as_str()),
        Node::Math(n) => ("math", n.value.as_str()),
        Node::Text(n) => ("text", n.value.as_str()),
        Node::InlineCode(n) => ("inlineCode", n.value.as_str()),
        Node::InlineMath(n) => ("inlineMath", n.value.as_str()),
        Node::MdxjsEsm(n) => ("mdxjsEsm", n.value.as_str()),
        Node::MdxFlowExpression(n) => ("mdxFlowExpression", n.value.as_str()),
        Node::MdxTextExpression(n) => ("mdxTextExpression", n.value.as_str()),
        _ => return None,
    };
    Some(literal)
}

/// Decode and merge every registered metadata block among `children`
///
/// Blocks are visited once, in document order. Later blocks overwrite keys
/// of earlier ones. Blocks that decode to nothing are skipped.
///
/// When `named` is false every decoded value must be an object. When it is
/// true any shape is accepted: a non-object replaces the accumulated record
/// and an object merges into an object record.
///
/// Returns `None` if no block contributed data.
///
/// # Errors
///
/// - [`FrontmatterError::Shape`] for a non-object block while `named` is false
/// - [`FrontmatterError::Decode`] for any decoder failure
pub fn extract(
    children: &[Node],
    registry: &DecoderRegistry,
    named: bool,
) -> Result<Option<Value>> {
    let mut gathered: Option<Value> = None;

    for (index, child) in children.iter().enumerate() {
        let Some((tag, raw)) = literal(child) else {
            continue;
        };
        let Some(decoder) = registry.get(tag) else {
            continue;
        };

        let Some(data) = decoder.decode(raw)?.filter(|data| !data.is_null()) else {
            tracing::debug!(tag, index, "Frontmatter block decoded to nothing, skipping");
            continue;
        };

        tracing::debug!(tag, index, "Decoded frontmatter block");

        match data {
            Value::Object(incoming) => {
                let record = gathered.get_or_insert_with(|| Value::Object(Map::new()));
                match record {
                    Value::Object(object) => object.extend(incoming),
                    other => *other = Value::Object(incoming),
                }
            }
            other if named => gathered = Some(other),
            _ => {
                return Err(FrontmatterError::Shape {
                    raw: raw.to_string(),
                });
            }
        }
    }

    Ok(gathered)
}

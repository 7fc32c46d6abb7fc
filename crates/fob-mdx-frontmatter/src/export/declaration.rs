//! `export const` declarations synthesized from a frontmatter record

use markdown::mdast::{MdxjsEsm, Node};
use serde_json::Value;

use super::escape::is_valid_identifier;
use super::expression::Expression;
use crate::error::{FrontmatterError, Result};

/// A single `id = init` binding
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub id: String,
    pub init: Expression,
}

/// A module-level `export const a = ..., b = ...;` statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportDeclaration {
    pub declarators: Vec<Declarator>,
}

impl ExportDeclaration {
    /// Build one declarator per top-level key, in record order
    ///
    /// # Errors
    ///
    /// - [`FrontmatterError::ExportShape`] if `record` is not an object
    /// - [`FrontmatterError::InvalidKey`] for the first key that is not a
    ///   valid binding identifier. No declaration is produced in that case.
    pub fn from_record(record: &Value) -> Result<Self> {
        let Value::Object(object) = record else {
            return Err(FrontmatterError::ExportShape {
                found: record.to_string(),
            });
        };

        let declarators = object
            .iter()
            .map(|(key, value)| {
                if !is_valid_identifier(key) {
                    return Err(FrontmatterError::InvalidKey { key: key.clone() });
                }
                Ok(Declarator {
                    id: key.clone(),
                    init: Expression::from_value(value),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { declarators })
    }

    pub fn is_empty(&self) -> bool {
        self.declarators.is_empty()
    }

    /// Exported binding names, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarators.iter().map(|d| d.id.as_str())
    }

    /// Render as ES module source
    pub fn to_js(&self) -> String {
        let bindings: Vec<String> = self
            .declarators
            .iter()
            .map(|d| format!("{} = {}", d.id, d.init.to_js()))
            .collect();
        format!("export const {};", bindings.join(", "))
    }

    /// Wrap the declaration in an mdast ESM node
    pub fn into_node(self) -> Node {
        Node::MdxjsEsm(MdxjsEsm {
            value: self.to_js(),
            position: None,
            stops: Vec::new(),
        })
    }
}

/// Create the export node for a record
///
/// Returns `Ok(None)` for an empty object: a `const` declaration needs at
/// least one binding, so there is nothing to export.
pub fn create_export(record: &Value) -> Result<Option<Node>> {
    let declaration = ExportDeclaration::from_record(record)?;
    if declaration.is_empty() {
        return Ok(None);
    }
    Ok(Some(declaration.into_node()))
}

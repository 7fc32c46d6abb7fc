//! Export node synthesis
//!
//! Turns a decoded frontmatter record into an `export const` statement and
//! wraps it in an mdast ESM node so it can be spliced into the document.

mod declaration;
mod escape;
mod expression;

pub use declaration::{Declarator, ExportDeclaration, create_export};
pub use escape::{escape_js_string, is_valid_identifier};
pub use expression::{Expression, Property, PropertyKey};

//! What to do with an extracted frontmatter record

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Handling chosen for a document's frontmatter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Splice an `export const` node in front of the document
    #[default]
    Embed,
    /// Store the record in [`CompileContext::data`](crate::CompileContext)
    Attach,
    /// Leave tree and context untouched
    Suppress,
}

impl Disposition {
    /// Resolve a configuration tag
    ///
    /// Accepts `embed`/`attach`/`suppress` and the `mdx-export`/`vfile-data`/`skip`
    /// spellings used by remark configs. Anything else resolves to
    /// [`Disposition::Suppress`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "embed" | "mdx-export" => Self::Embed,
            "attach" | "vfile-data" => Self::Attach,
            "suppress" | "skip" => Self::Suppress,
            other => {
                tracing::warn!(tag = other, "Unrecognized frontmatter action, skipping");
                Self::Suppress
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Embed => "embed",
            Self::Attach => "attach",
            Self::Suppress => "suppress",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy callback: receives the export name (defaulted to `frontmatter`)
/// and the merged record, returns the disposition and the record to use
/// from then on.
pub type TravelFn = dyn Fn(&str, Option<Value>) -> (Disposition, Option<Value>) + Send + Sync;

/// Configured frontmatter action
#[derive(Clone)]
pub enum Action {
    /// Always apply this disposition, record unchanged
    Static(Disposition),
    /// Decide per document, optionally rewriting the record
    Dynamic(Arc<TravelFn>),
}

impl Action {
    /// Build a dynamic action from a closure
    ///
    /// ```
    /// use fob_mdx_frontmatter::{Action, Disposition};
    ///
    /// let action = Action::dynamic(|_name, record| match record {
    ///     Some(data) if data.get("draft").is_some() => (Disposition::Suppress, None),
    ///     other => (Disposition::Embed, other),
    /// });
    /// # let _ = action;
    /// ```
    pub fn dynamic<F>(travel: F) -> Self
    where
        F: Fn(&str, Option<Value>) -> (Disposition, Option<Value>) + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(travel))
    }

    /// Resolve into the single call shape used by the transform
    pub(crate) fn into_policy(self) -> Policy {
        match self {
            Self::Static(disposition) => Policy(Arc::new(
                move |_name: &str, record: Option<Value>| (disposition, record),
            )),
            Self::Dynamic(travel) => Policy(travel),
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::Static(Disposition::Embed)
    }
}

impl From<Disposition> for Action {
    fn from(disposition: Disposition) -> Self {
        Self::Static(disposition)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(disposition) => f.debug_tuple("Static").field(disposition).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Resolved action, built once per plugin
#[derive(Clone)]
pub(crate) struct Policy(Arc<TravelFn>);

impl Policy {
    pub(crate) fn decide(&self, name: &str, record: Option<Value>) -> (Disposition, Option<Value>) {
        (self.0)(name, record)
    }
}

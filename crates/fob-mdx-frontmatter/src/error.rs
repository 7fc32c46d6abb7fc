//! Error types for frontmatter extraction and export

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrontmatterError>;

/// Errors raised while extracting or exporting frontmatter
///
/// Every variant aborts the transform for the current document. Nothing is
/// spliced into the tree and nothing is written to the compile context once
/// one of these is returned.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// The configured export name is not a usable binding identifier
    #[error("If name is specified, this should be a valid identifier name, got: {name:?}")]
    InvalidName { name: String },

    /// A block decoded to a non-object while no export name is configured
    #[error("Expected frontmatter data to be an object, got:\n{raw}")]
    Shape { raw: String },

    /// The record handed to export synthesis is not an object
    #[error("Frontmatter export requires an object, got: {found}")]
    ExportShape { found: String },

    /// A top-level record key cannot be used as an export name
    #[error("Frontmatter keys should be valid identifiers, got: {key:?}")]
    InvalidKey { key: String },

    /// Error raised by a registered decoder, passed through untouched
    #[error(transparent)]
    Decode(#[from] anyhow::Error),

    /// The transform was handed something other than a root node
    #[error("Expected Root node, got {0}")]
    NotRoot(String),

    /// Malformed configuration document
    #[error("invalid frontmatter config: {0}")]
    Config(String),

    /// The source could not be parsed into a document tree
    #[error("Failed to parse MDX: {0}")]
    Parse(String),
}

impl FrontmatterError {
    /// Attach the file being processed to a parse error message
    pub fn with_file(self, file: &str) -> Self {
        match self {
            Self::Parse(message) => Self::Parse(format!("{message}\n  in {file}")),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_includes_raw_text() {
        let err = FrontmatterError::Shape {
            raw: "just a string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Expected frontmatter data to be an object, got:\njust a string"
        );
    }

    #[test]
    fn test_invalid_key_is_quoted() {
        let err = FrontmatterError::InvalidKey {
            key: "invalid-key".to_string(),
        };
        assert!(err.to_string().contains("\"invalid-key\""));
    }

    #[test]
    fn test_decode_error_is_transparent() {
        let err = FrontmatterError::from(anyhow::anyhow!("bad yaml at line 3"));
        assert_eq!(err.to_string(), "bad yaml at line 3");
    }

    #[test]
    fn test_with_file_only_touches_parse_errors() {
        let err = FrontmatterError::Parse("unexpected eof".into()).with_file("post.mdx");
        assert!(err.to_string().contains("in post.mdx"));

        let err = FrontmatterError::Config("x".into()).with_file("post.mdx");
        assert!(!err.to_string().contains("post.mdx"));
    }
}

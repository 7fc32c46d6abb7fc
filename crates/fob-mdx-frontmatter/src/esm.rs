//! ESM syntax validation using the OXC parser

use markdown::MdxSignal;
use oxc_allocator::Allocator;
use oxc_parser::{Parser, ParserReturn};
use oxc_span::SourceType;

/// Check that `code` parses as an ES module
///
/// On failure returns the first parser message together with its 1-indexed
/// line and column.
pub fn check_module(code: &str) -> Result<(), (String, usize, usize)> {
    let allocator = Allocator::default();
    let ParserReturn { errors, .. } = Parser::new(&allocator, code, SourceType::mjs()).parse();

    let Some(error) = errors.first() else {
        return Ok(());
    };

    let (line, column) = error
        .labels
        .as_ref()
        .and_then(|labels| labels.first())
        .map(|label| offset_to_line_col(code, label.offset()))
        .unwrap_or((1, 1));

    Err((format!("Invalid ESM syntax: {}", error.message), line, column))
}

/// Validates ESM blocks for the markdown parser
///
/// Passed as `mdx_esm_parse` so malformed `import`/`export` statements are
/// reported while the document is parsed.
pub fn validate_esm_syntax(code: &str) -> MdxSignal {
    match check_module(code) {
        Ok(()) => MdxSignal::Ok,
        Err((message, line, column)) => {
            let context = code
                .lines()
                .nth(line.saturating_sub(1))
                .unwrap_or("")
                .to_string();

            MdxSignal::Error(
                message,
                line,
                Box::new(format!("at line {}, column {}", line, column)),
                Box::new(context),
            )
        }
    }
}

/// Convert a byte offset to a 1-indexed (line, column) pair
fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}

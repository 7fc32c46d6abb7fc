//! String escaping and JavaScript identifier utilities

use oxc_syntax::identifier::{is_identifier_part, is_identifier_start};

/// Escape a string for safe inclusion in a double-quoted JavaScript literal
///
/// Handles Unicode line/paragraph separators, which break JavaScript parsers
/// even inside string literals.
pub fn escape_js_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);

    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\u{2028}' => result.push_str("\\u2028"),
            '\u{2029}' => result.push_str("\\u2029"),
            ch if ch.is_control() => {
                result.push_str(&format!("\\u{:04x}", ch as u32));
            }
            _ => result.push(ch),
        }
    }

    result
}

/// Words that can never name a `const` binding in an ES module
const RESERVED: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Check if a string is a valid JavaScript binding identifier
///
/// Valid identifiers:
/// - Start with an `ID_Start` character, `$`, or `_`
/// - Continue with `ID_Continue` characters, `$`, `_`, ZWNJ or ZWJ
/// - Are not reserved in strict module code
///
/// Used both for export names and for deciding whether an object key
/// can be written unquoted.
pub fn is_valid_identifier(name: &str) -> bool {
    if name.is_empty() || RESERVED.contains(&name) {
        return false;
    }

    let mut chars = name.chars();

    match chars.next() {
        Some(c) if is_identifier_start(c) => {}
        _ => return false,
    }

    chars.all(is_identifier_part)
}

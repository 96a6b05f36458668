//! Line classifier and name/return-type extractor.
//!
//! Best-effort classification of a single already-trimmed line as a function
//! signature. There is no real C parser here: a "no match" is an expected
//! outcome, never an error.

use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(//|/\*)").unwrap());

static RE_PREPROCESSOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#").unwrap());

// Prefix match, not word-boundary: mirrors the original tool.
static RE_TYPE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(typedef|struct|enum|union)").unwrap());

/// Header files accept prototypes as well as definitions.
pub fn is_header_file(filename: &str) -> bool {
    filename.ends_with(".h")
}

/// Decide whether a line is a candidate function signature.
///
/// `raw` is the line as read from the file; `trimmed` is the same line with
/// surrounding whitespace removed. Indentation is the only cheap signal that
/// a line is a nested statement or call rather than a top-level declaration,
/// so that check runs against `raw`.
pub fn is_signature_line(raw: &str, trimmed: &str, is_header: bool) -> bool {
    if RE_COMMENT.is_match(trimmed) {
        return false;
    }
    if RE_PREPROCESSOR.is_match(trimmed) {
        return false;
    }
    if RE_TYPE_KEYWORD.is_match(trimmed) {
        return false;
    }
    if !trimmed.contains('(') || !trimmed.contains(')') {
        return false;
    }
    if raw.starts_with(' ') || raw.starts_with('\t') {
        return false;
    }

    if is_header {
        // Prototypes ending in `;` and inline definitions both count.
        !trimmed.is_empty()
    } else {
        // In .c files a trailing `;` marks a forward declaration, not a
        // documentable definition.
        !trimmed.is_empty() && !trimmed.ends_with(';')
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Identifier run immediately left of the first `(`.
/// None when there is no `(` or no identifier character adjacent to it.
pub fn extract_name(line: &str) -> Option<String> {
    let paren = line.find('(')?;
    let bytes = line.as_bytes();
    let mut start = paren;
    while start > 0 && is_ident_byte(bytes[start - 1]) {
        start -= 1;
    }
    if start == paren {
        return None;
    }
    Some(line[start..paren].to_string())
}

/// Text left of the function name, trimmed. Empty falls back to `int`
/// (the implicit-int convention); a line with no `(` falls back to `void`.
pub fn extract_return_type(line: &str) -> String {
    let Some(paren) = line.find('(') else {
        return "void".to_string();
    };
    let bytes = line.as_bytes();
    let mut start = paren;
    while start > 0 && is_ident_byte(bytes[start - 1]) {
        start -= 1;
    }
    let ty = line[..start].trim();
    if ty.is_empty() {
        "int".to_string()
    } else {
        ty.to_string()
    }
}

/// Substring strictly between the first `(` and the last `)`, if any.
pub fn parameter_span(signature: &str) -> Option<&str> {
    let start = signature.find('(')?;
    let end = signature.rfind(')')?;
    if end <= start {
        return None;
    }
    Some(&signature[start + 1..end])
}

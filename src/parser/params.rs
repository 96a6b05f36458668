//! Parameter tokenizer: splits a parenthesized parameter list into
//! name/type/qualifier triples and seeds an `@param` documentation block.

use crate::model::Parameter;

/// Word-token cap per parameter. Longer input is truncated, not rejected.
const MAX_PARAM_TOKENS: usize = 10;

/// Parse the text between the parentheses of a signature.
///
/// `void` or empty means zero parameters. Split on commas; a segment that
/// yields no usable name is dropped silently.
pub fn parse_parameter_list(text: &str) -> Vec<Parameter> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "void" {
        return Vec::new();
    }
    trimmed.split(',').filter_map(parse_parameter).collect()
}

fn parse_parameter(raw: &str) -> Option<Parameter> {
    let mut text = raw.trim();
    let mut param = Parameter::default();

    if let Some(rest) = text.strip_prefix("const ") {
        param.is_const = true;
        text = rest.trim();
    }

    let tokens: Vec<&str> = text.split_whitespace().take(MAX_PARAM_TOKENS).collect();
    let (&last, type_tokens) = tokens.split_last()?;

    // The last token carries the name, possibly behind a `*` run or with an
    // array suffix. Both are stripped into flags.
    let name = last.trim_start_matches('*');
    if name.len() < last.len() {
        param.is_pointer = true;
    }
    let name = match name.find('[') {
        Some(bracket) => {
            param.is_array = true;
            &name[..bracket]
        }
        None => name,
    };
    if name.is_empty() {
        return None;
    }

    param.name = name.to_string();
    param.ty = type_tokens.join(" ");

    // Redundant second pass: a `*` leading any token marks a pointer even
    // when it was not attached to the name (`char * name` vs `char *name`).
    if tokens.iter().any(|t| t.starts_with('*')) {
        param.is_pointer = true;
    }

    param.description = describe(&param);
    Some(param)
}

/// Auto-description from name and type, first match wins. Documentation-assist
/// only; never feeds back into parsing.
fn describe(param: &Parameter) -> String {
    let name = &param.name;
    let text = if name.contains("count") || name.contains("size") || name.contains("len") {
        "Size/count parameter"
    } else if name.contains("buffer") || name.contains("buf") {
        "Buffer for data storage"
    } else if name.contains("filename") || name.contains("file") {
        "File path or name"
    } else if name.contains("callback") || name.contains("cb") {
        "Callback function"
    } else if param.is_pointer && param.ty.contains("char") {
        "String parameter"
    } else if param.is_pointer {
        "Pointer parameter"
    } else {
        "Parameter"
    };
    text.to_string()
}

/// Render one `@param` line per parameter, or the literal `No parameters`.
pub fn generate_parameter_doc(params: &[Parameter]) -> String {
    if params.is_empty() {
        return "No parameters".to_string();
    }
    params
        .iter()
        .map(|p| format!("@param {} ({}) - {}", p.name, p.type_display(), p.description))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Plain-text renderer.

use crate::model::{Function, SourceFile};
use crate::render::{coverage_line, Renderer};

pub struct TextRenderer;

const RULE: &str =
    "===============================================================================";

impl Renderer for TextRenderer {
    fn render(&self, file: &SourceFile) -> String {
        let mut out = String::new();

        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("DOCUMENTATION FOR: {}\n", file.filename));
        out.push_str(&format!("{}\n", coverage_line(file)));
        out.push_str(RULE);
        out.push_str("\n\n");

        for func in &file.functions {
            out.push_str(&render_function(func));
            out.push('\n');
        }

        out
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

fn render_function(func: &Function) -> String {
    let mut out = String::new();

    out.push_str(&format!("FUNCTION: {} (line {})\n", func.name, func.line_number));
    out.push_str(&format!("  Signature: {}\n", func.signature));
    out.push_str(&format!("  Returns:   {}\n", func.return_type));

    if func.is_documented {
        push_field(&mut out, "Description", &func.description);
        push_field(&mut out, "Parameters", &func.parameters_text);
        push_field(&mut out, "Return Value", &func.return_value);
        push_field(&mut out, "Example", &func.example);
        push_field(&mut out, "Notes", &func.notes);
    } else {
        out.push_str("  *** NOT YET DOCUMENTED ***\n");
    }

    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push_str(&format!("  {}:\n", label));
    for line in value.lines() {
        out.push_str(&format!("    {}\n", line));
    }
}

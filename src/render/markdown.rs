//! GitHub-flavored markdown renderer.

use crate::model::{Function, SourceFile};
use crate::render::{coverage_line, Renderer};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, file: &SourceFile) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", file.filename));
        out.push_str(&format!("{}\n\n", coverage_line(file)));

        out.push_str("## Index\n\n");
        for func in &file.functions {
            out.push_str(&format!("* [{}](#{})\n", func.name, anchor(&func.name)));
        }
        out.push('\n');

        for func in &file.functions {
            out.push_str(&render_function(func));
            out.push('\n');
        }

        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Heading anchor: C identifiers only need lowercasing.
fn anchor(name: &str) -> String {
    name.to_lowercase()
}

fn render_function(func: &Function) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name));
    lines.push(format!("```c\n{}\n```\n", func.signature));
    lines.push(format!(
        "*Line {} — returns `{}`*\n",
        func.line_number, func.return_type
    ));

    if func.is_documented {
        push_field(&mut lines, "Description", &func.description, false);
        push_field(&mut lines, "Parameters", &func.parameters_text, true);
        push_field(&mut lines, "Return Value", &func.return_value, false);
        push_field(&mut lines, "Example", &func.example, true);
        push_field(&mut lines, "Notes", &func.notes, false);
    } else {
        lines.push("_Not yet documented._\n".to_string());
    }

    lines.join("\n")
}

fn push_field(lines: &mut Vec<String>, title: &str, value: &str, as_code: bool) {
    if value.is_empty() {
        return;
    }
    lines.push(format!("#### {}\n", title));
    if as_code {
        lines.push(format!("```\n{}\n```\n", value));
    } else {
        lines.push(format!("{}\n", value));
    }
}

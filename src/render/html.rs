//! HTML renderer: standalone page with embedded styling.

use crate::model::{Function, SourceFile};
use crate::render::{coverage_line, Renderer};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, file: &SourceFile) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&file.filename)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
        out.push_str("dd { margin-left: 1.5em; }\n");
        out.push_str(".coverage { color: #555; }\n");
        out.push_str(".undocumented { color: #b58900; font-style: italic; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        out.push_str(&format!("<h1>{}</h1>\n", html_escape(&file.filename)));
        out.push_str(&format!(
            "<p class=\"coverage\">{}</p>\n",
            html_escape(&coverage_line(file))
        ));

        out.push_str("<h2>Index</h2>\n<ul>\n");
        for func in &file.functions {
            out.push_str(&format!(
                "  <li><a href=\"#{}\">{}</a></li>\n",
                html_escape(&func.name.to_lowercase()),
                html_escape(&func.name)
            ));
        }
        out.push_str("</ul>\n");

        for func in &file.functions {
            out.push_str(&render_function_html(func));
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_function_html(func: &Function) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h3 id=\"{}\">{}</h3>\n",
        html_escape(&func.name.to_lowercase()),
        html_escape(&func.name)
    ));
    out.push_str(&format!(
        "<pre><code class=\"language-c\">{}</code></pre>\n",
        html_escape(&func.signature)
    ));
    out.push_str(&format!(
        "<p>Line {} — returns <code>{}</code></p>\n",
        func.line_number,
        html_escape(&func.return_type)
    ));

    if !func.is_documented {
        out.push_str("<p class=\"undocumented\">Not yet documented.</p>\n");
        return out;
    }

    out.push_str("<dl>\n");
    push_field(&mut out, "Description", &func.description);
    push_field(&mut out, "Parameters", &func.parameters_text);
    push_field(&mut out, "Return Value", &func.return_value);
    push_field(&mut out, "Example", &func.example);
    push_field(&mut out, "Notes", &func.notes);
    out.push_str("</dl>\n");

    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push_str(&format!("  <dt>{}</dt>\n", label));
    out.push_str(&format!(
        "  <dd>{}</dd>\n",
        html_escape(value).replace('\n', "<br>\n")
    ));
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

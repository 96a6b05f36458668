//! PostScript renderer: minimal page-description output, one `show` per
//! line of text with manual page breaks.

use crate::model::{Function, SourceFile};
use crate::render::{coverage_line, Renderer};

pub struct PostscriptRenderer;

// US letter, 1" margins, 12pt leading.
const PAGE_HEIGHT: i32 = 792;
const MARGIN_LEFT: i32 = 72;
const MARGIN_BOTTOM: i32 = 72;
const TOP_Y: i32 = PAGE_HEIGHT - 72;
const LEADING: i32 = 12;

impl Renderer for PostscriptRenderer {
    fn render(&self, file: &SourceFile) -> String {
        let mut page = PsEmitter::new(&file.filename);

        page.heading(&format!("Documentation for {}", file.filename));
        page.line(&coverage_line(file));
        page.blank();

        for func in &file.functions {
            render_function(&mut page, func);
        }

        page.finish()
    }

    fn file_extension(&self) -> &str {
        "ps"
    }
}

fn render_function(page: &mut PsEmitter, func: &Function) {
    page.heading(&format!("{} (line {})", func.name, func.line_number));
    page.line(&format!("Signature: {}", func.signature));
    page.line(&format!("Returns:   {}", func.return_type));

    if func.is_documented {
        field(page, "Description", &func.description);
        field(page, "Parameters", &func.parameters_text);
        field(page, "Return Value", &func.return_value);
        field(page, "Example", &func.example);
        field(page, "Notes", &func.notes);
    } else {
        page.line("*** NOT YET DOCUMENTED ***");
    }
    page.blank();
}

fn field(page: &mut PsEmitter, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    page.line(&format!("{}:", label));
    for text in value.lines() {
        page.line(&format!("    {}", text));
    }
}

/// Tracks the cursor position and emits page breaks as text runs out.
struct PsEmitter {
    out: String,
    y: i32,
    pages: usize,
}

impl PsEmitter {
    fn new(title: &str) -> Self {
        let mut out = String::new();
        out.push_str("%!PS-Adobe-3.0\n");
        out.push_str(&format!("%%Title: {}\n", ps_escape(title)));
        out.push_str("%%Pages: (atend)\n");
        out.push_str("%%EndComments\n");
        out.push_str("/body { /Courier findfont 10 scalefont setfont } def\n");
        out.push_str("/head { /Courier-Bold findfont 12 scalefont setfont } def\n");
        out.push_str("%%Page: 1 1\nbody\n");
        Self { out, y: TOP_Y, pages: 1 }
    }

    fn advance(&mut self) {
        self.y -= LEADING;
        if self.y < MARGIN_BOTTOM {
            self.pages += 1;
            self.out.push_str("showpage\n");
            self.out
                .push_str(&format!("%%Page: {} {}\nbody\n", self.pages, self.pages));
            self.y = TOP_Y;
        }
    }

    fn heading(&mut self, text: &str) {
        self.out.push_str(&format!(
            "head {} {} moveto ({}) show body\n",
            MARGIN_LEFT,
            self.y,
            ps_escape(text)
        ));
        self.advance();
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(&format!(
            "{} {} moveto ({}) show\n",
            MARGIN_LEFT,
            self.y,
            ps_escape(text)
        ));
        self.advance();
    }

    fn blank(&mut self) {
        self.advance();
    }

    fn finish(mut self) -> String {
        self.out.push_str("showpage\n");
        self.out.push_str("%%Trailer\n");
        self.out.push_str(&format!("%%Pages: {}\n", self.pages));
        self.out.push_str("%%EOF\n");
        self.out
    }
}

/// Backslash, `(`, and `)` are the only characters special inside a
/// PostScript string literal.
fn ps_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

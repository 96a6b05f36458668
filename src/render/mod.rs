//! Export renderers with trait-based format dispatch.

pub mod html;
pub mod markdown;
pub mod postscript;
pub mod text;

use crate::model::SourceFile;
use anyhow::{anyhow, Result};

/// Trait for rendering one scanned file's documentation.
pub trait Renderer {
    fn render(&self, file: &SourceFile) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "postscript" | "ps" => Ok(Box::new(postscript::PostscriptRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use text, markdown, html, or postscript",
            format
        )),
    }
}

/// Coverage summary shared by every format.
pub(crate) fn coverage_line(file: &SourceFile) -> String {
    format!(
        "{} functions, {} documented ({:.1}%)",
        file.functions.len(),
        file.documented_count(),
        file.coverage_percent()
    )
}

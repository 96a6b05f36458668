//! cdoc: browse and document C functions discovered by line heuristics.
//!
//! Two modes:
//!
//! - **interactive** (default): `cdoc [dir]` scans the directory and opens
//!   the raw-mode terminal browser.
//! - **export**: `cdoc [dir] -f markdown -o docs/` scans, reloads saved
//!   documentation, and writes one rendered file per source file.

mod model;
mod parser;
mod render;
mod scan;
mod store;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use model::Project;
use scan::ScanLimits;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cdoc",
    about = "Scan a directory of C sources and attach documentation to the discovered functions"
)]
struct Cli {
    /// Project directory containing .c and .h files
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Export format: text, markdown, html, postscript. Skips the
    /// interactive browser.
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Output directory for exported documentation (required with --format)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Documentation file path (default: .project_docs.txt in the directory)
    #[arg(long)]
    docs_file: Option<PathBuf>,

    /// Most files collected per scan
    #[arg(long, default_value_t = 200)]
    max_files: usize,

    /// Most functions collected per file
    #[arg(long, default_value_t = 200)]
    max_functions: usize,

    /// Most parameters parsed per function
    #[arg(long, default_value_t = 20)]
    max_params: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let limits = ScanLimits {
        max_files: cli.max_files,
        max_functions: cli.max_functions,
        max_params: cli.max_params,
    };
    let mut project = Project::new(cli.directory.clone(), limits);
    if let Some(ref docs_file) = cli.docs_file {
        project.docs_path = docs_file.clone();
    }

    project.scan();
    store::load(&mut project);

    if let Some(format) = cli.format.as_deref() {
        return export_mode(&cli, &project, format);
    }

    if project.files.is_empty() {
        anyhow::bail!(
            "no C files with functions found in {}",
            cli.directory.display()
        );
    }
    tui::run(project)
}

/// Render every scanned file to the chosen format, one output file each.
fn export_mode(cli: &Cli, project: &Project, format: &str) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when --format is given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = render::create_renderer(format)?;
    let ext = renderer.file_extension();

    for file in &project.files {
        // Keep the source extension in the name: foo.c and foo.h must not
        // collide in the output directory.
        let out_path = output_dir.join(format!("{}.{}", file.filename, ext));
        fs::write(&out_path, renderer.render(file))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

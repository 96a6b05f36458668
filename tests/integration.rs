use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_cdoc")))
}

const SAMPLE_C: &str = "\
#include <stdio.h>

int add(int a, int b)
{
    return a + b;
}

static void *make_buf(size_t n)
{
    return 0;
}
";

const SAMPLE_H: &str = "\
#ifndef SAMPLE_H
#define SAMPLE_H

int add(int a, int b);
void greet(const char *name, int count);

#endif
";

fn write_project(dir: &TempDir) {
    std::fs::write(dir.path().join("sample.c"), SAMPLE_C).unwrap();
    std::fs::write(dir.path().join("sample.h"), SAMPLE_H).unwrap();
    std::fs::write(dir.path().join("empty.c"), "/* no functions */\n").unwrap();
}

// -- export mode --

#[test]
fn export_markdown_creates_one_file_per_source() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_project(&project);

    cmd()
        .arg(project.path())
        .args(["-f", "markdown", "-o", out.path().to_str().unwrap()])
        .assert()
        .success();

    let md = std::fs::read_to_string(out.path().join("sample.c.md")).unwrap();
    assert!(md.contains("### add"));
    assert!(md.contains("### make_buf"));
    assert!(md.contains("2 functions, 0 documented (0.0%)"));

    let header_md = std::fs::read_to_string(out.path().join("sample.h.md")).unwrap();
    assert!(header_md.contains("### greet"));
}

#[test]
fn export_excludes_files_without_functions() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_project(&project);

    cmd()
        .arg(project.path())
        .args(["-f", "text", "-o", out.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(out.path().join("sample.c.txt").exists());
    assert!(!out.path().join("empty.c.txt").exists());
}

#[test]
fn export_html_and_postscript() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_project(&project);

    cmd()
        .arg(project.path())
        .args(["-f", "html", "-o", out.path().to_str().unwrap()])
        .assert()
        .success();
    let html = std::fs::read_to_string(out.path().join("sample.c.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("make_buf"));

    cmd()
        .arg(project.path())
        .args(["-f", "ps", "-o", out.path().to_str().unwrap()])
        .assert()
        .success();
    let ps = std::fs::read_to_string(out.path().join("sample.c.ps")).unwrap();
    assert!(ps.starts_with("%!PS-Adobe-3.0"));
    assert!(ps.contains("showpage"));
}

#[test]
fn export_requires_output() {
    let project = TempDir::new().unwrap();
    write_project(&project);

    cmd()
        .arg(project.path())
        .args(["-f", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn invalid_format_fails() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_project(&project);

    cmd()
        .arg(project.path())
        .args(["-f", "xml", "-o", out.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- documentation reload --

#[test]
fn saved_documentation_feeds_the_export() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_project(&project);

    let docs = "\
# Project Documentation
# Auto-generated - do not edit the function signatures

FUNCTION: add
FILE: sample.c
LINE: 3
SIGNATURE: int add(int a, int b)
DESCRIPTION: Adds two integers
PARAMETERS: @param a (int) - Parameter
RETURN: The sum
EXAMPLE: add(1, 2)
NOTES: Wraps on overflow
---
FUNCTION: removed_fn
FILE: sample.c
LINE: 99
SIGNATURE: int removed_fn(void)
DESCRIPTION: Stale record for a deleted function
---
";
    std::fs::write(project.path().join(".project_docs.txt"), docs).unwrap();

    cmd()
        .arg(project.path())
        .args(["-f", "text", "-o", out.path().to_str().unwrap()])
        .assert()
        .success();

    let text = std::fs::read_to_string(out.path().join("sample.c.txt")).unwrap();
    assert!(text.contains("2 functions, 1 documented (50.0%)"));
    assert!(text.contains("Adds two integers"));
    assert!(text.contains("The sum"));
    assert!(text.contains("Wraps on overflow"));
    // The stale record is discarded, not rendered.
    assert!(!text.contains("removed_fn"));
}

#[test]
fn docs_file_override_is_honored() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_project(&project);

    let alt = project.path().join("alt_docs.txt");
    let docs = "\
# Project Documentation
#

FUNCTION: add
FILE: sample.c
LINE: 3
SIGNATURE: int add(int a, int b)
DESCRIPTION: From the alternate file
PARAMETERS: No parameters
RETURN:
EXAMPLE:
NOTES:
---
";
    std::fs::write(&alt, docs).unwrap();

    cmd()
        .arg(project.path())
        .args(["--docs-file", alt.to_str().unwrap()])
        .args(["-f", "text", "-o", out.path().to_str().unwrap()])
        .assert()
        .success();

    let text = std::fs::read_to_string(out.path().join("sample.c.txt")).unwrap();
    assert!(text.contains("From the alternate file"));
}

// -- interactive-mode preconditions --

#[test]
fn empty_directory_without_export_fails() {
    let project = TempDir::new().unwrap();

    cmd()
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no C files with functions"));
}

// -- scan limits --

#[test]
fn max_functions_limit_truncates() {
    let project = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let mut content = String::new();
    for i in 0..10 {
        content.push_str(&format!("int fn_{}(void)\n{{\n}}\n", i));
    }
    std::fs::write(project.path().join("many.c"), content).unwrap();

    cmd()
        .arg(project.path())
        .args(["--max-functions", "4"])
        .args(["-f", "text", "-o", out.path().to_str().unwrap()])
        .assert()
        .success();

    let text = std::fs::read_to_string(out.path().join("many.c.txt")).unwrap();
    assert!(text.contains("4 functions, 0 documented"));
    assert!(!text.contains("fn_4"));
}

//! Directory scanner: drives the line heuristics over each C source file.

use crate::model::{Function, SourceFile};
use crate::parser::{c, params};
use std::fs;
use std::path::Path;

/// Soft caps on a scan pass. Exceeding a cap stops collecting further items
/// of that kind without failing the scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanLimits {
    pub max_files: usize,
    pub max_functions: usize,
    pub max_params: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_files: 200,
            max_functions: 200,
            max_params: 20,
        }
    }
}

/// A name ending in `.c` or `.h` (case-sensitive).
pub fn is_c_file(name: &str) -> bool {
    name.ends_with(".c") || name.ends_with(".h")
}

/// Scan a directory (non-recursive) for C files and their functions.
///
/// Entries are sorted by filename so repeated scans of an unchanged
/// directory produce identical results. Unreadable files are skipped with a
/// warning; an unreadable directory yields an empty set. Files with zero
/// discovered functions are excluded.
pub fn scan_directory(path: &Path, limits: ScanLimits) -> Vec<SourceFile> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|n| is_c_file(n))
        .collect();
    names.sort();

    let mut files = Vec::new();
    for name in names {
        if files.len() >= limits.max_files {
            break;
        }
        let full_path = path.join(&name);
        let content = match fs::read_to_string(&full_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", full_path.display(), e);
                continue;
            }
        };
        let functions = parse_source(&name, &content, limits);
        if functions.is_empty() {
            continue;
        }
        files.push(SourceFile {
            filename: name,
            full_path,
            functions,
        });
    }
    files
}

/// Classify and extract every line of one file's content.
/// Lines with no extractable name are skipped silently.
pub fn parse_source(filename: &str, content: &str, limits: ScanLimits) -> Vec<Function> {
    let is_header = c::is_header_file(filename);
    let mut functions = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        if functions.len() >= limits.max_functions {
            break;
        }
        let trimmed = raw.trim();
        if !c::is_signature_line(raw, trimmed, is_header) {
            continue;
        }
        let Some(name) = c::extract_name(trimmed) else {
            continue;
        };

        let mut parameters = c::parameter_span(trimmed)
            .map(params::parse_parameter_list)
            .unwrap_or_default();
        parameters.truncate(limits.max_params);
        let parameters_text = params::generate_parameter_doc(&parameters);

        functions.push(Function {
            name,
            signature: trimmed.to_string(),
            filename: filename.to_string(),
            line_number: idx + 1,
            return_type: c::extract_return_type(trimmed),
            parameters,
            parameters_text,
            ..Function::default()
        });
    }
    functions
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

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

void forward_decl(int x);
";

    const SAMPLE_H: &str = "\
#ifndef SAMPLE_H
#define SAMPLE_H

int add(int a, int b);
void greet(const char *name, int count);

#endif
";

    fn write_fixtures(dir: &TempDir) {
        std::fs::write(dir.path().join("sample.c"), SAMPLE_C).unwrap();
        std::fs::write(dir.path().join("sample.h"), SAMPLE_H).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "int not_scanned(void)\n").unwrap();
        std::fs::write(dir.path().join("empty.c"), "/* nothing here */\n").unwrap();
    }

    #[test]
    fn scans_c_and_h_files_in_name_order() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);

        let files = scan_directory(dir.path(), ScanLimits::default());
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        // empty.c and notes.txt are excluded; order is sorted by filename.
        assert_eq!(names, vec!["sample.c", "sample.h"]);
    }

    #[test]
    fn c_file_definitions_only() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);

        let files = scan_directory(dir.path(), ScanLimits::default());
        let c_file = &files[0];
        let names: Vec<&str> = c_file.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["add", "make_buf"]);
        assert_eq!(c_file.functions[0].line_number, 3);
        assert_eq!(c_file.functions[0].return_type, "int");
        assert_eq!(c_file.functions[1].return_type, "static void *");
    }

    #[test]
    fn header_accepts_prototypes() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);

        let files = scan_directory(dir.path(), ScanLimits::default());
        let header = &files[1];
        let names: Vec<&str> = header.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["add", "greet"]);

        let greet = &header.functions[1];
        assert_eq!(greet.parameters.len(), 2);
        assert_eq!(greet.parameters[0].name, "name");
        assert!(greet.parameters[0].is_const);
        assert!(greet.parameters[0].is_pointer);
        assert_eq!(
            greet.parameters_text,
            "@param name (const char*) - String parameter\n\
             @param count (int) - Size/count parameter"
        );
    }

    #[test]
    fn scan_is_idempotent() {
        let dir = TempDir::new().unwrap();
        write_fixtures(&dir);

        let first = scan_directory(dir.path(), ScanLimits::default());
        let second = scan_directory(dir.path(), ScanLimits::default());
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.filename, b.filename);
            for (fa, fb) in a.functions.iter().zip(&b.functions) {
                assert_eq!(fa.name, fb.name);
                assert_eq!(fa.line_number, fb.line_number);
                assert_eq!(fa.return_type, fb.return_type);
            }
        }
    }

    #[test]
    fn missing_directory_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(scan_directory(&gone, ScanLimits::default()).is_empty());
    }

    #[test]
    fn function_cap_truncates() {
        let mut content = String::new();
        for i in 0..10 {
            content.push_str(&format!("int fn_{}(void)\n{{\n}}\n", i));
        }
        let limits = ScanLimits {
            max_functions: 3,
            ..ScanLimits::default()
        };
        let functions = parse_source("many.c", &content, limits);
        assert_eq!(functions.len(), 3);
    }

    #[test]
    fn parameter_cap_truncates() {
        let limits = ScanLimits {
            max_params: 2,
            ..ScanLimits::default()
        };
        let functions = parse_source("f.c", "int f(int a, int b, int c, int d)\n", limits);
        assert_eq!(functions[0].parameters.len(), 2);
    }

    #[test]
    fn nameless_candidate_line_is_skipped() {
        // Passes classification but the char before `(` is not an identifier.
        let functions = parse_source("odd.c", "int (x)\n", ScanLimits::default());
        assert!(functions.is_empty());
    }
}

//! Flat-text documentation persistence.
//!
//! One block per documented function, keyed by `(FILE, FUNCTION)`. On load,
//! records that no longer match a scanned function are discarded silently.

use crate::model::Project;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DOCS_FILE: &str = ".project_docs.txt";

/// Collapse embedded line breaks; the record format is single-line per field.
pub fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ").trim().to_string()
}

/// Write every documented function to the project's docs file.
pub fn save(project: &Project) -> Result<()> {
    let mut out = String::new();
    out.push_str("# Project Documentation\n");
    out.push_str("# Auto-generated - do not edit the function signatures\n\n");

    for file in &project.files {
        for func in &file.functions {
            if !func.is_documented {
                continue;
            }
            out.push_str(&format!("FUNCTION: {}\n", func.name));
            out.push_str(&format!("FILE: {}\n", func.filename));
            out.push_str(&format!("LINE: {}\n", func.line_number));
            out.push_str(&format!("SIGNATURE: {}\n", func.signature));
            out.push_str(&format!("DESCRIPTION: {}\n", single_line(&func.description)));
            out.push_str(&format!("PARAMETERS: {}\n", single_line(&func.parameters_text)));
            out.push_str(&format!("RETURN: {}\n", single_line(&func.return_value)));
            out.push_str(&format!("EXAMPLE: {}\n", single_line(&func.example)));
            out.push_str(&format!("NOTES: {}\n", single_line(&func.notes)));
            out.push_str("---\n");
        }
    }

    fs::write(&project.docs_path, out)
        .with_context(|| format!("failed to write {}", project.docs_path.display()))
}

#[derive(Default)]
struct Record {
    function: String,
    file: String,
    description: Option<String>,
    parameters: Option<String>,
    return_value: Option<String>,
    example: Option<String>,
    notes: Option<String>,
}

impl Record {
    fn is_keyed(&self) -> bool {
        !self.function.is_empty() && !self.file.is_empty()
    }
}

/// Reattach persisted documentation to the current scan. Best-effort: a
/// missing or unreadable docs file loads nothing.
pub fn load(project: &mut Project) {
    let path = project.docs_path.clone();
    load_from(project, &path);
}

fn load_from(project: &mut Project, path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };

    let mut record = Record::default();
    for raw in content.lines() {
        let line = raw.trim();
        if let Some(value) = line.strip_prefix("FUNCTION: ") {
            record.function = value.to_string();
        } else if let Some(value) = line.strip_prefix("FILE: ") {
            record.file = value.to_string();
        } else if let Some(value) = line.strip_prefix("DESCRIPTION: ") {
            record.description = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("PARAMETERS: ") {
            record.parameters = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("RETURN: ") {
            record.return_value = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("EXAMPLE: ") {
            record.example = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("NOTES: ") {
            record.notes = Some(value.to_string());
        } else if line == "---" {
            apply(project, std::mem::take(&mut record));
        }
        // LINE:/SIGNATURE: and the leading comment lines are informational.
    }
    // Tolerate a trailing record with no closing separator.
    apply(project, record);
}

fn apply(project: &mut Project, record: Record) {
    if !record.is_keyed() {
        return;
    }
    // Stale records fail this lookup and are dropped without error.
    let Some(func) = project.find_mut(&record.file, &record.function) else {
        return;
    };
    if let Some(description) = record.description {
        func.description = description;
        func.is_documented = true;
    }
    if let Some(parameters) = record.parameters {
        func.parameters_text = parameters;
    }
    if let Some(return_value) = record.return_value {
        func.return_value = return_value;
    }
    if let Some(example) = record.example {
        func.example = example;
    }
    if let Some(notes) = record.notes {
        func.notes = notes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ScanLimits;
    use tempfile::TempDir;

    const SOURCE: &str = "\
int add(int a, int b)
{
    return a + b;
}

void greet(const char *name)
{
}
";

    fn scanned_project(dir: &TempDir) -> Project {
        std::fs::write(dir.path().join("main.c"), SOURCE).unwrap();
        let mut project = Project::new(dir.path().to_path_buf(), ScanLimits::default());
        project.scan();
        project
    }

    #[test]
    fn round_trip_restores_all_fields() {
        let dir = TempDir::new().unwrap();
        let mut project = scanned_project(&dir);

        {
            let func = project.find_mut("main.c", "add").unwrap();
            func.description = "Adds two integers".to_string();
            func.parameters_text = "@param a (int) - Parameter".to_string();
            func.return_value = "The sum".to_string();
            func.example = "add(1, 2)".to_string();
            func.notes = "No overflow check".to_string();
            func.is_documented = true;
        }
        save(&project).unwrap();

        // Fresh scan of the unchanged directory, then reload.
        let mut reloaded = scanned_project(&dir);
        load(&mut reloaded);

        let func = reloaded.find_mut("main.c", "add").unwrap();
        assert!(func.is_documented);
        assert_eq!(func.description, "Adds two integers");
        assert_eq!(func.parameters_text, "@param a (int) - Parameter");
        assert_eq!(func.return_value, "The sum");
        assert_eq!(func.example, "add(1, 2)");
        assert_eq!(func.notes, "No overflow check");

        let other = reloaded.find_mut("main.c", "greet").unwrap();
        assert!(!other.is_documented);
    }

    #[test]
    fn only_documented_functions_are_written() {
        let dir = TempDir::new().unwrap();
        let project = scanned_project(&dir);
        save(&project).unwrap();

        let content = fs::read_to_string(project.docs_path).unwrap();
        assert!(content.starts_with("# Project Documentation\n"));
        assert!(!content.contains("FUNCTION:"));
    }

    #[test]
    fn stale_records_are_discarded() {
        let dir = TempDir::new().unwrap();
        let mut project = scanned_project(&dir);

        let stale = "# Project Documentation\n#\n\n\
FUNCTION: removed_fn\n\
FILE: main.c\n\
LINE: 99\n\
SIGNATURE: int removed_fn(void)\n\
DESCRIPTION: Gone now\n\
PARAMETERS: No parameters\n\
RETURN: \n\
EXAMPLE: \n\
NOTES: \n\
---\n";
        fs::write(&project.docs_path, stale).unwrap();
        load(&mut project);

        assert!(project.undocumented().len() == 2);
    }

    #[test]
    fn missing_docs_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let mut project = scanned_project(&dir);
        load(&mut project);
        assert_eq!(project.undocumented().len(), 2);
    }

    #[test]
    fn single_line_flattens_breaks() {
        assert_eq!(single_line("a\nb\r\nc"), "a b  c");
    }
}

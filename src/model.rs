//! Data model for scanned files, functions, and documentation.

use crate::scan::{self, ScanLimits};
use crate::store;
use std::path::PathBuf;

/// One formal parameter recovered from a function signature.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Identifier with `*` and `[...]` stripped into the flags below.
    pub name: String,
    /// Base type text, possibly multi-token ("unsigned long").
    pub ty: String,
    /// Auto-generated description used to seed the @param block.
    pub description: String,
    pub is_pointer: bool,
    pub is_array: bool,
    pub is_const: bool,
}

impl Parameter {
    /// Type text with qualifiers reattached, e.g. `const char*[]`.
    pub fn type_display(&self) -> String {
        format!(
            "{}{}{}{}",
            if self.is_const { "const " } else { "" },
            self.ty,
            if self.is_pointer { "*" } else { "" },
            if self.is_array { "[]" } else { "" },
        )
    }
}

/// One discovered C function (declaration or definition).
#[derive(Debug, Default, Clone)]
pub struct Function {
    pub name: String,
    /// The raw trimmed source line the function was discovered on.
    pub signature: String,
    pub filename: String,
    /// 1-indexed line within the file.
    pub line_number: usize,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    // User documentation, empty until edited.
    pub description: String,
    /// Seeded with the auto-generated @param block on scan.
    pub parameters_text: String,
    pub return_value: String,
    pub example: String,
    pub notes: String,
    pub is_documented: bool,
}

/// One scanned source file. Never holds zero functions.
#[derive(Debug, Default, Clone)]
pub struct SourceFile {
    pub filename: String,
    pub full_path: PathBuf,
    pub functions: Vec<Function>,
}

impl SourceFile {
    pub fn documented_count(&self) -> usize {
        self.functions.iter().filter(|f| f.is_documented).count()
    }

    /// Documented percentage for the coverage summary line.
    pub fn coverage_percent(&self) -> f64 {
        if self.functions.is_empty() {
            return 0.0;
        }
        self.documented_count() as f64 / self.functions.len() as f64 * 100.0
    }
}

/// Index of a function within the scanned file set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionRef {
    pub file: usize,
    pub func: usize,
}

/// Project-wide totals shown in the stats header.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    pub files: usize,
    pub functions: usize,
    pub documented: usize,
}

impl Stats {
    pub fn percent(&self) -> f64 {
        if self.functions == 0 {
            return 0.0;
        }
        self.documented as f64 / self.functions as f64 * 100.0
    }
}

/// Explicit application state: the scanned directory, its limits, and the
/// current scan result. Replaced wholesale on every rescan.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub docs_path: PathBuf,
    pub limits: ScanLimits,
    pub files: Vec<SourceFile>,
}

impl Project {
    pub fn new(root: PathBuf, limits: ScanLimits) -> Self {
        let docs_path = root.join(store::DOCS_FILE);
        Self {
            root,
            docs_path,
            limits,
            files: Vec::new(),
        }
    }

    /// Full scan pass: replaces the prior in-memory file set.
    pub fn scan(&mut self) {
        self.files = scan::scan_directory(&self.root, self.limits);
    }

    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            files: self.files.len(),
            ..Stats::default()
        };
        for file in &self.files {
            stats.functions += file.functions.len();
            stats.documented += file.documented_count();
        }
        stats
    }

    /// Substring search over function name, description, and signature.
    pub fn search(&self, term: &str) -> Vec<FunctionRef> {
        let mut results = Vec::new();
        for (fi, file) in self.files.iter().enumerate() {
            for (gi, func) in file.functions.iter().enumerate() {
                if func.name.contains(term)
                    || func.description.contains(term)
                    || func.signature.contains(term)
                {
                    results.push(FunctionRef { file: fi, func: gi });
                }
            }
        }
        results
    }

    /// All functions not yet documented, in scan order.
    pub fn undocumented(&self) -> Vec<FunctionRef> {
        let mut results = Vec::new();
        for (fi, file) in self.files.iter().enumerate() {
            for (gi, func) in file.functions.iter().enumerate() {
                if !func.is_documented {
                    results.push(FunctionRef { file: fi, func: gi });
                }
            }
        }
        results
    }

    pub fn function(&self, r: FunctionRef) -> &Function {
        &self.files[r.file].functions[r.func]
    }

    pub fn function_mut(&mut self, r: FunctionRef) -> &mut Function {
        &mut self.files[r.file].functions[r.func]
    }

    /// Look up a function by its persistence key. First match wins when a
    /// file contains two functions with the same name.
    pub fn find_mut(&mut self, filename: &str, name: &str) -> Option<&mut Function> {
        let file = self.files.iter_mut().find(|f| f.filename == filename)?;
        file.functions.iter_mut().find(|f| f.name == name)
    }
}

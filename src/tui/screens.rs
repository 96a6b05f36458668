//! Screen rendering for each navigation state.
//!
//! Screens are built as whole strings (with `\r\n` line endings for raw
//! mode) and written in one `execute!` so a redraw never flickers.

use super::{App, NavState};
use crate::model::FunctionRef;
use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::execute;
use std::io;

pub(crate) fn draw(app: &App) -> Result<()> {
    let body = match app.state {
        NavState::Files => files_screen(app),
        NavState::Functions => functions_screen(app),
        NavState::FunctionDetail => detail_screen(app),
        NavState::Search => search_screen(app),
        NavState::Undocumented => undocumented_screen(app),
    };
    show(&body)
}

/// Auto-parsed parameter details, shown until the next keypress.
pub(crate) fn draw_auto_info(app: &App) -> Result<()> {
    show(&auto_info_screen(app))
}

fn show(body: &str) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0), Print(body))?;
    Ok(())
}

fn header(app: &App) -> String {
    let stats = app.project.stats();
    let mut out = String::new();
    out.push_str(&format!(
        "{}\r\n",
        "cdoc — C project documentation".bold().cyan()
    ));
    out.push_str(&format!(
        "{} files, {} functions, {} documented ({:.1}%)\r\n\r\n",
        stats.files,
        stats.functions,
        stats.documented,
        stats.percent()
    ));
    out
}

fn push_item(out: &mut String, selected: bool, line: &str) {
    if selected {
        out.push_str(&format!("{} {}\r\n", "►".bold().yellow(), line.bold()));
    } else {
        out.push_str(&format!("  {}\r\n", line));
    }
}

fn files_screen(app: &App) -> String {
    let mut out = header(app);
    out.push_str(&format!("{}\r\n", "SOURCE FILES".bold().green()));
    out.push_str(
        "up/down navigate, ENTER functions, p print docs, r rescan, s search, u undocumented, q quit\r\n\r\n",
    );

    for (i, file) in app.project.files.iter().enumerate() {
        let line = format!(
            "{} ({} functions, {} documented)",
            file.filename,
            file.functions.len(),
            file.documented_count()
        );
        push_item(&mut out, i == app.selection, &line);
    }
    if app.project.files.is_empty() {
        out.push_str(&format!("{}\r\n", "No C files found.".yellow()));
    }
    out
}

fn functions_screen(app: &App) -> String {
    let mut out = header(app);
    let file = &app.project.files[app.current_file];
    out.push_str(&format!(
        "{}\r\n",
        format!("FUNCTIONS in {}", file.filename).bold().green()
    ));
    out.push_str("up/down navigate, ENTER details, b back\r\n\r\n");

    for (i, func) in file.functions.iter().enumerate() {
        let marker = if func.is_documented { '*' } else { ' ' };
        let line = format!("{} {} (line {})", marker, func.name, func.line_number);
        push_item(&mut out, i == app.selection, &line);
    }
    out
}

fn detail_screen(app: &App) -> String {
    let mut out = header(app);
    let func = app.project.function(FunctionRef {
        file: app.current_file,
        func: app.current_function,
    });

    out.push_str(&format!(
        "{}\r\n",
        format!("FUNCTION: {}", func.name).bold().green()
    ));
    out.push_str("e edit, v view source, a auto-parsed info, b back\r\n\r\n");

    out.push_str(&format!("File: {}:{}\r\n", func.filename, func.line_number));
    out.push_str(&format!("Signature: {}\r\n", func.signature));
    out.push_str(&format!("Return type: {}\r\n", func.return_type));
    if func.parameters.is_empty() {
        out.push_str("Parameters: none\r\n");
    } else {
        let list = func
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.type_display(), p.name))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "Parameters ({}): {}\r\n",
            func.parameters.len(),
            list
        ));
    }
    out.push_str("\r\n");

    if func.is_documented {
        push_doc_field(&mut out, "Description", &func.description);
        push_doc_field(&mut out, "Parameters", &func.parameters_text);
        push_doc_field(&mut out, "Return Value", &func.return_value);
        push_doc_field(&mut out, "Example", &func.example);
        push_doc_field(&mut out, "Notes", &func.notes);
    } else {
        out.push_str(&format!(
            "{}\r\n",
            "Not yet documented. Press 'e' to add documentation.".yellow()
        ));
        out.push_str("Auto-generated parameter documentation is available as a starting point.\r\n");
    }
    out
}

fn push_doc_field(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push_str(&format!("{}\r\n", format!("{}:", label).bold().cyan()));
    for line in value.lines() {
        out.push_str(&format!("  {}\r\n", line));
    }
    out.push_str("\r\n");
}

fn search_screen(app: &App) -> String {
    let mut out = header(app);
    out.push_str(&format!(
        "{}\r\n",
        format!("SEARCH RESULTS for \"{}\"", app.search_term)
            .bold()
            .green()
    ));
    out.push_str("up/down navigate, ENTER details, b back\r\n\r\n");

    for (i, &r) in app.search_results.iter().enumerate() {
        push_item(&mut out, i == app.selection, &ref_line(app, r));
    }
    if app.search_results.is_empty() {
        out.push_str(&format!("{}\r\n", "No results found.".yellow()));
    }
    out
}

fn undocumented_screen(app: &App) -> String {
    let mut out = header(app);
    out.push_str(&format!("{}\r\n", "UNDOCUMENTED FUNCTIONS".bold().green()));
    out.push_str("up/down navigate, ENTER to document, b back\r\n\r\n");

    for (i, &r) in app.undocumented.iter().enumerate() {
        push_item(&mut out, i == app.selection, &ref_line(app, r));
    }
    if app.undocumented.is_empty() {
        out.push_str(&format!("{}\r\n", "All functions are documented!".green()));
    }
    out
}

fn auto_info_screen(app: &App) -> String {
    let mut out = header(app);
    let func = app.project.function(FunctionRef {
        file: app.current_file,
        func: app.current_function,
    });

    out.push_str(&format!(
        "{}\r\n",
        format!("AUTO-PARSED INFORMATION: {}", func.name).bold().green()
    ));
    out.push_str("press any key to go back\r\n\r\n");

    out.push_str(&format!("Return type: {}\r\n\r\n", func.return_type));

    if func.parameters.is_empty() {
        out.push_str("Parameters: none (void function)\r\n");
    } else {
        for (i, param) in func.parameters.iter().enumerate() {
            out.push_str(&format!("{}. {}\r\n", i + 1, param.name.as_str().bold()));
            out.push_str(&format!("   Type: {}\r\n", param.type_display()));
            out.push_str(&format!("   Auto-description: {}\r\n", param.description));
            let mut flags = Vec::new();
            if param.is_const {
                flags.push("const");
            }
            if param.is_pointer {
                flags.push("pointer");
            }
            if param.is_array {
                flags.push("array");
            }
            out.push_str(&format!("   Flags: {}\r\n\r\n", flags.join(" ")));
        }
    }

    out.push_str(&format!(
        "{}\r\n",
        "Auto-generated parameter documentation:".bold().cyan()
    ));
    for line in func.parameters_text.lines() {
        out.push_str(&format!("  {}\r\n", line));
    }
    out
}

fn ref_line(app: &App, r: FunctionRef) -> String {
    let func = app.project.function(r);
    format!("{}::{} (line {})", func.filename, func.name, func.line_number)
}

//! Interactive terminal browser: raw-mode keystroke navigation over the
//! scanned project, with line-input prompts for editing.
//!
//! The terminal is held in raw mode while menus are on screen and restored
//! around every multi-line prompt. `RawModeGuard` restores it on every exit
//! path, panics included.

mod screens;
pub mod source;

use crate::model::{FunctionRef, Project};
use crate::parser::c;
use crate::render::text::TextRenderer;
use crate::render::Renderer;
use crate::store;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use std::fs;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavState {
    Files,
    Functions,
    FunctionDetail,
    Search,
    Undocumented,
}

pub(crate) struct App {
    pub(crate) project: Project,
    state: NavState,
    pub(crate) selection: usize,
    pub(crate) current_file: usize,
    pub(crate) current_function: usize,
    pub(crate) search_term: String,
    pub(crate) search_results: Vec<FunctionRef>,
    pub(crate) undocumented: Vec<FunctionRef>,
}

struct RawModeGuard;

impl RawModeGuard {
    fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive loop until the user quits.
pub fn run(project: Project) -> Result<()> {
    let mut app = App {
        project,
        state: NavState::Files,
        selection: 0,
        current_file: 0,
        current_function: 0,
        search_term: String::new(),
        search_results: Vec::new(),
        undocumented: Vec::new(),
    };

    let _guard = RawModeGuard::new()?;
    loop {
        screens::draw(&app)?;
        let key = next_key()?;
        if !handle_key(&mut app, key)? {
            break;
        }
    }
    Ok(())
}

fn next_key() -> Result<KeyCode> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key.code);
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyCode) -> Result<bool> {
    match app.state {
        NavState::Files => handle_files_key(app, key),
        NavState::Functions => handle_functions_key(app, key),
        NavState::FunctionDetail => handle_detail_key(app, key),
        NavState::Search => handle_search_key(app, key),
        NavState::Undocumented => handle_undocumented_key(app, key),
    }
}

fn handle_files_key(app: &mut App, key: KeyCode) -> Result<bool> {
    match key {
        KeyCode::Char('q') => return Ok(false),
        KeyCode::Char('r') => {
            app.project.scan();
            store::load(&mut app.project);
            app.selection = clamp(app.selection, app.project.files.len());
        }
        KeyCode::Char('p') => {
            if let Some(file) = app.project.files.get(app.selection) {
                page_text(&TextRenderer.render(file))?;
            }
        }
        KeyCode::Char('s') => {
            let term = prompt_line("Search term: ")?;
            if !term.is_empty() {
                app.search_results = app.project.search(&term);
                app.search_term = term;
                app.state = NavState::Search;
                app.selection = 0;
            }
        }
        KeyCode::Char('u') => {
            app.undocumented = app.project.undocumented();
            app.state = NavState::Undocumented;
            app.selection = 0;
        }
        KeyCode::Enter => {
            if !app.project.files.is_empty() {
                app.current_file = app.selection;
                app.state = NavState::Functions;
                app.selection = 0;
            }
        }
        other => move_selection(&mut app.selection, other, app.project.files.len()),
    }
    Ok(true)
}

fn handle_functions_key(app: &mut App, key: KeyCode) -> Result<bool> {
    let count = app.project.files[app.current_file].functions.len();
    match key {
        KeyCode::Char('b') => {
            app.state = NavState::Files;
            app.selection = app.current_file;
        }
        KeyCode::Enter => {
            if count > 0 {
                app.current_function = app.selection;
                app.state = NavState::FunctionDetail;
            }
        }
        other => move_selection(&mut app.selection, other, count),
    }
    Ok(true)
}

fn handle_detail_key(app: &mut App, key: KeyCode) -> Result<bool> {
    let current = FunctionRef {
        file: app.current_file,
        func: app.current_function,
    };
    match key {
        KeyCode::Char('b') => {
            app.state = NavState::Functions;
            app.selection = app.current_function;
        }
        KeyCode::Char('e') => edit_function(app, current)?,
        KeyCode::Char('v') => view_source(app, current)?,
        KeyCode::Char('a') => {
            screens::draw_auto_info(app)?;
            next_key()?;
        }
        _ => {}
    }
    Ok(true)
}

fn handle_search_key(app: &mut App, key: KeyCode) -> Result<bool> {
    match key {
        KeyCode::Char('b') => {
            app.state = NavState::Files;
            app.selection = 0;
        }
        KeyCode::Enter => {
            if let Some(&r) = app.search_results.get(app.selection) {
                app.current_file = r.file;
                app.current_function = r.func;
                app.state = NavState::FunctionDetail;
            }
        }
        other => move_selection(&mut app.selection, other, app.search_results.len()),
    }
    Ok(true)
}

fn handle_undocumented_key(app: &mut App, key: KeyCode) -> Result<bool> {
    match key {
        KeyCode::Char('b') => {
            app.state = NavState::Files;
            app.selection = 0;
        }
        KeyCode::Enter => {
            if let Some(&r) = app.undocumented.get(app.selection) {
                edit_function(app, r)?;
                app.undocumented = app.project.undocumented();
                app.selection = clamp(app.selection, app.undocumented.len());
            }
        }
        other => move_selection(&mut app.selection, other, app.undocumented.len()),
    }
    Ok(true)
}

fn move_selection(selection: &mut usize, key: KeyCode, len: usize) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            if *selection > 0 {
                *selection -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if len > 0 && *selection + 1 < len {
                *selection += 1;
            }
        }
        _ => {}
    }
}

fn clamp(selection: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selection.min(len - 1)
    }
}

// -- Cooked-mode interactions -------------------------------------------------

/// Prompt for the five documentation fields, commit, and save. An empty
/// answer keeps the current value; input is flattened to a single line.
fn edit_function(app: &mut App, r: FunctionRef) -> Result<()> {
    terminal::disable_raw_mode()?;
    let result = edit_fields(app, r);
    terminal::enable_raw_mode()?;
    result
}

fn edit_fields(app: &mut App, r: FunctionRef) -> Result<()> {
    {
        let func = app.project.function(r);
        println!();
        println!("Editing documentation for: {}", func.name);
        println!("File: {}:{}", func.filename, func.line_number);
    }
    print_source(&app.project, r);
    println!("(Leave a field empty to keep its current value.)");
    println!();

    {
        let func = app.project.function_mut(r);
        edit_field("description", &mut func.description)?;
        edit_field("parameters", &mut func.parameters_text)?;
        edit_field("return value", &mut func.return_value)?;
        edit_field("example", &mut func.example)?;
        edit_field("notes", &mut func.notes)?;
        func.is_documented = true;
    }
    store::save(&app.project)?;

    println!("Documentation saved.");
    pause()?;
    Ok(())
}

/// One field prompt: empty input keeps the current value.
fn edit_field(label: &str, value: &mut String) -> Result<()> {
    println!("Current {}: {}", label, value);
    let input = read_line(&format!("New {}: ", label))?;
    if !input.is_empty() {
        *value = store::single_line(&input);
    }
    println!();
    Ok(())
}

fn view_source(app: &App, r: FunctionRef) -> Result<()> {
    terminal::disable_raw_mode()?;
    println!();
    println!("SOURCE: {}", app.project.function(r).name);
    print_source(&app.project, r);
    pause()?;
    terminal::enable_raw_mode()?;
    Ok(())
}

fn print_source(project: &Project, r: FunctionRef) {
    let file = &project.files[r.file];
    let func = &file.functions[r.func];
    let content = match fs::read_to_string(&file.full_path) {
        Ok(content) => content,
        Err(e) => {
            println!("could not open {}: {}", file.full_path.display(), e);
            return;
        }
    };
    println!("----------------------------------------");
    for (n, line) in source::function_source(
        &content,
        func.line_number,
        c::is_header_file(&func.filename),
    ) {
        println!("{:3}: {}", n, line);
    }
    println!("----------------------------------------");
}

/// Show exported text in cooked mode and wait for ENTER.
fn page_text(text: &str) -> Result<()> {
    terminal::disable_raw_mode()?;
    println!();
    print!("{}", text);
    pause()?;
    terminal::enable_raw_mode()?;
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String> {
    terminal::disable_raw_mode()?;
    println!();
    let result = read_line(prompt);
    terminal::enable_raw_mode()?;
    result
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

fn pause() -> Result<()> {
    read_line("Press ENTER to continue...")?;
    Ok(())
}

//! Command handlers for the crawl CLI.
//!
//! Shared helpers for reading and preparing source files live here.

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::lex_file;
pub use run::{parse_run_options, run_file, RunOptions};

use crawl_parse::ParseError;

/// Columns per tab stop when expanding tabs.
const TAB_WIDTH: usize = 4;

/// Read a source file, exiting with a message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Split a file into the lines the parser expects: tabs expanded to the
/// next multiple of four columns and other control characters removed.
pub fn source_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| {
            let mut out = String::with_capacity(line.len());
            let mut column = 0;
            for c in line.chars() {
                if c == '\t' {
                    let pad = TAB_WIDTH - column % TAB_WIDTH;
                    out.push_str(&" ".repeat(pad));
                    column += pad;
                } else if !c.is_control() {
                    out.push(c);
                    column += 1;
                }
            }
            out
        })
        .collect()
}

/// Print parse errors as `path:line: message`, 1-based.
pub(crate) fn report_parse_errors(path: &str, errors: &[ParseError]) {
    for error in errors {
        eprintln!("{path}:{}: {}", error.line + 1, error.message);
    }
    eprintln!(
        "{} error{} found",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );
}

//! The `check` command: report syntax errors without running.

use super::{read_file, report_parse_errors, source_lines};

pub fn check_file(path: &str) {
    let lines = source_lines(&read_file(path));
    match crawl_parse::parse(&lines) {
        Ok(program) => {
            println!(
                "{path}: ok ({} statements, {} expressions)",
                program.ast.stmt_count(),
                program.ast.expr_count()
            );
        }
        Err(errors) => {
            report_parse_errors(path, &errors);
            std::process::exit(1);
        }
    }
}

//! The `lex` command: display the token stream.

use super::{read_file, source_lines};

pub fn lex_file(path: &str) {
    let lines = source_lines(&read_file(path));
    let output = crawl_lexer::lex(&lines);

    println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
    for token in &output.tokens {
        println!("  {:>4}  {}", token.line + 1, token.kind);
    }

    if !output.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &output.errors {
            println!("  {}: {}", error.line + 1, error.message);
        }
    }
}

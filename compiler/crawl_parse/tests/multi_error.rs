//! Whole-program parse outcomes.

use crawl_parse::parse;
use pretty_assertions::assert_eq;

#[test]
fn two_independent_errors_in_three_lines() {
    let lines = vec![
        "x = = 2".to_string(),
        "y = 3".to_string(),
        "while y".to_string(),
    ];
    let errors = parse(&lines).err().map(|errors| {
        errors
            .into_iter()
            .map(<(String, i32)>::from)
            .collect::<Vec<_>>()
    });
    assert_eq!(
        errors,
        Some(vec![
            ("Invalid expression".to_string(), 0),
            ("Expected ':'".to_string(), 2),
        ])
    );
}

#[test]
fn valid_program_has_global_entry() {
    let lines = ["fn f(x):", "    return x + 1", "", "# call it", "print(f(3))"];
    let program = parse(&lines).ok();
    assert!(program.is_some());
}

#[test]
fn empty_source_is_an_empty_program() {
    let lines: [&str; 0] = [];
    assert!(parse(&lines).is_ok());
}

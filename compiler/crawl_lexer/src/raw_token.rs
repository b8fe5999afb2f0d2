//! Raw token from logos (before the indentation layer).

use logos::Logos;

use crate::lex_error::LexErrorKind;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    #[token("if")]
    If,
    #[token("elsif")]
    Elsif,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("fn")]
    Fn,
    #[token("return")]
    Return,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("True")]
    True,
    #[token("False")]
    False,
    #[token("None")]
    None,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("//")]
    SlashSlash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("=")]
    Assign,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_prefixed(&lex.slice()[2..], 16))]
    #[regex(r"0[bB][01]+", |lex| parse_prefixed(&lex.slice()[2..], 2))]
    #[regex(r"0[oO][0-7]+", |lex| parse_prefixed(&lex.slice()[2..], 8))]
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| LexErrorKind::IntegerOverflow))]
    Int(i64),

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_double)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_double)]
    Double(f64),

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Str,

    #[regex(r#""([^"\\\n]|\\.)*\\?"#)]
    #[regex(r"'([^'\\\n]|\\.)*\\?")]
    UnterminatedStr,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Prefixed literals may use the whole 64-bit range; the bit pattern is
/// reinterpreted as signed.
fn parse_prefixed(digits: &str, radix: u32) -> Result<i64, LexErrorKind> {
    let bits = u64::from_str_radix(digits, radix).map_err(|_| LexErrorKind::IntegerOverflow)?;
    Ok(i64::from_ne_bytes(bits.to_ne_bytes()))
}

fn parse_double(lex: &mut logos::Lexer<RawToken>) -> Result<f64, LexErrorKind> {
    lex.slice()
        .parse::<f64>()
        .map_err(|_| LexErrorKind::InvalidNumber)
}

use std::fmt;

/// A token with its 0-based source line.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token { kind, line }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Ident(String),
    Int(i64),
    Double(f64),
    Str(String),

    // Keywords
    If,
    Elsif,
    Else,
    While,
    For,
    In,
    Fn,
    Return,
    Break,
    Continue,
    And,
    Or,
    True,
    False,
    None,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Bang,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Assign,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Colon,

    // Structure
    Newline,
    BlockStart,
    BlockEnd,
    End,

    /// Stands in for input that failed to tokenize; the error is already
    /// recorded.
    Error,
}

impl TokenKind {
    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Double(_) => "number",
            TokenKind::Str(_) => "string",
            TokenKind::If => "'if'",
            TokenKind::Elsif => "'elsif'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::For => "'for'",
            TokenKind::In => "'in'",
            TokenKind::Fn => "'fn'",
            TokenKind::Return => "'return'",
            TokenKind::Break => "'break'",
            TokenKind::Continue => "'continue'",
            TokenKind::And => "'and'",
            TokenKind::Or => "'or'",
            TokenKind::True => "'True'",
            TokenKind::False => "'False'",
            TokenKind::None => "'None'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::SlashSlash => "'//'",
            TokenKind::Percent => "'%'",
            TokenKind::Amp => "'&'",
            TokenKind::Pipe => "'|'",
            TokenKind::Caret => "'^'",
            TokenKind::Bang => "'!'",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::GtEq => "'>='",
            TokenKind::Assign => "'='",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Newline => "end of line",
            TokenKind::BlockStart => "indented block",
            TokenKind::BlockEnd => "end of block",
            TokenKind::End => "end of input",
            TokenKind::Error => "invalid token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "Ident({name})"),
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Double(d) => write!(f, "Double({d})"),
            TokenKind::Str(s) => write!(f, "Str({s:?})"),
            TokenKind::Newline => f.write_str("NEWLINE"),
            TokenKind::BlockStart => f.write_str("BLOCK-START"),
            TokenKind::BlockEnd => f.write_str("BLOCK-END"),
            TokenKind::End => f.write_str("END"),
            TokenKind::Error => f.write_str("ERROR"),
            other => f.write_str(other.describe().trim_matches('\'')),
        }
    }
}

//! String literal escape processing.

/// Process escape sequences in the body of a quoted literal.
///
/// Returns the message for the first invalid escape.
pub(crate) fn unescape(body: &str) -> Result<String, String> {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('v') => result.push('\u{0B}'),
            Some('f') => result.push('\u{0C}'),
            Some('0') => result.push('\0'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some('x') => {
                let hi = chars.next().and_then(|c| c.to_digit(16));
                let lo = chars.next().and_then(|c| c.to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        let byte = u8::try_from(hi * 16 + lo).unwrap_or(0);
                        result.push(char::from(byte));
                    }
                    _ => return Err("Invalid \\x escape, expected two hex digits".to_string()),
                }
            }
            Some(other) => return Err(format!("Invalid escape sequence '\\{other}'")),
            None => return Err("Unterminated escape sequence".to_string()),
        }
    }

    Ok(result)
}

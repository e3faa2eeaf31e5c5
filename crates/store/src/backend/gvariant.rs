//! GVariant text format for strings and string arrays.
//!
//! `gsettings get` prints values in GVariant text form and `gsettings set`
//! parses them back. Only the two types custom keybindings use are supported:
//! `s` (string) and `as` (array of strings).

use thiserror::Error;

/// Errors raised while parsing GVariant text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GVariantError {
    #[error("expected {expected} at offset {offset} in '{input}'")]
    Expected {
        expected: &'static str,
        offset: usize,
        input: String,
    },

    #[error("unterminated string in '{input}'")]
    UnterminatedString { input: String },

    #[error("invalid escape sequence at offset {offset} in '{input}'")]
    InvalidEscape { offset: usize, input: String },

    #[error("unexpected trailing text at offset {offset} in '{input}'")]
    TrailingText { offset: usize, input: String },
}

/// Formats `value` as a GVariant string literal.
///
/// Uses single quotes unless the value contains one, matching `g_variant_print`.
pub fn format_string(value: &str) -> String {
    let quote = if value.contains('\'') { '"' } else { '\'' };
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c.is_control() => {
                let code = c as u32;
                if code < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Formats `values` as a GVariant `as` literal.
///
/// The empty array carries a type annotation since `[]` alone is ambiguous.
pub fn format_string_array(values: &[String]) -> String {
    if values.is_empty() {
        return "@as []".to_string();
    }
    let items: Vec<String> = values.iter().map(|v| format_string(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Parses a GVariant string literal such as `'gnome-terminal'`.
pub fn parse_string(input: &str) -> Result<String, GVariantError> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    let value = cursor.string()?;
    cursor.finish()?;
    Ok(value)
}

/// Parses a GVariant `as` literal such as `['a', 'b']` or `@as []`.
pub fn parse_string_array(input: &str) -> Result<Vec<String>, GVariantError> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    if cursor.eat_str("@as") {
        cursor.skip_whitespace();
    }
    cursor.expect('[', "'['")?;

    let mut values = Vec::new();
    cursor.skip_whitespace();
    if !cursor.eat(']') {
        loop {
            cursor.skip_whitespace();
            values.push(cursor.string()?);
            cursor.skip_whitespace();
            if cursor.eat(']') {
                break;
            }
            cursor.expect(',', "',' or ']'")?;
        }
    }

    cursor.finish()?;
    Ok(values)
}

struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.offset += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            self.offset += expected.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char, description: &'static str) -> Result<(), GVariantError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.expected(description))
        }
    }

    fn expected(&self, expected: &'static str) -> GVariantError {
        GVariantError::Expected {
            expected,
            offset: self.offset,
            input: self.input.to_string(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn finish(&mut self) -> Result<(), GVariantError> {
        self.skip_whitespace();
        if self.offset == self.input.len() {
            Ok(())
        } else {
            Err(GVariantError::TrailingText {
                offset: self.offset,
                input: self.input.to_string(),
            })
        }
    }

    fn string(&mut self) -> Result<String, GVariantError> {
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.expected("a quoted string")),
        };
        self.bump();

        let mut value = String::new();
        loop {
            let escape_offset = self.offset;
            match self.bump() {
                None => {
                    return Err(GVariantError::UnterminatedString {
                        input: self.input.to_string(),
                    });
                }
                Some(c) if c == quote => return Ok(value),
                Some('\\') => value.push(self.escape(escape_offset)?),
                Some(c) => value.push(c),
            }
        }
    }

    fn escape(&mut self, offset: usize) -> Result<char, GVariantError> {
        let input = self.input;
        let invalid = || GVariantError::InvalidEscape {
            offset,
            input: input.to_string(),
        };
        let c = match self.bump().ok_or_else(invalid)? {
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            'u' => self.hex_char(4).ok_or_else(invalid)?,
            'U' => self.hex_char(8).ok_or_else(invalid)?,
            other => other,
        };
        Ok(c)
    }

    fn hex_char(&mut self, digits: usize) -> Option<char> {
        let hex = self.rest().get(..digits)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let code = u32::from_str_radix(hex, 16).ok()?;
        self.offset += digits;
        char::from_u32(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_string() {
        assert_eq!(format_string("gnome-terminal"), "'gnome-terminal'");
    }

    #[test]
    fn test_format_string_with_single_quote_uses_double_quotes() {
        assert_eq!(format_string("it's"), "\"it's\"");
        assert_eq!(format_string("it's \"x\""), "\"it's \\\"x\\\"\"");
    }

    #[test]
    fn test_format_escapes_backslash_and_controls() {
        assert_eq!(format_string("a\\b\n"), "'a\\\\b\\n'");
        assert_eq!(format_string("\u{1}"), "'\\u0001'");
    }

    #[test]
    fn test_format_empty_array_is_typed() {
        assert_eq!(format_string_array(&[]), "@as []");
    }

    #[test]
    fn test_format_array() {
        let values = vec!["a".to_string(), "b'c".to_string()];
        assert_eq!(format_string_array(&values), "['a', \"b'c\"]");
    }

    #[test]
    fn test_parse_string_both_quote_styles() {
        assert_eq!(parse_string("'Terminal'").unwrap(), "Terminal");
        assert_eq!(parse_string("\"it's\"").unwrap(), "it's");
        assert_eq!(parse_string("''").unwrap(), "");
    }

    #[test]
    fn test_parse_string_escapes() {
        assert_eq!(parse_string(r"'a\\b\'c\n'").unwrap(), "a\\b'c\n");
        assert_eq!(parse_string(r"'é\U0001f600'").unwrap(), "é😀");
    }

    #[test]
    fn test_parse_string_rejects_garbage() {
        assert!(matches!(
            parse_string("Terminal"),
            Err(GVariantError::Expected { .. })
        ));
        assert!(matches!(
            parse_string("'open"),
            Err(GVariantError::UnterminatedString { .. })
        ));
        assert!(matches!(
            parse_string("'a' 'b'"),
            Err(GVariantError::TrailingText { .. })
        ));
        assert!(matches!(
            parse_string(r"'\u12'"),
            Err(GVariantError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_parse_typed_empty_array() {
        assert!(parse_string_array("@as []").unwrap().is_empty());
        assert!(parse_string_array("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_array_as_printed_by_gsettings() {
        let printed = "['/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings/custom0/', \
                       '/org/gnome/settings-daemon/plugins/media-keys/custom-keybindings/custom1/']\n";
        let values = parse_string_array(printed).unwrap();
        assert_eq!(values.len(), 2);
        assert!(values[1].ends_with("custom1/"));
    }

    #[test]
    fn test_parse_array_rejects_missing_separator() {
        assert!(matches!(
            parse_string_array("['a' 'b']"),
            Err(GVariantError::Expected { .. })
        ));
        assert!(parse_string_array("['a',").is_err());
    }

    #[test]
    fn test_formatted_values_parse_back() {
        for value in ["", "plain", "it's", "tab\there", "quote\"s and 'single'", "é"] {
            assert_eq!(parse_string(&format_string(value)).unwrap(), value);
        }
    }
}

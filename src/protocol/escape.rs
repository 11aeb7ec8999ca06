//! Escape codec
//!
//! LSCP transmits strings (instrument file names, parameter values) as ASCII
//! text. Control characters, quotes and non-ASCII bytes must be replaced by
//! escape sequences before they go on the wire, and the substitutions must be
//! undone in the exact reverse order when reading values back.
//!
//! ## Escape forms
//!
//! - `\\` — literal backslash (doubled)
//! - `\n` `\r` `\f` `\t` `\v` `\'` `\"` — fixed table of control/quote chars
//! - `\ddd` — 3-digit octal code point
//! - `\xHH` — 2-digit hex code point

use crate::error::{LscpError, Result};

/// Fixed table of (literal character, escape sequence) pairs.
///
/// Used symmetrically by [`escape`] and [`unescape`]; substitution happens in
/// exactly this order.
pub const ESCAPE_TABLE: [(char, &str); 7] = [
    ('\n', "\\n"),
    ('\r', "\\r"),
    ('\u{0C}', "\\f"),
    ('\t', "\\t"),
    ('\u{0B}', "\\v"),
    ('\'', "\\'"),
    ('"', "\\\""),
];

/// Escape a string for transmission on the wire.
///
/// Literal backslashes are doubled first so that the escape sequences
/// inserted afterwards stay unambiguous, then every character in
/// [`ESCAPE_TABLE`] is replaced by its sequence. Any remaining non-ASCII
/// character up to U+00FF becomes a `\xHH` byte escape.
///
/// Fails with [`LscpError::Encoding`] for characters above U+00FF, which have
/// no single-byte escape form.
pub fn escape(s: &str) -> Result<String> {
    let mut t = s.replace('\\', "\\\\");
    for (literal, sequence) in ESCAPE_TABLE {
        t = t.replace(literal, sequence);
    }

    let mut out = String::with_capacity(t.len());
    for c in t.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let cp = c as u32;
            if cp <= 0xFF {
                out.push_str(&format!("\\x{cp:02x}"));
            } else {
                return Err(LscpError::Encoding(format!(
                    "character {c:?} (U+{cp:04X}) has no single-byte escape"
                )));
            }
        }
    }

    Ok(out)
}

/// Undo [`escape`]: replace escape sequences with the characters they stand
/// for.
///
/// Table sequences are substituted first, then octal (`\ddd`) and hex
/// (`\xHH`) code escapes, and doubled backslashes are collapsed last. The
/// numeric substitutions must run before the backslash collapse or escaped
/// backslashes would be mis-decoded.
pub fn unescape(s: &str) -> String {
    let mut t = s.to_string();
    for (literal, sequence) in ESCAPE_TABLE {
        t = t.replace(sequence, &literal.to_string());
    }
    t = substitute_octal(&t);
    t = substitute_hex(&t);
    t.replace("\\\\", "\\")
}

/// Replace `\ddd` octal escapes (digits 0-7 only) with their code points.
fn substitute_octal(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' && i + 3 < chars.len() {
            let digits = &chars[i + 1..i + 4];
            if digits.iter().all(|c| ('0'..='7').contains(c)) {
                let cp = digits
                    .iter()
                    .fold(0u32, |acc, c| acc * 8 + c.to_digit(8).unwrap());
                if let Some(decoded) = char::from_u32(cp) {
                    out.push(decoded);
                    i += 4;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Replace `\xHH` hex escapes with their code points.
fn substitute_hex(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\'
            && i + 3 < chars.len()
            && chars[i + 1] == 'x'
            && chars[i + 2].is_ascii_hexdigit()
            && chars[i + 3].is_ascii_hexdigit()
        {
            let cp = chars[i + 2].to_digit(16).unwrap() * 16 + chars[i + 3].to_digit(16).unwrap();
            if let Some(decoded) = char::from_u32(cp) {
                out.push(decoded);
                i += 4;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_table_characters() {
        assert_eq!(escape("a\nb\tc").unwrap(), "a\\nb\\tc");
        assert_eq!(escape("it's \"x\"").unwrap(), "it\\'s \\\"x\\\"");
    }

    #[test]
    fn escapes_backslash_before_table() {
        // A literal backslash followed by a quote must not collapse into a
        // single escape sequence.
        assert_eq!(escape("\\").unwrap(), "\\\\");
        assert_eq!(escape("C:\\dir").unwrap(), "C:\\\\dir");
    }

    #[test]
    fn escapes_latin1_as_hex() {
        assert_eq!(escape("f\u{FC}r").unwrap(), "f\\xfcr");
    }

    #[test]
    fn escape_rejects_wide_chars() {
        assert!(matches!(
            escape("\u{20AC}"),
            Err(LscpError::Encoding(_))
        ));
    }

    #[test]
    fn unescapes_octal_and_hex() {
        assert_eq!(unescape("\\101"), "A");
        assert_eq!(unescape("\\x41"), "A");
        assert_eq!(unescape("\\xfc"), "\u{FC}");
    }

    #[test]
    fn octal_requires_three_low_digits() {
        // \98 is not octal, stays literal
        assert_eq!(unescape("\\981"), "\\981");
        assert_eq!(unescape("\\12"), "\\12");
    }
}

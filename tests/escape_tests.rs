//! Escape Codec Tests
//!
//! Round-trip and edge-case coverage for wire string escaping.

use samplerctl::protocol::{escape, unescape};

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn test_roundtrip_printable_ascii() {
    for s in [
        "",
        "hello",
        "GET CHANNELS",
        "/path/to/some file.gig",
        "a=b,c=d; 100% [ok]",
    ] {
        assert_eq!(unescape(&escape(s).unwrap()), s, "roundtrip failed for {s:?}");
    }
}

#[test]
fn test_roundtrip_control_characters() {
    for s in [
        "line1\nline2",
        "cr\rhere",
        "tab\tstop",
        "form\u{0C}feed",
        "vertical\u{0B}tab",
    ] {
        assert_eq!(unescape(&escape(s).unwrap()), s, "roundtrip failed for {s:?}");
    }
}

#[test]
fn test_roundtrip_quotes() {
    for s in ["it's", "say \"hi\"", "'quoted'", "mix 'of' \"both\""] {
        assert_eq!(unescape(&escape(s).unwrap()), s, "roundtrip failed for {s:?}");
    }
}

#[test]
fn test_roundtrip_latin1() {
    for s in ["f\u{FC}r Elise", "na\u{EF}ve", "\u{E9}tude", "\u{FF}"] {
        assert_eq!(unescape(&escape(s).unwrap()), s, "roundtrip failed for {s:?}");
    }
}

#[test]
fn test_roundtrip_backslash() {
    for s in ["back\\slash", "\\", "a\\b\\c", "trailing\\"] {
        assert_eq!(unescape(&escape(s).unwrap()), s, "roundtrip failed for {s:?}");
    }
}

// =============================================================================
// Wire Format
// =============================================================================

#[test]
fn test_escaped_output_is_ascii() {
    let wire = escape("f\u{FC}r\n'Elise'").unwrap();
    assert!(wire.is_ascii());
    assert_eq!(wire, "f\\xfcr\\n\\'Elise\\'");
}

#[test]
fn test_escape_order_backslash_first() {
    // The doubled backslash must not be re-escaped by the table pass.
    assert_eq!(escape("\\n").unwrap(), "\\\\n");
    assert_eq!(escape("a\\\tb").unwrap(), "a\\\\\\tb");
}

#[test]
fn test_escape_rejects_characters_above_latin1() {
    assert!(escape("\u{20AC}100").is_err());
    assert!(escape("\u{1F3B9}").is_err());
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_unescape_numeric_escapes() {
    assert_eq!(unescape("\\x41\\x42"), "AB");
    assert_eq!(unescape("\\101\\102"), "AB");
    assert_eq!(unescape("caf\\xe9"), "caf\u{E9}");
}

#[test]
fn test_unescape_leaves_invalid_escapes_alone() {
    assert_eq!(unescape("\\q"), "\\q");
    assert_eq!(unescape("\\x4"), "\\x4");
    assert_eq!(unescape("\\9"), "\\9");
}

#[test]
fn test_unescape_collapses_doubled_backslash_last() {
    assert_eq!(unescape("a\\\\b"), "a\\b");
    assert_eq!(unescape("\\\\\\\\"), "\\\\");
}

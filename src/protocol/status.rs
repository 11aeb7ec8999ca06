//! Status line classification
//!
//! The first line of every LSCP response is either an acknowledgment
//! (`OK`, `ERR` or `WRN`) or the response data itself. The grammar:
//!
//! ```text
//! OK[INDEX]
//! ERR[INDEX]:CODE:MESSAGE
//! WRN[INDEX]:CODE:MESSAGE
//! ```
//!
//! `INDEX` is an optional bracketed non-negative integer (the identifier of
//! a newly created resource), `CODE` a signed integer, `MESSAGE` free text to
//! end of line. Lines matching neither pattern are data payload.

use crate::error::{LscpError, Result};

/// Acknowledgment kinds on a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Err,
    Wrn,
}

/// A parsed status line
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub kind: StatusKind,

    /// Bracketed index, when the server included one. An absent index is
    /// distinct from any explicit value; `[-1]` does not match the grammar
    /// and makes the whole line payload.
    pub index: Option<u32>,

    /// Numeric code; present for `ERR`/`WRN`, never for `OK`
    pub code: Option<i32>,

    /// Message text, verbatim (not unescaped); present for `ERR`/`WRN`
    pub message: Option<String>,
}

/// Classify one decoded status line (already stripped of line terminators).
///
/// Returns `None` when the line is not an acknowledgment, in which case the
/// caller treats it (and any sibling lines) as response data. The `ERR`/`WRN`
/// patterns are tried before `OK` since all three can carry a bracketed
/// index.
pub fn classify(line: &str) -> Option<Status> {
    classify_report(line, "ERR", StatusKind::Err)
        .or_else(|| classify_report(line, "WRN", StatusKind::Wrn))
        .or_else(|| classify_ok(line))
}

/// Match `PREFIX[INDEX]:CODE:MESSAGE`
fn classify_report(line: &str, prefix: &str, kind: StatusKind) -> Option<Status> {
    let rest = line.strip_prefix(prefix)?;
    let (index, rest) = parse_index(rest)?;
    let rest = rest.strip_prefix(':')?;
    let (code, message) = rest.split_once(':')?;
    let code: i32 = code.parse().ok()?;

    Some(Status {
        kind,
        index,
        code: Some(code),
        message: Some(message.to_string()),
    })
}

/// Match `OK[INDEX]` with nothing trailing
fn classify_ok(line: &str) -> Option<Status> {
    let rest = line.strip_prefix("OK")?;
    let (index, rest) = parse_index(rest)?;
    if !rest.is_empty() {
        return None;
    }

    Some(Status {
        kind: StatusKind::Ok,
        index,
        code: None,
        message: None,
    })
}

/// Parse an optional leading `[<non-negative integer>]`.
///
/// Returns the index (if present) and the remaining input, or `None` when a
/// bracket opens but does not close around a valid number.
fn parse_index(rest: &str) -> Option<(Option<u32>, &str)> {
    match rest.strip_prefix('[') {
        None => Some((None, rest)),
        Some(inner) => {
            let (digits, rest) = inner.split_once(']')?;
            let index: u32 = digits.parse().ok()?;
            Some((Some(index), rest))
        }
    }
}

/// The classified result of one request/response exchange.
///
/// `ERR` lines never appear here: the exchange layer surfaces them as
/// [`LscpError::Protocol`]. `WRN` lines appear as [`Outcome::Warning`] only
/// when warnings-as-errors is disabled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Server acknowledged the command (`OK`), optionally reporting the index
    /// of a created resource
    Success { index: Option<u32> },

    /// Server reported a non-fatal warning (`WRN`)
    Warning {
        index: Option<u32>,
        code: i32,
        message: String,
    },

    /// The response was data, not an acknowledgment
    Payload { lines: Vec<String> },
}

impl Outcome {
    /// The bracketed index, when the server reported one
    pub fn index(&self) -> Option<u32> {
        match self {
            Outcome::Success { index } | Outcome::Warning { index, .. } => *index,
            Outcome::Payload { .. } => None,
        }
    }

    /// Extract the index of a created resource.
    ///
    /// Fails with [`LscpError::UnexpectedResponse`] if the server did not
    /// report one.
    pub fn expect_index(self) -> Result<u32> {
        self.index().ok_or_else(|| {
            LscpError::UnexpectedResponse("acknowledgment carried no index".to_string())
        })
    }

    /// Extract a single data line.
    ///
    /// Fails with [`LscpError::UnexpectedResponse`] for acknowledgments or
    /// multi-line payloads.
    pub fn expect_line(self) -> Result<String> {
        match self {
            Outcome::Payload { mut lines } if lines.len() == 1 => Ok(lines.remove(0)),
            other => Err(LscpError::UnexpectedResponse(format!(
                "expected a single data line, got {other:?}"
            ))),
        }
    }

    /// Extract the data lines of a multi-line payload.
    pub fn expect_lines(self) -> Result<Vec<String>> {
        match self {
            Outcome::Payload { lines } => Ok(lines),
            other => Err(LscpError::UnexpectedResponse(format!(
                "expected data lines, got {other:?}"
            ))),
        }
    }
}

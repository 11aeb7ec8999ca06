//! Protocol Module
//!
//! Implements the LSCP wire format: escaping, status line classification
//! and parameter block decoding.
//!
//! ## Protocol Format (line-oriented ASCII)
//!
//! ### Request Format
//! ```text
//! COMMAND ARG1 ARG2 ...\r\n
//! ```
//!
//! ### Single-line Response
//! ```text
//! OK[INDEX]\r\n
//! ERR[INDEX]:CODE:MESSAGE\r\n
//! WRN[INDEX]:CODE:MESSAGE\r\n
//! <data>\r\n
//! ```
//! `[INDEX]` is an optional bracketed non-negative integer reporting the
//! identifier of a newly created resource.
//!
//! ### Multi-line Response
//! ```text
//! NAME: VALUE\r\n
//! NAME: VALUE\r\n
//! .\r\n
//! ```
//! The lone `.` line marks the end of the body and is not part of the data.

mod escape;
mod map;
mod params;
mod status;

pub use escape::{escape, unescape, ESCAPE_TABLE};
pub use map::CaseInsensitiveMap;
pub use params::{parse_params, ParamMap, ParamValue};
pub use status::{classify, Outcome, Status, StatusKind};

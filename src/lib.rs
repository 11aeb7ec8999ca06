//! # samplerctl
//!
//! A client library for the LinuxSampler Control Protocol (LSCP):
//! - Synchronous request/response exchange over a blocking TCP socket
//! - Status line classification (OK / ERR / WRN, with optional index)
//! - Typed decoding of multi-line parameter blocks
//! - Escaping/unescaping for strings carrying control or non-ASCII characters
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       LscpClient                             │
//! │        (framing, send/receive, lazy TCP connect)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Response Classifier                          │
//! │              (OK / ERR / WRN / payload)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Param Block │          │   Escape    │
//!   │   Decoder   │          │    Codec    │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │ Case-Insens.│
//!   │ Ordered Map │
//!   └─────────────┘
//! ```
//!
//! LSCP is a line-oriented ASCII protocol: requests are single lines
//! terminated by CRLF, responses are either a single status line or a
//! multi-line body terminated by a lone `.` line.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LscpError, Result};
pub use config::Config;
pub use client::LscpClient;
pub use protocol::{Outcome, ParamMap, ParamValue};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of samplerctl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

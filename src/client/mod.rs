//! Client Module
//!
//! Owns the TCP connection to the sampler and implements the synchronous
//! request/response exchange: framing, delimiter-scanned receive, and status
//! line classification.
//!
//! The model is strictly sequential: one exchange in flight at a time on one
//! blocking socket. A `Timeout` leaves the connection in an indeterminate
//! state; callers should `close` and reconnect rather than resume reading.
//! The client never retries a command on its own, since commands like
//! `ADD CHANNEL` are not safe to replay blindly.

mod commands;

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use bytes::BytesMut;

use crate::config::Config;
use crate::error::{LscpError, Result};
use crate::protocol::{classify, Outcome, StatusKind};

/// Client for the LinuxSampler Control Protocol.
///
/// The socket handle is exclusively owned by the client instance; concurrent
/// use from multiple threads must be serialized externally.
///
/// ```no_run
/// use samplerctl::{Config, LscpClient};
///
/// let mut client = LscpClient::new(Config::default());
/// let channels = client.get_channels()?;
/// # Ok::<(), samplerctl::LscpError>(())
/// ```
pub struct LscpClient {
    /// Connection settings; also holds the last configured host/port used by
    /// lazy connects
    config: Config,

    /// The connected stream, or `None` before `connect`/after `close`
    stream: Option<TcpStream>,
}

impl LscpClient {
    /// Create a client without connecting.
    ///
    /// The connection is established lazily by the first `query`, or
    /// explicitly via [`connect`](Self::connect).
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stream: None,
        }
    }

    /// Create a client and connect immediately
    pub fn connect_with(config: Config) -> Result<Self> {
        let mut client = Self::new(config);
        client.connect()?;
        Ok(client)
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a connection is currently open
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Open the TCP connection using the configured host and port.
    ///
    /// The configured timeout applies to the connect itself and to every
    /// subsequent read and write.
    pub fn connect(&mut self) -> Result<()> {
        if self.config.host.is_empty() {
            return Err(LscpError::NoHost);
        }

        let addr = self.config.addr();
        let mut last_err: Option<std::io::Error> = None;

        for sock_addr in addr.to_socket_addrs()? {
            match TcpStream::connect_timeout(&sock_addr, self.config.timeout) {
                Ok(stream) => {
                    stream.set_read_timeout(Some(self.config.timeout))?;
                    stream.set_write_timeout(Some(self.config.timeout))?;
                    // Disable Nagle's algorithm for low latency
                    stream.set_nodelay(true)?;

                    tracing::debug!("connected to {}", sock_addr);
                    self.stream = Some(stream);
                    return Ok(());
                }
                Err(e) => last_err = Some(e),
            }
        }

        Err(last_err
            .unwrap_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::AddrNotAvailable,
                    format!("no addresses resolved for {addr}"),
                )
            })
            .into())
    }

    /// Close the connection (idempotent)
    pub fn close(&mut self) {
        if self.stream.take().is_some() {
            tracing::debug!("connection closed");
        }
    }

    /// Write all bytes to the socket, looping on partial writes.
    ///
    /// Returns the number of bytes written. A zero-byte write with data
    /// remaining fails with [`LscpError::ConnectionBroken`].
    pub fn send(&mut self, msg: &[u8]) -> Result<usize> {
        let stream = self.stream.as_mut().ok_or(LscpError::ConnectionBroken)?;

        let mut sent = 0;
        while sent < msg.len() {
            let n = stream.write(&msg[sent..]).map_err(map_io)?;
            if n == 0 {
                return Err(LscpError::ConnectionBroken);
            }
            sent += n;
        }

        Ok(sent)
    }

    /// Read from the socket in fixed-size chunks until the accumulated
    /// buffer ends with `delimiter`.
    ///
    /// A zero-byte read before the delimiter fails with
    /// [`LscpError::ConnectionBroken`]; a socket timeout with
    /// [`LscpError::Timeout`]. Partial reads are not buffered across calls.
    pub fn receive(&mut self, delimiter: &[u8]) -> Result<BytesMut> {
        let stream = self.stream.as_mut().ok_or(LscpError::ConnectionBroken)?;

        let mut msg = BytesMut::new();
        let mut chunk = vec![0u8; self.config.recv_buflen];

        while !msg.ends_with(delimiter) {
            let n = stream.read(&mut chunk).map_err(map_io)?;
            if n == 0 {
                return Err(LscpError::ConnectionBroken);
            }
            msg.extend_from_slice(&chunk[..n]);
        }

        Ok(msg)
    }

    /// Receive a multi-line message, delimited by the final lone-`.` line
    pub fn receive_multiline(&mut self) -> Result<BytesMut> {
        self.receive(b".\r\n")
    }

    /// Send a command and return the classified response.
    ///
    /// Connects lazily if no connection is open. The command must be ASCII
    /// (escape non-ASCII strings with the escape codec first); trailing line
    /// terminators are stripped and exactly one CRLF is appended.
    ///
    /// With `multiline` the receive scans for the `.\r\n` end marker, the
    /// marker is stripped, and a data response is split into individual
    /// lines. `ERR` status lines surface as [`LscpError::Protocol`]; `WRN`
    /// lines as [`LscpError::Warning`] when warnings-as-errors is configured,
    /// otherwise they are logged and returned as [`Outcome::Warning`].
    pub fn query(&mut self, command: &str, multiline: bool) -> Result<Outcome> {
        if !command.is_ascii() {
            return Err(LscpError::Encoding(format!(
                "command contains non-ASCII characters: {command:?}"
            )));
        }

        if self.stream.is_none() {
            self.connect()?;
        }

        let line = format!("{}\r\n", command.trim_end_matches(['\r', '\n']));
        tracing::debug!(send = %line.trim_end());
        self.send(line.as_bytes())?;

        let raw = if multiline {
            self.receive_multiline()?
        } else {
            self.receive(b"\r\n")?
        };
        tracing::debug!(recv_bytes = raw.len());

        if !raw.is_ascii() {
            return Err(LscpError::Encoding(
                "response contains non-ASCII bytes".to_string(),
            ));
        }
        let text = std::str::from_utf8(&raw)
            .map_err(|e| LscpError::Encoding(format!("undecodable response: {e}")))?;
        let text = text.trim_end_matches(['.', '\r', '\n']);

        match classify(text) {
            Some(status) => match status.kind {
                StatusKind::Ok => Ok(Outcome::Success {
                    index: status.index,
                }),
                StatusKind::Err => Err(LscpError::Protocol {
                    code: status.code.unwrap_or_default(),
                    message: status.message.unwrap_or_default(),
                }),
                StatusKind::Wrn => {
                    let code = status.code.unwrap_or_default();
                    let message = status.message.unwrap_or_default();
                    if self.config.warnings_as_errors {
                        Err(LscpError::Warning { code, message })
                    } else {
                        tracing::warn!("server warning {}: {}", code, message);
                        Ok(Outcome::Warning {
                            index: status.index,
                            code,
                            message,
                        })
                    }
                }
            },
            None => {
                let lines = if multiline {
                    text.lines().map(str::to_string).collect()
                } else {
                    vec![text.to_string()]
                };
                Ok(Outcome::Payload { lines })
            }
        }
    }
}

/// Map socket timeouts onto the protocol error taxonomy.
///
/// Unix reports a timed-out blocking read as `WouldBlock`, Windows as
/// `TimedOut`.
fn map_io(e: std::io::Error) -> LscpError {
    match e.kind() {
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut => LscpError::Timeout,
        _ => LscpError::Io(e),
    }
}

//! Routes port and user events through the codec.
//!
//! A [`Session`] owns the active receive/send types and the [`Mode`], and is driven by
//! explicit [`Event`]s instead of callbacks:
//!
//! - [`Event::DataAvailable`]: decode with the receive type, log it as inbound, then in
//!   [`Mode::AutoResponse`] send the configured response
//! - [`Event::SendRequested`]: encode with the send type, write it, log the text as outbound
//!
//! ```rust
//! use serial_chat::session::{Direction, Event, LogLine, Session, SessionSettings};
//! use serial_chat::DataType;
//!
//! let settings = SessionSettings::new().with_receive_type(DataType::Uint8Array);
//! let mut session = Session::new(Vec::<u8>::new(), Vec::<LogLine>::new(), settings);
//!
//! session.handle(Event::DataAvailable(vec![1, 2])).unwrap();
//! assert_eq!(session.log()[0].direction, Direction::Inbound);
//! assert_eq!(session.log()[0].text, "Uint8Array([1 ,2])");
//! ```

use crate::port::PortSink;
use crate::{decode_with_options, encode, CodecOptions, DataType, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub const fn tag(self) -> &'static str {
        match self {
            Direction::Inbound => "<<",
            Direction::Outbound => ">>",
        }
    }
}

/// One entry of the traffic log.
#[derive(Clone, Debug, PartialEq)]
pub struct LogLine {
    pub direction: Direction,
    pub timestamp: DateTime<Local>,
    pub text: String,
}

impl LogLine {
    pub fn new(direction: Direction, text: String) -> Self {
        LogLine {
            direction,
            timestamp: Local::now(),
            text,
        }
    }
}

/// `[HH:MM:SS] << text`
impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.timestamp.format("%H:%M:%S"),
            self.direction.tag(),
            self.text
        )
    }
}

/// Destination for traffic log lines.
pub trait LogSink {
    fn append_line(&mut self, line: LogLine);
}

impl LogSink for Vec<LogLine> {
    fn append_line(&mut self, line: LogLine) {
        self.push(line);
    }
}

/// Whether inbound data triggers the configured response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Manual,
    AutoResponse,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    DataAvailable(Vec<u8>),
    SendRequested(String),
}

/// Initial selections for a [`Session`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub receive_type: DataType,
    pub send_type: DataType,
    pub mode: Mode,
    pub auto_response: String,
    pub codec: CodecOptions,
}

impl SessionSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_receive_type(mut self, ty: DataType) -> Self {
        self.receive_type = ty;
        self
    }

    #[must_use]
    pub fn with_send_type(mut self, ty: DataType) -> Self {
        self.send_type = ty;
        self
    }

    /// Sets the response text and switches to [`Mode::AutoResponse`].
    #[must_use]
    pub fn with_auto_response(mut self, text: &str) -> Self {
        self.auto_response = text.to_string();
        self.mode = Mode::AutoResponse;
        self
    }

    #[must_use]
    pub fn with_codec(mut self, codec: CodecOptions) -> Self {
        self.codec = codec;
        self
    }
}

pub struct Session<P, L> {
    port: P,
    log: L,
    settings: SessionSettings,
}

impl<P: PortSink, L: LogSink> Session<P, L> {
    pub fn new(port: P, log: L, settings: SessionSettings) -> Self {
        Session {
            port,
            log,
            settings,
        }
    }

    /// Dispatches one event.
    ///
    /// # Errors
    ///
    /// Returns the port error when writing outbound bytes fails; the line is not logged.
    pub fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::DataAvailable(bytes) => self.receive(&bytes),
            Event::SendRequested(text) => self.send(&text),
        }
    }

    fn receive(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }

        let text = decode_with_options(self.settings.receive_type, bytes, &self.settings.codec);
        self.log.append_line(LogLine::new(Direction::Inbound, text));

        if self.settings.mode == Mode::AutoResponse {
            let response = self.settings.auto_response.clone();
            self.send(&response)?;
        }
        Ok(())
    }

    fn send(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        let bytes = encode(self.settings.send_type, text);
        if bytes.is_empty() {
            tracing::debug!(send_type = %self.settings.send_type, "nothing to transmit");
        } else {
            self.port.write_bytes(&bytes)?;
        }
        self.log
            .append_line(LogLine::new(Direction::Outbound, text.to_string()));
        Ok(())
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn mode(&self) -> Mode {
        self.settings.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.settings.mode = mode;
    }

    pub fn set_auto_response(&mut self, text: &str) {
        self.settings.auto_response = text.to_string();
    }

    pub fn set_receive_type(&mut self, ty: DataType) {
        self.settings.receive_type = ty;
    }

    pub fn set_send_type(&mut self, ty: DataType) {
        self.settings.send_type = ty;
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}

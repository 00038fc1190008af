//! Serial port adapter.
//!
//! Wraps the `serialport` crate behind the two operations the session needs: writing a
//! buffer ([`PortSink`]) and reading whatever has arrived ([`SerialLink::read_available`]).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serialport::{DataBits, Parity as SpParity, SerialPort, StopBits};
use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

/// Minimum read buffer when nothing is pending yet.
const READ_CHUNK: usize = 256;

/// Destination for outbound bytes.
pub trait PortSink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Collects written bytes in memory.
impl PortSink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Parity setting for serial port configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    #[default]
    None,
    Odd,
    Even,
}

fn to_serialport_parity(p: Parity) -> SpParity {
    match p {
        Parity::None => SpParity::None,
        Parity::Odd => SpParity::Odd,
        Parity::Even => SpParity::Even,
    }
}

fn to_serialport_data_bits(bits: u8) -> DataBits {
    match bits {
        5 => DataBits::Five,
        6 => DataBits::Six,
        7 => DataBits::Seven,
        _ => DataBits::Eight,
    }
}

fn to_serialport_stop_bits(bits: u8) -> StopBits {
    match bits {
        2 => StopBits::Two,
        _ => StopBits::One,
    }
}

/// Line settings for opening a port.
///
/// # Examples
///
/// ```rust
/// use serial_chat::port::{Parity, PortSettings};
///
/// let settings = PortSettings::new("/dev/ttyUSB0").with_baud_rate(9600);
/// assert_eq!(settings.baud_rate, 9600);
/// assert_eq!(settings.parity, Parity::None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortSettings {
    pub name: String,
    pub baud_rate: u32,
    pub data_bits: u8,
    pub parity: Parity,
    pub stop_bits: u8,
    pub read_timeout_ms: u64,
}

impl Default for PortSettings {
    fn default() -> Self {
        PortSettings {
            name: String::new(),
            baud_rate: 115_200,
            data_bits: 8,
            parity: Parity::None,
            stop_bits: 1,
            read_timeout_ms: 50,
        }
    }
}

impl PortSettings {
    #[must_use]
    pub fn new(name: &str) -> Self {
        PortSettings {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Checks the values that `serialport` would otherwise silently coerce.
    pub fn validate(&self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(Error::config("baud_rate must be greater than zero"));
        }
        if !(5..=8).contains(&self.data_bits) {
            return Err(Error::config(format!(
                "data_bits must be 5..=8, got {}",
                self.data_bits
            )));
        }
        if !(1..=2).contains(&self.stop_bits) {
            return Err(Error::config(format!(
                "stop_bits must be 1 or 2, got {}",
                self.stop_bits
            )));
        }
        Ok(())
    }
}

/// Names of the serial ports currently present on the system.
pub fn available_port_names() -> Result<Vec<String>> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().map(|info| info.port_name).collect())
}

/// An open serial port.
pub struct SerialLink {
    name: String,
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    /// Opens the port named in `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for invalid settings and [`Error::Port`] when the device
    /// cannot be opened.
    pub fn open(settings: &PortSettings) -> Result<Self> {
        settings.validate()?;
        if settings.name.is_empty() {
            return Err(Error::config("no port name given"));
        }

        let port = serialport::new(&settings.name, settings.baud_rate)
            .data_bits(to_serialport_data_bits(settings.data_bits))
            .parity(to_serialport_parity(settings.parity))
            .stop_bits(to_serialport_stop_bits(settings.stop_bits))
            .timeout(Duration::from_millis(settings.read_timeout_ms))
            .open()
            .map_err(|e| Error::port(format!("can't open {}: {}", settings.name, e)))?;

        // Drop anything left over from before we connected
        let _ = port.clear(serialport::ClearBuffer::All);

        tracing::info!(port = %settings.name, baud = settings.baud_rate, "port opened");
        Ok(SerialLink {
            name: settings.name.clone(),
            port,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads whatever is buffered, waiting at most the read timeout.
    /// An empty result means nothing arrived.
    pub fn read_available(&mut self) -> Result<Vec<u8>> {
        let pending = self.port.bytes_to_read()? as usize;
        let mut buf = vec![0u8; pending.max(READ_CHUNK)];
        match self.port.read(&mut buf) {
            Ok(n) => {
                buf.truncate(n);
                Ok(buf)
            }
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(Vec::new()),
            Err(e) => Err(Error::port(e)),
        }
    }
}

impl PortSink for SerialLink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.port.write_all(bytes).map_err(Error::port)?;
        self.port.flush().map_err(Error::port)
    }
}

//! TOML configuration for the host shell.
//!
//! ```toml
//! [port]
//! name = "/dev/ttyUSB0"
//! baud_rate = 9600
//! parity = "even"
//!
//! [session]
//! receive_type = "Uint16Array"
//! send_type = "String"
//! mode = "auto_response"
//! auto_response = "ack"
//!
//! [session.codec]
//! partial_element = "zero_pad"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use crate::port::PortSettings;
use crate::session::SessionSettings;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChatConfig {
    pub port: PortSettings,
    pub session: SessionSettings,
}

impl ChatConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_chat::config::ChatConfig;
    /// use serial_chat::DataType;
    ///
    /// let config = ChatConfig::from_toml_str("[session]\nreceive_type = \"Float32Array\"").unwrap();
    /// assert_eq!(config.session.receive_type, DataType::Float32Array);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ChatConfig = toml::from_str(text)?;
        config.port.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }
}

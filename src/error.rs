//! Error types for the typed codec, the session layer and the port adapter.
//!
//! The lenient codec entry points ([`crate::encode`], [`crate::decode`]) never return
//! these errors: malformed input degrades to an empty buffer or the `UnknownType()`
//! sentinel. Errors surface from the strict entry points and from the outer layers.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: a literal that does not have the `Tag([...])` shape, with column information
//! - **Tag Mismatches**: a well-formed literal carrying a different type tag than the one selected
//! - **Invalid Numbers**: an element token that does not parse for the selected type
//! - **Port / I/O Errors**: failures reported by the serial device or the filesystem
//! - **Config Errors**: malformed configuration files
//!
//! ## Examples
//!
//! ```rust
//! use serial_chat::{try_encode, DataType, Error};
//!
//! let result = try_encode(DataType::Uint16Array, "Uint8Array([1 ,2])");
//! assert!(matches!(result, Err(Error::TagMismatch { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors reported by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed literal with column context
    #[error("Syntax error at column {col}:\n{context}\n{msg}")]
    Syntax {
        col: usize,
        msg: String,
        context: String,
    },

    /// Literal tag does not match the selected type
    #[error("Tag mismatch: expected {expected}, found {found}")]
    TagMismatch { expected: String, found: String },

    /// Element token that does not parse as a number of the selected type
    #[error("Invalid number '{token}' at column {col}")]
    InvalidNumber { token: String, col: usize },

    /// Name that is not one of the canonical type tags
    #[error("Unknown type tag: {0}")]
    UnknownTag(String),

    /// Raw type selector outside the known range
    #[error("Unknown type code: {0}")]
    UnknownTypeCode(u8),

    /// Serial port open/read/write failure
    #[error("Port error: {0}")]
    Port(String),

    /// IO error while reading configuration or writing output
    #[error("IO error: {0}")]
    Io(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a syntax error pointing at `col` (1-based) of `context`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_chat::Error;
    ///
    /// let err = Error::syntax(12, "expected ']'", "Uint8Array([1");
    /// assert!(err.to_string().contains("column 12"));
    /// ```
    pub fn syntax(col: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    pub fn tag_mismatch(expected: &str, found: &str) -> Self {
        Error::TagMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn invalid_number(token: &str, col: usize) -> Self {
        Error::InvalidNumber {
            token: token.to_string(),
            col,
        }
    }

    pub fn unknown_tag(tag: &str) -> Self {
        Error::UnknownTag(tag.to_string())
    }

    /// Wraps a port failure. Accepts anything displayable, typically `serialport::Error`.
    pub fn port<T: fmt::Display>(err: T) -> Self {
        Error::Port(err.to_string())
    }

    pub fn io<T: fmt::Display>(err: T) -> Self {
        Error::Io(err.to_string())
    }

    pub fn config<T: fmt::Display>(err: T) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serialport::Error> for Error {
    fn from(err: serialport::Error) -> Self {
        Error::port(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::config(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

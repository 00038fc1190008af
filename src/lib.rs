//! # serial_chat
//!
//! Serial port chat with a typed codec for the traffic.
//!
//! Incoming chunks are shown either as text or as a typed array literal, and outgoing
//! messages are typed the same way:
//!
//! ```text
//! String          hello
//! Uint8Array      Uint8Array([104 ,105])
//! Uint16Array     Uint16Array([26984])
//! Float32Array    Float32Array([1.5 ,-2])
//! ```
//!
//! ## Key Features
//!
//! - **Round-trip literals**: decoding a buffer and encoding the literal back gives the same bytes
//! - **Lenient by default**: malformed input never panics; it yields no bytes or `UnknownType()`
//! - **Strict when asked**: [`try_encode`] reports column-located errors instead
//! - **Explicit session dispatch**: [`session::Session`] turns port and user events into codec calls
//!
//! ## Quick Start
//!
//! ```rust
//! use serial_chat::{decode, encode, DataType};
//!
//! let bytes = encode(DataType::Uint16Array, "Uint16Array([1 ,2 ,3])");
//! assert_eq!(bytes, vec![1, 0, 2, 0, 3, 0]);
//!
//! let shown = decode(DataType::Uint16Array, &bytes);
//! assert_eq!(shown, "Uint16Array([1 ,2 ,3])");
//! ```
//!
//! ## Literal Format
//!
//! See the [`format`] module for the full description of the literal syntax.
//!
//! ## Modules
//!
//! - [`data_type`]: the six payload types and their canonical tags
//! - [`literal`]: literal printer and parser
//! - [`options`]: codec options
//! - [`session`]: event dispatch, traffic log, auto-response mode
//! - [`port`]: `serialport` adapter
//! - [`config`]: TOML configuration
//! - [`error`]: error types

pub mod config;
pub mod data_type;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod literal;
pub mod options;
pub mod port;
pub mod session;

pub use data_type::DataType;
pub use decode::{decode, decode_code, decode_elements, decode_with_options, UNKNOWN_TYPE};
pub use encode::{encode, encode_code, try_encode};
pub use error::{Error, Result};
pub use options::{CodecOptions, PartialElement};

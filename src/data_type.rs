//! The closed set of payload types a chunk of serial traffic can be viewed as.
//!
//! Each [`DataType`] owns a canonical tag. The tag is the prefix of every array literal
//! (`Uint16Array([1 ,2])`), the name accepted on the command line and in config files, and
//! the serde representation. Changing a tag is a breaking format change.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payload interpretation selected for receiving or sending.
///
/// Ordinals (see [`DataType::code`]) follow declaration order and are stable.
///
/// # Examples
///
/// ```rust
/// use serial_chat::DataType;
///
/// assert_eq!(DataType::Uint16Array.tag(), "Uint16Array");
/// assert_eq!(DataType::Uint16Array.element_width(), Some(2));
/// assert_eq!(DataType::String.element_width(), None);
/// assert_eq!("Float64Array".parse::<DataType>().unwrap(), DataType::Float64Array);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    String,
    Uint8Array,
    Uint16Array,
    Uint32Array,
    Float32Array,
    Float64Array,
}

impl DataType {
    /// Every variant in ordinal order, for populating type selectors.
    pub const ALL: [DataType; 6] = [
        DataType::String,
        DataType::Uint8Array,
        DataType::Uint16Array,
        DataType::Uint32Array,
        DataType::Float32Array,
        DataType::Float64Array,
    ];

    /// Canonical tag name.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Uint8Array => "Uint8Array",
            DataType::Uint16Array => "Uint16Array",
            DataType::Uint32Array => "Uint32Array",
            DataType::Float32Array => "Float32Array",
            DataType::Float64Array => "Float64Array",
        }
    }

    /// Bytes per element, `None` for `String`.
    #[must_use]
    pub const fn element_width(self) -> Option<usize> {
        match self {
            DataType::String => None,
            DataType::Uint8Array => Some(1),
            DataType::Uint16Array => Some(2),
            DataType::Uint32Array | DataType::Float32Array => Some(4),
            DataType::Float64Array => Some(8),
        }
    }

    #[must_use]
    pub const fn is_array(self) -> bool {
        !matches!(self, DataType::String)
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, DataType::Float32Array | DataType::Float64Array)
    }

    /// Ordinal of this variant.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a raw ordinal back to a variant; `None` when out of range.
    #[must_use]
    pub fn from_code(code: u8) -> Option<DataType> {
        DataType::ALL.get(usize::from(code)).copied()
    }

    /// Looks up a variant by its exact canonical tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<DataType> {
        DataType::ALL.into_iter().find(|ty| ty.tag() == tag)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DataType::from_tag(s.trim()).ok_or_else(|| Error::unknown_tag(s))
    }
}

impl TryFrom<u8> for DataType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        DataType::from_code(code).ok_or(Error::UnknownTypeCode(code))
    }
}

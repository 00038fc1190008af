//! Configuration options for the typed codec.
//!
//! - [`CodecOptions`]: main configuration struct
//! - [`PartialElement`]: what to do with a trailing group of bytes shorter than one integer element
//!
//! ## Examples
//!
//! ```rust
//! use serial_chat::{decode_with_options, CodecOptions, DataType, PartialElement};
//!
//! let bytes = [0x01, 0x00, 0x02];
//!
//! // Default: the odd trailing byte is dropped
//! let shown = decode_with_options(DataType::Uint16Array, &bytes, &CodecOptions::new());
//! assert_eq!(shown, "Uint16Array([1])");
//!
//! // Zero-pad the trailing byte into a full element
//! let options = CodecOptions::new().with_partial_element(PartialElement::ZeroPad);
//! let shown = decode_with_options(DataType::Uint16Array, &bytes, &options);
//! assert_eq!(shown, "Uint16Array([1 ,2])");
//! ```

use serde::{Deserialize, Serialize};

/// Policy for a trailing incomplete integer element during decode.
///
/// Float variants always drop incomplete trailing bytes regardless of this setting.
///
/// # Examples
///
/// ```rust
/// use serial_chat::PartialElement;
///
/// assert_eq!(PartialElement::default(), PartialElement::Drop);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialElement {
    /// Discard bytes that do not fill a whole element
    #[default]
    Drop,
    /// Complete the element with zero high-order bytes
    ZeroPad,
}

/// Configuration options for decoding.
///
/// # Examples
///
/// ```rust
/// use serial_chat::{CodecOptions, PartialElement};
///
/// let options = CodecOptions::new();
/// assert_eq!(options.partial_element, PartialElement::Drop);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    pub partial_element: PartialElement,
}

impl CodecOptions {
    /// Creates default options (trailing partial integer elements are dropped).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trailing partial element policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serial_chat::{CodecOptions, PartialElement};
    ///
    /// let options = CodecOptions::new().with_partial_element(PartialElement::ZeroPad);
    /// assert_eq!(options.partial_element, PartialElement::ZeroPad);
    /// ```
    #[must_use]
    pub fn with_partial_element(mut self, policy: PartialElement) -> Self {
        self.partial_element = policy;
        self
    }
}

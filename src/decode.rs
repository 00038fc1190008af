//! Decode direction: raw bytes → typed literal.
//!
//! Integer variants read unsigned little-endian groups, float variants reinterpret
//! IEEE‑754 little-endian groups, and `String` is lossy UTF‑8. Bytes that do not fill a
//! whole float element are dropped; for integer elements the behaviour follows
//! [`PartialElement`].

use crate::literal::{Element, LiteralWriter};
use crate::{CodecOptions, DataType, PartialElement};

/// Literal shown when the selected type has no decoder.
pub const UNKNOWN_TYPE: &str = "UnknownType()";

fn read_unsigned(group: &[u8]) -> u64 {
    // Missing high-order bytes of a short group read as zero
    group
        .iter()
        .rev()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}

fn read_f32(group: &[u8]) -> f32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(group);
    f32::from_le_bytes(raw)
}

fn read_f64(group: &[u8]) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(group);
    f64::from_le_bytes(raw)
}

/// Splits `bytes` into the elements of an array type.
///
/// Returns an empty list for `String`, which has no element structure.
///
/// # Examples
///
/// ```rust
/// use serial_chat::{decode_elements, CodecOptions, DataType};
/// use serial_chat::literal::Element;
///
/// let elements = decode_elements(DataType::Uint16Array, &[0x34, 0x12], &CodecOptions::new());
/// assert_eq!(elements, vec![Element::Unsigned(0x1234)]);
/// ```
#[must_use]
pub fn decode_elements(ty: DataType, bytes: &[u8], options: &CodecOptions) -> Vec<Element> {
    let Some(width) = ty.element_width() else {
        return Vec::new();
    };

    let groups = bytes.chunks_exact(width);
    let remainder = groups.remainder();

    let mut elements: Vec<Element> = match ty {
        DataType::Float32Array => groups.map(|g| Element::Float32(read_f32(g))).collect(),
        DataType::Float64Array => groups.map(|g| Element::Float64(read_f64(g))).collect(),
        _ => groups.map(|g| Element::Unsigned(read_unsigned(g))).collect(),
    };

    if !remainder.is_empty() {
        if !ty.is_float() && options.partial_element == PartialElement::ZeroPad {
            elements.push(Element::Unsigned(read_unsigned(remainder)));
        } else {
            tracing::debug!(
                data_type = %ty,
                dropped = remainder.len(),
                "trailing bytes do not fill an element"
            );
        }
    }

    elements
}

/// Renders `bytes` as a literal of `ty` using custom options.
#[must_use]
pub fn decode_with_options(ty: DataType, bytes: &[u8], options: &CodecOptions) -> String {
    if ty == DataType::String {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let mut writer = LiteralWriter::new(ty);
    for element in decode_elements(ty, bytes, options) {
        writer.push(&element);
    }
    writer.finish()
}

/// Renders `bytes` as a literal of `ty`.
///
/// # Examples
///
/// ```rust
/// use serial_chat::{decode, DataType};
///
/// let bytes = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];
/// assert_eq!(decode(DataType::Uint32Array, &bytes), "Uint32Array([1 ,2])");
/// assert_eq!(decode(DataType::String, b"hi"), "hi");
/// ```
#[must_use]
pub fn decode(ty: DataType, bytes: &[u8]) -> String {
    decode_with_options(ty, bytes, &CodecOptions::default())
}

/// Decodes with a raw type selector as stored by a host selector widget.
///
/// An unknown code yields [`UNKNOWN_TYPE`] and an error-level diagnostic.
///
/// ```rust
/// use serial_chat::{decode_code, UNKNOWN_TYPE};
///
/// assert_eq!(decode_code(1, &[7]), "Uint8Array([7])");
/// assert_eq!(decode_code(42, &[7]), UNKNOWN_TYPE);
/// ```
#[must_use]
pub fn decode_code(code: u8, bytes: &[u8]) -> String {
    match DataType::from_code(code) {
        Some(ty) => decode(ty, bytes),
        None => {
            tracing::error!(code, "no decoder for type code");
            UNKNOWN_TYPE.to_string()
        }
    }
}

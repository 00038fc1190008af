//! Typed Literal Format
//!
//! This module documents the textual format shown for received data and accepted for
//! sending.
//!
//! # Overview
//!
//! Every payload is viewed through one of six types. `String` shows the bytes as text;
//! the five array types show them as a list of numbers prefixed by the type tag.
//!
//! | Tag | Element | Width | Interpretation |
//! |-----|---------|-------|----------------|
//! | `String` | - | - | UTF‑8 text |
//! | `Uint8Array` | unsigned | 1 | byte value |
//! | `Uint16Array` | unsigned | 2 | little-endian |
//! | `Uint32Array` | unsigned | 4 | little-endian |
//! | `Float32Array` | float | 4 | IEEE‑754 binary32, little-endian |
//! | `Float64Array` | float | 8 | IEEE‑754 binary64, little-endian |
//!
//! Tags are case-sensitive and stable.
//!
//! # Array Literals
//!
//! ```text
//! Uint16Array([1 ,2 ,3])
//! Float32Array([1.5 ,-0.25])
//! Uint8Array([])
//! ```
//!
//! **Syntax**: `<Tag>([` elements `])`
//! - Elements are decimal numbers
//! - Printed literals separate elements with a space followed by a comma (`" ,"`), with
//!   no separator after the last element
//! - Floats print in the shortest form that reads back to the same value; special values
//!   print as `NaN`, `inf` and `-inf`
//!
//! # Reading Bytes
//!
//! Bytes are grouped by the element width in arrival order.
//!
//! - A trailing group shorter than a float element is dropped
//! - A trailing group shorter than an integer element is dropped by default, or completed
//!   with zero high-order bytes under `PartialElement::ZeroPad`
//! - Invalid UTF‑8 in `String` payloads is shown as U+FFFD
//!
//! ```text
//! bytes 01 00 00 00 02 00 00 00  as Uint32Array  ->  Uint32Array([1 ,2])
//! bytes 01 00 02                 as Uint16Array  ->  Uint16Array([1])
//! ```
//!
//! # Writing Bytes
//!
//! `String` input is sent verbatim as UTF‑8. For array types:
//!
//! - Input is trimmed; empty input sends nothing
//! - The first `<Tag>([` ... `])` on a line is used; the tag must be the selected type's
//! - Any separator spacing is accepted, since tokens are split on `,` and trimmed
//! - Tokens that are not numbers of the selected kind are skipped
//! - Integers of any size and sign are accepted and keep their low-order bytes
//!   (`300` as `Uint8Array` sends `44`, `-1` as `Uint16Array` sends `FF FF`)
//!
//! ```text
//! Uint8Array([10 ,20 ,300])   as Uint8Array   ->  0A 14 2C
//! Uint8Array([1, x, 2])       as Uint8Array   ->  01 02
//! Uint8Array([1])             as Uint16Array  ->  (nothing)
//! ```
//!
//! Strict encoding rejects each of the lenient cases above with a located error.
//!
//! # Round Trip
//!
//! For any buffer whose length is a multiple of the element width, encoding the decoded
//! literal gives back the original bytes. For floats this holds bit-for-bit for every
//! finite value.
//!
//! # Unknown Types
//!
//! A raw type selector outside the six known codes decodes to `UnknownType()` and encodes
//! to nothing.

// This module contains only documentation; no implementation code

//! Encode direction: typed literal → raw bytes.
//!
//! [`encode`] is lenient: a literal that does not match yields an empty buffer and
//! unparseable element tokens are skipped. [`try_encode`] parses the same syntax strictly
//! and reports the first problem instead.
//!
//! Integer tokens may be arbitrarily large or negative. They are narrowed to the element
//! width by keeping the low-order bytes of their two's complement form, so `300` becomes
//! `44` in a `Uint8Array` and `-1` becomes `0xFFFF` in a `Uint16Array`.

use crate::literal::{find_body, LiteralParser};
use crate::{DataType, Error, Result};
use num_bigint::{BigInt, Sign};

fn push_integer(value: &BigInt, width: usize, out: &mut Vec<u8>) {
    let mut bytes = value.to_signed_bytes_le();
    let fill = if value.sign() == Sign::Minus { 0xFF } else { 0x00 };
    bytes.resize(width, fill);
    out.extend_from_slice(&bytes);
}

/// Optional single sign followed by ASCII digits only.
fn is_decimal_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses one trimmed token and appends its little-endian bytes.
/// Returns `false` when the token is not a number of the given type.
fn push_token(ty: DataType, token: &str, out: &mut Vec<u8>) -> bool {
    match ty {
        DataType::Float32Array => match token.parse::<f32>() {
            Ok(v) => out.extend_from_slice(&v.to_le_bytes()),
            Err(_) => return false,
        },
        DataType::Float64Array => match token.parse::<f64>() {
            Ok(v) => out.extend_from_slice(&v.to_le_bytes()),
            Err(_) => return false,
        },
        DataType::Uint8Array | DataType::Uint16Array | DataType::Uint32Array => {
            let Some(width) = ty.element_width() else {
                return false;
            };
            // BigInt's FromStr also takes `_` separators
            if !is_decimal_integer(token) {
                return false;
            }
            match token.parse::<BigInt>() {
                Ok(v) => push_integer(&v, width, out),
                Err(_) => return false,
            }
        }
        DataType::String => return false,
    }
    true
}

/// Converts `input` into the bytes to transmit for `ty`.
///
/// # Examples
///
/// ```rust
/// use serial_chat::{encode, DataType};
///
/// assert_eq!(encode(DataType::Uint8Array, "Uint8Array([10 ,20 ,300])"), vec![10, 20, 44]);
/// assert_eq!(encode(DataType::Uint16Array, "garbage"), Vec::<u8>::new());
/// assert_eq!(encode(DataType::String, "hi"), b"hi".to_vec());
/// ```
#[must_use]
pub fn encode(ty: DataType, input: &str) -> Vec<u8> {
    if ty == DataType::String {
        return input.as_bytes().to_vec();
    }

    let text = input.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let Some(body) = find_body(ty.tag(), text) else {
        tracing::debug!(data_type = %ty, "input does not contain a literal of the selected type");
        return Vec::new();
    };

    let mut out = Vec::with_capacity(body.len());
    for token in body.split(',').map(str::trim) {
        if !push_token(ty, token, &mut out) {
            tracing::debug!(data_type = %ty, token, "skipping unparseable element");
        }
    }
    out
}

/// Encodes with a raw type selector; an unknown code yields no bytes.
#[must_use]
pub fn encode_code(code: u8, input: &str) -> Vec<u8> {
    match DataType::from_code(code) {
        Some(ty) => encode(ty, input),
        None => {
            tracing::error!(code, "no encoder for type code");
            Vec::new()
        }
    }
}

/// Converts `input` into bytes, rejecting anything [`encode`] would silently discard.
///
/// Empty (or whitespace-only) input is accepted and yields no bytes.
///
/// # Errors
///
/// - [`Error::Syntax`] when the input is not exactly one literal
/// - [`Error::TagMismatch`] when the literal names another type
/// - [`Error::UnknownTag`] when the literal names no type at all
/// - [`Error::InvalidNumber`] for the first element that does not parse
///
/// # Examples
///
/// ```rust
/// use serial_chat::{try_encode, DataType, Error};
///
/// assert_eq!(try_encode(DataType::Uint16Array, "Uint16Array([1 ,258])").unwrap(), vec![1, 0, 2, 1]);
///
/// let err = try_encode(DataType::Uint16Array, "Uint16Array([1 ,x])").unwrap_err();
/// assert!(matches!(err, Error::InvalidNumber { col: 17, .. }));
/// ```
pub fn try_encode(ty: DataType, input: &str) -> Result<Vec<u8>> {
    if ty == DataType::String {
        return Ok(input.as_bytes().to_vec());
    }
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let literal = LiteralParser::new(input).parse()?;
    if literal.tag != ty.tag() {
        return Err(match DataType::from_tag(literal.tag) {
            Some(_) => Error::tag_mismatch(ty.tag(), literal.tag),
            None => Error::unknown_tag(literal.tag),
        });
    }

    let mut out = Vec::with_capacity(literal.tokens.len() * ty.element_width().unwrap_or(1));
    for token in &literal.tokens {
        if !push_token(ty, token.text, &mut out) {
            return Err(Error::invalid_number(token.text, token.col));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowing_keeps_low_bytes() {
        let mut out = Vec::new();
        push_integer(&BigInt::from(300), 1, &mut out);
        push_integer(&BigInt::from(-1), 2, &mut out);
        push_integer(&BigInt::from(0x1_0000_0005u64), 4, &mut out);
        assert_eq!(out, vec![44, 0xFF, 0xFF, 5, 0, 0, 0]);
    }

    #[test]
    fn test_huge_integer_truncates() {
        // 2^80 + 7 keeps only the low 16 bits
        assert_eq!(
            encode(DataType::Uint16Array, "Uint16Array([1208925819614629174706183])"),
            vec![7, 0]
        );
    }

    #[test]
    fn test_uint32_little_endian() {
        assert_eq!(
            encode(DataType::Uint32Array, "Uint32Array([1 ,4294967295])"),
            vec![1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_bad_tokens_are_dropped() {
        assert_eq!(
            encode(DataType::Uint8Array, "Uint8Array([1 ,two ,3 ,4.5 , ,5])"),
            vec![1, 3, 5]
        );
        assert_eq!(
            encode(DataType::Float32Array, "Float32Array([1.5 ,oops])"),
            1.5f32.to_le_bytes().to_vec()
        );
    }

    #[test]
    fn test_digit_separators_are_not_integers() {
        assert_eq!(encode(DataType::Uint8Array, "Uint8Array([1_0 ,5])"), vec![5]);
        assert_eq!(
            encode(DataType::Uint16Array, "Uint16Array([_5 ,5_ ,+7 ,-1 ,+-2 ,- 3])"),
            vec![7, 0, 0xFF, 0xFF]
        );
        assert!(matches!(
            try_encode(DataType::Uint8Array, "Uint8Array([1_0])"),
            Err(Error::InvalidNumber { ref token, col: 13 }) if token == "1_0"
        ));
    }

    #[test]
    fn test_wrong_tag_is_silent_empty() {
        assert!(encode(DataType::Uint16Array, "Uint8Array([1 ,2])").is_empty());
        assert!(encode(DataType::Float64Array, "Float32Array([1])").is_empty());
    }

    #[test]
    fn test_string_not_trimmed() {
        assert_eq!(encode(DataType::String, "  a "), b"  a ".to_vec());
        assert!(encode(DataType::String, "").is_empty());
    }

    #[test]
    fn test_unknown_code() {
        assert!(encode_code(6, "Uint8Array([1])").is_empty());
        assert_eq!(encode_code(1, "Uint8Array([1])"), vec![1]);
    }

    #[test]
    fn test_try_encode_errors() {
        assert!(matches!(
            try_encode(DataType::Uint8Array, "Uint16Array([1])"),
            Err(Error::TagMismatch { .. })
        ));
        assert!(matches!(
            try_encode(DataType::Uint8Array, "Int8Array([1])"),
            Err(Error::UnknownTag(ref tag)) if tag == "Int8Array"
        ));
        assert!(matches!(
            try_encode(DataType::Uint8Array, "garbage"),
            Err(Error::Syntax { .. })
        ));
        assert!(matches!(
            try_encode(DataType::Uint8Array, "Uint8Array([1 ,,2])"),
            Err(Error::InvalidNumber { ref token, .. }) if token.is_empty()
        ));
    }

    #[test]
    fn test_try_encode_accepts_empty() {
        assert_eq!(try_encode(DataType::Float64Array, "   "), Ok(Vec::new()));
        assert_eq!(try_encode(DataType::Float64Array, "Float64Array([])"), Ok(Vec::new()));
    }
}

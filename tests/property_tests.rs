//! Property-based tests - round-trip laws of the typed codec
//!
//! Buffers are generated with lengths that are whole multiples of the element width,
//! float payloads are generated as finite values so NaN payload bits never come into play.

use proptest::prelude::*;
use serial_chat::{decode, encode, try_encode, DataType};

fn aligned_bytes(width: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..96).prop_map(move |mut v| {
        v.truncate(v.len() / width * width);
        v
    })
}

fn roundtrip(ty: DataType, bytes: &[u8]) -> bool {
    let literal = decode(ty, bytes);
    let back = encode(ty, &literal);
    if back != bytes {
        eprintln!("Literal was: {}", literal);
        eprintln!("Encoded back: {:?}", back);
        return false;
    }
    true
}

proptest! {
    #[test]
    fn prop_uint8(bytes in aligned_bytes(1)) {
        prop_assert!(roundtrip(DataType::Uint8Array, &bytes));
    }

    #[test]
    fn prop_uint16(bytes in aligned_bytes(2)) {
        prop_assert!(roundtrip(DataType::Uint16Array, &bytes));
    }

    #[test]
    fn prop_uint32(bytes in aligned_bytes(4)) {
        prop_assert!(roundtrip(DataType::Uint32Array, &bytes));
    }

    #[test]
    fn prop_float32(values in prop::collection::vec(any::<f32>().prop_filter("finite", |v| v.is_finite()), 0..20)) {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        prop_assert!(roundtrip(DataType::Float32Array, &bytes));
    }

    #[test]
    fn prop_float64(values in prop::collection::vec(any::<f64>().prop_filter("finite", |v| v.is_finite()), 0..20)) {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        prop_assert!(roundtrip(DataType::Float64Array, &bytes));
    }

    #[test]
    fn prop_strict_agrees_on_decoded_literals(bytes in aligned_bytes(4)) {
        for ty in [DataType::Uint8Array, DataType::Uint16Array, DataType::Uint32Array] {
            let literal = decode(ty, &bytes);
            prop_assert_eq!(try_encode(ty, &literal).unwrap(), bytes.clone());
        }
    }

    #[test]
    fn prop_string_identity(s in any::<String>()) {
        prop_assert_eq!(decode(DataType::String, &encode(DataType::String, &s)), s);
    }

    #[test]
    fn prop_uint16_drops_odd_byte(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let literal = decode(DataType::Uint16Array, &bytes);
        let aligned = &bytes[..bytes.len() / 2 * 2];
        prop_assert_eq!(literal, decode(DataType::Uint16Array, aligned));
    }

    #[test]
    fn prop_encode_never_panics(text in any::<String>(), code in 0u8..8) {
        if let Some(ty) = DataType::from_code(code) {
            let _ = encode(ty, &text);
            let _ = try_encode(ty, &text);
        }
        let _ = serial_chat::encode_code(code, &text);
    }
}

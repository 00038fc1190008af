use serial_chat::literal::Element;
use serial_chat::{
    decode, decode_code, decode_elements, decode_with_options, encode, encode_code, try_encode,
    CodecOptions, DataType, Error, PartialElement, UNKNOWN_TYPE,
};

#[test]
fn test_uint32_concrete_scenario() {
    let bytes = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];
    let literal = decode(DataType::Uint32Array, &bytes);
    println!("Decoded: {}", literal);
    assert_eq!(literal, "Uint32Array([1 ,2])");
}

#[test]
fn test_uint8_truncation_scenario() {
    assert_eq!(
        encode(DataType::Uint8Array, "Uint8Array([10 ,20 ,300])"),
        vec![10, 20, 44]
    );
}

#[test]
fn test_empty_input_for_every_type() {
    for ty in DataType::ALL {
        assert!(encode(ty, "").is_empty(), "{}", ty);
    }
    assert_eq!(decode(DataType::String, &[]), "");
    assert_eq!(decode(DataType::Uint8Array, &[]), "Uint8Array([])");
    assert_eq!(decode(DataType::Uint16Array, &[]), "Uint16Array([])");
    assert_eq!(decode(DataType::Uint32Array, &[]), "Uint32Array([])");
    assert_eq!(decode(DataType::Float32Array, &[]), "Float32Array([])");
    assert_eq!(decode(DataType::Float64Array, &[]), "Float64Array([])");
}

#[test]
fn test_whitespace_only_array_input() {
    assert!(encode(DataType::Uint16Array, "  \t\n ").is_empty());
    // String input is never trimmed
    assert_eq!(encode(DataType::String, " \n"), b" \n".to_vec());
}

#[test]
fn test_malformed_literal() {
    assert!(encode(DataType::Uint16Array, "garbage").is_empty());
    assert!(encode(DataType::Uint16Array, "Uint16Array(1 ,2)").is_empty());
    assert!(encode(DataType::Uint16Array, "uint16array([1 ,2])").is_empty());
}

#[test]
fn test_float32_trailing_bytes_dropped() {
    let mut bytes = 3.25f32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&[0x01, 0x02]);
    assert_eq!(decode(DataType::Float32Array, &bytes), "Float32Array([3.25])");
}

#[test]
fn test_float64_trailing_bytes_dropped() {
    let mut bytes = (-0.5f64).to_le_bytes().to_vec();
    bytes.extend_from_slice(&[0xFF; 7]);
    assert_eq!(decode(DataType::Float64Array, &bytes), "Float64Array([-0.5])");
}

#[test]
fn test_unknown_type_sentinel() {
    for code in [6u8, 7, 100, 255] {
        assert_eq!(decode_code(code, b"abc"), UNKNOWN_TYPE);
        assert!(encode_code(code, "abc").is_empty());
    }
    assert_eq!(decode_code(0, b"abc"), "abc");
}

#[test]
fn test_partial_integer_policies() {
    let bytes = [0x10, 0x00, 0x20];

    let dropped = decode(DataType::Uint16Array, &bytes);
    assert_eq!(dropped, "Uint16Array([16])");

    let options = CodecOptions::new().with_partial_element(PartialElement::ZeroPad);
    let padded = decode_with_options(DataType::Uint16Array, &bytes, &options);
    assert_eq!(padded, "Uint16Array([16 ,32])");

    // A zero-padded literal encodes to whole elements
    assert_eq!(encode(DataType::Uint16Array, &padded), vec![0x10, 0x00, 0x20, 0x00]);
}

#[test]
fn test_decode_elements_typed_access() {
    let options = CodecOptions::new();
    let bytes: Vec<u8> = [1.0f64, 2.0].iter().flat_map(|v| v.to_le_bytes()).collect();
    assert_eq!(
        decode_elements(DataType::Float64Array, &bytes, &options),
        vec![Element::Float64(1.0), Element::Float64(2.0)]
    );
    assert_eq!(
        decode_elements(DataType::Uint32Array, &[0xEF, 0xBE, 0xAD, 0xDE], &options),
        vec![Element::Unsigned(0xDEAD_BEEF)]
    );
}

#[test]
fn test_float_special_values_survive() {
    let bytes: Vec<u8> = [f32::INFINITY, f32::NEG_INFINITY, -0.0]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    let literal = decode(DataType::Float32Array, &bytes);
    assert_eq!(literal, "Float32Array([inf ,-inf ,-0])");
    assert_eq!(encode(DataType::Float32Array, &literal), bytes);
}

#[test]
fn test_float_extremes_round_trip() {
    let values = [f64::MAX, f64::MIN_POSITIVE, 5e-324, 0.1 + 0.2];
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    let literal = decode(DataType::Float64Array, &bytes);
    assert_eq!(encode(DataType::Float64Array, &literal), bytes);
}

#[test]
fn test_encode_accepts_loose_spacing() {
    assert_eq!(
        encode(DataType::Uint16Array, "  Uint16Array([1,2 ,  3 ])  "),
        vec![1, 0, 2, 0, 3, 0]
    );
}

#[test]
fn test_encode_negative_integers() {
    assert_eq!(
        encode(DataType::Uint32Array, "Uint32Array([-2])"),
        vec![0xFE, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn test_encode_float_from_integer_tokens() {
    assert_eq!(
        encode(DataType::Float64Array, "Float64Array([1 ,2])"),
        [1.0f64, 2.0]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect::<Vec<u8>>()
    );
}

#[test]
fn test_try_encode_reports_locations() {
    let err = try_encode(DataType::Float32Array, "Float32Array([1.5 ,abc])").unwrap_err();
    println!("Error: {}", err);
    match err {
        Error::InvalidNumber { token, col } => {
            assert_eq!(token, "abc");
            assert_eq!(col, 20);
        }
        other => panic!("Expected invalid number, got {:?}", other),
    }
}

#[test]
fn test_try_encode_rejects_what_encode_ignores() {
    let lenient = encode(DataType::Uint8Array, "say Uint8Array([1]) please");
    assert_eq!(lenient, vec![1]);
    assert!(try_encode(DataType::Uint8Array, "say Uint8Array([1]) please").is_err());

    let err = try_encode(DataType::Uint8Array, "Uint16Array([1])").unwrap_err();
    assert_eq!(err, Error::tag_mismatch("Uint8Array", "Uint16Array"));
}

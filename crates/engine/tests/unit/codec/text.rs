//! # Text Codec Tests
//!
//! Hexadecimal and binary rendering and parsing, and the `NumericBase` selector.

use hackalu_core::codec::{NumericBase, binary_to_bits, bits_to_binary, bits_to_hex, hex_to_bits};
use hackalu_core::common::{AluError, Bits, ErrorKind};

use crate::common::bits;

// ══════════════════════════════════════════════════════════
// Rendering
// ══════════════════════════════════════════════════════════

#[test]
fn test_hex_pads_to_nibble_count() {
    assert_eq!(bits_to_hex(&bits(5, 4, false)), "0x5");
    assert_eq!(bits_to_hex(&bits(5, 9, false)), "0x005");
    assert_eq!(bits_to_hex(&bits(-1, 16, true)), "0xFFFF");
    assert_eq!(bits_to_hex(&Bits::zeroed(1).unwrap()), "0x0");
}

#[test]
fn test_binary_renders_every_bit() {
    assert_eq!(bits_to_binary(&bits(5, 6, false)), "0b000101");
}

// ══════════════════════════════════════════════════════════
// Parsing
// ══════════════════════════════════════════════════════════

#[test]
fn test_hex_prefix_is_optional_and_case_insensitive() {
    for text in ["0xff", "0XFF", "ff", " FF "] {
        assert_eq!(hex_to_bits(text, 8).unwrap().to_u64(), 0xFF, "{text:?}");
    }
}

#[test]
fn test_binary_prefix_is_optional_and_case_insensitive() {
    for text in ["0b101", "0B101", "101"] {
        assert_eq!(binary_to_bits(text, 4).unwrap().to_u64(), 5, "{text:?}");
    }
}

#[test]
fn test_empty_digits_are_type_errors() {
    assert!(matches!(hex_to_bits("0x", 8), Err(AluError::InvalidHex { .. })));
    assert!(matches!(binary_to_bits("", 8), Err(AluError::InvalidBinary { .. })));
}

#[test]
fn test_illegal_characters_are_type_errors() {
    assert_eq!(hex_to_bits("0xG1", 8).unwrap_err().kind(), ErrorKind::Type);
    assert_eq!(binary_to_bits("0b102", 8).unwrap_err().kind(), ErrorKind::Type);
}

#[test]
fn test_parsed_literal_must_fit_width() {
    let err = hex_to_bits("0x100", 8).unwrap_err();
    assert!(matches!(err, AluError::ValueOutOfRange { value: 256, .. }));
    assert!(binary_to_bits("10000", 4).is_err());
}

#[test]
fn test_huge_literal_is_range_error() {
    let err = hex_to_bits(&"F".repeat(40), 64).unwrap_err();
    assert!(matches!(err, AluError::LiteralTooLarge { .. }));
    assert_eq!(err.kind(), ErrorKind::Range);
}

// ══════════════════════════════════════════════════════════
// NumericBase
// ══════════════════════════════════════════════════════════

#[test]
fn test_numeric_base_format() {
    let value = bits(-2, 8, true);
    assert_eq!(NumericBase::Decimal.format(&value, true), "-2");
    assert_eq!(NumericBase::Decimal.format(&value, false), "254");
    assert_eq!(NumericBase::Hex.format(&value, true), "0xFE");
    assert_eq!(NumericBase::Binary.format(&value, true), "0b11111110");
}

#[test]
fn test_numeric_base_parse_matches_format() {
    for base in NumericBase::ALL {
        let value = bits(100, 8, false);
        let text = base.format(&value, false);
        assert_eq!(base.parse(&text, 8, false).unwrap(), value, "{base}");
    }
}

#[test]
fn test_numeric_base_from_str_and_serde() {
    assert_eq!("dec".parse::<NumericBase>(), Ok(NumericBase::Decimal));
    assert_eq!("HEX".parse::<NumericBase>(), Ok(NumericBase::Hex));
    assert_eq!("bin".parse::<NumericBase>(), Ok(NumericBase::Binary));
    assert!("octal".parse::<NumericBase>().is_err());
    assert_eq!(serde_json::to_string(&NumericBase::Hex).unwrap(), "\"hex\"");
    assert_eq!(NumericBase::default(), NumericBase::Decimal);
}

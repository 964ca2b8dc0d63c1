//! # Error Tests
//!
//! Messages and `ErrorKind` classification of `AluError`.

use hackalu_core::common::{AluError, ErrorKind};

#[test]
fn test_width_mismatch_message_names_the_mismatch() {
    let err = AluError::WidthMismatch { left: 8, right: 16 };
    assert_eq!(err.kind(), ErrorKind::WidthMismatch);
    assert!(err.to_string().contains("width mismatch"));
    assert!(err.to_string().contains("8 bits vs 16 bits"));
}

#[test]
fn test_value_out_of_range_message_states_interval() {
    let err = AluError::ValueOutOfRange {
        value: 200,
        width: 8,
        signed: true,
        min: -128,
        max: 127,
    };
    assert_eq!(
        err.to_string(),
        "Signed 8-bit value must be in range [-128, 127], got 200"
    );
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn test_unsigned_range_message() {
    let err = AluError::ValueOutOfRange {
        value: -1,
        width: 4,
        signed: false,
        min: 0,
        max: 15,
    };
    assert!(err.to_string().starts_with("Unsigned 4-bit"));
}

#[test]
fn test_kinds_split_range_and_type_errors() {
    let range = [
        AluError::InvalidWidth { width: 0, min: 1, max: 64 },
        AluError::LiteralTooLarge { literal: "9".repeat(50) },
    ];
    for err in range {
        assert_eq!(err.kind(), ErrorKind::Range, "{err}");
    }

    let type_errors = [
        AluError::NotAnInteger { input: "1.5".into() },
        AluError::InvalidHex { input: "0xZZ".into() },
        AluError::InvalidBinary { input: "012".into() },
        AluError::InvalidBit { value: 2 },
        AluError::InvalidControlBits { len: 5 },
    ];
    for err in type_errors {
        assert_eq!(err.kind(), ErrorKind::Type, "{err}");
    }
}

#[test]
fn test_unknown_operation_quotes_name() {
    let err = AluError::UnknownOperation { name: "x*y".into() };
    assert_eq!(err.to_string(), "unknown operation: \"x*y\"");
    assert_eq!(err.kind(), ErrorKind::UnknownOperation);
}

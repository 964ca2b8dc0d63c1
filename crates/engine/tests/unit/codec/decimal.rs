//! # Decimal Codec Tests
//!
//! Integer ⇄ bits conversion, range policy and decimal text parsing.

use hackalu_core::codec::{bits_to_decimal, decimal_to_bits, parse_decimal};
use hackalu_core::common::{AluError, ErrorKind};
use rstest::rstest;

use crate::common::all_values;

#[rstest]
#[case(0, 4, false, vec![0, 0, 0, 0])]
#[case(5, 4, false, vec![1, 0, 1, 0])]
#[case(15, 4, false, vec![1, 1, 1, 1])]
#[case(-1, 4, true, vec![1, 1, 1, 1])]
#[case(-8, 4, true, vec![0, 0, 0, 1])]
#[case(7, 4, true, vec![1, 1, 1, 0])]
#[case(-1, 1, true, vec![1])]
fn test_decimal_to_bits_encodes_lsb_first(
    #[case] value: i128,
    #[case] width: usize,
    #[case] signed: bool,
    #[case] expected: Vec<u8>,
) {
    assert_eq!(decimal_to_bits(value, width, signed).unwrap().to_raw(), expected);
}

#[rstest]
#[case(16, 4, false)]
#[case(-1, 4, false)]
#[case(8, 4, true)]
#[case(-9, 4, true)]
#[case(1, 1, true)]
fn test_decimal_to_bits_rejects_out_of_range(
    #[case] value: i128,
    #[case] width: usize,
    #[case] signed: bool,
) {
    let err = decimal_to_bits(value, width, signed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(matches!(err, AluError::ValueOutOfRange { .. }));
}

#[test]
fn test_width_is_checked_before_value() {
    assert!(matches!(
        decimal_to_bits(1_000_000, 0, false),
        Err(AluError::InvalidWidth { .. })
    ));
    assert!(matches!(
        decimal_to_bits(0, 65, true),
        Err(AluError::InvalidWidth { .. })
    ));
}

#[test]
fn test_64_bit_extremes_are_exact() {
    let max = decimal_to_bits(i128::from(u64::MAX), 64, false).unwrap();
    assert_eq!(bits_to_decimal(&max, false), i128::from(u64::MAX));
    assert_eq!(bits_to_decimal(&max, true), -1);

    let min = decimal_to_bits(i128::from(i64::MIN), 64, true).unwrap();
    assert_eq!(bits_to_decimal(&min, true), i128::from(i64::MIN));
    assert_eq!(min.to_u64(), 1 << 63);
}

#[test]
fn test_round_trip_every_value_at_small_widths() {
    for width in 1..=8 {
        for signed in [false, true] {
            for value in all_values(width, signed) {
                let bits = decimal_to_bits(value, width, signed).unwrap();
                assert_eq!(bits_to_decimal(&bits, signed), value, "w={width} v={value}");
            }
        }
    }
}

#[test]
fn test_parse_decimal_text() {
    assert_eq!(parse_decimal(" -3 ", 8, true).unwrap().to_u64(), 0xFD);
    assert_eq!(parse_decimal("+12", 8, false).unwrap().to_u64(), 12);
    for bad in ["", "1.5", "1e3", "abc", "--1", "0x10"] {
        let err = parse_decimal(bad, 8, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type, "{bad:?}");
    }
}

//! # Resize Tests
//!
//! Truncation, zero extension and sign extension.

use hackalu_core::codec::{bits_to_decimal, resize_bits};
use hackalu_core::common::AluError;

use crate::common::bits;

#[test]
fn test_sign_extension_preserves_negative_value() {
    let minus_three = bits(-3, 4, true);
    let wide = resize_bits(&minus_three, 16, true).unwrap();
    assert_eq!(wide.width(), 16);
    assert_eq!(bits_to_decimal(&wide, true), -3);
}

#[test]
fn test_unsigned_extension_zero_fills() {
    let pattern = bits(-3, 4, true);
    let wide = resize_bits(&pattern, 8, false).unwrap();
    assert_eq!(wide.to_u64(), 0b1101);
}

#[test]
fn test_positive_signed_extension_zero_fills() {
    let five = bits(5, 4, true);
    assert_eq!(resize_bits(&five, 8, true).unwrap().to_u64(), 5);
}

#[test]
fn test_truncation_keeps_low_bits_silently() {
    // -128 at 8 bits truncates to 0 at 4 bits.
    let value = bits(-128, 8, true);
    let narrow = resize_bits(&value, 4, true).unwrap();
    assert!(narrow.is_zero());

    // 0b0110_1001 truncates to 0b1001, which flips sign under two's complement.
    let narrow = resize_bits(&bits(0b0110_1001, 8, false), 4, true).unwrap();
    assert_eq!(bits_to_decimal(&narrow, true), -7);
}

#[test]
fn test_same_width_is_a_copy() {
    let value = bits(9, 8, false);
    assert_eq!(resize_bits(&value, 8, true).unwrap(), value);
}

#[test]
fn test_rejects_invalid_target_width() {
    assert!(matches!(
        resize_bits(&bits(1, 4, false), 0, false),
        Err(AluError::InvalidWidth { .. })
    ));
    assert!(resize_bits(&bits(1, 4, false), 65, false).is_err());
}

#[test]
fn test_documented_truncation_and_extension_vectors() {
    let value = hackalu_core::common::Bits::try_from_raw(&[1, 0, 1, 0, 1, 1, 1, 1]).unwrap();
    assert_eq!(resize_bits(&value, 4, false).unwrap().to_raw(), vec![1, 0, 1, 0]);

    let minus_one = hackalu_core::common::Bits::try_from_raw(&[1, 1, 1, 1]).unwrap();
    assert_eq!(resize_bits(&minus_one, 8, true).unwrap().to_raw(), vec![1; 8]);
}

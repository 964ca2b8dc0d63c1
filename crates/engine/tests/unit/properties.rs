//! # Property Tests
//!
//! Algebraic laws of the codec, the ripple-carry layer and the Hack ALU over random
//! widths and operands.

use hackalu_core::arith::twos_complement;
use hackalu_core::codec::{bits_to_decimal, decimal_to_bits, resize_bits};
use hackalu_core::common::Bits;
use hackalu_core::hack::hack_alu_by_operation;
use hackalu_core::ops::{add_full, sub_via_twos_complement};
use proptest::prelude::*;

/// A width in `[1, 64]` and a raw pattern of that width.
fn pattern() -> impl Strategy<Value = Bits> {
    (1usize..=64, any::<u64>()).prop_map(|(width, raw)| Bits::from_u64(raw, width).unwrap())
}

/// Two patterns sharing a width.
fn pattern_pair() -> impl Strategy<Value = (Bits, Bits)> {
    (1usize..=64, any::<u64>(), any::<u64>()).prop_map(|(width, a, b)| {
        (
            Bits::from_u64(a, width).unwrap(),
            Bits::from_u64(b, width).unwrap(),
        )
    })
}

proptest! {
    #[test]
    fn prop_decimal_round_trip(bits in pattern(), signed in any::<bool>()) {
        let value = bits_to_decimal(&bits, signed);
        prop_assert_eq!(decimal_to_bits(value, bits.width(), signed).unwrap(), bits);
    }

    #[test]
    fn prop_double_negation_is_identity(bits in pattern()) {
        let twice = twos_complement(&twos_complement(&bits).result).result;
        prop_assert_eq!(twice, bits);
    }

    #[test]
    fn prop_addition_commutes((a, b) in pattern_pair()) {
        let ab = add_full(&a, &b, true).unwrap();
        let ba = add_full(&b, &a, true).unwrap();
        prop_assert_eq!(ab.result, ba.result);
        prop_assert_eq!(ab.flags, ba.flags);
    }

    #[test]
    fn prop_addition_is_modular((a, b) in pattern_pair()) {
        let width = a.width();
        let sum = add_full(&a, &b, false).unwrap();
        let modulus = 1i128 << width;
        let expected = (bits_to_decimal(&a, false) + bits_to_decimal(&b, false)) % modulus;
        prop_assert_eq!(bits_to_decimal(&sum.result, false), expected);
        prop_assert_eq!(sum.flags.carry, bits_to_decimal(&a, false) + bits_to_decimal(&b, false) >= modulus);
    }

    #[test]
    fn prop_subtraction_is_addition_of_negation((a, b) in pattern_pair()) {
        let diff = sub_via_twos_complement(&a, &b, true).unwrap();
        let neg_b = twos_complement(&b).result;
        prop_assert_eq!(diff.result, add_full(&a, &neg_b, true).unwrap().result);
    }

    #[test]
    fn prop_hack_add_matches_ripple_layer((a, b) in pattern_pair()) {
        let hack = hack_alu_by_operation(&a, &b, "x+y").unwrap();
        let ripple = add_full(&a, &b, true).unwrap();
        prop_assert_eq!(hack.result, ripple.result);
        prop_assert_eq!(hack.flags.overflow, ripple.flags.overflow);
        prop_assert_eq!(hack.flags.carry, ripple.flags.carry);
    }

    #[test]
    fn prop_hack_sub_matches_ripple_layer((a, b) in pattern_pair()) {
        let hack = hack_alu_by_operation(&a, &b, "x-y").unwrap();
        let ripple = sub_via_twos_complement(&a, &b, true).unwrap();
        prop_assert_eq!(hack.result, ripple.result);
    }

    #[test]
    fn prop_sign_extension_preserves_value(bits in pattern(), grow in 0usize..64) {
        let target = (bits.width() + grow).min(64);
        let wide = resize_bits(&bits, target, true).unwrap();
        prop_assert_eq!(bits_to_decimal(&wide, true), bits_to_decimal(&bits, true));
    }
}

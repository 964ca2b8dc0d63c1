//! # Arithmetic Primitive Tests
//!
//! The full adder truth table, inversion and two's-complement negation.

use hackalu_core::arith::{full_adder, invert_bits, twos_complement};
use hackalu_core::common::Bit;
use rstest::rstest;

use crate::common::{all_values, bits, signed};

#[rstest]
#[case(0, 0, 0, 0, 0)]
#[case(0, 0, 1, 1, 0)]
#[case(0, 1, 0, 1, 0)]
#[case(0, 1, 1, 0, 1)]
#[case(1, 0, 0, 1, 0)]
#[case(1, 0, 1, 0, 1)]
#[case(1, 1, 0, 0, 1)]
#[case(1, 1, 1, 1, 1)]
fn test_full_adder_truth_table(
    #[case] a: u8,
    #[case] b: u8,
    #[case] c: u8,
    #[case] sum: u8,
    #[case] carry: u8,
) {
    let bit = |v: u8| Bit::try_from(v).unwrap();
    let out = full_adder(bit(a), bit(b), bit(c));
    assert_eq!(out.sum, bit(sum));
    assert_eq!(out.carry, bit(carry));
}

#[test]
fn test_invert_bits_is_elementwise_not() {
    let value = bits(0b1010, 4, false);
    assert_eq!(invert_bits(&value).to_u64(), 0b0101);
    assert_eq!(invert_bits(&invert_bits(&value)), value);
}

#[test]
fn test_twos_complement_negates() {
    let neg = twos_complement(&bits(5, 8, true));
    assert_eq!(signed(&neg.result), -5);
    assert_eq!(neg.inverted.to_u64(), 0b1111_1010);
    assert_eq!(neg.steps.len(), 8);
}

#[test]
fn test_twos_complement_trace_starts_with_carry_one() {
    let neg = twos_complement(&bits(0, 4, false));
    assert_eq!(neg.steps[0].carry_in, Bit::One);
    // !0 = 1111; + 1 ripples the carry all the way out.
    assert!(neg.steps.iter().all(|s| s.carry_out == Bit::One));
    assert!(neg.result.is_zero());
    for (i, step) in neg.steps.iter().enumerate() {
        assert_eq!(step.index, i);
    }
}

#[test]
fn test_most_negative_maps_to_itself() {
    for width in 1..=64 {
        let min = bits(-(1i128 << (width - 1)), width, true);
        assert_eq!(twos_complement(&min).result, min, "width {width}");
    }
}

#[test]
fn test_double_negation_is_identity_exhaustive() {
    for width in 1..=8 {
        for value in all_values(width, true) {
            let x = bits(value, width, true);
            let back = twos_complement(&twos_complement(&x).result).result;
            assert_eq!(back, x);
        }
    }
}

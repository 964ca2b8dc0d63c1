//! # Ripple-Carry Tests
//!
//! Per-bit traces, results and errors of `add_stepwise`, `add_full` and
//! `sub_via_twos_complement`.

use hackalu_core::common::{AluError, Bit, ErrorKind};
use hackalu_core::ops::{Flags, add_full, add_stepwise, sub_via_twos_complement};
use pretty_assertions::assert_eq;

use crate::common::{bits, init_tracing, signed, unsigned};

// ══════════════════════════════════════════════════════════
// Addition
// ══════════════════════════════════════════════════════════

#[test]
fn test_add_stepwise_produces_one_step_per_bit() {
    init_tracing();
    let steps = add_stepwise(&bits(3, 4, false), &bits(1, 4, false), false).unwrap();
    assert_eq!(steps.len(), 4);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.index, i);
        assert_eq!(step.partial_result.width(), i + 1);
    }
}

#[test]
fn test_carry_chains_between_steps() {
    let steps = add_stepwise(&bits(3, 4, false), &bits(1, 4, false), false).unwrap();
    assert_eq!(steps[0].carry_in, Bit::Zero);
    for pair in steps.windows(2) {
        assert_eq!(pair[1].carry_in, pair[0].carry_out);
    }
    assert_eq!(steps[0].description, "Bit 0: 1 + 1 + carry 0 = 0, carry out 1");
    assert_eq!(steps[1].description, "Bit 1: 1 + 0 + carry 1 = 0, carry out 1");
    assert_eq!(steps[2].description, "Bit 2: 0 + 0 + carry 1 = 1, carry out 0");
}

#[test]
fn test_only_final_step_carries_flags() {
    let steps = add_stepwise(&bits(15, 4, false), &bits(1, 4, false), false).unwrap();
    for step in &steps[..3] {
        assert_eq!(step.flags, Flags::default());
    }
    let last = steps.last().unwrap();
    assert!(last.flags.zero);
    assert!(last.flags.carry);
}

#[test]
fn test_add_full_wraps_and_sets_carry() {
    let sum = add_full(&bits(15, 4, false), &bits(1, 4, false), false).unwrap();
    assert!(sum.result.is_zero());
    assert_eq!(
        sum.flags,
        Flags {
            zero: true,
            sign: false,
            overflow: false,
            carry: true
        }
    );
}

#[test]
fn test_signed_overflow_on_positive_sum() {
    let sum = add_full(&bits(7, 4, true), &bits(1, 4, true), true).unwrap();
    assert_eq!(signed(&sum.result), -8);
    assert!(sum.flags.overflow);
    assert!(sum.flags.sign);
    assert!(!sum.flags.carry);
}

#[test]
fn test_unsigned_mode_never_reports_sign_or_overflow() {
    let sum = add_full(&bits(7, 4, false), &bits(1, 4, false), false).unwrap();
    assert_eq!(unsigned(&sum.result), 8);
    assert!(!sum.flags.sign);
    assert!(!sum.flags.overflow);
}

#[test]
fn test_mismatched_widths_fail() {
    let err = add_full(&bits(1, 4, false), &bits(1, 8, false), false).unwrap_err();
    assert_eq!(err, AluError::WidthMismatch { left: 4, right: 8 });
    assert_eq!(err.kind(), ErrorKind::WidthMismatch);
    assert!(add_stepwise(&bits(1, 4, false), &bits(1, 5, false), true).is_err());
}

// ══════════════════════════════════════════════════════════
// Subtraction
// ══════════════════════════════════════════════════════════

#[test]
fn test_sub_via_twos_complement() {
    let diff = sub_via_twos_complement(&bits(3, 8, true), &bits(5, 8, true), true).unwrap();
    assert_eq!(signed(&diff.result), -2);
    assert!(diff.flags.sign);
    assert!(!diff.flags.overflow);
}

#[test]
fn test_sub_overflow_at_most_negative() {
    // -8 - 1 = +7 in four bits.
    let diff = sub_via_twos_complement(&bits(-8, 4, true), &bits(1, 4, true), true).unwrap();
    assert_eq!(signed(&diff.result), 7);
    assert!(diff.flags.overflow);
}

#[test]
fn test_sub_checks_width_first() {
    assert!(matches!(
        sub_via_twos_complement(&bits(1, 4, false), &bits(1, 6, false), false),
        Err(AluError::WidthMismatch { .. })
    ));
}

#[test]
fn test_sub_does_not_modify_inputs() {
    let a = bits(9, 8, false);
    let b = bits(4, 8, false);
    let _ = sub_via_twos_complement(&a, &b, false).unwrap();
    assert_eq!(unsigned(&a), 9);
    assert_eq!(unsigned(&b), 4);
}

#[test]
fn test_five_plus_three_fits_four_bits() {
    let sum = add_full(&bits(5, 4, false), &bits(3, 4, false), false).unwrap();
    assert_eq!(unsigned(&sum.result), 8);
    assert!(!sum.flags.carry);
}

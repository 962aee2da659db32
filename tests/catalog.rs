//! End-to-end checks of the public catalog against its documented values.

use callconv_samples::abi::{self, OperatingSystem};
use callconv_samples::{Record, harness, ops};

#[test]
fn documented_values() {
  assert_eq!(ops::int_const(), 42);
  assert_eq!(ops::wide_const_high(), 0x42_0000_0000);
  assert_eq!(ops::wide_const_low(), 42);
  assert_eq!(ops::int_product(1, 2, 3), 48);
  assert_eq!(ops::byte_product(1, 2), 8);
  assert_eq!(ops::float_product(1.0, 2.0, 3.0), 48.0);
  assert_eq!(ops::mixed_product(1, 2.0, 3, 4.0), 384);
  assert_eq!(ops::double_product(2.0, 4.0), 32.0);
  assert_eq!(ops::record_field_sum(Record::new(1, 2, 3, 4, 5, 6), &Record::default()), 1);
  assert_eq!(ops::record_make(1, 2), Record::new(1, 2, 0, 0, 0, 0));
  assert_eq!(ops::varargs_sum(0, &[]), Ok(0));
  assert_eq!(ops::varargs_sum(1, &[5]), Ok(5));
  assert_eq!(ops::varargs_sum(4, &[1, 2, 3, 4]), Ok(10));
  assert_eq!(ops::varargs_sum(6, &[2, 4, 6, 8, 10, 12]), Ok(42));
}

#[test]
fn harness_total() {
  assert_eq!(harness::run(), Ok(harness::EXPECTED_TOTAL));
}

#[test]
fn every_signature_classifies_on_both_targets() {
  for sig in abi::SIGNATURES {
    let extra = if sig.variadic { 4 } else { 0 };
    let x86 = abi::x86::classify(sig, extra);
    assert_eq!(x86.args.len(), sig.args.len() + extra, "{}", sig.name);
    assert_eq!(x86.al_vector_count.is_some(), sig.variadic, "{}", sig.name);
    for os in [OperatingSystem::Linux, OperatingSystem::MacOs] {
      let arm = abi::arm64::classify(os, sig, extra);
      assert_eq!(arm.args.len(), sig.args.len() + extra, "{}", sig.name);
    }
  }
}

#[test]
fn arity_mismatch_reports_both_counts() {
  let err = ops::varargs_sum(3, &[1, 2]).unwrap_err();
  assert_eq!((err.declared, err.supplied), (3, 2));
}

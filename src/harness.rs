//! Fixed-input exercise of every catalog operation.
//!
//! Each check invokes one operation of [`crate::ops`] with literal,
//! hand-chosen arguments, applies a small constant offset, and returns the
//! result; [`run`] folds every check into one total and returns it. The
//! inputs are fixed, so the total is a known constant and the whole run
//! doubles as a smoke test of the catalog. The variadic checks supply
//! matching count/slice pairs and propagate [`ArityMismatch`] rather than
//! panicking, so a broken check shows up in the result, not as an abort.

use crate::ops::{self, ArityMismatch};
use crate::record::Record;

/// `int_const`, plus one.
#[must_use]
pub const fn check_int_const() -> i32 { ops::int_const() + 1 }

/// `wide_const_high`, plus one, truncated to 32 bits. Only the low word
/// survives the truncation, and the high word is where the 42 was, so the
/// result is 1.
#[must_use]
pub const fn check_wide_const_high() -> i32 { ops::wide_const_high().wrapping_add(1) as i32 }

/// `wide_const_low`, plus one, truncated to 32 bits. Here the truncation is
/// lossless.
#[must_use]
pub const fn check_wide_const_low() -> i32 { ops::wide_const_low().wrapping_add(1) as i32 }

/// `int_product(1, 2, 3)`, plus one.
#[must_use]
pub const fn check_int_product() -> i32 { ops::int_product(1, 2, 3) + 1 }

/// `byte_product(1, 2)`, plus one.
#[must_use]
pub const fn check_byte_product() -> i32 { ops::byte_product(1, 2) + 1 }

/// `float_product(1.0, 2.0, 3.0)`, plus four, truncated to an integer.
#[must_use]
pub fn check_float_product() -> i32 { (ops::float_product(1.0, 2.0, 3.0) + 4.0) as i32 }

/// `mixed_product(1, 2.0, 3, 4.0)`, plus one.
#[must_use]
pub fn check_mixed_product() -> i32 { ops::mixed_product(1, 2.0, 3, 4.0) + 1 }

/// `double_product(2.0, 4.0)`, plus one, truncated to an integer.
#[must_use]
pub fn check_double_product() -> i32 { (ops::double_product(2.0, 4.0) + 1.0) as i32 }

/// `record_field_sum` of a filled record by value and a zero record by
/// reference, plus one.
#[must_use]
pub const fn check_record_field_sum() -> i32 {
  let x = Record::new(1, 2, 3, 4, 5, 6);
  let y = Record::new(0, 0, 0, 0, 0, 0);
  ops::record_field_sum(x, &y) + 1
}

/// The `a` field of `record_make(1, 2)`.
#[must_use]
pub const fn check_record_make() -> i32 { ops::record_make(1, 2).a }

/// `varargs_sum` of one trailing argument, plus one.
pub fn check_varargs1() -> Result<i32, ArityMismatch> { Ok(ops::varargs_sum(1, &[5])? + 1) }

/// `varargs_sum` of four trailing arguments, plus one.
pub fn check_varargs4() -> Result<i32, ArityMismatch> {
  Ok(ops::varargs_sum(4, &[1, 2, 3, 4])? + 1)
}

/// `varargs_sum` of six trailing arguments, plus one.
pub fn check_varargs6() -> Result<i32, ArityMismatch> {
  Ok(ops::varargs_sum(6, &[2, 4, 6, 8, 10, 12])? + 1)
}

/// The total [`run`] produces for the fixed inputs.
pub const EXPECTED_TOTAL: i64 = 678;

/// Run every check once, in catalog order, and fold the results into one
/// total. With the fixed inputs this is [`EXPECTED_TOTAL`].
pub fn run() -> Result<i64, ArityMismatch> {
  let mut total: i64 = 0;
  total += i64::from(check_int_const());
  total += i64::from(check_wide_const_high());
  total += i64::from(check_wide_const_low());
  total += i64::from(check_int_product());
  total += i64::from(check_byte_product());
  total += i64::from(check_float_product());
  total += i64::from(check_mixed_product());
  total += i64::from(check_double_product());
  total += i64::from(check_record_field_sum());
  total += i64::from(check_record_make());
  total += i64::from(check_varargs1()?);
  total += i64::from(check_varargs4()?);
  total += i64::from(check_varargs6()?);
  Ok(total)
}

//! The pure function catalog.
//!
//! Each function here is a standalone total computation chosen to exercise
//! one argument or return value shape. None of them keep state, touch
//! globals, or fail, with one exception: [`varargs_sum`] checks its declared
//! count against the arguments actually supplied and reports a mismatch as a
//! typed error instead of reading past the end of the argument list.
//!
//! Integer arithmetic that can overflow uses two's complement wraparound
//! (`wrapping_add`/`wrapping_mul`), so every function is defined on all of
//! its input domain.

use crate::record::Record;

/// Returns the fixed value 42. The degenerate shape: no arguments, one
/// register-sized return.
#[must_use]
pub const fn int_const() -> i32 { 42 }

/// Returns `0x42 << 32`, a 64-bit value whose payload is entirely in the
/// high word. Truncating this return to 32 bits loses the payload.
#[must_use]
pub const fn wide_const_high() -> u64 { 0x42_0000_0000 }

/// Returns 42 as a 64-bit value. The value fits in 32 bits but the return
/// slot is 64 bits wide, demonstrating the widening return convention.
#[must_use]
pub const fn wide_const_low() -> u64 { 42 }

/// Returns `(a+1) * (b+2) * (c+3)` with wraparound on overflow.
#[must_use]
pub const fn int_product(a: i32, b: i32, c: i32) -> i32 {
  a.wrapping_add(1).wrapping_mul(b.wrapping_add(2)).wrapping_mul(c.wrapping_add(3))
}

/// Returns `(a+1) * (b+2)` after promoting both byte-sized arguments to
/// `i32`. The promoted product cannot overflow: it is at most `128 * 129`.
#[must_use]
pub const fn byte_product(a: i8, b: i8) -> i32 { (a as i32 + 1) * (b as i32 + 2) }

/// Returns `(a+1) * (b+2) * (c+3)` in single precision.
#[must_use]
pub fn float_product(a: f32, b: f32, c: f32) -> f32 { (a + 1.0) * (b + 2.0) * (c + 3.0) }

/// Returns `(a+1) * (b+2) * (c+3) * (d+4)` where every operand, integer or
/// not, is promoted to single precision before any multiplication. The
/// product is then truncated back to `i32` (toward zero, saturating at the
/// `i32` range like every float-to-int `as` cast).
#[must_use]
pub fn mixed_product(a: i32, b: f32, c: i32, d: f32) -> i32 {
  ((a as f32 + 1.0) * (b + 2.0) * (c as f32 + 3.0) * (d + 4.0)) as i32
}

/// Returns `(a+2) * (b+4)` in double precision.
#[must_use]
pub fn double_product(a: f64, b: f64) -> f64 { (a + 2.0) * (b + 4.0) }

/// Returns `x.a + y.b` (wrapping), reading one record received by value and
/// one received by reference.
///
/// `x` is an owned copy: nothing the callee could do to it would be visible
/// to the caller. `y` is a live borrow of the caller's record.
#[must_use]
pub const fn record_field_sum(x: Record, y: &Record) -> i32 { x.a.wrapping_add(y.b) }

/// Builds and returns a fresh [`Record`] with fields `a` and `b` set and
/// every other field zero. The caller owns the result.
#[must_use]
pub const fn record_make(a: i32, b: i32) -> Record { Record { a, b, c: 0, d: 0, e: 0, f: 0 } }

/// Sums `declared` trailing integer arguments in call order, with a
/// wrapping accumulator starting at 0.
///
/// This is the variadic sample: the original shape is a C-style variadic
/// call where the caller promises that exactly `declared` integers follow
/// the count, and breaking that promise is undefined behavior. Here the
/// trailing arguments are a typed slice, and a broken promise is an
/// [`ArityMismatch`] instead. `declared == 0` reads no argument and
/// returns 0.
pub fn varargs_sum(declared: u32, args: &[i32]) -> Result<i32, ArityMismatch> {
  if declared as usize != args.len() {
    return Err(ArityMismatch { declared, supplied: args.len() })
  }
  let mut total: i32 = 0;
  for &arg in args {
    total = total.wrapping_add(arg);
  }
  Ok(total)
}

/// Error returned by [`varargs_sum`] when the declared trailing-argument
/// count disagrees with the arguments actually supplied.
///
/// In the variadic original this situation is undefined behavior (the callee
/// walks off the end of the argument list, or leaves arguments unread); the
/// reimplementation surfaces it as a precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityMismatch {
  /// The count the caller declared.
  pub declared: u32,
  /// The number of trailing arguments actually supplied.
  pub supplied: usize,
}

impl std::fmt::Display for ArityMismatch {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "variadic call declared {} trailing argument(s) but supplied {}",
      self.declared, self.supplied
    )
  }
}

impl std::error::Error for ArityMismatch {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn constants() {
    assert_eq!(int_const(), 42);
    assert_eq!(wide_const_high(), 0x42_0000_0000);
    assert_eq!(wide_const_low(), 42);
    // the payload sits entirely in the high word: the low word is zero and
    // shifting it down recovers the hex literal's leading byte
    assert_eq!(wide_const_high() >> 32, 0x42);
    assert_eq!(wide_const_high() & 0xffff_ffff, 0);
  }

  #[test]
  fn integer_products() {
    assert_eq!(int_product(1, 2, 3), 48);
    assert_eq!(int_product(0, 0, 0), 6);
    assert_eq!(byte_product(1, 2), 8);
    assert_eq!(byte_product(i8::MAX, i8::MAX), 128 * 129);
  }

  #[test]
  fn int_product_wraps() {
    // (MAX+1) wraps to MIN; the result is defined, not a panic
    assert_eq!(int_product(i32::MAX, 0, 0), i32::MIN.wrapping_mul(2).wrapping_mul(3));
  }

  #[test]
  fn float_products() {
    assert_eq!(float_product(1.0, 2.0, 3.0), 48.0);
    assert_eq!(double_product(2.0, 4.0), 32.0);
  }

  #[test]
  fn mixed_product_promotes_everything() {
    assert_eq!(mixed_product(1, 2.0, 3, 4.0), 384);
    // the product is computed in f32 and truncated toward zero
    assert_eq!(mixed_product(0, -0.5, 0, 0.0), (1.0f32 * 1.5 * 3.0 * 4.0) as i32);
  }

  #[test]
  fn record_passing() {
    let x = Record::new(1, 2, 3, 4, 5, 6);
    let y = Record::default();
    assert_eq!(record_field_sum(x, &y), 1);
    // x was copied in; the caller's record is untouched
    assert_eq!(x, Record::new(1, 2, 3, 4, 5, 6));
    assert_eq!(record_field_sum(Record::default(), &x), 2);
  }

  #[test]
  fn record_construction() {
    assert_eq!(record_make(1, 2), Record::new(1, 2, 0, 0, 0, 0));
    assert_eq!(record_make(-7, 0).a, -7);
  }

  #[test]
  fn varargs_sums_in_order() {
    assert_eq!(varargs_sum(0, &[]), Ok(0));
    assert_eq!(varargs_sum(1, &[5]), Ok(5));
    assert_eq!(varargs_sum(4, &[1, 2, 3, 4]), Ok(10));
    assert_eq!(varargs_sum(6, &[2, 4, 6, 8, 10, 12]), Ok(42));
  }

  #[test]
  fn varargs_accumulator_wraps() {
    assert_eq!(varargs_sum(2, &[i32::MAX, 1]), Ok(i32::MIN));
  }

  #[test]
  fn varargs_checks_arity() {
    assert_eq!(varargs_sum(2, &[1]), Err(ArityMismatch { declared: 2, supplied: 1 }));
    assert_eq!(varargs_sum(0, &[1, 2]), Err(ArityMismatch { declared: 0, supplied: 2 }));
    let err = varargs_sum(3, &[]).unwrap_err();
    assert_eq!(err.to_string(), "variadic call declared 3 trailing argument(s) but supplied 0");
  }

  #[test]
  fn repeat_calls_agree() {
    assert_eq!(int_product(5, 6, 7), int_product(5, 6, 7));
    assert_eq!(mixed_product(9, 0.5, -3, 1.5), mixed_product(9, 0.5, -3, 1.5));
    assert_eq!(varargs_sum(3, &[7, 8, 9]), varargs_sum(3, &[7, 8, 9]));
  }
}

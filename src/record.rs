//! The sample aggregate passed by value, by reference, and returned by value.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// A plain fixed-layout aggregate of six `i32` fields.
///
/// The layout is the whole point of this type: at 24 bytes it is larger than
/// the register-pair threshold of every ABI described by [`crate::abi`], so
/// passing it by value forces a memory copy wherever the samples are
/// compiled. Only `a` and `b` are ever read by the sample operations; the
/// remaining fields exist to pad the aggregate past 16 bytes.
///
/// Any combination of field values is valid. There are no derived fields and
/// no validation, which is what the `zerocopy` derives assert.
#[repr(C)]
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
pub struct Record {
  /// Read by the by-value parameter of [`record_field_sum`](crate::ops::record_field_sum).
  pub a: i32,
  /// Read through the by-reference parameter of
  /// [`record_field_sum`](crate::ops::record_field_sum).
  pub b: i32,
  /// Padding field, never read.
  pub c: i32,
  /// Padding field, never read.
  pub d: i32,
  /// Padding field, never read.
  pub e: i32,
  /// Padding field, never read.
  pub f: i32,
}

impl Record {
  /// The size of the aggregate in bytes.
  pub const BYTES: u32 = 24;

  /// Construct a record with the six fields given in declaration order.
  #[must_use]
  pub const fn new(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> Self {
    Self { a, b, c, d, e, f }
  }
}

const _: () = assert!(size_of::<Record>() == Record::BYTES as usize);

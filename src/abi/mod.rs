//! Where each sample's arguments land.
//!
//! The samples in [`crate::ops`] exist to illustrate argument passing, so
//! this module makes the interesting part observable: [`SIGNATURES`]
//! describes every cataloged operation by its argument and return shapes,
//! and the [`x86`] and [`arm64`] submodules map those shapes to concrete
//! registers and stack slots under the System V x86-64 ABI and AAPCS64
//! respectively.
//!
//! The signatures describe the call shapes the samples illustrate, not the
//! Rust functions themselves. In particular `varargs_sum` takes a slice in
//! Rust, but the shape it demonstrates is a true C-style variadic call with
//! a leading count, and that is what its classification shows.

pub mod arm64;
pub mod x86;

/// Argument shapes appearing in the sample catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
  /// A byte-sized integer, promoted to 32 bits at the call boundary.
  I8,
  /// A 32-bit integer.
  I32,
  /// A single precision float.
  F32,
  /// A double precision float.
  F64,
  /// The 24-byte [`Record`](crate::Record) passed by value.
  RecordValue,
  /// A borrowed [`Record`](crate::Record), passed as a pointer.
  RecordRef,
}

impl ArgKind {
  /// Does this argument use the floating point register file?
  #[must_use]
  pub const fn is_float(self) -> bool { matches!(self, ArgKind::F32 | ArgKind::F64) }
}

/// Return value shapes appearing in the sample catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetKind {
  /// A 32-bit integer.
  I32,
  /// A 64-bit integer.
  U64,
  /// A single precision float.
  F32,
  /// A double precision float.
  F64,
  /// The 24-byte [`Record`](crate::Record) returned by value.
  Record,
}

/// The call shape of one cataloged operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
  /// The name of the function in [`crate::ops`].
  pub name: &'static str,
  /// The fixed arguments, in declaration order.
  pub args: &'static [ArgKind],
  /// The return shape.
  pub ret: RetKind,
  /// Whether trailing variadic `i32` arguments follow the fixed ones.
  pub variadic: bool,
}

/// One entry per operation in [`crate::ops`], in catalog order.
pub const SIGNATURES: &[Signature] = &[
  Signature { name: "int_const", args: &[], ret: RetKind::I32, variadic: false },
  Signature { name: "wide_const_high", args: &[], ret: RetKind::U64, variadic: false },
  Signature { name: "wide_const_low", args: &[], ret: RetKind::U64, variadic: false },
  Signature {
    name: "int_product",
    args: &[ArgKind::I32, ArgKind::I32, ArgKind::I32],
    ret: RetKind::I32,
    variadic: false,
  },
  Signature {
    name: "byte_product",
    args: &[ArgKind::I8, ArgKind::I8],
    ret: RetKind::I32,
    variadic: false,
  },
  Signature {
    name: "float_product",
    args: &[ArgKind::F32, ArgKind::F32, ArgKind::F32],
    ret: RetKind::F32,
    variadic: false,
  },
  Signature {
    name: "mixed_product",
    args: &[ArgKind::I32, ArgKind::F32, ArgKind::I32, ArgKind::F32],
    ret: RetKind::I32,
    variadic: false,
  },
  Signature {
    name: "double_product",
    args: &[ArgKind::F64, ArgKind::F64],
    ret: RetKind::F64,
    variadic: false,
  },
  Signature {
    name: "record_field_sum",
    args: &[ArgKind::RecordValue, ArgKind::RecordRef],
    ret: RetKind::I32,
    variadic: false,
  },
  Signature {
    name: "record_make",
    args: &[ArgKind::I32, ArgKind::I32],
    ret: RetKind::Record,
    variadic: false,
  },
  Signature { name: "varargs_sum", args: &[ArgKind::I32], ret: RetKind::I32, variadic: true },
];

/// Look up a catalog signature by operation name.
#[must_use]
pub fn signature(name: &str) -> Option<&'static Signature> {
  SIGNATURES.iter().find(|sig| sig.name == name)
}

/// Target operating system, for the ABI details that depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
  /// Linux and the BSDs.
  Linux,
  /// Apple platforms, which diverge from standard AAPCS64 in how they
  /// place variadic arguments.
  MacOs,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalog_covers_every_op() {
    assert_eq!(SIGNATURES.len(), 11);
    assert!(signature("mixed_product").is_some());
    assert!(signature("no_such_op").is_none());
  }

  #[test]
  fn only_the_variadic_entry_is_variadic() {
    let variadic: Vec<_> = SIGNATURES.iter().filter(|s| s.variadic).collect();
    assert_eq!(variadic.len(), 1);
    assert_eq!(variadic[0].name, "varargs_sum");
  }
}

//! Sample functions illustrating a platform's function call ABI.
//!
//! Each function in [`ops`] is a standalone pure computation chosen to
//! exercise one argument or return value shape: plain integers, promoted
//! byte arguments, single and double precision floats, mixed int/float
//! parameter lists, 64-bit returns, a struct passed by value and by
//! reference, a struct returned by value, and a variadic-style summation.
//!
//! The [`abi`] module describes where each argument of each sample lands
//! under the System V x86-64 calling convention and AAPCS64, and the
//! [`harness`] module invokes every sample once with fixed inputs, folding
//! the results into a known total.

// rust lints we want
#![warn(
  bare_trait_objects,
  elided_lifetimes_in_paths,
  missing_copy_implementations,
  missing_debug_implementations,
  future_incompatible,
  rust_2018_idioms,
  trivial_numeric_casts,
  variant_size_differences,
  unreachable_pub,
  unused,
  missing_docs
)]
#![deny(unsafe_op_in_unsafe_fn)]
// all the clippy
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// all the clippy::restriction lints we want
#![warn(
  clippy::else_if_without_else,
  clippy::get_unwrap,
  clippy::rest_pat_in_fully_bound_structs,
  clippy::string_add,
  clippy::undocumented_unsafe_blocks,
  clippy::unwrap_used
)]
// all the clippy lints we don't want
#![allow(
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_precision_loss,
  clippy::cast_sign_loss,
  clippy::missing_const_for_fn,
  clippy::missing_errors_doc,
  clippy::missing_panics_doc,
  clippy::module_name_repetitions,
  clippy::multiple_crate_versions,
  clippy::semicolon_if_nothing_returned,
  clippy::use_self
)]

pub mod abi;
pub mod harness;
pub mod ops;
mod record;

pub use record::Record;

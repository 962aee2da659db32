//! System V x86-64 argument classification for the sample catalog.
//!
//! This follows the System V ABI used on Linux, the BSDs, and macOS:
//! integer arguments in RDI, RSI, RDX, RCX, R8, R9; floating point
//! arguments in XMM0 through XMM7; everything else on the stack. The
//! 24-byte sample record classifies as MEMORY, so it is copied to the
//! outgoing stack area when passed by value and returned through a hidden
//! pointer when returned by value.

use std::fmt;

use itertools::Itertools;

use super::{ArgKind, RetKind, Signature};
use crate::record::Record;

/// The integer argument registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
  /// First integer argument.
  Rdi,
  /// Second integer argument.
  Rsi,
  /// Third integer argument.
  Rdx,
  /// Fourth integer argument.
  Rcx,
  /// Fifth integer argument.
  R8,
  /// Sixth integer argument.
  R9,
}

impl fmt::Display for Reg {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Reg::Rdi => "rdi",
      Reg::Rsi => "rsi",
      Reg::Rdx => "rdx",
      Reg::Rcx => "rcx",
      Reg::R8 => "r8",
      Reg::R9 => "r9",
    })
  }
}

/// The integer argument registers in ABI assignment order.
pub const ARG_REGS: [Reg; 6] = [Reg::Rdi, Reg::Rsi, Reg::Rdx, Reg::Rcx, Reg::R8, Reg::R9];

/// The number of XMM registers available for float arguments (XMM0-XMM7).
pub const SSE_ARG_REGS: u8 = 8;

/// Where a single argument lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgLoc {
  /// In an integer register. Narrow arguments occupy its low bits, so a
  /// promoted byte argument still consumes the whole register slot.
  Reg(Reg),
  /// In the SSE register `XMMn`.
  Sse(u8),
  /// In the outgoing stack area at byte offset `off`, occupying `sz` bytes.
  /// Offsets are relative to RSP at the call instruction.
  Mem {
    /// The offset of the data from the post-call stack pointer.
    off: u32,
    /// The size of the data in bytes.
    sz: u32,
  },
}

impl fmt::Display for ArgLoc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      ArgLoc::Reg(reg) => write!(f, "{reg}"),
      ArgLoc::Sse(n) => write!(f, "xmm{n}"),
      ArgLoc::Mem { off, sz } => write!(f, "[rsp+{off}]:{sz}"),
    }
  }
}

/// Where the return value lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetLoc {
  /// In RAX (narrow returns in its low bits).
  Rax,
  /// In XMM0.
  Xmm0,
  /// In caller-allocated memory: the caller passes a hidden pointer to the
  /// return slot in RDI, shifting the integer argument registers by one,
  /// and the callee echoes that pointer in RAX.
  Indirect,
}

impl fmt::Display for RetLoc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      RetLoc::Rax => "rax",
      RetLoc::Xmm0 => "xmm0",
      RetLoc::Indirect => "[rdi]",
    })
  }
}

/// The classification of one concrete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallAbi {
  /// One location per argument: the fixed arguments in declaration order,
  /// then the trailing variadic arguments.
  pub args: Vec<ArgLoc>,
  /// The return value location.
  pub ret: RetLoc,
  /// For variadic calls, the value the caller loads into AL before the
  /// call: the number of SSE registers used by the argument list. `None`
  /// for non-variadic calls, which leave AL alone.
  pub al_vector_count: Option<u8>,
}

impl fmt::Display for CallAbi {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}) -> {}", self.args.iter().format(", "), self.ret)?;
    if let Some(n) = self.al_vector_count {
      write!(f, ", al={n}")?;
    }
    Ok(())
  }
}

struct Assigner {
  next_int: usize,
  next_sse: u8,
  stack_off: u32,
}

impl Assigner {
  fn int(&mut self) -> ArgLoc {
    if self.next_int < ARG_REGS.len() {
      let reg = ARG_REGS[self.next_int];
      self.next_int += 1;
      ArgLoc::Reg(reg)
    } else {
      self.mem(8)
    }
  }

  fn sse(&mut self) -> ArgLoc {
    if self.next_sse < SSE_ARG_REGS {
      let n = self.next_sse;
      self.next_sse += 1;
      ArgLoc::Sse(n)
    } else {
      self.mem(8)
    }
  }

  fn mem(&mut self, sz: u32) -> ArgLoc {
    let off = self.stack_off;
    // stack slots are 8-byte aligned, assigned left to right
    self.stack_off += sz.next_multiple_of(8);
    ArgLoc::Mem { off, sz }
  }
}

/// Classify a call to `sig` with `extra` trailing variadic `i32` arguments.
///
/// `extra` must be 0 unless `sig.variadic`.
#[must_use]
pub fn classify(sig: &Signature, extra: usize) -> CallAbi {
  debug_assert!(sig.variadic || extra == 0);
  let mut asgn = Assigner { next_int: 0, next_sse: 0, stack_off: 0 };
  let ret = match sig.ret {
    RetKind::I32 | RetKind::U64 => RetLoc::Rax,
    RetKind::F32 | RetKind::F64 => RetLoc::Xmm0,
    RetKind::Record => {
      // the hidden return pointer consumes the first integer register
      let _ = asgn.int();
      RetLoc::Indirect
    }
  };
  let mut args = Vec::with_capacity(sig.args.len() + extra);
  for &kind in sig.args {
    args.push(match kind {
      ArgKind::I8 | ArgKind::I32 | ArgKind::RecordRef => asgn.int(),
      ArgKind::F32 | ArgKind::F64 => asgn.sse(),
      ArgKind::RecordValue => asgn.mem(Record::BYTES),
    });
  }
  for _ in 0..extra {
    args.push(asgn.int());
  }
  let al_vector_count = if sig.variadic { Some(asgn.next_sse) } else { None };
  CallAbi { args, ret, al_vector_count }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::abi::signature;

  fn abi_of(name: &str, extra: usize) -> CallAbi {
    classify(signature(name).expect("catalog entry"), extra)
  }

  #[test]
  fn plain_integer_args() {
    let abi = abi_of("int_product", 0);
    assert_eq!(abi.args, [ArgLoc::Reg(Reg::Rdi), ArgLoc::Reg(Reg::Rsi), ArgLoc::Reg(Reg::Rdx)]);
    assert_eq!(abi.ret, RetLoc::Rax);
    assert_eq!(abi.al_vector_count, None);
  }

  #[test]
  fn promoted_bytes_use_full_registers() {
    let abi = abi_of("byte_product", 0);
    assert_eq!(abi.args, [ArgLoc::Reg(Reg::Rdi), ArgLoc::Reg(Reg::Rsi)]);
  }

  #[test]
  fn floats_and_ints_use_separate_register_files() {
    let abi = abi_of("mixed_product", 0);
    assert_eq!(
      abi.args,
      [ArgLoc::Reg(Reg::Rdi), ArgLoc::Sse(0), ArgLoc::Reg(Reg::Rsi), ArgLoc::Sse(1)]
    );
    assert_eq!(abi.ret, RetLoc::Rax);
    let abi = abi_of("float_product", 0);
    assert_eq!(abi.args, [ArgLoc::Sse(0), ArgLoc::Sse(1), ArgLoc::Sse(2)]);
    assert_eq!(abi.ret, RetLoc::Xmm0);
  }

  #[test]
  fn wide_returns_use_rax() {
    assert_eq!(abi_of("wide_const_high", 0).ret, RetLoc::Rax);
    assert_eq!(abi_of("double_product", 0).ret, RetLoc::Xmm0);
  }

  #[test]
  fn record_by_value_goes_to_memory() {
    let abi = abi_of("record_field_sum", 0);
    // the 24-byte record is class MEMORY; the pointer argument still gets
    // the first integer register
    assert_eq!(abi.args, [ArgLoc::Mem { off: 0, sz: 24 }, ArgLoc::Reg(Reg::Rdi)]);
  }

  #[test]
  fn record_return_shifts_integer_registers() {
    let abi = abi_of("record_make", 0);
    assert_eq!(abi.ret, RetLoc::Indirect);
    assert_eq!(abi.args, [ArgLoc::Reg(Reg::Rsi), ArgLoc::Reg(Reg::Rdx)]);
  }

  #[test]
  fn variadic_spills_after_six_integer_slots() {
    let abi = abi_of("varargs_sum", 6);
    assert_eq!(abi.args.len(), 7);
    assert_eq!(abi.args[0], ArgLoc::Reg(Reg::Rdi)); // the count
    assert_eq!(abi.args[5], ArgLoc::Reg(Reg::R9));
    assert_eq!(abi.args[6], ArgLoc::Mem { off: 0, sz: 8 });
    assert_eq!(abi.al_vector_count, Some(0));
  }

  #[test]
  fn display_is_manual_style() {
    assert_eq!(abi_of("mixed_product", 0).to_string(), "(rdi, xmm0, rsi, xmm1) -> rax");
    assert_eq!(
      abi_of("varargs_sum", 6).to_string(),
      "(rdi, rsi, rdx, rcx, r8, r9, [rsp+0]:8) -> rax, al=0"
    );
    assert_eq!(abi_of("record_field_sum", 0).to_string(), "([rsp+0]:24, rdi) -> rax");
  }
}

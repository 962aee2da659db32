//! AAPCS64 argument classification for the sample catalog.
//!
//! This follows the ARM 64-bit procedure call standard: integer arguments
//! in X0 through X7, floating point arguments in V0 through V7, the rest on
//! the stack. Composites larger than 16 bytes (the sample record) are not
//! copied to the stack the way System V does it: the caller makes a copy in
//! its own memory and passes a pointer to the copy in the next integer
//! register. An oversized return value travels through a pointer in X8,
//! which is not an argument register, so it does not shift the others.
//!
//! Apple platforms follow AAPCS64 except for variadic calls, where every
//! anonymous argument goes to the stack regardless of how many registers
//! are free.

use std::fmt;

use itertools::Itertools;

use super::{ArgKind, OperatingSystem, RetKind, Signature};

/// The number of integer argument registers (X0-X7).
pub const GPR_ARGS: u8 = 8;

/// The number of SIMD/FP argument registers (V0-V7).
pub const VPR_ARGS: u8 = 8;

/// Where a single argument lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgLoc {
  /// In the integer register `Xn`.
  Gpr(u8),
  /// In the SIMD/FP register `Vn`.
  Vpr(u8),
  /// On the stack at byte offset `off` from SP at the call, occupying `sz`
  /// bytes.
  Mem {
    /// The offset of the data from the stack pointer.
    off: u32,
    /// The size of the data in bytes.
    sz: u32,
  },
  /// The argument is copied to caller-owned memory and a pointer to the
  /// copy is passed in `Xn`. AAPCS64 uses this for composites larger than
  /// 16 bytes.
  Indirect(u8),
}

impl fmt::Display for ArgLoc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      ArgLoc::Gpr(n) => write!(f, "x{n}"),
      ArgLoc::Vpr(n) => write!(f, "v{n}"),
      ArgLoc::Mem { off, sz } => write!(f, "[sp+{off}]:{sz}"),
      ArgLoc::Indirect(n) => write!(f, "[x{n}]"),
    }
  }
}

/// Where the return value lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetLoc {
  /// In X0 (narrow returns in its low bits).
  X0,
  /// In V0.
  V0,
  /// In caller-allocated memory addressed by X8. X8 is not an argument
  /// register, so the ordinary arguments are unaffected.
  Indirect,
}

impl fmt::Display for RetLoc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      RetLoc::X0 => "x0",
      RetLoc::V0 => "v0",
      RetLoc::Indirect => "[x8]",
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
}

impl fmt::Display for CallAbi {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}) -> {}", self.args.iter().format(", "), self.ret)
  }
}

struct Assigner {
  next_gpr: u8,
  next_vpr: u8,
  stack_off: u32,
}

impl Assigner {
  fn gpr(&mut self) -> ArgLoc {
    if self.next_gpr < GPR_ARGS {
      let n = self.next_gpr;
      self.next_gpr += 1;
      ArgLoc::Gpr(n)
    } else {
      self.mem(8)
    }
  }

  fn vpr(&mut self) -> ArgLoc {
    if self.next_vpr < VPR_ARGS {
      let n = self.next_vpr;
      self.next_vpr += 1;
      ArgLoc::Vpr(n)
    } else {
      self.mem(8)
    }
  }

  fn mem(&mut self, sz: u32) -> ArgLoc {
    let off = self.stack_off;
    self.stack_off += sz.next_multiple_of(8);
    ArgLoc::Mem { off, sz }
  }

  fn indirect(&mut self) -> ArgLoc {
    match self.gpr() {
      ArgLoc::Gpr(n) => ArgLoc::Indirect(n),
      // no register left for the pointer; the pointer itself goes to the stack
      mem => mem,
    }
  }
}

/// Classify a call to `sig` with `extra` trailing variadic `i32` arguments
/// on the given operating system.
///
/// `extra` must be 0 unless `sig.variadic`.
#[must_use]
pub fn classify(os: OperatingSystem, sig: &Signature, extra: usize) -> CallAbi {
  debug_assert!(sig.variadic || extra == 0);
  let mut asgn = Assigner { next_gpr: 0, next_vpr: 0, stack_off: 0 };
  let ret = match sig.ret {
    RetKind::I32 | RetKind::U64 => RetLoc::X0,
    RetKind::F32 | RetKind::F64 => RetLoc::V0,
    RetKind::Record => RetLoc::Indirect,
  };
  let mut args = Vec::with_capacity(sig.args.len() + extra);
  for &kind in sig.args {
    args.push(match kind {
      ArgKind::I8 | ArgKind::I32 | ArgKind::RecordRef => asgn.gpr(),
      ArgKind::F32 | ArgKind::F64 => asgn.vpr(),
      // larger than 16 bytes: passed indirectly via a caller-side copy
      ArgKind::RecordValue => asgn.indirect(),
    });
  }
  for _ in 0..extra {
    args.push(match os {
      OperatingSystem::Linux => asgn.gpr(),
      // Apple: anonymous arguments always go to the stack
      OperatingSystem::MacOs => asgn.mem(8),
    });
  }
  CallAbi { args, ret }
}

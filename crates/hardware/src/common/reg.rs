//! Architectural register file.
//!
//! This module provides the `RegisterFile` struct holding the 32 MIPS
//! general-purpose registers plus the `hi`/`lo` multiply/divide
//! accumulators. It provides:
//! 1. **Hard-wired Zero:** Reads of register 0 return 0 and writes to it are ignored.
//! 2. **Accumulators:** Combined access to the double-width mult/div result halves.
//! 3. **Observability:** An ABI-named dump of the full register state for debugging.

use crate::common::constants::{NREGS, REG_ZERO};

/// MIPS ABI register names, indexed by register number.
pub const REG_NAMES: [&str; NREGS] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", //
    "$t0", "$t1", "$t2", "$t3", "$t4", "$t5", "$t6", "$t7", //
    "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", //
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// The architectural register file: 32 GPRs plus the hi/lo accumulator pair.
#[derive(Debug, Clone, Default)]
pub struct RegisterFile {
    gpr: [u32; NREGS],
    hi: u32,
    lo: u32,
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register. Register 0 always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..32`.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr[idx]
    }

    /// Writes a general-purpose register. Writes to register 0 are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..32`.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != REG_ZERO {
            self.gpr[idx] = val;
        }
    }

    /// Returns the hi accumulator half.
    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// Returns the lo accumulator half.
    pub fn lo(&self) -> u32 {
        self.lo
    }

    /// Commits both halves of a multiply/divide result.
    pub fn set_hi_lo(&mut self, hi: u32, lo: u32) {
        self.hi = hi;
        self.lo = lo;
    }

    /// Dumps the contents of all registers to stdout, four per row,
    /// with ABI names and the hi/lo accumulators last.
    pub fn dump(&self) {
        for (i, val) in self.gpr.iter().enumerate() {
            print!("    {:>5}: {val:08x}", REG_NAMES[i]);
            if (i + 1) % 4 == 0 {
                println!();
            }
        }
        println!("       hi: {:08x}       lo: {:08x}", self.hi, self.lo);
    }
}
